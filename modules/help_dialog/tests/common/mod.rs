//! Common test utilities and a shared site layout

#![allow(dead_code)]

use help_dialog::contract::{ConfigRecord, ConfigValue, Scope, WidgetConfig};
use help_dialog::domain::schema::get_default_config;
use help_dialog::infra::storage::InMemoryConfigStore;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Page ids used across tests
pub const ABOUT_PAGE_ID: u64 = 12;
pub const PRICING_PAGE_ID: u64 = 15;
pub const LAUNCH_POST_ID: u64 = 42;

/// Print a test banner the way every integration test does
pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Route service logs to the test output; `RUST_LOG` overrides the filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("help_dialog=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Published widget built from defaults with the given location rules
pub fn widget(id: u64, name: &str, filtering: &str, pages: &[&str]) -> WidgetConfig {
    let mut record = get_default_config(Scope::Widget);
    record.set("widget_id", ConfigValue::Number(id as i64));
    record.set("widget_name", ConfigValue::text(name));
    record.set("widget_status", ConfigValue::text("published"));
    record.set("location_page_filtering", ConfigValue::text(filtering));
    record.set("location_pages_list", ConfigValue::list(pages.iter().copied()));
    WidgetConfig::from_record(record)
}

/// Record parsed from a JSON fixture
pub fn record_from_json(value: serde_json::Value) -> ConfigRecord {
    serde_json::from_value(value).unwrap()
}

/// Realistic small site
///
/// 1 "Home Page"  include, home page only
/// 2 "Pricing"    include, pricing page and the launch post
/// 3 "Everywhere" exclude, hidden on the about page
#[derive(Debug, Clone)]
pub struct TestSite {
    pub home: WidgetConfig,
    pub pricing: WidgetConfig,
    pub everywhere: WidgetConfig,
}

impl TestSite {
    pub fn new() -> Self {
        let mut pricing = widget(2, "Pricing", "include", &["15"]);
        pricing
            .record_mut()
            .set("location_posts_list", ConfigValue::list(["42"]));

        Self {
            home: widget(1, "Home Page", "include", &["0"]),
            pricing,
            everywhere: widget(3, "Everywhere", "exclude", &["12"]),
        }
    }

    /// Widgets in configuration order, exclude-mode first to show that order
    /// within a group is what matters
    pub fn widgets(&self) -> Vec<WidgetConfig> {
        vec![
            self.everywhere.clone(),
            self.home.clone(),
            self.pricing.clone(),
        ]
    }

    /// Store holding the site's widgets and a global record stamped current
    pub fn store(&self) -> InMemoryConfigStore {
        let mut global = get_default_config(Scope::Global);
        global.set("first_plugin_version", ConfigValue::text("2.10.0"));
        global.set("upgrade_plugin_version", ConfigValue::text("2.10.0"));
        global.set("last_widget_id", ConfigValue::Number(3));

        let widgets = self
            .widgets()
            .into_iter()
            .map(|w| (Scope::Widget, w.widget_id(), w.into_record()));
        InMemoryConfigStore::with_records(widgets.chain([(Scope::Global, 0, global)]))
    }

    /// Print the site layout
    pub fn print_structure(&self) {
        println!("\n📊 Site Layout:");
        for w in self.widgets() {
            println!(
                "   ├─ [{}] {} ({}): pages {:?}",
                w.widget_id(),
                w.name(),
                w.record().text("location_page_filtering"),
                w.record().list("location_pages_list")
            );
        }
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Widget record as written by a 2.9 install, before tab positions existed
pub fn legacy_widget_record() -> ConfigRecord {
    record_from_json(json!({
        "widget_id": 1,
        "widget_name": "Legacy",
        "widget_status": "published",
        "location_page_filtering": "include",
        "location_pages_list": ["0"],
        "display_faqs_tab": "on",
        "display_channels_tab": "on",
        "display_contact_tab": "off",
        "channel_phone_number": "555-0100",
        "chat_welcome_text": "Hi there"
    }))
}

/// Global record as written by a 2.9 install
pub fn legacy_global_record() -> ConfigRecord {
    record_from_json(json!({
        "first_plugin_version": "2.6.1",
        "upgrade_plugin_version": "2.9.0",
        "last_widget_id": 1,
        "tabs_sequence": "faqs_resource_contact"
    }))
}
