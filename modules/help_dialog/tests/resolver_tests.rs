//! Integration tests for widget resolution

use help_dialog::contract::*;
use help_dialog::domain::resolver::{first_include_target, resolve_widget, LocationTarget};
use help_dialog::domain::schema::get_default_config;
use help_dialog::domain::tabs::{active_tab, derive_tab_flags};

mod common;
use common::{
    init_tracing, print_test_header, record_from_json, widget, TestSite, ABOUT_PAGE_ID,
    LAUNCH_POST_ID, PRICING_PAGE_ID,
};
use serde_json::json;

fn global() -> GlobalConfig {
    init_tracing();
    GlobalConfig::from_record(get_default_config(Scope::Global))
}

fn resolved_id(context: &RequestContext, widgets: &[WidgetConfig]) -> Option<u64> {
    resolve_widget(context, widgets, &global()).map(WidgetConfig::widget_id)
}

#[test]
fn test_home_widget_resolves_on_home_page() {
    print_test_header(
        "test_home_widget_resolves_on_home_page",
        &[
            "Single include widget listing page 0 renders on the home page",
            "and nowhere once its page list is emptied",
        ],
    );

    let home = widget(1, "Home Page", "include", &["0"]);
    let widgets = vec![home.clone()];
    let resolved = resolve_widget(&RequestContext::home(), &widgets, &global());
    assert_eq!(resolved, Some(&home));
    println!("   ✓ home page resolves widget 1");

    let empty = vec![widget(1, "Home Page", "include", &[])];
    assert!(resolve_widget(&RequestContext::home(), &empty, &global()).is_none());
    println!("   ✓ empty page list resolves nothing");
}

#[test]
fn test_numeric_page_ids_resolve() {
    print_test_header(
        "test_numeric_page_ids_resolve",
        &["Stored records listing page ids as bare numbers still resolve"],
    );

    let stored = record_from_json(json!({
        "widget_id": 5,
        "widget_name": "Imported",
        "widget_status": "published",
        "location_page_filtering": "include",
        "location_pages_list": [0, 15],
        "location_posts_list": [42]
    }));
    let mut record = get_default_config(Scope::Widget);
    for key in stored.keys() {
        if let Some(value) = stored.get(key) {
            record.set(key, value.clone());
        }
    }
    let widgets = vec![WidgetConfig::from_record(record)];

    assert_eq!(resolved_id(&RequestContext::home(), &widgets), Some(5));
    assert_eq!(
        resolved_id(&RequestContext::page(PRICING_PAGE_ID, "/pricing/"), &widgets),
        Some(5)
    );
    assert_eq!(
        resolved_id(&RequestContext::post(LAUNCH_POST_ID, "/launch/"), &widgets),
        Some(5)
    );
    assert_eq!(resolved_id(&RequestContext::page(ABOUT_PAGE_ID, "/about/"), &widgets), None);
    println!("   ✓ numeric ids behave like their string form");
}

#[test]
fn test_site_layout_resolution() {
    print_test_header(
        "test_site_layout_resolution",
        &[
            "Include widgets win over the exclude widget on every request kind",
            "Exclude widget covers everything not claimed and not excepted",
        ],
    );
    let site = TestSite::new();
    site.print_structure();
    let widgets = site.widgets();

    let cases = [
        ("home", RequestContext::home(), Some(1)),
        ("pricing page", RequestContext::page(PRICING_PAGE_ID, "/pricing/"), Some(2)),
        ("launch post", RequestContext::post(LAUNCH_POST_ID, "/launch/"), Some(2)),
        ("about page", RequestContext::page(ABOUT_PAGE_ID, "/about/"), None),
        ("other page", RequestContext::page(99, "/contact-us/"), Some(3)),
        ("category archive", RequestContext::taxonomy("/category/news/"), Some(3)),
        ("product type", RequestContext::custom_post_type("product", "/shop/mug/"), Some(3)),
    ];

    for (label, context, expected) in cases {
        let actual = resolved_id(&context, &widgets);
        println!("   {} -> {:?}", label, actual);
        assert_eq!(actual, expected, "unexpected widget for {}", label);
    }
}

#[test]
fn test_wildcard_extends_include_widget() {
    print_test_header(
        "test_wildcard_extends_include_widget",
        &["Wildcard patterns add pages to an include widget without listing them"],
    );

    let mut docs = widget(4, "Docs", "include", &[]);
    docs.record_mut().set(
        "location_wildcard_url",
        ConfigValue::text("https://example.com/docs/*; /guides/"),
    );
    let widgets = vec![docs];

    assert_eq!(resolved_id(&RequestContext::page(7, "/docs/install/"), &widgets), Some(4));
    assert_eq!(resolved_id(&RequestContext::page(8, "/guides"), &widgets), Some(4));
    assert_eq!(resolved_id(&RequestContext::page(9, "/blog/"), &widgets), None);
}

#[test]
fn test_wildcard_removes_pages_from_exclude_widget() {
    print_test_header(
        "test_wildcard_removes_pages_from_exclude_widget",
        &["Exclude widget with /* renders nowhere"],
    );

    let mut hidden = widget(5, "Hidden", "exclude", &[]);
    hidden
        .record_mut()
        .set("location_wildcard_url", ConfigValue::text("/*"));
    let widgets = vec![hidden];

    assert_eq!(resolved_id(&RequestContext::home(), &widgets), None);
    assert_eq!(resolved_id(&RequestContext::page(3, "/anything/"), &widgets), None);
}

#[test]
fn test_draft_widget_visibility() {
    print_test_header(
        "test_draft_widget_visibility",
        &[
            "Draft widgets render only for viewers holding the admin read capability",
            "A draft match never falls through to a later widget",
        ],
    );

    let mut draft = widget(1, "Draft", "include", &["0"]);
    draft
        .record_mut()
        .set("widget_status", ConfigValue::text("draft"));
    let fallback = widget(2, "Fallback", "exclude", &[]);
    let widgets = vec![draft, fallback];

    assert_eq!(resolved_id(&RequestContext::home(), &widgets), None);
    let editor = RequestContext::home().with_capability("edit_others_posts");
    assert_eq!(resolved_id(&editor, &widgets), Some(1));

    let mut custom = get_default_config(Scope::Global);
    custom.set(
        "admin_ephd_access_admin_pages_read",
        ConfigValue::text("manage_options"),
    );
    let custom = GlobalConfig::from_record(custom);
    assert!(resolve_widget(&editor, &widgets, &custom).is_none());
    let admin = RequestContext::home().with_capability("manage_options");
    assert!(resolve_widget(&admin, &widgets, &custom).is_some());
}

#[test]
fn test_language_filtered_widgets() {
    print_test_header(
        "test_language_filtered_widgets",
        &["Language filters apply only when a multilingual context is active"],
    );

    let mut french = widget(1, "Français", "include", &["0"]);
    french
        .record_mut()
        .set("location_language_filtering", ConfigValue::text("fr"));
    let english = widget(2, "English", "include", &["0"]);
    let widgets = vec![french, english];

    assert_eq!(resolved_id(&RequestContext::home(), &widgets), Some(1));
    assert_eq!(resolved_id(&RequestContext::home().with_language("fr"), &widgets), Some(1));
    assert_eq!(resolved_id(&RequestContext::home().with_language("en"), &widgets), Some(2));
    assert_eq!(resolved_id(&RequestContext::home().with_language("  "), &widgets), Some(1));
}

#[test]
fn test_resolved_widget_tabs() {
    print_test_header(
        "test_resolved_widget_tabs",
        &["Default tab slots show FAQs, resource and contact; chat needs the add-on"],
    );

    let home = widget(1, "Home Page", "include", &["0"]);

    let flags = derive_tab_flags(&home, false);
    assert!(flags.show_faqs && flags.show_resource && flags.show_contact);
    assert!(!flags.show_chat);
    assert!(derive_tab_flags(&home, true).show_chat);
    assert_eq!(active_tab(&home, false), TabId::Faqs);
}

#[test]
fn test_preview_targets() {
    print_test_header(
        "test_preview_targets",
        &["Preview target is the first place an include widget always renders"],
    );
    let site = TestSite::new();

    assert_eq!(first_include_target(&site.home), Some(LocationTarget::Home));
    assert_eq!(
        first_include_target(&site.pricing),
        Some(LocationTarget::Page("15".to_string()))
    );
    assert_eq!(first_include_target(&site.everywhere), None);
}
