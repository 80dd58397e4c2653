//! Upgrades of stored configuration written by older plugin versions

use crate::contract::{ConfigValue, GlobalConfig, TabId, WidgetConfig, TAB_POSITION_KEYS};
use std::cmp::Ordering;
use tracing::info;

/// Version that replaced `tabs_sequence` with per-widget tab positions
pub const TAB_POSITIONS_VERSION: &str = "2.10.0";

/// Legacy `channel_*` suffixes copied onto `resource_*`
const CHANNEL_TO_RESOURCE: &[&str] = &[
    "phone_toggle",
    "phone_country_code",
    "phone_number",
    "phone_number_image_url",
    "custom_link_toggle",
    "custom_link_url",
    "custom_link_image_url",
    "phone_color",
    "phone_hover_color",
    "label_color",
    "link_color",
    "link_hover_color",
    "header_top_tab",
    "header_title",
    "header_sub_title",
    "phone_label",
    "custom_link_label",
];

/// Compare dotted versions numerically; missing parts count as zero
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parts = |v: &str| -> Vec<String> {
        v.trim()
            .split(['.', '-', '+'])
            .map(str::to_string)
            .collect()
    };
    let (a, b) = (parts(a), parts(b));
    let len = a.len().max(b.len());

    for i in 0..len {
        let x = a.get(i).map(String::as_str).unwrap_or("0");
        let y = b.get(i).map(String::as_str).unwrap_or("0");
        let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            // a pre-release tag sorts before the release it precedes
            (Ok(_), Err(_)) => Ordering::Greater,
            (Err(_), Ok(_)) => Ordering::Less,
            (Err(_), Err(_)) => x.cmp(y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Apply every migration newer than `last_version`; returns the versions applied
pub fn run_upgrades(
    last_version: &str,
    global: &GlobalConfig,
    widgets: &mut [WidgetConfig],
) -> Vec<&'static str> {
    let mut applied = Vec::new();

    if compare_versions(last_version, TAB_POSITIONS_VERSION) == Ordering::Less {
        upgrade_to_tab_positions(global, widgets);
        applied.push(TAB_POSITIONS_VERSION);
    }

    if !applied.is_empty() {
        info!(from = last_version, ?applied, widgets = widgets.len(), "configuration upgraded");
    }
    applied
}

fn upgrade_to_tab_positions(global: &GlobalConfig, widgets: &mut [WidgetConfig]) {
    let sequence = global.record().text("tabs_sequence").to_string();

    for widget in widgets.iter_mut() {
        let legacy = widget.record().clone();
        let record = widget.record_mut();

        let positions: [Option<TabId>; 4] = match sequence.as_str() {
            "chat_faqs_contact" | "resource_faqs_contact" => [
                Some(TabId::Resource),
                Some(TabId::Faqs),
                Some(TabId::Contact),
                Some(TabId::None),
            ],
            "faqs_chat_contact" | "faqs_resource_contact" => [
                Some(TabId::Faqs),
                Some(TabId::Resource),
                Some(TabId::Contact),
                Some(TabId::None),
            ],
            _ => [Some(TabId::Faqs), None, Some(TabId::Contact), Some(TabId::None)],
        };
        for (key, tab) in TAB_POSITION_KEYS.iter().zip(positions) {
            if let Some(tab) = tab {
                record.set(*key, ConfigValue::text(tab.as_str()));
            }
        }

        // legacy display toggles never governed the fourth slot
        for key in &TAB_POSITION_KEYS[..3] {
            let toggle = match TabId::parse(record.text(key)) {
                TabId::Resource => "display_channels_tab",
                TabId::Faqs => "display_faqs_tab",
                TabId::Contact => "display_contact_tab",
                TabId::None | TabId::Chat => continue,
            };
            if !legacy.is_on(toggle) {
                record.set(*key, ConfigValue::text(TabId::None.as_str()));
            }
        }

        for suffix in CHANNEL_TO_RESOURCE {
            if let Some(value) = legacy.get(&format!("channel_{}", suffix)) {
                record.set(format!("resource_{}", suffix), value.clone());
            }
        }
        if let Some(value) = legacy.get("chat_welcome_text") {
            record.set("resource_welcome_text", value.clone());
        }
    }
}
