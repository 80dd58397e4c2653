//! Integration tests for the config schema engine

use help_dialog::contract::*;
use help_dialog::domain::schema::{
    get_all_field_keys, get_all_specs, get_default_config, get_field_specs, get_field_specs_by_name,
};
use help_dialog::domain::validation::validate_and_sanitize;
use serde_json::json;

mod common;
use common::{print_test_header, record_from_json};

#[test]
fn test_scope_tables_by_name() {
    print_test_header(
        "test_scope_tables_by_name",
        &["Every scope name maps to its table; unknown names read the global table"],
    );

    for scope in Scope::ALL {
        let table = get_field_specs_by_name(scope.as_str());
        println!("   {} -> {} fields", scope, table.len());
        assert_eq!(table.len(), get_field_specs(scope).len());
    }
    assert!(get_field_specs_by_name("notification_rule").is_empty());
    assert_eq!(
        get_field_specs_by_name("widgets").len(),
        get_field_specs(Scope::Global).len()
    );
}

#[test]
fn test_all_specs_is_union() {
    print_test_header(
        "test_all_specs_is_union",
        &["Combined table holds every widget and global key, widget keys first"],
    );

    let all = get_all_specs();
    let widget_keys = get_all_field_keys(Scope::Widget);
    let global_keys = get_all_field_keys(Scope::Global);

    assert_eq!(all.len(), widget_keys.len() + global_keys.len());
    let head: Vec<&str> = all.keys().copied().take(widget_keys.len()).collect();
    assert_eq!(head, widget_keys);
    assert!(global_keys.iter().all(|key| all.contains_key(key)));
}

#[test]
fn test_defaults_validate_cleanly() {
    print_test_header(
        "test_defaults_validate_cleanly",
        &["Submitting a scope's defaults back reproduces them without errors"],
    );

    for scope in [Scope::Global, Scope::Widget] {
        let defaults = get_default_config(scope);
        let raw = RawValues::from_record(&defaults);
        let record = validate_and_sanitize(scope, &raw, None, true).unwrap();
        assert_eq!(record, defaults, "defaults of {} changed", scope);
    }
}

#[test]
fn test_record_json_shape() {
    print_test_header(
        "test_record_json_shape",
        &["Records serialize as flat JSON objects with untagged values"],
    );

    let record = record_from_json(json!({
        "widget_id": 7,
        "widget_name": "Docs",
        "location_pages_list": ["0", "12"]
    }));
    assert_eq!(record.number("widget_id"), Some(7));
    assert_eq!(record.text("widget_name"), "Docs");
    assert_eq!(record.list("location_pages_list"), &["0".to_string(), "12".to_string()]);

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back["location_pages_list"], json!(["0", "12"]));
    assert_eq!(back["widget_id"], json!(7));
}

#[test]
fn test_submission_from_admin_form() {
    print_test_header(
        "test_submission_from_admin_form",
        &["A typical admin form post is coerced field by field onto the stored widget"],
    );

    let stored = get_default_config(Scope::Widget);
    let raw = RawValues::new()
        .with("widget_name", "  Support <script>alert(1)</script>")
        .with("widget_status", "published")
        .with("trigger_delay_toggle", "on")
        .with("background_color", "1e60e0")
        .with("location_posts_list", vec![" 42 ".to_string(), String::new()]);

    let record = validate_and_sanitize(Scope::Widget, &raw, Some(&stored), false).unwrap();
    let widget = WidgetConfig::from_record(record);

    assert_eq!(widget.name(), "Support alert(1)");
    assert_eq!(widget.status(), WidgetStatus::Published);
    assert!(widget.record().is_on("trigger_delay_toggle"));
    assert_eq!(widget.record().text("background_color"), "#1e60e0");
    assert_eq!(widget.location_list(PageKind::Post), &["42".to_string()]);
}
