//! Tab display state derived from a widget's four position slots

use crate::contract::{
    ConfigRecord, FieldError, FieldErrorKind, TabFlags, TabId, WidgetConfig, TAB_POSITION_KEYS,
};

/// Which feature tabs `widget` displays
pub fn derive_tab_flags(widget: &WidgetConfig, chat_available: bool) -> TabFlags {
    let slots = widget.tab_slots();
    let has = |tab: TabId| slots.contains(&tab);
    TabFlags {
        show_faqs: has(TabId::Faqs),
        show_contact: has(TabId::Contact),
        show_resource: has(TabId::Resource),
        show_chat: chat_available && has(TabId::Chat),
    }
}

/// Tab opened when the dialog loads; FAQs when no slot qualifies
pub fn active_tab(widget: &WidgetConfig, chat_available: bool) -> TabId {
    widget
        .tab_slots()
        .into_iter()
        .filter(|tab| *tab != TabId::None)
        .find(|tab| *tab != TabId::Chat || chat_available)
        .unwrap_or(TabId::Faqs)
}

/// One `DuplicateTab` error per slot repeating a tab of an earlier slot
pub fn duplicate_tab_errors(record: &ConfigRecord) -> Vec<FieldError> {
    let mut seen: Vec<TabId> = Vec::new();
    let mut errors = Vec::new();

    for key in TAB_POSITION_KEYS {
        let tab = TabId::parse(record.text(key));
        if tab == TabId::None {
            continue;
        }
        if seen.contains(&tab) {
            errors.push(FieldError::new(
                key,
                FieldErrorKind::DuplicateTab,
                format!("tab '{}' already assigned to an earlier position", tab),
            ));
        } else {
            seen.push(tab);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{ConfigValue, Scope};
    use crate::domain::schema::get_default_config;

    fn widget_with_slots(slots: [&str; 4]) -> WidgetConfig {
        let mut record = get_default_config(Scope::Widget);
        for (key, value) in TAB_POSITION_KEYS.iter().zip(slots) {
            record.set(*key, ConfigValue::text(value));
        }
        WidgetConfig::from_record(record)
    }

    #[test]
    fn test_flags_without_chat() {
        let widget = widget_with_slots(["contact", "faqs", "none", "chat"]);
        let flags = derive_tab_flags(&widget, false);

        assert_eq!(
            flags,
            TabFlags {
                show_faqs: true,
                show_contact: true,
                show_resource: false,
                show_chat: false,
            }
        );
        assert_eq!(active_tab(&widget, false), TabId::Contact);
    }

    #[test]
    fn test_chat_first_when_available() {
        let widget = widget_with_slots(["chat", "faqs", "none", "none"]);
        assert!(derive_tab_flags(&widget, true).show_chat);
        assert_eq!(active_tab(&widget, true), TabId::Chat);
        assert_eq!(active_tab(&widget, false), TabId::Faqs);
    }

    #[test]
    fn test_active_tab_defaults_to_faqs() {
        let widget = widget_with_slots(["none", "chat", "none", "none"]);
        assert_eq!(active_tab(&widget, false), TabId::Faqs);
        assert_eq!(derive_tab_flags(&widget, false), TabFlags::default());
    }

    #[test]
    fn test_duplicate_tabs_reported() {
        let record = widget_with_slots(["faqs", "contact", "faqs", "faqs"]).into_record();
        let errors = duplicate_tab_errors(&record);

        let keys: Vec<&str> = errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["tabs_position_3", "tabs_position_4"]);
        assert!(errors.iter().all(|e| e.kind == FieldErrorKind::DuplicateTab));
    }

    #[test]
    fn test_repeated_none_is_not_a_duplicate() {
        let record = widget_with_slots(["none", "faqs", "none", "none"]).into_record();
        assert!(duplicate_tab_errors(&record).is_empty());
        assert!(duplicate_tab_errors(&get_default_config(Scope::Widget)).is_empty());
    }
}
