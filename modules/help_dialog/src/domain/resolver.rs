//! Widget resolution for a request
//!
//! Include-mode widgets are always considered before exclude-mode widgets;
//! inside each group configuration order decides and the first match wins.

use super::wildcard::url_matches_wildcard;
use crate::contract::{
    GlobalConfig, PageFiltering, PageKind, RequestContext, WidgetConfig, WidgetStatus,
    HOME_PAGE_ID,
};
use serde::Serialize;
use tracing::debug;

/// Pick the widget to render for `context`, if any
pub fn resolve_widget<'a>(
    context: &RequestContext,
    widgets: &'a [WidgetConfig],
    global: &GlobalConfig,
) -> Option<&'a WidgetConfig> {
    let widget = find_matching_widget(context, widgets, false)?;

    if widget.status() == WidgetStatus::Draft {
        let capability = global.admin_read_capability();
        if !context.has_capability(capability) {
            debug!(
                widget_id = widget.widget_id(),
                capability, "draft widget hidden from viewer"
            );
            return None;
        }
    }

    debug!(widget_id = widget.widget_id(), "widget resolved");
    Some(widget)
}

/// First widget whose location rules match `context`, ignoring publication state
///
/// With `only_include` set, exclude-mode widgets are never considered.
pub fn find_matching_widget<'a>(
    context: &RequestContext,
    widgets: &'a [WidgetConfig],
    only_include: bool,
) -> Option<&'a WidgetConfig> {
    let includes = widgets
        .iter()
        .filter(|w| w.page_filtering() == Some(PageFiltering::Include));
    let others = widgets
        .iter()
        .filter(|w| w.page_filtering() != Some(PageFiltering::Include))
        .filter(|_| !only_include);

    includes.chain(others).find(|widget| widget_matches(context, widget))
}

/// Whether one widget's language and location rules accept `context`
pub fn widget_matches(context: &RequestContext, widget: &WidgetConfig) -> bool {
    if !language_matches(context, widget) {
        return false;
    }

    let wildcard = url_matches_wildcard(widget.wildcard_url(), &context.url_path);
    let listed = is_listed(context, widget);

    match widget.page_filtering() {
        Some(PageFiltering::Include) => wildcard || listed,
        Some(PageFiltering::Exclude) => !wildcard && !listed,
        None => false,
    }
}

/// Language filter applies only while a multilingual context is active
pub fn language_matches(context: &RequestContext, widget: &WidgetConfig) -> bool {
    let Some(language) = context.active_language() else {
        return true;
    };
    let filter = widget.language_filter();
    filter == "all" || filter == language
}

fn is_listed(context: &RequestContext, widget: &WidgetConfig) -> bool {
    let Some(key) = context.location_key() else {
        return false;
    };
    widget
        .location_list(context.page_kind)
        .iter()
        .any(|entry| same_location(entry, key))
}

/// Numeric ids compare by value so `"042"` and `"42"` are the same page
fn same_location(entry: &str, key: &str) -> bool {
    let entry = entry.trim();
    match (entry.parse::<u64>(), key.parse::<u64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => entry == key,
    }
}

/// Location a widget is guaranteed to render on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum LocationTarget {
    Home,
    Page(String),
    Post(String),
    CustomPostType(String),
}

impl LocationTarget {
    pub fn page_kind(&self) -> PageKind {
        match self {
            Self::Home => PageKind::Home,
            Self::Page(_) => PageKind::Page,
            Self::Post(_) => PageKind::Post,
            Self::CustomPostType(_) => PageKind::CustomPostType,
        }
    }
}

/// First listed location of an include-mode widget, used for previews
///
/// Exclude-mode widgets and widgets matched only by wildcard have no
/// guaranteed target without a content directory, so they yield `None`.
pub fn first_include_target(widget: &WidgetConfig) -> Option<LocationTarget> {
    if widget.page_filtering() != Some(PageFiltering::Include) {
        return None;
    }

    let pages = widget.location_list(PageKind::Page);
    if pages.iter().any(|id| same_location(id, HOME_PAGE_ID)) {
        return Some(LocationTarget::Home);
    }
    if let Some(id) = pages.first() {
        return Some(LocationTarget::Page(id.trim().to_string()));
    }
    if let Some(id) = widget.location_list(PageKind::Post).first() {
        return Some(LocationTarget::Post(id.trim().to_string()));
    }
    widget
        .location_list(PageKind::CustomPostType)
        .first()
        .map(|post_type| LocationTarget::CustomPostType(post_type.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{ConfigValue, Scope};
    use crate::domain::schema::get_default_config;

    fn widget(id: i64, filtering: &str) -> WidgetConfig {
        let mut record = get_default_config(Scope::Widget);
        record.set("widget_id", ConfigValue::Number(id));
        record.set("widget_status", ConfigValue::text("published"));
        record.set("location_page_filtering", ConfigValue::text(filtering));
        WidgetConfig::from_record(record)
    }

    fn with(mut widget: WidgetConfig, key: &str, value: ConfigValue) -> WidgetConfig {
        widget.record_mut().set(key, value);
        widget
    }

    fn global() -> GlobalConfig {
        GlobalConfig::from_record(get_default_config(Scope::Global))
    }

    #[test]
    fn test_include_beats_exclude_regardless_of_order() {
        let exclude = widget(1, "exclude");
        let include = with(widget(2, "include"), "location_posts_list", ConfigValue::list(["42"]));
        let widgets = vec![exclude, include];
        let context = RequestContext::post(42, "/hello-world/");

        let resolved = resolve_widget(&context, &widgets, &global());
        assert_eq!(resolved.map(WidgetConfig::widget_id), Some(2));
    }

    #[test]
    fn test_first_match_wins_within_group() {
        let widgets = vec![
            with(widget(1, "include"), "location_wildcard_url", ConfigValue::text("/*")),
            with(widget(2, "include"), "location_wildcard_url", ConfigValue::text("/*")),
        ];
        let resolved = resolve_widget(&RequestContext::page(5, "/about/"), &widgets, &global());
        assert_eq!(resolved.map(WidgetConfig::widget_id), Some(1));
    }

    #[test]
    fn test_exclude_list_hides_listed_pages() {
        let widgets = vec![with(
            widget(1, "exclude"),
            "location_pages_list",
            ConfigValue::list(["7", "0"]),
        )];
        assert!(resolve_widget(&RequestContext::page(7, "/pricing/"), &widgets, &global()).is_none());
        assert!(resolve_widget(&RequestContext::home(), &widgets, &global()).is_none());
        assert!(resolve_widget(&RequestContext::page(8, "/team/"), &widgets, &global()).is_some());
        assert!(resolve_widget(&RequestContext::taxonomy("/category/news/"), &widgets, &global()).is_some());
    }

    #[test]
    fn test_exclude_wildcard() {
        let widgets = vec![with(
            widget(1, "exclude"),
            "location_wildcard_url",
            ConfigValue::text("/checkout/*"),
        )];
        assert!(resolve_widget(&RequestContext::page(3, "/checkout/pay/"), &widgets, &global()).is_none());
        assert!(resolve_widget(&RequestContext::page(3, "/cart/"), &widgets, &global()).is_some());
    }

    #[test]
    fn test_draft_requires_capability() {
        let draft = with(
            with(widget(1, "include"), "widget_status", ConfigValue::text("draft")),
            "location_pages_list",
            ConfigValue::list(["0"]),
        );
        let widgets = vec![draft];

        assert!(resolve_widget(&RequestContext::home(), &widgets, &global()).is_none());
        let editor = RequestContext::home().with_capability("edit_others_posts");
        assert!(resolve_widget(&editor, &widgets, &global()).is_some());
    }

    #[test]
    fn test_language_filter() {
        let widgets = vec![
            with(
                with(widget(1, "include"), "location_language_filtering", ConfigValue::text("fr")),
                "location_pages_list",
                ConfigValue::list(["0"]),
            ),
            widget(2, "exclude"),
        ];

        let french = RequestContext::home().with_language("fr");
        assert_eq!(
            resolve_widget(&french, &widgets, &global()).map(WidgetConfig::widget_id),
            Some(1)
        );
        let german = RequestContext::home().with_language("de");
        assert_eq!(
            resolve_widget(&german, &widgets, &global()).map(WidgetConfig::widget_id),
            Some(2)
        );
        // no translation plugin: the filter is ignored
        assert_eq!(
            resolve_widget(&RequestContext::home(), &widgets, &global()).map(WidgetConfig::widget_id),
            Some(1)
        );
    }

    #[test]
    fn test_custom_post_type_and_taxonomy() {
        let widgets = vec![with(
            widget(1, "include"),
            "location_cpts_list",
            ConfigValue::list(["product"]),
        )];
        assert!(resolve_widget(
            &RequestContext::custom_post_type("product", "/shop/mug/"),
            &widgets,
            &global()
        )
        .is_some());
        assert!(resolve_widget(&RequestContext::taxonomy("/product-cat/mugs/"), &widgets, &global()).is_none());
    }

    #[test]
    fn test_only_include_skips_exclude_widgets() {
        let widgets = vec![widget(1, "exclude")];
        let context = RequestContext::page(9, "/about/");
        assert!(find_matching_widget(&context, &widgets, false).is_some());
        assert!(find_matching_widget(&context, &widgets, true).is_none());
    }

    #[test]
    fn test_unknown_filtering_never_matches() {
        let widgets = vec![with(widget(1, ""), "location_wildcard_url", ConfigValue::text("/*"))];
        assert!(resolve_widget(&RequestContext::home(), &widgets, &global()).is_none());
        assert!(resolve_widget(&RequestContext::home(), &[], &global()).is_none());
    }

    #[test]
    fn test_first_include_target() {
        let home = with(widget(1, "include"), "location_pages_list", ConfigValue::list(["12", "0"]));
        assert_eq!(first_include_target(&home), Some(LocationTarget::Home));

        let post = with(widget(2, "include"), "location_posts_list", ConfigValue::list(["31"]));
        assert_eq!(first_include_target(&post), Some(LocationTarget::Post("31".to_string())));

        let cpt = with(widget(3, "include"), "location_cpts_list", ConfigValue::list(["product"]));
        assert_eq!(
            first_include_target(&cpt).map(|t| t.page_kind()),
            Some(PageKind::CustomPostType)
        );

        assert_eq!(first_include_target(&widget(4, "include")), None);
        assert_eq!(first_include_target(&widget(5, "exclude")), None);
    }
}
