//! Contract models for the help dialog configuration core
//!
//! These models are transport-agnostic and shared by the schema engine, the
//! widget resolver and embedders. Records serialize as flat JSON objects so
//! they can be handed to any persistence layer unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Reserved location id standing for the site home page
pub const HOME_PAGE_ID: &str = "0";

/// Configuration scope a field table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Site-wide settings shared by every widget
    Global,
    /// Settings of one configured widget
    Widget,
    /// Notification rules (no fields yet)
    NotificationRule,
}

impl Scope {
    /// Every known scope, in table order
    pub const ALL: [Scope; 3] = [Scope::Global, Scope::Widget, Scope::NotificationRule];

    /// Stable scope name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Widget => "widget",
            Self::NotificationRule => "notification_rule",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a configuration field; decides coercion and bounds semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Selection,
    Checkbox,
    MultiCheckbox,
    ColorHex,
    RichText,
    InternalArray,
}

impl FieldKind {
    /// Value a field of this kind holds when no default is declared
    pub fn empty_value(&self) -> ConfigValue {
        match self {
            Self::Number => ConfigValue::Number(0),
            Self::MultiCheckbox | Self::InternalArray => ConfigValue::List(Vec::new()),
            Self::Text | Self::Selection | Self::Checkbox | Self::ColorHex | Self::RichText => {
                ConfigValue::Text(String::new())
            }
        }
    }

    /// Whether values of this kind are lists
    pub fn is_list(&self) -> bool {
        matches!(self, Self::MultiCheckbox | Self::InternalArray)
    }
}

/// Declarative description of one configuration field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Unique key, stable across versions
    pub key: &'static str,
    pub kind: FieldKind,
    /// Display name; absent for internal fields
    pub label: Option<&'static str>,
    /// Lower bound: string length for text kinds, value for numbers
    pub min: Option<i64>,
    /// Upper bound: string length for text kinds, value for numbers
    pub max: Option<i64>,
    pub mandatory: bool,
    /// Not user-editable; excluded from forms
    pub internal: bool,
    /// Only honored while the premium tier is active
    pub is_pro: bool,
    /// Ordered value -> label pairs for choice kinds
    pub options: IndexMap<&'static str, &'static str>,
    pub default: ConfigValue,
    /// Markup tags kept when sanitizing rich text
    pub allowed_tags: &'static [&'static str],
}

impl FieldSpec {
    /// Whether `value` is one of the declared options
    pub fn has_option(&self, value: &str) -> bool {
        self.options.contains_key(value)
    }
}

/// A stored configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(i64),
    Text(String),
    #[serde(deserialize_with = "list_of_ids")]
    List(Vec<String>),
}

/// Id lists are stored as strings but legacy records hold bare numbers too
fn list_of_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Item {
        Number(i64),
        Text(String),
    }

    let items = Vec::<Item>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| match item {
            Item::Number(n) => n.to_string(),
            Item::Text(s) => s,
        })
        .collect())
}

impl ConfigValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; numeric strings left behind by older storage formats count
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Flat, insertion-ordered mapping of field key to value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
    values: IndexMap<String, ConfigValue>,
}

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Insert or replace a value, keeping the original position of known keys
    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.values.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Text value of `key`, empty when missing or not text
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(ConfigValue::as_text).unwrap_or("")
    }

    pub fn number(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_number)
    }

    /// List value of `key`, empty when missing or not a list
    pub fn list(&self, key: &str) -> &[String] {
        self.get(key).and_then(ConfigValue::as_list).unwrap_or(&[])
    }

    /// Whether an on/off toggle is switched on
    pub fn is_on(&self, key: &str) -> bool {
        self.text(key) == "on"
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigRecord {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Publication state of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetStatus {
    Draft,
    Published,
}

/// Page-location rule mode of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFiltering {
    /// Only show on the listed pages
    Include,
    /// Show everywhere except the listed pages
    Exclude,
}

/// Feature tab that can occupy a tab position slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    None,
    Chat,
    Faqs,
    Resource,
    Contact,
}

impl TabId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Chat => "chat",
            Self::Faqs => "faqs",
            Self::Resource => "resource",
            Self::Contact => "contact",
        }
    }

    /// Parse a slot value; empty or unknown values mean an empty slot
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "chat" => Self::Chat,
            "faqs" => Self::Faqs,
            "resource" => Self::Resource,
            "contact" => Self::Contact,
            _ => Self::None,
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys of the four ordered tab position slots
pub const TAB_POSITION_KEYS: [&str; 4] = [
    "tabs_position_1",
    "tabs_position_2",
    "tabs_position_3",
    "tabs_position_4",
];

/// Configuration of one widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetConfig(ConfigRecord);

impl WidgetConfig {
    pub fn from_record(record: ConfigRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.0
    }

    pub fn record_mut(&mut self) -> &mut ConfigRecord {
        &mut self.0
    }

    pub fn into_record(self) -> ConfigRecord {
        self.0
    }

    pub fn widget_id(&self) -> u64 {
        self.0
            .number("widget_id")
            .and_then(|id| u64::try_from(id).ok())
            .unwrap_or(0)
    }

    pub fn name(&self) -> &str {
        self.0.text("widget_name")
    }

    /// Only an explicit `draft` hides a widget
    pub fn status(&self) -> WidgetStatus {
        if self.0.text("widget_status") == "draft" {
            WidgetStatus::Draft
        } else {
            WidgetStatus::Published
        }
    }

    /// `None` when the stored mode is neither include nor exclude
    pub fn page_filtering(&self) -> Option<PageFiltering> {
        match self.0.text("location_page_filtering") {
            "include" => Some(PageFiltering::Include),
            "exclude" => Some(PageFiltering::Exclude),
            _ => None,
        }
    }

    pub fn language_filter(&self) -> &str {
        self.0.text("location_language_filtering")
    }

    pub fn wildcard_url(&self) -> &str {
        self.0.text("location_wildcard_url")
    }

    /// Location list consulted for a page kind; taxonomies have none
    pub fn location_list(&self, kind: PageKind) -> &[String] {
        match kind {
            PageKind::Home | PageKind::Page => self.0.list("location_pages_list"),
            PageKind::Post => self.0.list("location_posts_list"),
            PageKind::CustomPostType => self.0.list("location_cpts_list"),
            PageKind::Taxonomy => &[],
        }
    }

    pub fn tab_slots(&self) -> [TabId; 4] {
        TAB_POSITION_KEYS.map(|key| TabId::parse(self.0.text(key)))
    }
}

/// Site-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig(ConfigRecord);

impl GlobalConfig {
    pub fn from_record(record: ConfigRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.0
    }

    pub fn record_mut(&mut self) -> &mut ConfigRecord {
        &mut self.0
    }

    pub fn into_record(self) -> ConfigRecord {
        self.0
    }

    /// Capability a viewer needs to see draft widgets
    pub fn admin_read_capability(&self) -> &str {
        self.0.text("admin_ephd_access_admin_pages_read")
    }

    pub fn last_widget_id(&self) -> u64 {
        self.0
            .number("last_widget_id")
            .and_then(|id| u64::try_from(id).ok())
            .unwrap_or(0)
    }

    pub fn upgrade_plugin_version(&self) -> &str {
        self.0.text("upgrade_plugin_version")
    }
}

/// Kind of content the current request renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Page,
    Post,
    CustomPostType,
    Taxonomy,
}

/// Request facts the resolver matches widgets against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub page_kind: PageKind,
    /// Page/post id, or the post type name for custom post types
    pub entity_id: Option<String>,
    /// Path (or full URL) of the current request
    pub url_path: String,
    /// Active language; `None` when no translation plugin is present
    pub current_language: Option<String>,
    pub viewer_capabilities: BTreeSet<String>,
}

impl RequestContext {
    fn new(page_kind: PageKind, entity_id: Option<String>, url_path: impl Into<String>) -> Self {
        Self {
            page_kind,
            entity_id,
            url_path: url_path.into(),
            current_language: None,
            viewer_capabilities: BTreeSet::new(),
        }
    }

    pub fn home() -> Self {
        Self::new(PageKind::Home, None, "/")
    }

    pub fn page(id: u64, url_path: impl Into<String>) -> Self {
        Self::new(PageKind::Page, Some(id.to_string()), url_path)
    }

    pub fn post(id: u64, url_path: impl Into<String>) -> Self {
        Self::new(PageKind::Post, Some(id.to_string()), url_path)
    }

    pub fn custom_post_type(post_type: impl Into<String>, url_path: impl Into<String>) -> Self {
        Self::new(PageKind::CustomPostType, Some(post_type.into()), url_path)
    }

    pub fn taxonomy(url_path: impl Into<String>) -> Self {
        Self::new(PageKind::Taxonomy, None, url_path)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.current_language = Some(language.into());
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.viewer_capabilities.insert(capability.into());
        self
    }

    /// Identity used against location lists; the home page is always `0`
    pub fn location_key(&self) -> Option<&str> {
        match self.page_kind {
            PageKind::Home => Some(HOME_PAGE_ID),
            _ => self.entity_id.as_deref(),
        }
    }

    /// Language to filter on, if a multilingual context is active
    pub fn active_language(&self) -> Option<&str> {
        self.current_language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.viewer_capabilities.contains(capability)
    }
}

/// Which feature tabs a widget displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabFlags {
    pub show_faqs: bool,
    pub show_contact: bool,
    pub show_resource: bool,
    pub show_chat: bool,
}

/// Widget selected for a request together with its derived display state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWidget {
    pub widget: WidgetConfig,
    pub tabs: TabFlags,
    pub active_tab: TabId,
}

/// One submitted form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Single(String),
    Multi(Vec<String>),
}

impl RawValue {
    /// Single-value view; the first entry of a list
    pub fn as_single(&self) -> &str {
        match self {
            Self::Single(s) => s,
            Self::Multi(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// List view; a non-empty single value becomes a one-element list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Single(s) if s.trim().is_empty() => Vec::new(),
            Self::Single(s) => vec![s.clone()],
            Self::Multi(items) => items.clone(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        Self::Multi(value)
    }
}

/// Submitted values keyed by field, in submission order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValues(IndexMap<String, RawValue>);

impl RawValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`RawValues::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Submitted form of an already stored record
    pub fn from_record(record: &ConfigRecord) -> Self {
        Self(
            record
                .iter()
                .map(|(key, value)| {
                    let raw = match value {
                        ConfigValue::Number(n) => RawValue::Single(n.to_string()),
                        ConfigValue::Text(s) => RawValue::Single(s.clone()),
                        ConfigValue::List(items) => RawValue::Multi(items.clone()),
                    };
                    (key.to_string(), raw)
                })
                .collect(),
        )
    }
}
