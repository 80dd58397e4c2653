//! Declarative configuration schema
//!
//! Every configurable field of the help dialog is described once here, per
//! scope. The tables are built on first use and never mutated afterwards.

mod global;
mod widget;

use crate::contract::{ConfigRecord, ConfigValue, FieldKind, FieldSpec, Scope, SchemaError};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::warn;

/// Ordered `key -> FieldSpec` table of one scope
pub type FieldTable = IndexMap<&'static str, FieldSpec>;

/// Id of the widget created on first setup
pub const DEFAULT_WIDGET_ID: u64 = 1;

/// Tags kept in short link-bearing labels
pub(crate) const LINK_MARKUP_TAGS: &[&str] = &["a", "strong", "i", "br"];
/// Tags kept in success messages
pub(crate) const LINK_TAGS: &[&str] = &["a"];
/// Tags kept in editor-backed fields
pub(crate) const POST_CONTENT_TAGS: &[&str] = &[
    "a", "b", "br", "em", "i", "li", "ol", "p", "span", "strong", "ul", "h1", "h2", "h3", "h4",
    "h5", "h6", "blockquote", "code",
];

pub(crate) const OFF_ON: &[(&str, &str)] = &[("off", "Disable"), ("on", "Enable")];
pub(crate) const SHOW_HIDE: &[(&str, &str)] = &[("show", "Show"), ("hide", "Hide")];
pub(crate) const USER_ROLES: &[(&str, &str)] = &[
    ("administrator", "Administrator"),
    ("editor", "Editor"),
    ("author", "Author"),
    ("contributor", "Contributor"),
    ("subscriber", "Subscriber"),
];

static GLOBAL_FIELDS: Lazy<FieldTable> = Lazy::new(|| into_table(global::fields()));
static WIDGET_FIELDS: Lazy<FieldTable> = Lazy::new(|| into_table(widget::fields()));
static NOTIFICATION_RULE_FIELDS: Lazy<FieldTable> = Lazy::new(FieldTable::new);
static ALL_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    WIDGET_FIELDS
        .iter()
        .chain(GLOBAL_FIELDS.iter())
        .map(|(key, spec)| (*key, spec.clone()))
        .collect()
});

fn into_table(fields: Vec<FieldSpec>) -> FieldTable {
    fields.into_iter().map(|spec| (spec.key, spec)).collect()
}

impl Scope {
    /// Parse a scope name
    pub fn parse(name: &str) -> Result<Self, SchemaError> {
        match name {
            "global" => Ok(Self::Global),
            "widget" => Ok(Self::Widget),
            "notification_rule" => Ok(Self::NotificationRule),
            other => Err(SchemaError::UnknownScope(other.to_string())),
        }
    }
}

/// Field table of a scope
pub fn get_field_specs(scope: Scope) -> &'static FieldTable {
    match scope {
        Scope::Global => &GLOBAL_FIELDS,
        Scope::Widget => &WIDGET_FIELDS,
        Scope::NotificationRule => &NOTIFICATION_RULE_FIELDS,
    }
}

/// Field table by scope name; unknown names fall back to the global table
pub fn get_field_specs_by_name(name: &str) -> &'static FieldTable {
    let scope = Scope::parse(name).unwrap_or_else(|err| {
        warn!(error = %err, "falling back to global scope");
        Scope::Global
    });
    get_field_specs(scope)
}

/// Widget and global fields together, widget fields first
pub fn get_all_specs() -> &'static FieldTable {
    &ALL_FIELDS
}

/// Record holding the default of every field of a scope
pub fn get_default_config(scope: Scope) -> ConfigRecord {
    get_field_specs(scope)
        .values()
        .map(|spec| (spec.key.to_string(), spec.default.clone()))
        .collect()
}

/// Field keys of a scope in declaration order
pub fn get_all_field_keys(scope: Scope) -> Vec<&'static str> {
    get_field_specs(scope).keys().copied().collect()
}

/// Widget keys holding colors
pub fn color_field_keys() -> impl Iterator<Item = &'static str> {
    WIDGET_FIELDS
        .keys()
        .copied()
        .filter(|key| key.ends_with("_color"))
}

/// Table-building constructors; every field starts mandatory and visible
impl FieldSpec {
    fn of_kind(key: &'static str, kind: FieldKind, label: Option<&'static str>) -> Self {
        Self {
            key,
            kind,
            label,
            min: None,
            max: None,
            mandatory: true,
            internal: false,
            is_pro: false,
            options: IndexMap::new(),
            default: kind.empty_value(),
            allowed_tags: &[],
        }
    }

    pub(crate) fn text(key: &'static str, label: &'static str) -> Self {
        Self::of_kind(key, FieldKind::Text, Some(label))
    }

    pub(crate) fn rich_text(
        key: &'static str,
        label: &'static str,
        allowed_tags: &'static [&'static str],
    ) -> Self {
        Self {
            allowed_tags,
            ..Self::of_kind(key, FieldKind::RichText, Some(label))
        }
    }

    pub(crate) fn number(key: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self::of_kind(key, FieldKind::Number, Some(label)).length(min, max)
    }

    pub(crate) fn selection(
        key: &'static str,
        label: &'static str,
        options: &[(&'static str, &'static str)],
    ) -> Self {
        Self::of_kind(key, FieldKind::Selection, Some(label)).with_options(options)
    }

    pub(crate) fn checkbox(
        key: &'static str,
        label: &'static str,
        options: &[(&'static str, &'static str)],
    ) -> Self {
        Self::of_kind(key, FieldKind::Checkbox, Some(label)).with_options(options)
    }

    pub(crate) fn multi_checkbox(
        key: &'static str,
        label: &'static str,
        options: &[(&'static str, &'static str)],
    ) -> Self {
        Self::of_kind(key, FieldKind::MultiCheckbox, Some(label)).with_options(options)
    }

    /// Seven character `#rrggbb` color
    pub(crate) fn color(key: &'static str, label: &'static str, default: &str) -> Self {
        Self::of_kind(key, FieldKind::ColorHex, Some(label))
            .length(7, 7)
            .default_text(default)
    }

    pub(crate) fn internal_array(key: &'static str) -> Self {
        Self::of_kind(key, FieldKind::InternalArray, None).internal()
    }

    /// Hidden counterpart of a text or number field
    pub(crate) fn internal_of(key: &'static str, kind: FieldKind) -> Self {
        Self::of_kind(key, kind, None).internal()
    }

    pub(crate) fn length(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub(crate) fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    pub(crate) fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    pub(crate) fn pro(mut self) -> Self {
        self.is_pro = true;
        self
    }

    pub(crate) fn with_options(mut self, options: &[(&'static str, &'static str)]) -> Self {
        self.options = options.iter().copied().collect();
        self
    }

    pub(crate) fn default_text(mut self, value: &str) -> Self {
        self.default = ConfigValue::text(value);
        self
    }

    pub(crate) fn default_number(mut self, value: i64) -> Self {
        self.default = ConfigValue::Number(value);
        self
    }

    pub(crate) fn default_list(mut self, values: &[&str]) -> Self {
        self.default = ConfigValue::list(values.iter().copied());
        self
    }
}
