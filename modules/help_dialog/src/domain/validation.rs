//! Validation and sanitization of submitted configuration values

use super::markup::{strip_all_tags, strip_disallowed_tags};
use super::schema::{get_default_config, get_field_specs};
use crate::contract::{
    ConfigRecord, ConfigValue, FieldError, FieldErrorKind, FieldKind, FieldSpec, RawValue,
    RawValues, Scope, ValidationFailure,
};
use tracing::debug;

/// A rejected submission; `replacement` is stored in place of the base value when present
struct Rejection {
    kind: FieldErrorKind,
    message: String,
    replacement: Option<ConfigValue>,
}

impl Rejection {
    fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            replacement: None,
        }
    }

    fn replace_with(mut self, value: ConfigValue) -> Self {
        self.replacement = Some(value);
        self
    }
}

/// Validate `raw` against the fields of `scope` and merge it onto `base`
///
/// `base` is the stored record, or `None` for a brand-new record built from
/// defaults. Keys unknown to the scope are ignored. Pro-gated fields keep
/// their base value unless `premium_active`. Every acceptable value is
/// applied even when other fields fail; the partially sanitized record is
/// returned alongside the errors.
pub fn validate_and_sanitize(
    scope: Scope,
    raw: &RawValues,
    base: Option<&ConfigRecord>,
    premium_active: bool,
) -> Result<ConfigRecord, ValidationFailure> {
    let specs = get_field_specs(scope);
    let mut record = conform_to_scope(scope, base);
    let mut errors = Vec::new();

    for (key, value) in raw.iter() {
        let Some(spec) = specs.get(key) else {
            continue;
        };
        if spec.is_pro && !premium_active {
            debug!(field = key, "ignoring pro field while premium is inactive");
            continue;
        }

        match sanitize_field(spec, value) {
            Ok(sanitized) => record.set(key, sanitized),
            Err(rejection) => {
                if let Some(replacement) = rejection.replacement {
                    record.set(key, replacement);
                }
                errors.push(FieldError::new(key, rejection.kind, rejection.message));
            }
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(ValidationFailure { record, errors })
    }
}

/// Defaults of `scope` overlaid with the known fields of `base`
pub fn conform_to_scope(scope: Scope, base: Option<&ConfigRecord>) -> ConfigRecord {
    let mut record = get_default_config(scope);
    if let Some(base) = base {
        for (key, value) in base.iter() {
            if record.contains_key(key) {
                record.set(key, value.clone());
            }
        }
    }
    record
}

/// Coerce one submitted value to the kind of `spec`
fn sanitize_field(spec: &FieldSpec, raw: &RawValue) -> Result<ConfigValue, Rejection> {
    match spec.kind {
        FieldKind::Number => sanitize_number(spec, raw.as_single()),
        FieldKind::Text => sanitize_text(spec, &strip_all_tags(raw.as_single())),
        FieldKind::RichText => {
            sanitize_text(spec, &strip_disallowed_tags(raw.as_single(), spec.allowed_tags))
        }
        FieldKind::ColorHex => sanitize_color(spec, raw.as_single()),
        FieldKind::Selection => sanitize_selection(spec, raw.as_single()),
        FieldKind::Checkbox => Ok(ConfigValue::text(coerce_toggle(raw.as_single()))),
        FieldKind::MultiCheckbox => Ok(sanitize_multi(spec, raw)),
        FieldKind::InternalArray => Ok(ConfigValue::List(
            raw.to_list()
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )),
    }
}

fn requires_value(spec: &FieldSpec) -> bool {
    spec.mandatory && !spec.internal
}

fn missing(spec: &FieldSpec) -> Rejection {
    Rejection::new(
        FieldErrorKind::MissingRequiredField,
        format!("{} is required", spec.label.unwrap_or(spec.key)),
    )
}

fn sanitize_number(spec: &FieldSpec, input: &str) -> Result<ConfigValue, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return if requires_value(spec) {
            Err(missing(spec))
        } else {
            Ok(spec.default.clone())
        };
    }

    let parsed = input
        .parse::<i64>()
        .ok()
        .or_else(|| parse_whole_float(input))
        .ok_or_else(|| {
            Rejection::new(FieldErrorKind::InvalidFormat, format!("'{}' is not a number", input))
        })?;

    let min = spec.min.unwrap_or(i64::MIN);
    let max = spec.max.unwrap_or(i64::MAX);
    if parsed < min || parsed > max {
        let clamped = parsed.clamp(min, max);
        return Err(Rejection::new(
            FieldErrorKind::OutOfBounds,
            format!("{} is outside {}..={}", parsed, min, max),
        )
        .replace_with(ConfigValue::Number(clamped)));
    }
    Ok(ConfigValue::Number(parsed))
}

/// Accept `"12.0"` style input for whole numbers
fn parse_whole_float(input: &str) -> Option<i64> {
    let value = input.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(value as i64)
    } else {
        None
    }
}

fn sanitize_text(spec: &FieldSpec, sanitized: &str) -> Result<ConfigValue, Rejection> {
    let text = sanitized.trim();
    if text.is_empty() {
        return if requires_value(spec) {
            Err(missing(spec))
        } else {
            Ok(ConfigValue::text(""))
        };
    }

    let length = text.chars().count() as i64;
    if let Some(max) = spec.max.filter(|max| length > *max) {
        let truncated: String = text.chars().take(max.max(0) as usize).collect();
        return Err(Rejection::new(
            FieldErrorKind::OutOfBounds,
            format!("longer than {} characters", max),
        )
        .replace_with(ConfigValue::text(truncated.trim_end())));
    }
    if let Some(min) = spec.min.filter(|min| length < *min) {
        return Err(Rejection::new(
            FieldErrorKind::OutOfBounds,
            format!("shorter than {} characters", min),
        ));
    }
    Ok(ConfigValue::text(text))
}

fn sanitize_color(spec: &FieldSpec, input: &str) -> Result<ConfigValue, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return if requires_value(spec) {
            Err(missing(spec))
        } else {
            Ok(ConfigValue::text(""))
        };
    }

    let color = if input.starts_with('#') {
        input.to_string()
    } else {
        format!("#{}", input)
    };
    if color.chars().count() != 7 {
        return Err(Rejection::new(
            FieldErrorKind::OutOfBounds,
            format!("'{}' is not a 7 character color", input),
        ));
    }
    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Rejection::new(
            FieldErrorKind::InvalidFormat,
            format!("'{}' is not a hex color", input),
        ));
    }
    Ok(ConfigValue::Text(color))
}

fn sanitize_selection(spec: &FieldSpec, input: &str) -> Result<ConfigValue, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return if requires_value(spec) {
            Err(missing(spec))
        } else {
            Ok(ConfigValue::text(""))
        };
    }
    // options filled at runtime are not known here
    if spec.options.is_empty() || spec.has_option(input) {
        return Ok(ConfigValue::text(input));
    }
    Err(Rejection::new(
        FieldErrorKind::InvalidOption,
        format!("'{}' is not one of {:?}", input, spec.options.keys().collect::<Vec<_>>()),
    ))
}

fn sanitize_multi(spec: &FieldSpec, raw: &RawValue) -> ConfigValue {
    let mut selected: Vec<String> = Vec::new();
    for item in raw.to_list() {
        let item = item.trim();
        if spec.has_option(item) && !selected.iter().any(|s| s == item) {
            selected.push(item.to_string());
        }
    }
    ConfigValue::List(selected)
}

fn coerce_toggle(input: &str) -> &'static str {
    match input.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => "on",
        _ => "off",
    }
}
