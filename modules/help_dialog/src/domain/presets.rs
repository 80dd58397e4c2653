//! Color and dialog width presets
//!
//! Presets are applied through three explicit overlay steps: the scope
//! defaults for the affected keys, then the preset values, then the result
//! onto the user's record. Keys outside the preset's key set are never
//! touched.

use super::schema::{color_field_keys, get_default_config};
use crate::contract::{ConfigRecord, ConfigValue, Scope};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Named bundle of widget color overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub id: &'static str,
    pub title: &'static str,
    pub colors: Vec<(&'static str, &'static str)>,
}

/// Named bundle of dialog sizing overrides for the global record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogWidthPreset {
    pub id: &'static str,
    pub title: &'static str,
    pub values: Vec<(&'static str, ConfigValue)>,
}

/// FAQ colors shared by every color preset
const FAQS_COLORS: [(&str, &str); 6] = [
    ("faqs_qa_border_color", "#CCCCCC"),
    ("faqs_question_background_color", "#f7f7f7"),
    ("faqs_question_active_text_color", "#000000"),
    ("faqs_question_active_background_color", "#ffffff"),
    ("faqs_answer_text_color", "#000000"),
    ("faqs_answer_background_color", "#ffffff"),
];

/// Launcher, background, inactive tab, breadcrumb background, submit, submit hover
type Palette = [&'static str; 6];

const PALETTES: [(&str, &str, Palette); 12] = [
    ("light-green", "Light Green", ["#4DAB58", "#4DAB58", "#2E6548", "#D8EDDE", "#4DAB58", "#2E6548"]),
    ("blue-magenta", "Blue-Magenta", ["#545190", "#545190", "#453D4D", "#D9E1F1", "#545190", "#453D4D"]),
    ("green", "Green", ["#378B84", "#378B84", "#3D575D", "#E7F4F1", "#378B84", "#3D575D"]),
    ("orange-light", "Light Orange", ["#EE9C22", "#EE9C22", "#C66D2A", "#E6D8C9", "#EE9C22", "#C66D2A"]),
    ("blue-bright", "Bright Blue", ["#1E60E0", "#1E60E0", "#3E5291", "#DEF0FE", "#1E60E0", "#3E5291"]),
    ("orange", "Orange", ["#D46837", "#D46837", "#804440", "#FDE4DF", "#D46837", "#804440"]),
    ("blue", "Blue", ["#0f4874", "#0f4874", "#132e59", "#DFEFFB", "#2D7EBE", "#4D4986"]),
    ("red", "Red", ["#C3466B", "#C3466B", "#833E69", "#FBDEEB", "#C3466B", "#833E69"]),
    ("light-purple", "Light Purple", ["#BC81F6", "#BC81F6", "#7E6BA9", "#DFEFFB", "#BC81F6", "#7E6BA9"]),
    ("gray", "Gray", ["#788180", "#788180", "#3D575D", "#EDF4F2", "#788180", "#3D575D"]),
    ("purple", "Purple", ["#7E6BA9", "#7E6BA9", "#4B4354", "#D8D8F5", "#7E6BA9", "#4B4354"]),
    ("black", "Black", ["#424241", "#424241", "#1E1F1D", "#E5E9EC", "#424241", "#1E1F1D"]),
];

const PALETTE_KEYS: [&str; 6] = [
    "launcher_background_color",
    "background_color",
    "not_active_tab_color",
    "breadcrumb_background_color",
    "contact_submit_button_color",
    "contact_submit_button_hover_color",
];

static COLOR_PRESETS: Lazy<Vec<ColorPreset>> = Lazy::new(|| {
    PALETTES
        .iter()
        .map(|&(id, title, palette)| ColorPreset {
            id,
            title,
            colors: PALETTE_KEYS
                .iter()
                .copied()
                .zip(palette.iter().copied())
                .chain(FAQS_COLORS)
                .collect(),
        })
        .collect()
});

static DIALOG_WIDTH_PRESETS: Lazy<Vec<DialogWidthPreset>> = Lazy::new(|| {
    let sized = |id: &'static str, title: &'static str, font: i64, logo: i64| DialogWidthPreset {
        id,
        title,
        values: vec![
            ("dialog_width", ConfigValue::text(id)),
            ("main_title_font_size", ConfigValue::Number(font)),
            ("logo_image_width", ConfigValue::Number(logo)),
        ],
    };
    vec![
        sized("small", "Small", 16, 60),
        sized("medium", "Medium", 20, 70),
        sized("large", "Large", 20, 70),
    ]
});

pub fn color_presets() -> &'static [ColorPreset] {
    &COLOR_PRESETS
}

pub fn dialog_width_presets() -> &'static [DialogWidthPreset] {
    &DIALOG_WIDTH_PRESETS
}

pub fn find_color_preset(preset_id: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS.iter().find(|preset| preset.id == preset_id)
}

pub fn find_dialog_width_preset(preset_id: &str) -> Option<&'static DialogWidthPreset> {
    DIALOG_WIDTH_PRESETS.iter().find(|preset| preset.id == preset_id)
}

/// Scope defaults restricted to `keys`
pub fn overlay_defaults<'a>(
    scope: Scope,
    keys: impl IntoIterator<Item = &'a str>,
) -> ConfigRecord {
    let defaults = get_default_config(scope);
    keys.into_iter()
        .filter_map(|key| defaults.get(key).map(|value| (key.to_string(), value.clone())))
        .collect()
}

/// `layer` values win over `base`
pub fn overlay_preset<'a>(
    mut base: ConfigRecord,
    layer: impl IntoIterator<Item = (&'a str, ConfigValue)>,
) -> ConfigRecord {
    for (key, value) in layer {
        base.set(key, value);
    }
    base
}

/// Every value of `preset` replaces the same key of `user`
pub fn overlay_user(user: &ConfigRecord, preset: &ConfigRecord) -> ConfigRecord {
    let mut merged = user.clone();
    for (key, value) in preset.iter() {
        merged.set(key, value.clone());
    }
    merged
}

/// Overlay a color preset onto a widget record; unknown ids leave it unchanged
pub fn apply_color_preset(preset_id: &str, base: &ConfigRecord) -> ConfigRecord {
    let Some(preset) = find_color_preset(preset_id) else {
        return base.clone();
    };
    let defaults = overlay_defaults(
        Scope::Widget,
        color_field_keys().chain(preset.colors.iter().map(|(key, _)| *key)),
    );
    let colors = overlay_preset(
        defaults,
        preset
            .colors
            .iter()
            .map(|(key, value)| (*key, ConfigValue::text(*value))),
    );
    overlay_user(base, &colors)
}

/// Overlay a dialog width preset onto the global record; unknown ids leave it unchanged
pub fn apply_dialog_width_preset(preset_id: &str, base: &ConfigRecord) -> ConfigRecord {
    let Some(preset) = find_dialog_width_preset(preset_id) else {
        return base.clone();
    };
    let defaults = overlay_defaults(Scope::Global, preset.values.iter().map(|(key, _)| *key));
    let sizing = overlay_preset(
        defaults,
        preset.values.iter().map(|(key, value)| (*key, value.clone())),
    );
    overlay_user(base, &sizing)
}
