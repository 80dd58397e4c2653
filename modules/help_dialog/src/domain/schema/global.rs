//! Site-wide fields shared by every widget

use super::{OFF_ON, USER_ROLES};
use crate::contract::{FieldKind, FieldSpec};

/// Capability allowed to see drafts and read admin pages by default
pub const DEFAULT_ADMIN_READ_CAPABILITY: &str = "edit_others_posts";

pub(super) fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::internal_of("first_plugin_version", FieldKind::Text),
        FieldSpec::internal_of("upgrade_plugin_version", FieldKind::Text)
            .length(0, 10)
            .default_text("2.6.1"),
        FieldSpec::text("logo_image_url", "Logo Image URL")
            .length(0, 300)
            .optional()
            .default_text("img/logo-placement.png"),
        FieldSpec::number("logo_image_width", "Logo Width (px)", 1, 120).default_number(70),
        FieldSpec::number("mobile_break_point", "Mobile Break Point (px)", 100, 2000)
            .default_number(768),
        FieldSpec::number("main_title_font_size", "Main Title Font Size (px)", 1, 40)
            .default_number(20),
        FieldSpec::internal_of("last_widget_id", FieldKind::Number)
            .length(1, 999_999_999_999_999)
            .default_number(1),
        FieldSpec::selection(
            "preview_post_mode",
            "Post Preview Mode",
            &[("direct", "Open Post Directly"), ("excerpt", "Show Excerpt")],
        )
        .default_text("excerpt"),
        FieldSpec::selection(
            "preview_kb_mode",
            "Knowledge Base Preview Mode",
            &[
                ("iframe", "Show Article in Dialog"),
                ("excerpt", "Show Excerpt"),
                ("direct", "Open Article Directly"),
            ],
        )
        .default_text("iframe"),
        FieldSpec::checkbox(
            "analytic_count_launcher_impression",
            "Count Launcher Impressions",
            OFF_ON,
        )
        .default_text("off"),
        FieldSpec::multi_checkbox("analytic_excluded_roles", "Excluded Roles", USER_ROLES)
            .default_list(&["administrator", "editor", "author", "contributor"]),
        FieldSpec::text("kb_article_hidden_classes", "Hidden Article Classes")
            .length(0, 1000)
            .optional(),
        FieldSpec::selection(
            "dialog_width",
            "Dialog Width",
            &[("small", "Small"), ("medium", "Medium"), ("large", "Large")],
        )
        .default_text("medium"),
        FieldSpec::text("contact_submission_email", "Submission Email")
            .length(0, 50)
            .optional(),
        FieldSpec::multi_checkbox("private_faqs_included_roles", "Private FAQs Roles", USER_ROLES)
            .default_list(&["administrator", "editor"]),
        FieldSpec::selection("wpml_toggle", "Polylang and WPML", OFF_ON)
            .pro()
            .default_text("off"),
        FieldSpec::selection(
            "tabs_sequence",
            "Tabs Sequence",
            &[
                ("chat_faqs_contact", "Chat / FAQs / Contact"),
                ("faqs_chat_contact", "FAQs / Chat / Contact"),
                ("faqs_resource_contact", "FAQs / Resource / Contact"),
            ],
        )
        .default_text("faqs_resource_contact"),
        FieldSpec::text("openai_api_key", "OpenAI API Key")
            .length(0, 500)
            .optional(),
        FieldSpec::text("admin_ephd_access_admin_pages_read", "Admin Pages Read Access")
            .length(3, 60)
            .default_text(DEFAULT_ADMIN_READ_CAPABILITY),
    ]
}
