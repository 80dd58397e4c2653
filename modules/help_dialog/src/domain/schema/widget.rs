//! Per-widget fields: location rules, triggers, structure, tabs, design and labels

use super::{DEFAULT_WIDGET_ID, LINK_MARKUP_TAGS, LINK_TAGS, OFF_ON, POST_CONTENT_TAGS, SHOW_HIDE};
use crate::contract::{FieldKind, FieldSpec};

const OFF_ON_PLAIN: &[(&str, &str)] = &[("off", "Off"), ("on", "On")];
const TAB_OPTIONS: &[(&str, &str)] = &[
    ("none", "None"),
    ("chat", "Chat"),
    ("faqs", "FAQs"),
    ("resource", "Resource"),
    ("contact", "Contact"),
];
const WEEK_DAYS: &[(&str, &str)] = &[
    ("everyday_of_week", "Everyday of week"),
    ("sunday", "Sunday"),
    ("monday", "Monday"),
    ("tuesday", "Tuesday"),
    ("wednesday", "Wednesday"),
    ("thursday", "Thursday"),
    ("friday", "Friday"),
    ("saturday", "Saturday"),
    ("sunday_to_thursday", "Sunday to Thursday"),
    ("monday_to_friday", "Monday to Friday"),
    ("weekend", "Weekend"),
];

/// Default welcome text shared by the chat and resource tabs
const RESOURCES_WELCOME: &str =
    "Explore the resources listed below or reach out to us for direct assistance.";
const NO_RESULTS_HINTS: &str = "Search hints:<ol><li>Use specific, rather than generic, search terms.</li><li>Try using fewer words.</li><li>Make sure the spelling is correct.</li></ol>";

pub(super) fn fields() -> Vec<FieldSpec> {
    let mut fields = general();
    fields.extend(locations());
    fields.extend(triggers());
    fields.extend(structure());
    fields.extend(features());
    fields.extend(tabs());
    fields.extend(colors());
    fields.extend(labels());
    fields.extend(legacy_channels());
    fields
}

fn general() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("widget_id", "Widget ID", 0, 1_000_000_000)
            .default_number(DEFAULT_WIDGET_ID as i64),
        FieldSpec::selection(
            "widget_status",
            "Status",
            &[("draft", "Draft"), ("published", "Published")],
        )
        .default_text("draft"),
        FieldSpec::text("faqs_name", "FAQs Name")
            .length(1, 100)
            .default_text("Default Questions"),
        FieldSpec::internal_array("faqs_sequence"),
        FieldSpec::internal_of("initial_message_id", FieldKind::Number)
            .length(1, 999_999_999_999_999)
            .default_number(1),
    ]
}

fn locations() -> Vec<FieldSpec> {
    vec![
        FieldSpec::selection(
            "location_page_filtering",
            "Page Filtering",
            &[
                ("include", "Include Specific Pages"),
                ("exclude", "Include All Pages with Exceptions"),
            ],
        )
        .default_text("include"),
        FieldSpec::internal_array("location_pages_list"),
        FieldSpec::internal_array("location_posts_list"),
        FieldSpec::internal_array("location_cpts_list"),
        FieldSpec::text("location_language_filtering", "Language")
            .length(1, 100)
            .default_text("all"),
        FieldSpec::text("location_wildcard_url", "URLs with Wildcards")
            .length(2, 300)
            .optional(),
    ]
}

fn triggers() -> Vec<FieldSpec> {
    vec![
        FieldSpec::selection("trigger_delay_toggle", "Delay", OFF_ON).default_text("off"),
        FieldSpec::number("trigger_delay_seconds", "Delay Seconds", 0, 3600)
            .optional()
            .default_number(0),
        FieldSpec::selection("trigger_scroll_toggle", "Scroll", OFF_ON).default_text("off"),
        FieldSpec::number("trigger_scroll_percent", "Scroll Percent", 0, 100)
            .optional()
            .default_number(0),
        FieldSpec::selection("trigger_days_and_hours_toggle", "Days and Hours", OFF_ON)
            .default_text("off"),
        FieldSpec::selection("trigger_days", "Days", WEEK_DAYS).default_text("everyday_of_week"),
        FieldSpec::number("trigger_hours_from", "From", 0, 23)
            .optional()
            .default_number(0),
        FieldSpec::number("trigger_hours_to", "To", 1, 24)
            .optional()
            .default_number(24),
    ]
}

fn structure() -> Vec<FieldSpec> {
    vec![
        FieldSpec::selection(
            "launcher_mode",
            "Launcher Mode",
            &[
                ("icon", "Icon"),
                ("icon_text", "Icon + Text"),
                ("text_icon", "Text + Icon"),
            ],
        )
        .pro()
        .default_text("icon"),
        FieldSpec::selection(
            "launcher_icon",
            "Launcher Icon",
            &[
                ("ep_font_icon_help_dialog", "HD Icon (default)"),
                ("comments-o", "Icon 1 (default)"),
                ("comments", "Icon 2"),
                ("commenting-o", "Icon 3"),
                ("commenting", "Icon 4"),
                ("comment-o", "Icon 5"),
            ],
        )
        .default_text("comments-o"),
        FieldSpec::selection(
            "dialog_initial_visibility",
            "Initial Visibility",
            &[("on", "Opened"), ("off", "Closed")],
        )
        .default_text("off"),
        FieldSpec::selection(
            "launcher_location",
            "Location",
            &[("left", "Left"), ("right", "Right")],
        )
        .default_text("right"),
        FieldSpec::number("launcher_bottom_distance", "Distance from Bottom (px)", 0, 2000)
            .default_number(10),
        FieldSpec::number("launcher_start_wait", "Start Wait (seconds)", 0, 500).default_number(0),
        FieldSpec::selection("initial_message_toggle", "Initial Message", SHOW_HIDE)
            .pro()
            .default_text("hide"),
        FieldSpec::selection(
            "initial_message_mode",
            "Initial Message Mode",
            &[("text", "Text"), ("icon_text", "Text + Icon")],
        )
        .pro()
        .default_text("icon_text"),
        FieldSpec::rich_text("initial_message_text", "Initial Message Text", POST_CONTENT_TAGS)
            .length(0, 300)
            .optional()
            .pro()
            .default_text("Need help?"),
        FieldSpec::text("initial_message_image_url", "Initial Message Image")
            .length(0, 300)
            .optional()
            .pro()
            .default_text("img/kb-icon.png"),
        FieldSpec::selection("launcher_powered_by", "Powered By", SHOW_HIDE).default_text("hide"),
        FieldSpec::selection(
            "search_option",
            "Search",
            &[("show_search", "Show Search"), ("hide_search", "Hide Search")],
        )
        .default_text("show_search"),
        FieldSpec::selection("search_posts", "Search Posts", OFF_ON_PLAIN).default_text("off"),
        // options are populated at runtime from installed knowledge bases
        FieldSpec::selection("search_kb", "Search Knowledge Base", &[])
            .optional()
            .default_text("off"),
        FieldSpec::text("widget_name", "Widget Name")
            .length(1, 100)
            .default_text("Home Page"),
    ]
}

fn features() -> Vec<FieldSpec> {
    vec![
        FieldSpec::selection("display_resource_tab", "Resource Tab", OFF_ON_PLAIN)
            .default_text("on"),
        FieldSpec::selection("resource_phone_toggle", "Phone", OFF_ON_PLAIN).default_text("on"),
        FieldSpec::text("resource_phone_country_code", "Country Code")
            .length(0, 10)
            .optional(),
        FieldSpec::text("resource_phone_number", "Phone Number")
            .length(0, 100)
            .optional(),
        FieldSpec::text("resource_phone_number_image_url", "Phone Image")
            .length(0, 300)
            .optional(),
        FieldSpec::selection("resource_custom_link_toggle", "Custom Link", OFF_ON_PLAIN)
            .default_text("on"),
        FieldSpec::text("resource_custom_link_url", "Custom Link URL")
            .length(0, 300)
            .optional()
            .default_text("https://www.helpdialog.com/"),
        FieldSpec::text("resource_custom_link_image_url", "Custom Link Image")
            .length(0, 300)
            .optional(),
        FieldSpec::selection("display_faqs_tab", "FAQs Tab", OFF_ON).default_text("on"),
        FieldSpec::selection("display_contact_tab", "Contact Tab", OFF_ON).default_text("on"),
        FieldSpec::selection("contact_name_toggle", "Name Field", OFF_ON).default_text("on"),
        FieldSpec::selection("contact_subject_toggle", "Subject Field", OFF_ON).default_text("on"),
        FieldSpec::selection("contact_acceptance_checkbox", "Acceptance Checkbox", OFF_ON)
            .default_text("off"),
        FieldSpec::selection("contact_acceptance_title_toggle", "Acceptance Title", OFF_ON)
            .default_text("off"),
    ]
}

fn tabs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::selection("tabs_position_1", "Tab Position 1", TAB_OPTIONS).default_text("faqs"),
        FieldSpec::selection("tabs_position_2", "Tab Position 2", TAB_OPTIONS).default_text("chat"),
        FieldSpec::selection("tabs_position_3", "Tab Position 3", TAB_OPTIONS)
            .default_text("resource"),
        FieldSpec::selection("tabs_position_4", "Tab Position 4", TAB_OPTIONS)
            .default_text("contact"),
    ]
}

fn colors() -> Vec<FieldSpec> {
    [
        ("back_text_color", "Back Text", "#ffffff"),
        ("back_text_color_hover_color", "Back Text Hover", "#ffffff"),
        ("back_background_color", "Back Background", "#066fc0"),
        ("back_background_color_hover_color", "Back Background Hover", "#066fc0"),
        ("launcher_background_color", "Launcher Background", "#0f4874"),
        ("launcher_background_hover_color", "Launcher Background Hover", "#a5a5a5"),
        ("launcher_icon_color", "Launcher Icon", "#ffffff"),
        ("launcher_icon_hover_color", "Launcher Icon Hover", "#000000"),
        ("background_color", "Background", "#0f4874"),
        ("not_active_tab_color", "Inactive Tab", "#132e59"),
        ("tab_text_color", "Tab Text", "#ffffff"),
        ("main_title_text_color", "Main Title", "#FFFFFF"),
        ("welcome_title_color", "Welcome Title", "#FFFFFF"),
        ("welcome_title_link_color", "Welcome Title Link", "#FFFFFF"),
        ("breadcrumb_color", "Breadcrumb", "#333333"),
        ("breadcrumb_background_color", "Breadcrumb Background", "#e6e6e6"),
        ("breadcrumb_arrow_color", "Breadcrumb Arrow", "#000000"),
        ("faqs_qa_border_color", "Question Border", "#CCCCCC"),
        ("faqs_question_text_color", "Question Text", "#000000"),
        ("faqs_question_background_color", "Question Background", "#f7f7f7"),
        ("faqs_question_active_text_color", "Active Question Text", "#000000"),
        ("faqs_question_active_background_color", "Active Question Background", "#ffffff"),
        ("faqs_answer_text_color", "Answer Text", "#000000"),
        ("faqs_answer_background_color", "Answer Background", "#ffffff"),
        ("found_faqs_article_active_tab_color", "Active Results Tab", "#0f9beb"),
        ("found_faqs_article_tab_color", "Results Tab", "#000000"),
        ("article_post_list_title_color", "Article List Title", "#000000"),
        ("article_post_list_icon_color", "Article List Icon", "#000000"),
        ("single_article_read_more_text_color", "Read More", "#0f9beb"),
        ("single_article_read_more_text_hover_color", "Read More Hover", "#007eed"),
        ("contact_submit_button_color", "Submit Button", "#2D7EBE"),
        ("contact_submit_button_hover_color", "Submit Button Hover", "#4D4986"),
        ("contact_submit_button_text_color", "Submit Button Text", "#ffffff"),
        ("contact_submit_button_text_hover_color", "Submit Button Text Hover", "#ffffff"),
        ("contact_acceptance_background_color", "Acceptance Background", "#ffffff"),
        ("resource_phone_color", "Phone", "#03e78b"),
        ("resource_phone_hover_color", "Phone Hover", "#03e78b"),
        ("resource_label_color", "Resource Label", "#000000"),
        ("resource_link_color", "Resource Link", "#03e78b"),
        ("resource_link_hover_color", "Resource Link Hover", "#03e78b"),
    ]
    .into_iter()
    .map(|(key, label, default)| FieldSpec::color(key, label, default))
    .collect()
}

fn labels() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("launcher_text", "Launcher Text")
            .length(1, 300)
            .pro()
            .default_text("Need help?"),
        FieldSpec::rich_text("welcome_title", "Welcome Title", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("Welcome to Support"),
        FieldSpec::text("contact_us_top_tab", "Contact Tab")
            .length(1, 50)
            .default_text("Contact Us"),
        FieldSpec::text("chat_top_tab", "Chat Tab")
            .length(1, 50)
            .default_text("Chat"),
        FieldSpec::text("chat_welcome_text", "Chat Welcome Text")
            .length(1, 300)
            .default_text(RESOURCES_WELCOME),
        FieldSpec::text("resource_header_top_tab", "Resource Tab")
            .length(1, 50)
            .default_text("Resource"),
        FieldSpec::rich_text("resource_header_title", "Resource Title", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("Welcome to Support"),
        FieldSpec::rich_text("resource_header_sub_title", "Resource Subtitle", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("How can we help you?"),
        FieldSpec::text("resource_welcome_text", "Resource Welcome Text")
            .length(1, 300)
            .default_text(RESOURCES_WELCOME),
        FieldSpec::text("faqs_top_tab", "FAQs Tab")
            .length(1, 50)
            .default_text("FAQs"),
        FieldSpec::rich_text("welcome_text", "Welcome Text", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("How can we help you?"),
        FieldSpec::text("search_input_label", "Search Label")
            .length(1, 50)
            .default_text("Search for an Answer"),
        FieldSpec::text("search_input_placeholder", "Search Placeholder")
            .length(1, 50)
            .default_text("Enter one or two keywords"),
        FieldSpec::text("article_read_more_text", "Read More")
            .length(0, 100)
            .optional()
            .default_text("Read More"),
        FieldSpec::text("search_results_title", "Search Results Title")
            .length(1, 20)
            .default_text("Search Results"),
        FieldSpec::text("breadcrumb_home_text", "Breadcrumb Home")
            .length(1, 20)
            .default_text("Home"),
        FieldSpec::text("breadcrumb_search_result_text", "Breadcrumb Search Results")
            .length(1, 20)
            .default_text("Search Results"),
        FieldSpec::text("breadcrumb_article_text", "Breadcrumb Article")
            .length(1, 20)
            .default_text("Article"),
        FieldSpec::text("found_faqs_tab_text", "Found FAQs Tab")
            .length(1, 50)
            .default_text("FAQs"),
        FieldSpec::text("found_articles_tab_text", "Found Articles Tab")
            .length(1, 50)
            .default_text("Articles"),
        FieldSpec::text("found_posts_tab_text", "Found Posts Tab")
            .length(1, 50)
            .default_text("Posts"),
        FieldSpec::text("no_results_found_title_text", "No Results Title")
            .length(1, 70)
            .default_text("No Matches Found For"),
        FieldSpec::text("protected_article_placeholder_text", "Protected Article Text")
            .length(1, 100)
            .default_text("Article is protected by password"),
        FieldSpec::rich_text("no_results_found_content_html", "No Results Content", POST_CONTENT_TAGS)
            .length(0, 800)
            .optional()
            .default_text(NO_RESULTS_HINTS),
        FieldSpec::text("article_back_button_text", "Back Button")
            .length(0, 50)
            .optional()
            .default_text("Back"),
        FieldSpec::text("search_instruction_text", "Search Instructions")
            .length(0, 120)
            .optional()
            .default_text("Search for your question below"),
        FieldSpec::text("no_result_contact_us_text", "No Results Contact Link")
            .length(0, 70)
            .optional()
            .default_text("Contact Us"),
        FieldSpec::text("contact_user_email_text", "Email Label")
            .length(1, 50)
            .default_text("Email"),
        FieldSpec::rich_text("contact_welcome_title", "Contact Title", LINK_MARKUP_TAGS)
            .length(1, 200)
            .default_text("Welcome to Support"),
        FieldSpec::rich_text("contact_welcome_text", "Contact Text", LINK_MARKUP_TAGS)
            .length(1, 200)
            .default_text("Get in Touch"),
        FieldSpec::text("contact_name_text", "Name Label")
            .length(0, 50)
            .default_text("Name"),
        FieldSpec::text("contact_subject_text", "Subject Label")
            .length(1, 50)
            .default_text("Subject"),
        FieldSpec::text("contact_comment_text", "Comment Label")
            .length(1, 250)
            .default_text("How can we help you?"),
        FieldSpec::text("contact_acceptance_title", "Acceptance Title")
            .length(1, 75)
            .default_text("GDPR Agreement"),
        FieldSpec::rich_text("contact_acceptance_text", "Acceptance Text", LINK_MARKUP_TAGS)
            .length(1, 1000)
            .default_text("I accept the terms and conditions."),
        FieldSpec::text("contact_button_title", "Submit Button")
            .length(1, 50)
            .default_text("Submit"),
        FieldSpec::rich_text("contact_success_message", "Success Message", LINK_TAGS)
            .length(0, 150)
            .optional()
            .default_text("Thank you. We will get back to you soon."),
        FieldSpec::text("resource_phone_label", "Phone Label")
            .length(0, 100)
            .optional()
            .default_text("Phone"),
        FieldSpec::text("resource_custom_link_label", "Custom Link Label")
            .length(0, 100)
            .optional()
            .default_text("Custom Link"),
    ]
}

/// Pre-2.10 resource tab fields, read only by upgrades
fn legacy_channels() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("channel_phone_label", "Phone Label")
            .length(0, 100)
            .optional()
            .default_text("Phone"),
        FieldSpec::text("channel_custom_link_label", "Custom Link Label")
            .length(0, 100)
            .optional()
            .default_text("Custom Link"),
        FieldSpec::text("channel_header_top_tab", "Channels Tab")
            .length(1, 50)
            .default_text("Resource"),
        FieldSpec::rich_text("channel_header_title", "Channels Title", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("Welcome to Chat"),
        FieldSpec::rich_text("channel_header_sub_title", "Channels Subtitle", LINK_MARKUP_TAGS)
            .length(1, 200)
            .optional()
            .default_text("How can we help you?"),
        FieldSpec::color("channel_phone_color", "Phone", "#03e78b"),
        FieldSpec::color("channel_phone_hover_color", "Phone Hover", "#03e78b"),
        FieldSpec::color("channel_label_color", "Channel Label", "#000000"),
        FieldSpec::color("channel_link_color", "Channel Link", "#03e78b"),
        FieldSpec::color("channel_link_hover_color", "Channel Link Hover", "#03e78b"),
        FieldSpec::selection("display_channels_tab", "Channels Tab", OFF_ON_PLAIN)
            .default_text("on"),
        FieldSpec::selection("channel_phone_toggle", "Phone", OFF_ON_PLAIN).default_text("on"),
        FieldSpec::text("channel_phone_country_code", "Country Code")
            .length(0, 10)
            .optional(),
        FieldSpec::text("channel_phone_number", "Phone Number")
            .length(0, 100)
            .optional(),
        FieldSpec::text("channel_phone_number_image_url", "Phone Image")
            .length(0, 300)
            .optional()
            .pro(),
        FieldSpec::selection("channel_custom_link_toggle", "Custom Link", OFF_ON_PLAIN)
            .default_text("on"),
        FieldSpec::text("channel_custom_link_url", "Custom Link URL")
            .length(0, 300)
            .optional()
            .default_text("https://www.helpdialog.com/"),
        FieldSpec::text("channel_custom_link_image_url", "Custom Link Image")
            .length(0, 300)
            .optional()
            .pro(),
    ]
}
