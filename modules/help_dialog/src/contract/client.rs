//! Native client trait for inter-module communication
//!
//! This trait defines the API that the rendering and admin layers use to
//! interact with the help dialog configuration core.
//! NO HTTP - direct function calls.

use super::{
    error::HelpDialogError,
    model::{GlobalConfig, RawValues, RequestContext, ResolvedWidget, WidgetConfig},
};
use async_trait::async_trait;

/// Help dialog API for inter-module communication
#[async_trait]
pub trait HelpDialogApi: Send + Sync {
    // ===== Widget Operations =====

    /// List all widgets in configuration order
    async fn list_widgets(&self) -> Result<Vec<WidgetConfig>, HelpDialogError>;

    /// Get a specific widget
    async fn get_widget(&self, widget_id: u64) -> Result<WidgetConfig, HelpDialogError>;

    /// Create a widget from defaults
    async fn create_widget(&self, name: Option<&str>) -> Result<WidgetConfig, HelpDialogError>;

    /// Validate submitted values and store them on an existing widget
    async fn save_widget(
        &self,
        widget_id: u64,
        raw: RawValues,
    ) -> Result<WidgetConfig, HelpDialogError>;

    /// Delete a widget
    async fn delete_widget(&self, widget_id: u64) -> Result<(), HelpDialogError>;

    /// Overlay a named color preset onto a widget
    async fn apply_color_preset(
        &self,
        widget_id: u64,
        preset_id: &str,
    ) -> Result<WidgetConfig, HelpDialogError>;

    // ===== Global Operations =====

    /// Get the site-wide configuration
    async fn global_config(&self) -> Result<GlobalConfig, HelpDialogError>;

    /// Validate submitted values and store them on the global configuration
    async fn save_global_config(&self, raw: RawValues) -> Result<GlobalConfig, HelpDialogError>;

    /// Overlay a named dialog width preset onto the global configuration
    async fn apply_dialog_width_preset(
        &self,
        preset_id: &str,
    ) -> Result<GlobalConfig, HelpDialogError>;

    // ===== Rendering =====

    /// Pick the widget to render for a request
    async fn resolve_for_request(
        &self,
        context: &RequestContext,
    ) -> Result<Option<ResolvedWidget>, HelpDialogError>;
}
