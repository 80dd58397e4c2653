//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    GlobalConfig, HelpDialogApi, HelpDialogError, RawValues, RequestContext, ResolvedWidget,
    WidgetConfig,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used by the rendering and admin layers running in the same process.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl HelpDialogApi for NativeClient {
    async fn list_widgets(&self) -> Result<Vec<WidgetConfig>, HelpDialogError> {
        self.service.list_widgets().await
    }

    async fn get_widget(&self, widget_id: u64) -> Result<WidgetConfig, HelpDialogError> {
        self.service.get_widget(widget_id).await
    }

    async fn create_widget(&self, name: Option<&str>) -> Result<WidgetConfig, HelpDialogError> {
        self.service.create_widget(name).await
    }

    async fn save_widget(
        &self,
        widget_id: u64,
        raw: RawValues,
    ) -> Result<WidgetConfig, HelpDialogError> {
        self.service.save_widget(widget_id, raw).await
    }

    async fn delete_widget(&self, widget_id: u64) -> Result<(), HelpDialogError> {
        self.service.delete_widget(widget_id).await
    }

    async fn apply_color_preset(
        &self,
        widget_id: u64,
        preset_id: &str,
    ) -> Result<WidgetConfig, HelpDialogError> {
        self.service.apply_color_preset(widget_id, preset_id).await
    }

    async fn global_config(&self) -> Result<GlobalConfig, HelpDialogError> {
        self.service.global_config().await
    }

    async fn save_global_config(&self, raw: RawValues) -> Result<GlobalConfig, HelpDialogError> {
        self.service.save_global_config(raw).await
    }

    async fn apply_dialog_width_preset(
        &self,
        preset_id: &str,
    ) -> Result<GlobalConfig, HelpDialogError> {
        self.service.apply_dialog_width_preset(preset_id).await
    }

    async fn resolve_for_request(
        &self,
        context: &RequestContext,
    ) -> Result<Option<ResolvedWidget>, HelpDialogError> {
        self.service.resolve_for_request(context).await
    }
}
