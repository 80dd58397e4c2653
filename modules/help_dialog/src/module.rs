//! Module declaration and lifecycle

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::HelpDialogApi;
use crate::domain::{
    ConfigStore, EventPublisher, NoOpEventPublisher, Service, StaticFeatureFlags,
};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Help dialog module
///
/// Owns the domain service once initialized and hands out native clients.
pub struct HelpDialogModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for HelpDialogModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl HelpDialogModule {
    /// Build the service, create the default widget on a fresh site and
    /// migrate configuration stored by an older version
    pub async fn init(&self, config: Config, store: Arc<dyn ConfigStore>) -> Result<()> {
        self.init_with_publisher(config, store, Arc::new(NoOpEventPublisher))
            .await
    }

    pub async fn init_with_publisher(
        &self,
        config: Config,
        store: Arc<dyn ConfigStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<()> {
        let flags = Arc::new(StaticFeatureFlags::from_config(&config));
        *self.config.write() = config.clone();

        let service = Arc::new(Service::new(store, flags, event_publisher, config));
        let applied = service.upgrade().await?;
        let created = service.initial_setup().await?;
        *self.service.write() = Some(service);

        tracing::info!(
            migrations = applied.len(),
            default_widget_created = created.is_some(),
            "Help dialog module initialized"
        );
        Ok(())
    }

    /// Initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Result<Arc<dyn HelpDialogApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }
}
