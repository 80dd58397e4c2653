//! Domain service - configuration lifecycle and request resolution

use super::events::{ConfigEvent, EventPublisher};
use super::flags::FeatureFlags;
use super::presets::{
    self, find_color_preset, find_dialog_width_preset, ColorPreset, DialogWidthPreset,
};
use super::repository::{ConfigStore, GLOBAL_RECORD_ID};
use super::resolver::resolve_widget;
use super::schema::{get_default_config, get_field_specs, DEFAULT_WIDGET_ID};
use super::tabs::{active_tab, derive_tab_flags, duplicate_tab_errors};
use super::upgrade::{compare_versions, run_upgrades};
use super::validation::{conform_to_scope, validate_and_sanitize};
use crate::config::Config;
use crate::contract::{
    ConfigRecord, ConfigValue, GlobalConfig, HelpDialogError, RawValues, RequestContext,
    ResolvedWidget, Scope, WidgetConfig,
};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Domain service for help dialog configuration
pub struct Service {
    store: Arc<dyn ConfigStore>,
    flags: Arc<dyn FeatureFlags>,
    event_publisher: Arc<dyn EventPublisher>,
    config: Config,
    /// Serializes read-modify-write sequences against the store
    write_lock: Mutex<()>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        store: Arc<dyn ConfigStore>,
        flags: Arc<dyn FeatureFlags>,
        event_publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        Self {
            store,
            flags,
            event_publisher,
            config,
            write_lock: Mutex::new(()),
        }
    }

    // ===== Widget Operations =====

    /// All widgets ordered by id
    pub async fn list_widgets(&self) -> Result<Vec<WidgetConfig>, HelpDialogError> {
        let records = self
            .store
            .list(Scope::Widget)
            .await
            .map_err(HelpDialogError::storage)?;

        Ok(records
            .into_iter()
            .map(|(_, record)| conformed_widget(&record))
            .collect())
    }

    /// Get a specific widget
    pub async fn get_widget(&self, widget_id: u64) -> Result<WidgetConfig, HelpDialogError> {
        self.store
            .load(Scope::Widget, widget_id)
            .await
            .map_err(HelpDialogError::storage)?
            .map(|record| conformed_widget(&record))
            .ok_or_else(|| HelpDialogError::widget_not_found(widget_id))
    }

    /// Create the default widget on a site that has none
    ///
    /// Also stamps the installed version so a fresh site never runs legacy
    /// upgrades. Returns `None` when widgets already exist.
    pub async fn initial_setup(&self) -> Result<Option<WidgetConfig>, HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        if !self.list_widgets().await?.is_empty() {
            return Ok(None);
        }

        let mut global = self.global_config().await?;
        let version = ConfigValue::text(self.config.plugin_version.as_str());
        if global.record().text("first_plugin_version").is_empty() {
            global.record_mut().set("first_plugin_version", version.clone());
            global.record_mut().set("upgrade_plugin_version", version);
        }
        let last_id = global.last_widget_id().max(DEFAULT_WIDGET_ID);
        global.record_mut().set("last_widget_id", id_value(last_id));

        let mut record = get_default_config(Scope::Widget);
        record.set("widget_id", id_value(DEFAULT_WIDGET_ID));
        self.store_widget(DEFAULT_WIDGET_ID, &record).await?;
        self.store_global(global.record()).await?;

        let widget = WidgetConfig::from_record(record);
        info!(widget_id = DEFAULT_WIDGET_ID, "default widget created");
        self.publish(ConfigEvent::widget_created(DEFAULT_WIDGET_ID, widget.name()))
            .await;
        Ok(Some(widget))
    }

    /// Create a widget from defaults with the next free id
    pub async fn create_widget(&self, name: Option<&str>) -> Result<WidgetConfig, HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        let widgets = self.list_widgets().await?;
        if widgets.len() >= self.config.max_widgets {
            return Err(HelpDialogError::Conflict {
                reason: format!("widget limit of {} reached", self.config.max_widgets),
            });
        }

        let mut global = self.global_config().await?;
        let highest = widgets.iter().map(WidgetConfig::widget_id).max().unwrap_or(0);
        let widget_id = global.last_widget_id().max(highest) + 1;

        let mut record = get_default_config(Scope::Widget);
        if let Some(name) = name {
            let raw = RawValues::new().with("widget_name", name);
            record = validate_and_sanitize(
                Scope::Widget,
                &raw,
                Some(&record),
                self.flags.is_premium_active(),
            )?;
        }
        record.set("widget_id", id_value(widget_id));

        self.store_widget(widget_id, &record).await?;
        global.record_mut().set("last_widget_id", id_value(widget_id));
        self.store_global(global.record()).await?;

        let widget = WidgetConfig::from_record(record);
        info!(widget_id, name = widget.name(), "widget created");
        self.publish(ConfigEvent::widget_created(widget_id, widget.name()))
            .await;
        Ok(widget)
    }

    /// Validate submitted values and store them on an existing widget
    ///
    /// Nothing is stored when any field is rejected.
    pub async fn save_widget(
        &self,
        widget_id: u64,
        mut raw: RawValues,
    ) -> Result<WidgetConfig, HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        let current = self.get_widget(widget_id).await?;
        // ids are assigned by the service only
        raw.remove("widget_id");

        let (record, mut errors) = match validate_and_sanitize(
            Scope::Widget,
            &raw,
            Some(current.record()),
            self.flags.is_premium_active(),
        ) {
            Ok(record) => (record, Vec::new()),
            Err(failure) => (failure.record, failure.errors),
        };
        if self.config.enforce_unique_tabs {
            errors.extend(duplicate_tab_errors(&record));
        }
        if !errors.is_empty() {
            debug!(widget_id, errors = errors.len(), "widget values rejected");
            return Err(HelpDialogError::Validation { errors });
        }

        self.store_widget(widget_id, &record).await?;

        let widget = WidgetConfig::from_record(record);
        info!(widget_id, "widget saved");
        self.publish(ConfigEvent::widget_saved(widget_id, widget.name()))
            .await;
        Ok(widget)
    }

    /// Delete a widget
    pub async fn delete_widget(&self, widget_id: u64) -> Result<(), HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        let widget = self.get_widget(widget_id).await?;
        let existed = self
            .store
            .delete(Scope::Widget, widget_id)
            .await
            .map_err(HelpDialogError::storage)?;
        if !existed {
            return Err(HelpDialogError::widget_not_found(widget_id));
        }

        info!(widget_id, "widget deleted");
        self.publish(ConfigEvent::widget_deleted(widget_id, widget.name()))
            .await;
        Ok(())
    }

    /// Overlay a named color preset onto a stored widget
    pub async fn apply_color_preset(
        &self,
        widget_id: u64,
        preset_id: &str,
    ) -> Result<WidgetConfig, HelpDialogError> {
        if find_color_preset(preset_id).is_none() {
            return Err(HelpDialogError::NotFound {
                resource: "color_preset".to_string(),
                id: preset_id.to_string(),
            });
        }

        let _guard = self.write_lock.lock().await;
        let current = self.get_widget(widget_id).await?;
        let record = presets::apply_color_preset(preset_id, current.record());
        self.store_widget(widget_id, &record).await?;

        let widget = WidgetConfig::from_record(record);
        info!(widget_id, preset = preset_id, "color preset applied");
        self.publish(ConfigEvent::widget_saved(widget_id, widget.name()))
            .await;
        Ok(widget)
    }

    /// Available color presets
    pub fn color_presets(&self) -> &'static [ColorPreset] {
        presets::color_presets()
    }

    // ===== Global Operations =====

    /// Stored global configuration, or defaults before the first save
    pub async fn global_config(&self) -> Result<GlobalConfig, HelpDialogError> {
        let stored = self
            .store
            .load(Scope::Global, GLOBAL_RECORD_ID)
            .await
            .map_err(HelpDialogError::storage)?;
        Ok(GlobalConfig::from_record(conform_to_scope(
            Scope::Global,
            stored.as_ref(),
        )))
    }

    /// Validate submitted values and store them on the global configuration
    ///
    /// Internal fields (version stamps, widget id counter) cannot be submitted.
    pub async fn save_global_config(
        &self,
        mut raw: RawValues,
    ) -> Result<GlobalConfig, HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        for spec in get_field_specs(Scope::Global).values().filter(|s| s.internal) {
            raw.remove(spec.key);
        }
        let current = self.global_config().await?;
        let record = validate_and_sanitize(
            Scope::Global,
            &raw,
            Some(current.record()),
            self.flags.is_premium_active(),
        )?;
        self.store_global(&record).await?;

        info!("global configuration saved");
        self.publish(ConfigEvent::global_saved()).await;
        Ok(GlobalConfig::from_record(record))
    }

    /// Overlay a named dialog width preset onto the global configuration
    pub async fn apply_dialog_width_preset(
        &self,
        preset_id: &str,
    ) -> Result<GlobalConfig, HelpDialogError> {
        if find_dialog_width_preset(preset_id).is_none() {
            return Err(HelpDialogError::NotFound {
                resource: "dialog_width_preset".to_string(),
                id: preset_id.to_string(),
            });
        }

        let _guard = self.write_lock.lock().await;
        let current = self.global_config().await?;
        let record = presets::apply_dialog_width_preset(preset_id, current.record());
        self.store_global(&record).await?;

        info!(preset = preset_id, "dialog width preset applied");
        self.publish(ConfigEvent::global_saved()).await;
        Ok(GlobalConfig::from_record(record))
    }

    /// Available dialog width presets
    pub fn dialog_width_presets(&self) -> &'static [DialogWidthPreset] {
        presets::dialog_width_presets()
    }

    // ===== Rendering =====

    /// Pick the widget to render for a request together with its tab state
    pub async fn resolve_for_request(
        &self,
        context: &RequestContext,
    ) -> Result<Option<ResolvedWidget>, HelpDialogError> {
        let widgets = self.list_widgets().await?;
        let global = self.global_config().await?;
        let chat_available = self.chat_available();

        Ok(resolve_widget(context, &widgets, &global).map(|widget| ResolvedWidget {
            widget: widget.clone(),
            tabs: derive_tab_flags(widget, chat_available),
            active_tab: active_tab(widget, chat_available),
        }))
    }

    /// Chat needs both the premium tier and the chat add-on
    pub fn chat_available(&self) -> bool {
        self.flags.is_premium_active() && self.flags.is_chat_available()
    }

    // ===== Upgrades =====

    /// Migrate stored configuration written by an older version
    ///
    /// Returns the migrations applied; empty when nothing is stored yet or
    /// the stored configuration is current.
    pub async fn upgrade(&self) -> Result<Vec<&'static str>, HelpDialogError> {
        let _guard = self.write_lock.lock().await;

        let Some(stored) = self
            .store
            .load(Scope::Global, GLOBAL_RECORD_ID)
            .await
            .map_err(HelpDialogError::storage)?
        else {
            return Ok(Vec::new());
        };

        let mut global = GlobalConfig::from_record(conform_to_scope(Scope::Global, Some(&stored)));
        let target = self.config.plugin_version.as_str();
        let last_version = match global.upgrade_plugin_version() {
            "" => global.record().text("first_plugin_version").to_string(),
            version => version.to_string(),
        };
        if last_version.is_empty() || compare_versions(&last_version, target) != Ordering::Less {
            return Ok(Vec::new());
        }

        // legacy records are migrated as stored so absent keys stay absent
        let stored_widgets = self
            .store
            .list(Scope::Widget)
            .await
            .map_err(HelpDialogError::storage)?;
        let ids: Vec<u64> = stored_widgets.iter().map(|(id, _)| *id).collect();
        let mut widgets: Vec<WidgetConfig> = stored_widgets
            .into_iter()
            .map(|(_, record)| WidgetConfig::from_record(record))
            .collect();

        let applied = run_upgrades(&last_version, &global, &mut widgets);
        for (id, widget) in ids.into_iter().zip(&widgets) {
            let record = conform_to_scope(Scope::Widget, Some(widget.record()));
            self.store_widget(id, &record).await?;
        }

        global
            .record_mut()
            .set("upgrade_plugin_version", ConfigValue::text(target));
        self.store_global(global.record()).await?;

        info!(from = %last_version, to = target, ?applied, "stored configuration upgraded");
        self.publish(ConfigEvent::upgraded(&last_version, target, &applied))
            .await;
        Ok(applied)
    }

    // ===== Helpers =====

    async fn store_widget(&self, widget_id: u64, record: &ConfigRecord) -> Result<(), HelpDialogError> {
        self.store
            .save(Scope::Widget, widget_id, record)
            .await
            .map_err(HelpDialogError::storage)
    }

    async fn store_global(&self, record: &ConfigRecord) -> Result<(), HelpDialogError> {
        self.store
            .save(Scope::Global, GLOBAL_RECORD_ID, record)
            .await
            .map_err(HelpDialogError::storage)
    }

    async fn publish(&self, event: ConfigEvent) {
        let name = event.name();
        if let Err(e) = self.event_publisher.publish(event).await {
            warn!(event = name, error = %e, "failed to publish configuration event");
        }
    }
}

fn conformed_widget(record: &ConfigRecord) -> WidgetConfig {
    WidgetConfig::from_record(conform_to_scope(Scope::Widget, Some(record)))
}

fn id_value(id: u64) -> ConfigValue {
    ConfigValue::Number(i64::try_from(id).unwrap_or(i64::MAX))
}
