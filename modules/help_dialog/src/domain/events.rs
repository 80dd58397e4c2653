/// Domain events for the help dialog configuration
///
/// Events are published after a change has been stored. Publishing failures
/// are logged by the service and never undo the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration change events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ConfigEvent {
    /// Widget was created from defaults
    WidgetCreated(WidgetEvent),
    /// Widget values were saved
    WidgetSaved(WidgetEvent),
    /// Widget was deleted
    WidgetDeleted(WidgetEvent),
    /// Global configuration was saved
    GlobalSaved(EventMeta),
    /// Stored configuration was migrated
    Upgraded(UpgradedEvent),
}

/// Common event metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Unique event id
    pub event_id: Uuid,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl EventMeta {
    fn now() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// Event data for widget changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetEvent {
    pub widget_id: u64,
    pub widget_name: String,
    #[serde(flatten)]
    pub meta: EventMeta,
}

/// Event data for configuration upgrades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradedEvent {
    /// Version the stored configuration was written by
    pub from_version: String,
    /// Version it now conforms to
    pub to_version: String,
    /// Migrations applied, oldest first
    pub migrations: Vec<String>,
    #[serde(flatten)]
    pub meta: EventMeta,
}

impl ConfigEvent {
    pub fn widget_created(widget_id: u64, widget_name: &str) -> Self {
        Self::WidgetCreated(WidgetEvent::new(widget_id, widget_name))
    }

    pub fn widget_saved(widget_id: u64, widget_name: &str) -> Self {
        Self::WidgetSaved(WidgetEvent::new(widget_id, widget_name))
    }

    pub fn widget_deleted(widget_id: u64, widget_name: &str) -> Self {
        Self::WidgetDeleted(WidgetEvent::new(widget_id, widget_name))
    }

    pub fn global_saved() -> Self {
        Self::GlobalSaved(EventMeta::now())
    }

    pub fn upgraded(from_version: &str, to_version: &str, migrations: &[&str]) -> Self {
        Self::Upgraded(UpgradedEvent {
            from_version: from_version.to_string(),
            to_version: to_version.to_string(),
            migrations: migrations.iter().map(|m| m.to_string()).collect(),
            meta: EventMeta::now(),
        })
    }

    /// Snake case event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::WidgetCreated(_) => "widget_created",
            Self::WidgetSaved(_) => "widget_saved",
            Self::WidgetDeleted(_) => "widget_deleted",
            Self::GlobalSaved(_) => "global_saved",
            Self::Upgraded(_) => "upgraded",
        }
    }
}

impl WidgetEvent {
    fn new(widget_id: u64, widget_name: &str) -> Self {
        Self {
            widget_id,
            widget_name: widget_name.to_string(),
            meta: EventMeta::now(),
        }
    }
}

/// Event publisher trait for configuration events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one event
    async fn publish(&self, event: ConfigEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: ConfigEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}
