//! Domain layer - schema engine, widget resolution and services

pub mod events;
pub mod flags;
pub mod markup;
pub mod presets;
pub mod repository;
pub mod resolver;
pub mod schema;
pub mod service;
pub mod tabs;
pub mod upgrade;
pub mod validation;
pub mod wildcard;

pub use events::{ConfigEvent, EventPublisher, NoOpEventPublisher};
pub use flags::{FeatureFlags, StaticFeatureFlags};
pub use repository::ConfigStore;
pub use service::Service;
