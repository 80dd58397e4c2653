//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models, error types and the native
//! client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::HelpDialogApi;
pub use error::{FieldError, FieldErrorKind, HelpDialogError, SchemaError, ValidationFailure};
pub use model::{
    ConfigRecord, ConfigValue, FieldKind, FieldSpec, GlobalConfig, PageFiltering, PageKind,
    RawValue, RawValues, RequestContext, ResolvedWidget, Scope, TabFlags, TabId, WidgetConfig,
    WidgetStatus, HOME_PAGE_ID, TAB_POSITION_KEYS,
};
