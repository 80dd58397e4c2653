//! Help Dialog Module
//!
//! Configuration core of an embeddable help dialog: typed field schemas for
//! global, widget and notification rule settings, validation and sanitizing of
//! submitted values, presets, and resolution of the widget to render for a
//! page request.

// Public exports
pub mod contract;
pub use contract::{
    client::HelpDialogApi, error::HelpDialogError, ConfigRecord, ConfigValue, FieldError,
    FieldErrorKind, FieldKind, FieldSpec, GlobalConfig, PageKind, RawValue, RawValues,
    RequestContext, ResolvedWidget, Scope, TabFlags, TabId, WidgetConfig,
};

pub mod module;
pub use module::HelpDialogModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
