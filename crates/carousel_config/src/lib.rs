//! Configuration core for Splide carousel widgets.
//!
//! This crate owns the typed carousel configuration schema and everything
//! that feeds it: coercion of raw admin-form values, the structured
//! sub-builders (ordered item lists, view-mode maps, breakpoint tables,
//! class/i18n override tables), the options compiler that produces the
//! payload handed to the client-side widget, the semantics/accessibility
//! rule engine, and cross-field validation.
//!
//! Storage is behind the [`ConfigStore`] trait; this crate performs no I/O
//! of its own apart from what a store implementation does.

// Configuration schema
pub mod config;
pub mod content;
pub mod options;

// Value coercion and structured sub-builders
pub mod breakpoints;
pub mod builders;
pub mod coerce;
pub mod overrides;

// Options compilation and rules
pub mod compiler;
pub mod semantics;
pub mod validator;

// Form normalization and persistence
pub mod admin;
pub mod form;
pub mod memory_store;
pub mod store;

// Error and validation infrastructure
pub mod errors;
pub mod validation;

// Re-export for convenient access
pub use admin::CarouselAdmin;
pub use breakpoints::{BreakpointInput, BreakpointRow};
pub use coerce::coerce;
pub use compiler::compile_options;
pub use config::{CarouselConfig, CarouselOptions};
pub use content::{
    ContentSource, ContentSpec, FormattedText, ItemRef, NodeContent, Semantics, ViewsContent,
};
pub use errors::{ConfigError, ConfigResult};
pub use form::{
    normalize_submission, ContentInput, FormSubmission, NodeInput, NormalizedCarousel,
    OptionsInput, ViewsInput,
};
pub use overrides::{default_class, CLASS_SLOTS, I18N_KEYS};
pub use memory_store::MemoryConfigStore;
pub use options::{OptionGroup, OptionsSpec};
pub use store::ConfigStore;
pub use validation::{ValidationError, ValidationErrorType, ValidationResult, ValidationWarning};
pub use validator::validate_config;
