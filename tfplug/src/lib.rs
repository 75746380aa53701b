//! tfplug - Terraform plugin value model for Rust
//!
//! The subset of the plugin framework a provider's mapping code touches:
//! dynamic configuration/state values, typed access over attribute paths,
//! and diagnostics reported back to Terraform.

pub mod error;
pub mod types;

pub use error::{Result, TfplugError};
pub use types::{
    AttributePath, AttributePathStep, Diagnostic, DiagnosticSeverity, Dynamic, DynamicValue,
};
