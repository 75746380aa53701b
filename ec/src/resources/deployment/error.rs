use tfplug::types::{AttributePath, Diagnostic};
use thiserror::Error;

/// Failure to map `ec_deployment` state into an API request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpandError {
    /// A required top level field is missing or malformed
    #[error("validation error: {0}")]
    Validation(String),

    /// A nested field is malformed
    #[error("invalid value at '{path}': {message}")]
    SchemaValidation {
        path: AttributePath,
        message: String,
    },

    /// A product references an Elasticsearch cluster that is not part of the deployment
    #[error("unresolved dependency at '{path}': {message}")]
    Dependency {
        path: AttributePath,
        message: String,
    },
}

impl ExpandError {
    pub fn schema(path: AttributePath, message: impl Into<String>) -> Self {
        ExpandError::SchemaValidation {
            path,
            message: message.into(),
        }
    }

    pub fn dependency(path: AttributePath, message: impl Into<String>) -> Self {
        ExpandError::Dependency {
            path,
            message: message.into(),
        }
    }

    /// Attribute the error points at, if any
    pub fn path(&self) -> Option<&AttributePath> {
        match self {
            ExpandError::Validation(_) => None,
            ExpandError::SchemaValidation { path, .. } | ExpandError::Dependency { path, .. } => {
                Some(path)
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let summary = match self {
            ExpandError::Validation(_) => "Invalid deployment",
            ExpandError::SchemaValidation { .. } => "Invalid deployment attribute",
            ExpandError::Dependency { .. } => "Unresolved deployment reference",
        };
        let diagnostic = Diagnostic::error(summary, self.to_string());
        match self.path() {
            Some(path) => diagnostic.with_attribute(path.clone()),
            None => diagnostic,
        }
    }
}
