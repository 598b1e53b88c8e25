//! @acp:module "Errors"
//! @acp:summary "Error types for kind inference, rendering and configuration"
//! @acp:domain format
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Errors raised by dataguess"
#[derive(Debug, Error)]
pub enum DataguessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// A truthy `lat`/`lng` member that cannot be read as a coordinate
    #[error("Invalid coordinate in `{field}`: {value}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Unknown kind tag: {0}")]
    UnknownKind(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for dataguess operations
pub type Result<T> = std::result::Result<T, DataguessError>;
