use thiserror::Error;

/// Main error type for the tailwind-catalog crate
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown utility {name} in category {category}")]
    UnknownUtility { category: String, name: String },

    #[error("Unknown breakpoint: {0} (expected one of sm, md, lg, xl, 2xl)")]
    UnknownBreakpoint(String),

    #[error("Unknown state variant: {0} (expected one of hover, focus, active, dark, disabled)")]
    UnknownStateVariant(String),

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("Missing utility for modifier {prefix}:")]
    MissingUtility { prefix: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
