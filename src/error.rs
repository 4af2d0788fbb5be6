//! Error types for plugin output formatting.

/// Errors returned by the formatting and lookup helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NagError {
    #[error("invalid severity: '{0}'")]
    InvalidSeverity(String),

    #[error("cannot render empty {list} list")]
    EmptyList { list: &'static str },

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("rounding {value} to {places} places leaves the f64 range")]
    NumericOverflow { value: f64, places: i32 },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, NagError>;
