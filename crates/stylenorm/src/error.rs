//! Error types for the validation engine.
//!
//! Only programmer/config mistakes surface as [`Error`]; everything a style
//! author can get wrong is reported as data (see
//! [`ValidationResult`](crate::grammar::ValidationResult)) and never as `Err`.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A property-limit override pattern is malformed.
    #[error("Invalid property-limit pattern '{pattern}': {message}")]
    InvalidLimitPattern { pattern: String, message: String },

    /// A property-limit override does not describe a usable rule.
    #[error("Invalid property-limit for '{pattern}': {message}")]
    InvalidLimitRule { pattern: String, message: String },

    /// A grammar-table entry is not a valid rule.
    #[error("Invalid grammar rule for property '{property}': {message}")]
    InvalidRule { property: String, message: String },
}

impl Error {
    /// Create an invalid-pattern error.
    pub fn invalid_limit_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLimitPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-limit error.
    pub fn invalid_limit_rule(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLimitRule {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-rule error.
    pub fn invalid_rule(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            property: property.into(),
            message: message.into(),
        }
    }
}
