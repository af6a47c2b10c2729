//! Error types for settings-registry

use thiserror::Error;

/// Result type alias for settings-registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for settings-registry
///
/// Every variant describes a declaration defect in module wiring, not a
/// transient condition. Callers are expected to surface them at startup.
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Declaration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid declaration for '{namespace}.{key}': {reason}")]
    InvalidDeclaration {
        namespace: String,
        key: String,
        reason: String,
    },

    #[error("Unsupported property variant: {0}")]
    UnsupportedPropertyVariant(String),

    #[error("Duplicate key '{key}' in namespace '{namespace}'")]
    DuplicateKeyInNamespace { namespace: String, key: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize settings metadata: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidDeclaration`] for the given property coordinates
    pub(crate) fn invalid(
        namespace: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidDeclaration {
            namespace: namespace.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while registering declarations
    #[must_use]
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDeclaration { .. }
                | Error::UnsupportedPropertyVariant(_)
                | Error::DuplicateKeyInNamespace { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_error_classification() {
        assert!(Error::invalid("bot", "amount", "step must be positive").is_declaration_error());
        assert!(Error::UnsupportedPropertyVariant("slider".into()).is_declaration_error());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!Error::from(json_err).is_declaration_error());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::DuplicateKeyInNamespace {
            namespace: "bot".into(),
            key: "amount".into(),
        };
        assert_eq!(err.to_string(), "Duplicate key 'amount' in namespace 'bot'");

        let err = Error::invalid("bot", "amount", "min (5) is greater than max (1)");
        assert_eq!(
            err.to_string(),
            "Invalid declaration for 'bot.amount': min (5) is greater than max (1)"
        );
    }
}
