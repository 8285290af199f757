use thiserror::Error;

// =============================================================================
// Demo errors
// =============================================================================

/// Failures a demo call can report. Both are local and non-retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unsupported {selector}: '{value}'")]
    UnsupportedKind { selector: String, value: String },

    #[error("No entry '{key}' in {registry} registry")]
    NotFound { registry: String, key: String },
}

impl PatternError {
    pub fn unsupported(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            selector: selector.into(),
            value: value.into(),
        }
    }

    pub fn not_found(registry: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            registry: registry.into(),
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = PatternError::unsupported("transport kind", "air");
        assert_eq!(err.to_string(), "Unsupported transport kind: 'air'");
    }

    #[test]
    fn test_not_found_message() {
        let err = PatternError::not_found("service", "fax");
        assert_eq!(err.to_string(), "No entry 'fax' in service registry");
    }
}
