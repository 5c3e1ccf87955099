//! Error types for cloudtmpl
//!
//! Validation failures are ordinary, recoverable values: they abort the
//! command being checked, never the process.

use std::io;
use thiserror::Error;

/// Result type alias for cloudtmpl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cloudtmpl
#[derive(Error, Debug)]
pub enum Error {
    /// No definition is registered under the key
    #[error("Unknown definition: {key}")]
    UnknownDefinition {
        /// Lookup key (`action` + `entity`)
        key: String,
    },

    /// Entity token outside the closed vocabulary
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Action token not recognized
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// API namespace not recognized
    #[error("Unknown API namespace: {0}")]
    UnknownApi(String),

    /// Required parameters absent from a command
    #[error("Missing required parameters for {key}: {}", .params.join(", "))]
    MissingRequiredParameters {
        /// Definition key
        key: String,
        /// Missing parameter names, in declaration order
        params: Vec<String>,
    },

    /// Supplied parameters that the definition does not accept
    #[error("Unrecognized parameters for {key}: {}", .params.join(", "))]
    UnrecognizedParameters {
        /// Definition key
        key: String,
        /// Offending parameter names
        params: Vec<String>,
    },

    /// Registry integrity problem
    #[error("Registry error: {0}")]
    Registry(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error carrying a "did you mean" hint
    #[error("{source} (did you mean '{hint}'?)")]
    Hinted {
        /// Suggested replacement
        hint: String,
        /// Source error
        source: Box<Error>,
    },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// Error context
        context: String,
        /// Source error
        source: Box<Error>,
    },

    /// Multiple errors
    #[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<Error>),
}

impl Error {
    /// Add context to an error
    pub fn context<S: Into<String>>(self, context: S) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Attach a suggested replacement to an error
    pub fn with_hint<S: Into<String>>(self, hint: S) -> Self {
        Error::Hinted {
            hint: hint.into(),
            source: Box::new(self),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Create a registry integrity error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Error::Registry(message.into())
    }

    /// Create an unknown definition error
    pub fn unknown_definition<S: Into<String>>(key: S) -> Self {
        Error::UnknownDefinition { key: key.into() }
    }

    /// Collapse a list of errors: none is `Ok`, one is itself, more is `Multiple`
    pub fn from_many(mut errors: Vec<Error>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Error::Multiple(errors)),
        }
    }

    /// Check if error is a user-triggerable validation outcome
    pub fn is_validation(&self) -> bool {
        match self {
            Error::UnknownDefinition { .. }
            | Error::UnknownEntity(_)
            | Error::UnknownAction(_)
            | Error::UnknownApi(_)
            | Error::MissingRequiredParameters { .. }
            | Error::UnrecognizedParameters { .. } => true,
            Error::WithContext { source, .. } | Error::Hinted { source, .. } => {
                source.is_validation()
            }
            Error::Multiple(errors) => {
                !errors.is_empty() && errors.iter().all(Error::is_validation)
            }
            _ => false,
        }
    }

    /// Check if error is fatal (should stop the process)
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Registry(_) => true,
            Error::WithContext { source, .. } | Error::Hinted { source, .. } => source.is_fatal(),
            Error::Multiple(errors) => errors.iter().any(Error::is_fatal),
            _ => false,
        }
    }

    /// Flatten nested `Multiple` errors into a single list
    pub fn flatten(self) -> Vec<Error> {
        match self {
            Error::Multiple(errors) => errors.into_iter().flat_map(Error::flatten).collect(),
            other => vec![other],
        }
    }
}

/// Trait for adding context to results
pub trait ResultExt<T> {
    /// Add context to the error
    fn context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (only called on error)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let err = Error::UnknownEntity("wormhole".to_string());
        let err_with_context = err.context("validating command");
        assert!(matches!(err_with_context, Error::WithContext { .. }));
        assert!(err_with_context.is_validation());
    }

    #[test]
    fn test_hint_display() {
        let err = Error::UnknownEntity("instnace".to_string()).with_hint("instance");
        assert_eq!(
            err.to_string(),
            "Unknown entity: instnace (did you mean 'instance'?)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_validation_errors_are_not_fatal() {
        let err = Error::MissingRequiredParameters {
            key: "createtag".to_string(),
            params: vec!["key".to_string(), "value".to_string()],
        };
        assert!(err.is_validation());
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Missing required parameters for createtag: key, value"
        );
    }

    #[test]
    fn test_registry_error_is_fatal() {
        assert!(Error::registry("duplicate key").is_fatal());
        assert!(!Error::registry("duplicate key").is_validation());
    }

    #[test]
    fn test_from_many() {
        assert!(Error::from_many(vec![]).is_ok());

        let single = Error::from_many(vec![Error::UnknownEntity("x".into())]);
        assert!(matches!(single, Err(Error::UnknownEntity(_))));

        let many = Error::from_many(vec![
            Error::UnknownEntity("x".into()),
            Error::UnknownAction("y".into()),
        ]);
        match many {
            Err(Error::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_flatten_nested() {
        let nested = Error::Multiple(vec![
            Error::UnknownEntity("a".into()),
            Error::Multiple(vec![
                Error::UnknownEntity("b".into()),
                Error::UnknownEntity("c".into()),
            ]),
        ]);
        assert_eq!(nested.flatten().len(), 3);
    }
}
