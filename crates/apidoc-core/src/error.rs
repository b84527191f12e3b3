//! Render errors

use thiserror::Error;

/// Result alias used throughout the pipeline
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that abort a render
///
/// Every variant is fatal to the render that raised it; no partial document
/// is produced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot resolve package '{package}'")]
    Unresolvable {
        package: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("malformed symbol model: duplicate example key '{0}'")]
    DuplicateExample(String),

    #[error("malformed symbol model: duplicate anchor id '{0}'")]
    DuplicateAnchor(String),

    #[error("malformed symbol model: empty {0} name")]
    EmptyName(&'static str),

    #[error("failed to write document: {0}")]
    Sink(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_identifier() {
        let err = RenderError::DuplicateAnchor("Push".to_string());
        assert_eq!(err.to_string(), "malformed symbol model: duplicate anchor id 'Push'");

        let err = RenderError::DuplicateExample("Stack_".to_string());
        assert!(err.to_string().contains("'Stack_'"));
    }

    #[test]
    fn test_unresolvable_keeps_source() {
        let err = RenderError::Unresolvable {
            package: "net/http".to_string(),
            source: "no model file".into(),
        };
        assert_eq!(err.to_string(), "cannot resolve package 'net/http'");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "no model file");
    }
}
