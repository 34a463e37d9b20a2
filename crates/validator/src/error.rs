//! Crate-level errors.
//!
//! Validator failures are data ([`ValidationError`](crate::foundation::ValidationError));
//! this type covers the things that can go wrong while *building* validators
//! or selecting a model.

/// Errors raised while configuring validators or looking up models.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A pattern validator was given a regex that does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern text.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// A model name did not match any declared model.
    #[error("unknown model `{0}` (expected assertion, badge or issuer)")]
    UnknownModel(String),
}

/// Result alias for fallible construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_display() {
        let err = Error::UnknownModel("widget".into());
        assert_eq!(
            err.to_string(),
            "unknown model `widget` (expected assertion, badge or issuer)"
        );
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern `(`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
