use std::fmt;

/// Errors produced while building an experiment payload.
///
/// None of these reach the caller of [`RequestDataEncoder`](crate::RequestDataEncoder):
/// the encoder maps each one to its documented default at the point of use.
/// They exist so that pluggable pieces such as an [`Externalizer`](crate::Externalizer)
/// can report failure with a typed `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No base URL is registered for the requested environment
    UnknownEnvironment {
        /// The environment name that was looked up
        environment: String,
    },
    /// The externalization service failed to produce a link
    Externalization(String),
}

impl Error {
    /// Creates an externalization error with the given message.
    pub fn externalization(message: impl Into<String>) -> Self {
        Error::Externalization(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEnvironment { environment } => {
                write!(f, "No externalizer base for environment '{}'", environment)
            }
            Error::Externalization(message) => write!(f, "Externalization failed: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Externalization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_environment() {
        let err = Error::UnknownEnvironment {
            environment: "stage".to_string(),
        };
        assert_eq!(err.to_string(), "No externalizer base for environment 'stage'");
    }

    #[test]
    fn url_parse_error_maps_to_externalization() {
        let err: Error = url::ParseError::EmptyHost.into();
        assert!(matches!(err, Error::Externalization(_)));
    }
}
