//! Link externalization.
//!
//! Resolves a repository-internal content path to an absolute public URL for a
//! named environment (for example `publish`). The host framework usually owns
//! this service; the crate only needs the [`Externalizer`] seam.

use std::collections::HashMap;

use url::Url;

use crate::Error;

/// Produces an absolute URL for a content path in a named environment.
///
/// Implemented for any `Fn(&str, &str) -> Result<String, Error>`, so a host can
/// pass a closure over its own link service.
///
/// # Examples
///
/// ```
/// use experiment_payload::{Error, Externalizer};
///
/// let externalizer = |environment: &str, path: &str| -> Result<String, Error> {
///     Ok(format!("https://{}.example.com{}", environment, path))
/// };
///
/// assert_eq!(
///     externalizer.externalize("publish", "/content/page").unwrap(),
///     "https://publish.example.com/content/page"
/// );
/// ```
pub trait Externalizer {
    /// Returns the absolute URL for `path` in `environment`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when no link can be produced. Callers in this crate
    /// fall back to the un-externalized path.
    fn externalize(&self, environment: &str, path: &str) -> Result<String, Error>;
}

impl<F> Externalizer for F
where
    F: Fn(&str, &str) -> Result<String, Error>,
{
    fn externalize(&self, environment: &str, path: &str) -> Result<String, Error> {
        self(environment, path)
    }
}

/// Externalizer backed by a fixed base URL per environment.
///
/// The path is appended to the base as-is, so the link always stays on the
/// configured host and under the base's own path. Paths starting with `//`
/// and `..` segments are not resolved.
///
/// # Examples
///
/// ```
/// use experiment_payload::{EnvironmentExternalizer, Externalizer};
///
/// let externalizer = EnvironmentExternalizer::new()
///     .with_environment("publish", "https://www.example.com/site/")
///     .expect("valid base url");
///
/// let link = externalizer.externalize("publish", "/content/page").unwrap();
/// assert_eq!(link, "https://www.example.com/site/content/page");
///
/// assert!(externalizer.externalize("author", "/content/page").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentExternalizer {
    /// Serialized base URLs, without a trailing `/`
    bases: HashMap<String, String>,
}

impl EnvironmentExternalizer {
    /// Creates an externalizer with no environments registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the base URL for an environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Externalization`] if `base` is not an absolute URL, or
    /// if it carries a query or fragment that a path could not follow.
    pub fn with_environment(
        mut self,
        environment: impl Into<String>,
        base: &str,
    ) -> Result<Self, Error> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() || base.query().is_some() || base.fragment().is_some() {
            return Err(Error::externalization(format!(
                "base url '{}' cannot take a path",
                base
            )));
        }

        let base = base.as_str().trim_end_matches('/').to_string();
        self.bases.insert(environment.into(), base);
        Ok(self)
    }
}

impl Externalizer for EnvironmentExternalizer {
    fn externalize(&self, environment: &str, path: &str) -> Result<String, Error> {
        let base = self
            .bases
            .get(environment)
            .ok_or_else(|| Error::UnknownEnvironment {
                environment: environment.to_string(),
            })?;

        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publish() -> EnvironmentExternalizer {
        EnvironmentExternalizer::new()
            .with_environment("publish", "https://publish.example.com")
            .unwrap()
    }

    #[test]
    fn resolves_path_against_base() {
        let link = publish().externalize("publish", "/content/wknd/us/en").unwrap();
        assert_eq!(link, "https://publish.example.com/content/wknd/us/en");
    }

    #[test]
    fn base_path_is_kept() {
        for base in ["https://cdn.example.com/site", "https://cdn.example.com/site/"] {
            let externalizer = EnvironmentExternalizer::new()
                .with_environment("publish", base)
                .unwrap();

            let link = externalizer.externalize("publish", "/content/page").unwrap();
            assert_eq!(link, "https://cdn.example.com/site/content/page");
        }
    }

    #[test]
    fn scheme_relative_path_stays_on_base_host() {
        let link = publish().externalize("publish", "//evil.com/content/page").unwrap();
        assert_eq!(link, "https://publish.example.com//evil.com/content/page");

        let parsed = Url::parse(&link).unwrap();
        assert_eq!(parsed.host_str(), Some("publish.example.com"));
    }

    #[test]
    fn backslash_path_stays_on_base_host() {
        let link = publish().externalize("publish", "/\\evil.com/page").unwrap();

        let parsed = Url::parse(&link).unwrap();
        assert_eq!(parsed.host_str(), Some("publish.example.com"));
    }

    #[test]
    fn dot_segments_are_not_collapsed() {
        let link = publish().externalize("publish", "/content/a/../b").unwrap();
        assert_eq!(link, "https://publish.example.com/content/a/../b");
    }

    #[test]
    fn relative_and_empty_paths_get_separator() {
        assert_eq!(
            publish().externalize("publish", "content/page").unwrap(),
            "https://publish.example.com/content/page"
        );
        assert_eq!(publish().externalize("publish", "").unwrap(), "https://publish.example.com/");
    }

    #[test]
    fn base_with_query_is_rejected() {
        let result =
            EnvironmentExternalizer::new().with_environment("publish", "https://a.example.com/?x=1");
        assert!(matches!(result, Err(Error::Externalization(_))));

        let result = EnvironmentExternalizer::new().with_environment("publish", "mailto:a@b.c");
        assert!(matches!(result, Err(Error::Externalization(_))));
    }

    #[test]
    fn unknown_environment_is_error() {
        let err = publish().externalize("preview", "/content/page").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownEnvironment {
                environment: "preview".to_string()
            }
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let result = EnvironmentExternalizer::new().with_environment("publish", "/not/absolute");
        assert!(matches!(result, Err(Error::Externalization(_))));
    }

    #[test]
    fn closure_is_an_externalizer() {
        let failing = |_: &str, _: &str| -> Result<String, Error> {
            Err(Error::externalization("service unavailable"))
        };
        assert!(failing.externalize("publish", "/x").is_err());
    }
}
