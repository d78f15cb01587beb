use std::fmt;

/// A wrapper that keeps a credential out of formatted output.
///
/// The bearer token read from the `authorization` header travels through the
/// encoder as a `Secret<String>`. It has to end up in the payload JSON, so the
/// value is reachable through [`expose_secret`](Self::expose_secret), but
/// `Debug` and `Display` always print `[REDACTED]`. A `RequestSnapshot` can
/// therefore be logged with `{:?}` without leaking the token.
///
/// # Examples
///
/// ```
/// use experiment_payload::Secret;
///
/// let token = Secret::new("eyJhbGciOi".to_string());
///
/// assert_eq!(format!("{:?}", token), "[REDACTED]");
/// assert_eq!(format!("{}", token), "[REDACTED]");
/// assert_eq!(token.expose_secret(), "eyJhbGciOi");
/// ```
// Do NOT derive Debug or Display: both must stay redacted.
// Do NOT derive Clone or Default: copies go through expose_secret() explicitly.
pub struct Secret<T> {
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the wrapped value.
    ///
    /// Only the JSON builder should need this. Do not pass the result to a logger.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
