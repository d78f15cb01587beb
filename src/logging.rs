use std::fmt;

/// Request-scoped logger.
///
/// Every message carries the URL of the request being encoded as a
/// structured `request_url` field. Tokens must only be passed through
/// [`Secret`](crate::Secret), whose formatting is redacted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLog<'a> {
    request_url: &'a str,
}

impl<'a> RequestLog<'a> {
    /// Creates a logger for the given request URL.
    ///
    /// Use an empty string when no request is available.
    pub(crate) fn new(request_url: &'a str) -> Self {
        Self { request_url }
    }

    /// Logs a debug-level message.
    pub(crate) fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_url = %self.request_url, "{}", args);
    }
}
