use crate::Secret;

/// The values read from one incoming request.
///
/// Built once per request by [`RequestDataEncoder`](crate::RequestDataEncoder)
/// and discarded after the payload is produced. Every field defaults to the
/// empty string when its source is missing.
#[derive(Debug)]
pub struct RequestSnapshot {
    /// Token from the `authorization` header
    pub auth_token: Secret<String>,
    /// Value of the `referer` header
    pub origin: String,
    /// Path of the requested page, possibly externalized
    pub page_url: String,
    /// Organization id from repository configuration
    pub org_id: String,
}

impl RequestSnapshot {
    /// Creates a snapshot from already-extracted values.
    pub fn new(
        auth_token: impl Into<String>,
        org_id: impl Into<String>,
        origin: impl Into<String>,
        page_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_token: Secret::new(auth_token.into()),
            origin: origin.into(),
            page_url: page_url.into(),
            org_id: org_id.into(),
        }
    }
}

impl Clone for RequestSnapshot {
    fn clone(&self) -> Self {
        Self {
            auth_token: Secret::new(self.auth_token.expose_secret().clone()),
            origin: self.origin.clone(),
            page_url: self.page_url.clone(),
            org_id: self.org_id.clone(),
        }
    }
}

impl Default for RequestSnapshot {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}
