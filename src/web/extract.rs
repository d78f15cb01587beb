//! Reading payload inputs from a request.
//!
//! Every function takes `Option<&R>`: `None` stands for "no request available",
//! which happens when the host adapts the encoder from a repository resource
//! rather than a live request. Missing inputs always come back as `""`.

use crate::config::TokenMode;
use crate::logging::RequestLog;
use crate::Externalizer;

const AUTHORIZATION: &str = "authorization";
const REFERER: &str = "referer";
const BEARER_PREFIX: &str = "bearer ";
const SCHEME_SEPARATOR: &str = "://";

/// Read access to the parts of an HTTP request the encoder needs.
///
/// Framework integrations implement this over their own request type.
///
/// # Examples
///
/// ```
/// use experiment_payload::web::{extract_origin, RequestSource};
///
/// struct MyFrameworkRequest {
///     url: String,
///     referer: Option<String>,
/// }
///
/// impl RequestSource for MyFrameworkRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         if name.eq_ignore_ascii_case("referer") {
///             self.referer.as_deref()
///         } else {
///             None
///         }
///     }
///
///     fn request_url(&self) -> &str {
///         &self.url
///     }
///
///     fn query_string(&self) -> Option<&str> {
///         None
///     }
/// }
///
/// let req = MyFrameworkRequest {
///     url: "https://example.com/content/page".to_string(),
///     referer: Some("https://author.example.com/editor.html".to_string()),
/// };
/// assert_eq!(extract_origin(Some(&req)), "https://author.example.com/editor.html");
/// ```
pub trait RequestSource {
    /// Returns the value of a header. Names are matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the request URL without the query string.
    fn request_url(&self) -> &str;

    /// Returns the raw query string, without the leading `?`.
    fn query_string(&self) -> Option<&str>;

    /// Returns the request URL with `?` and the query string appended when present.
    fn full_url(&self) -> String {
        match self.query_string() {
            Some(query) => format!("{}?{}", self.request_url(), query),
            None => self.request_url().to_string(),
        }
    }
}

/// Reads the token from the `authorization` header.
///
/// With [`TokenMode::StripBearer`] a leading `bearer ` in any letter case is
/// removed; with [`TokenMode::Raw`] the header is returned as sent.
pub fn extract_auth_token<R>(request: Option<&R>, mode: TokenMode) -> String
where
    R: RequestSource + ?Sized,
{
    let Some(header) = request.and_then(|r| r.header(AUTHORIZATION)) else {
        return String::new();
    };

    match mode {
        TokenMode::Raw => header.to_string(),
        TokenMode::StripBearer => strip_bearer(header).to_string(),
    }
}

/// Returns the `referer` header verbatim.
pub fn extract_origin<R>(request: Option<&R>) -> String
where
    R: RequestSource + ?Sized,
{
    request
        .and_then(|r| r.header(REFERER))
        .unwrap_or_default()
        .to_string()
}

/// Returns the page path for the request, externalized when possible.
///
/// The path is computed by [`page_path`]. If an externalizer is given, the
/// path is passed to it for `environment`; when externalization fails the
/// plain path is returned.
pub fn extract_page_url<R>(
    request: Option<&R>,
    editor_marker: &str,
    externalizer: Option<&dyn Externalizer>,
    environment: &str,
) -> String
where
    R: RequestSource + ?Sized,
{
    let Some(request) = request else {
        return String::new();
    };

    let full_url = request.full_url();
    let path = page_path(&full_url, editor_marker);

    let Some(externalizer) = externalizer else {
        return path.to_string();
    };

    match externalizer.externalize(environment, path) {
        Ok(link) => link,
        Err(e) => {
            RequestLog::new(request.request_url()).debug(format_args!(
                "externalizing page path failed, using unexternalized path: {}",
                e
            ));
            path.to_string()
        }
    }
}

/// Computes the page path from a full request URL.
///
/// The path starts at the first `/` after `://` (or at the start of the string
/// when there is no scheme). If `editor_marker` occurs in the URL, the path
/// instead starts right after its first occurrence. An empty `editor_marker`
/// never matches. The path ends at the first `?` after its start.
///
/// # Examples
///
/// ```
/// use experiment_payload::web::page_path;
///
/// let marker = "/sidepanel.content.html";
/// assert_eq!(page_path("https://example.com/content/page?foo=bar", marker), "/content/page");
/// assert_eq!(
///     page_path("https://author.example.com/mnt/sidepanel.content.html/content/page?x=1", marker),
///     "/content/page"
/// );
/// ```
pub fn page_path<'a>(full_url: &'a str, editor_marker: &str) -> &'a str {
    let mut start = match full_url.find(SCHEME_SEPARATOR) {
        Some(at) => {
            let host_start = at + SCHEME_SEPARATOR.len();
            full_url[host_start..]
                .find('/')
                .map_or(full_url.len(), |slash| host_start + slash)
        }
        None => 0,
    };

    if !editor_marker.is_empty() {
        if let Some(at) = full_url.find(editor_marker) {
            start = at + editor_marker.len();
        }
    }

    let rest = &full_url[start..];
    match rest.find('?') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

fn strip_bearer(header: &str) -> &str {
    match header.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => &header[BEARER_PREFIX.len()..],
        _ => header,
    }
}
