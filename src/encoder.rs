use crate::config::EncoderConfig;
use crate::encoding::EncodedPayload;
use crate::json::build_json;
use crate::logging::RequestLog;
use crate::request::RequestSnapshot;
use crate::web::{extract_auth_token, extract_origin, extract_page_url, RequestSource};
use crate::Externalizer;

/// Builds the encoded experiment payload for a request.
///
/// The encoder itself holds only configuration and an optional borrowed
/// [`Externalizer`]; each call to [`encode`](Self::encode) reads one request
/// and returns a fresh [`EncodedPayload`]. Nothing fails: missing inputs become
/// empty strings and a failing externalizer leaves the page path as-is.
///
/// # Examples
///
/// ```
/// use experiment_payload::RequestDataEncoder;
/// use experiment_payload::web::RequestAdapter;
///
/// let mut request = RequestAdapter::new("https://example.com/content/page".to_string());
/// request.set_query_string(Some("foo=bar".to_string()));
/// request.add_header("Authorization".to_string(), "Bearer abc123".to_string());
///
/// let payload = RequestDataEncoder::default().encode(Some(&request), Some("org@AdobeOrg"));
///
/// assert_eq!(
///     payload.json_data(),
///     r#"{"imsToken":"abc123","imsOrg":"org@AdobeOrg","origin":"","pageUrl":"/content/page","triggerSource":"ue","env":"prod","locale":"en-US"}"#
/// );
/// assert!(!payload.encode_for_url().is_empty());
/// ```
#[derive(Default)]
pub struct RequestDataEncoder<'a> {
    config: EncoderConfig,
    externalizer: Option<&'a dyn Externalizer>,
}

impl<'a> RequestDataEncoder<'a> {
    /// Creates an encoder with the given configuration and no externalizer.
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            externalizer: None,
        }
    }

    /// Externalizes page paths through `externalizer`.
    pub fn with_externalizer(mut self, externalizer: &'a dyn Externalizer) -> Self {
        self.externalizer = Some(externalizer);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Reads the payload inputs from a request.
    ///
    /// `request` is `None` when no live request is available; `org_id` is
    /// `None` when the repository property is unset.
    pub fn snapshot<R>(&self, request: Option<&R>, org_id: Option<&str>) -> RequestSnapshot
    where
        R: RequestSource + ?Sized,
    {
        RequestSnapshot::new(
            extract_auth_token(request, self.config.token_mode()),
            org_id.unwrap_or_default(),
            extract_origin(request),
            extract_page_url(
                request,
                self.config.editor_marker(),
                self.externalizer,
                self.config.publish_environment(),
            ),
        )
    }

    /// Reads a request and builds its encoded payload.
    pub fn encode<R>(&self, request: Option<&R>, org_id: Option<&str>) -> EncodedPayload
    where
        R: RequestSource + ?Sized,
    {
        let request_url = request.map_or("", |r| r.request_url());
        let log = RequestLog::new(request_url);
        if request.is_none() {
            log.debug(format_args!("no request available, request values left empty"));
        }

        let snapshot = self.snapshot(request, org_id);
        log.debug(format_args!("building experiment payload from {:?}", snapshot));

        self.encode_snapshot(&snapshot)
    }

    /// Builds the encoded payload for an already-extracted snapshot.
    pub fn encode_snapshot(&self, snapshot: &RequestSnapshot) -> EncodedPayload {
        EncodedPayload::from_json(build_json(snapshot, &self.config))
    }
}

impl std::fmt::Debug for RequestDataEncoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDataEncoder")
            .field("config", &self.config)
            .field("externalizer", &self.externalizer.is_some())
            .finish()
    }
}

/// Builds the payload for a request with the default configuration.
///
/// Shorthand for `RequestDataEncoder` with [`EncoderConfig::default`] and the
/// given externalizer.
pub fn encode_request<R>(
    request: Option<&R>,
    org_id: Option<&str>,
    externalizer: Option<&dyn Externalizer>,
) -> EncodedPayload
where
    R: RequestSource + ?Sized,
{
    let encoder = RequestDataEncoder {
        config: EncoderConfig::default(),
        externalizer,
    };
    encoder.encode(request, org_id)
}
