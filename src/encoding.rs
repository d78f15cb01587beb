//! Base64 and form-URL encoding of the payload JSON.

use base64::prelude::*;
use url::form_urlencoded;

/// Base64-encodes UTF-8 text with the standard alphabet and padding.
pub fn base64_encode(text: &str) -> String {
    BASE64_STANDARD.encode(text.as_bytes())
}

/// Percent-encodes text using `application/x-www-form-urlencoded` rules.
///
/// `A-Z a-z 0-9 * - . _` pass through, a space becomes `+`, and every other
/// UTF-8 byte becomes `%XX` with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use experiment_payload::form_urlencode;
///
/// assert_eq!(form_urlencode("a b/c=d"), "a+b%2Fc%3Dd");
/// assert_eq!(form_urlencode("e30="), "e30%3D");
/// ```
pub fn form_urlencode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// The payload JSON and its encoded views.
///
/// All four values are computed once by [`EncodedPayload::from_json`] and
/// returned by reference afterwards. An empty JSON string yields empty views.
///
/// # Examples
///
/// ```
/// use experiment_payload::EncodedPayload;
///
/// let payload = EncodedPayload::from_json(r#"{"a":"b c"}"#.to_string());
///
/// assert_eq!(payload.json_data(), r#"{"a":"b c"}"#);
/// assert_eq!(payload.base64_encoded(), "eyJhIjoiYiBjIn0=");
/// assert_eq!(payload.url_encoded(), "%7B%22a%22%3A%22b+c%22%7D");
/// assert_eq!(payload.encode_for_url(), "eyJhIjoiYiBjIn0%3D");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedPayload {
    json: String,
    base64: String,
    url_encoded: String,
    base64_url_encoded: String,
}

impl EncodedPayload {
    /// Encodes `json` into every view.
    pub fn from_json(json: String) -> Self {
        if json.is_empty() {
            return Self::default();
        }

        let base64 = base64_encode(&json);
        let url_encoded = form_urlencode(&json);
        let base64_url_encoded = form_urlencode(&base64);

        Self {
            json,
            base64,
            url_encoded,
            base64_url_encoded,
        }
    }

    /// Returns the raw JSON, or `""` if nothing was built.
    pub fn json_data(&self) -> &str {
        &self.json
    }

    /// Returns the Base64 encoding of the JSON.
    pub fn base64_encoded(&self) -> &str {
        &self.base64
    }

    /// Returns the form-URL encoding of the JSON.
    pub fn url_encoded(&self) -> &str {
        &self.url_encoded
    }

    /// Returns the Base64 encoding, form-URL encoded for use in a link.
    pub fn encode_for_url(&self) -> &str {
        &self.base64_url_encoded
    }
}
