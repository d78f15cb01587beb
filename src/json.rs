//! Payload JSON assembly.
//!
//! The payload is a flat object of seven string pairs in a fixed order. Values
//! are escaped by replacing `"` with `\"` and nothing else: backslashes,
//! control characters and non-ASCII text are copied through unchanged.

use crate::config::EncoderConfig;
use crate::request::RequestSnapshot;

/// Keys of the payload object, in output order.
pub const PAYLOAD_KEYS: [&str; 7] = [
    "imsToken",
    "imsOrg",
    "origin",
    "pageUrl",
    "triggerSource",
    "env",
    "locale",
];

/// Builds the payload JSON for a snapshot.
///
/// # Examples
///
/// ```
/// use experiment_payload::{build_json, EncoderConfig, RequestSnapshot};
///
/// let snapshot = RequestSnapshot::new("abc123", "ab\"cd", "", "/content/page");
/// let json = build_json(&snapshot, &EncoderConfig::default());
///
/// assert_eq!(
///     json,
///     r#"{"imsToken":"abc123","imsOrg":"ab\"cd","origin":"","pageUrl":"/content/page","triggerSource":"ue","env":"prod","locale":"en-US"}"#
/// );
/// ```
pub fn build_json(snapshot: &RequestSnapshot, config: &EncoderConfig) -> String {
    let values = [
        snapshot.auth_token.expose_secret().as_str(),
        snapshot.org_id.as_str(),
        snapshot.origin.as_str(),
        snapshot.page_url.as_str(),
        config.trigger_source(),
        config.env(),
        config.locale(),
    ];

    let mut json = String::with_capacity(128 + values.iter().map(|v| v.len()).sum::<usize>());
    json.push('{');
    for (i, (key, value)) in PAYLOAD_KEYS.iter().zip(values).enumerate() {
        if i > 0 {
            json.push(',');
        }
        push_property(&mut json, key, value);
    }
    json.push('}');
    json
}

fn push_property(json: &mut String, key: &str, value: &str) {
    json.push('"');
    json.push_str(key);
    json.push_str("\":\"");
    json.push_str(&escape_quotes(value));
    json.push('"');
}

/// Escapes double quotes only.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
