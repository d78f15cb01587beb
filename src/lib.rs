//! Encoded request payloads for client-side experimentation links.
//!
//! On each page request this crate reads a few values (the bearer token from
//! the `authorization` header, the `referer` header, the page path and a
//! configured organization id), writes them into a small fixed-shape JSON
//! object, and exposes that JSON raw, Base64 encoded, form-URL encoded, and
//! Base64-then-URL encoded for embedding in a hyperlink.
//!
//! # Core Types
//!
//! - [`RequestDataEncoder`]: Reads a request and produces an [`EncodedPayload`]
//! - [`web::RequestSource`]: What the encoder needs from a host's request type
//! - [`Externalizer`]: Turns a content path into an absolute URL per environment
//! - [`EncoderConfig`]: Token handling and payload constants
//! - [`Secret<T>`]: Keeps the auth token out of `Debug` output
//!
//! # Examples
//!
//! ```
//! use experiment_payload::{RequestDataEncoder, EnvironmentExternalizer};
//! use experiment_payload::web::RequestAdapter;
//!
//! let externalizer = EnvironmentExternalizer::new()
//!     .with_environment("publish", "https://www.example.com")
//!     .expect("valid base url");
//!
//! let mut request = RequestAdapter::new(
//!     "https://author.example.com/editor.html/sidepanel.content.html/content/page".to_string(),
//! );
//! request.add_header("authorization".to_string(), "Bearer abc123".to_string());
//!
//! let payload = RequestDataEncoder::default()
//!     .with_externalizer(&externalizer)
//!     .encode(Some(&request), Some("org@AdobeOrg"));
//!
//! assert!(payload
//!     .json_data()
//!     .contains(r#""pageUrl":"https://www.example.com/content/page""#));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod encoder;
mod encoding;
mod error;
mod externalizer;
mod json;
mod logging;
mod request;
mod secret;
pub mod web;

pub use config::{
    EncoderConfig, TokenMode, DEFAULT_ENV, DEFAULT_LOCALE, DEFAULT_TRIGGER_SOURCE, EDITOR_MARKER,
    PUBLISH_ENVIRONMENT,
};
pub use encoder::{encode_request, RequestDataEncoder};
pub use encoding::{base64_encode, form_urlencode, EncodedPayload};
pub use error::Error;
pub use externalizer::{EnvironmentExternalizer, Externalizer};
pub use json::{build_json, escape_quotes, PAYLOAD_KEYS};
pub use request::RequestSnapshot;
pub use secret::Secret;
