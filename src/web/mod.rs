//! Web framework integration surface.
//!
//! This module is the boundary between a host web framework and the encoder.
//! It contains no framework-specific code. A host either implements
//! [`RequestSource`] for its own request type or fills a [`RequestAdapter`].
//!
//! # Integration Model
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework request implements RequestSource (or builds RequestAdapter)
//!   ↓
//! RequestDataEncoder::default().with_externalizer(&externalizer)
//!   ↓
//! .encode(Some(&request), org_id)
//!   ↓
//! EncodedPayload accessors read by the page template
//! ```

mod adapter;
mod extract;

pub use adapter::RequestAdapter;
pub use extract::{
    extract_auth_token, extract_origin, extract_page_url, page_path, RequestSource,
};
