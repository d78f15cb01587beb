//! Property tests for payload encoding.
//!
//! These check that the encoded views stay consistent with the JSON and that
//! request extraction never panics, whatever the header and URL contents.

use base64::prelude::*;
use experiment_payload::web::{page_path, RequestAdapter};
use experiment_payload::{
    form_urlencode, RequestDataEncoder, EDITOR_MARKER, PAYLOAD_KEYS,
};
use proptest::prelude::*;

// Strategy: header values without double quotes
fn arb_unquoted() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ./:@=_-]{0,40}").unwrap()
}

// Strategy: request URLs, some in edit mode
fn arb_request_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https://"), Just("http://"), Just("")],
        prop::string::string_regex("[a-z]{1,10}(\\.[a-z]{2,3})?").unwrap(),
        prop::string::string_regex("(/[a-z0-9.]{1,8}){0,4}").unwrap(),
        prop::bool::ANY,
    )
        .prop_map(|(scheme, host, path, edit_mode)| {
            if edit_mode {
                format!("{}{}/editor.html{}{}", scheme, host, EDITOR_MARKER, path)
            } else {
                format!("{}{}{}", scheme, host, path)
            }
        })
}

fn request(url: String, query: Option<String>, token: &str, referer: &str) -> RequestAdapter {
    let mut request = RequestAdapter::new(url);
    request.set_query_string(query);
    request.add_header("authorization".to_string(), format!("Bearer {}", token));
    request.add_header("referer".to_string(), referer.to_string());
    request
}

proptest! {
    /// Property: every view is derived from the JSON exactly
    #[test]
    fn proptest_views_derive_from_json(
        url in arb_request_url(),
        query in prop::option::of(arb_unquoted()),
        token in arb_unquoted(),
        referer in any::<String>(),
        org in prop::option::of(any::<String>()),
    ) {
        let req = request(url, query, &token, &referer);
        let payload = RequestDataEncoder::default().encode(Some(&req), org.as_deref());

        let decoded = BASE64_STANDARD.decode(payload.base64_encoded()).expect("valid base64");
        prop_assert_eq!(decoded.as_slice(), payload.json_data().as_bytes());
        prop_assert_eq!(payload.url_encoded(), form_urlencode(payload.json_data()));
        prop_assert_eq!(payload.encode_for_url(), form_urlencode(payload.base64_encoded()));
    }

    /// Property: quote-free inputs always yield the seven keys in order
    #[test]
    fn proptest_json_shape_is_fixed(
        url in arb_request_url(),
        token in arb_unquoted(),
        referer in arb_unquoted(),
        org in arb_unquoted(),
    ) {
        let req = request(url, None, &token, &referer);
        let payload = RequestDataEncoder::default().encode(Some(&req), Some(&org));
        let json = payload.json_data();

        let mut last = 0;
        for key in PAYLOAD_KEYS {
            let at = json.find(&format!("\"{}\":\"", key));
            prop_assert!(at.is_some(), "missing key {}", key);
            let at = at.unwrap();
            prop_assert!(at >= last);
            last = at;
        }
        let token_pair = format!("{{\"imsToken\":\"{}\",", token);
        prop_assert!(json.starts_with(&token_pair));
    }

    /// Property: the page path is a query-free slice of the URL
    #[test]
    fn proptest_page_path_is_slice_of_url(
        url in arb_request_url(),
        query in prop::option::of(arb_unquoted()),
    ) {
        let full = match &query {
            Some(q) => format!("{}?{}", url, q),
            None => url.clone(),
        };
        let path = page_path(&full, EDITOR_MARKER);

        prop_assert!(!path.contains('?'));
        prop_assert!(full.contains(path));
        prop_assert!(!path.contains(EDITOR_MARKER));
    }

    /// Property: arbitrary header text never panics extraction
    #[test]
    fn proptest_arbitrary_headers_never_panic(
        authorization in any::<String>(),
        url in any::<String>(),
    ) {
        let mut req = RequestAdapter::new(url);
        req.add_header("Authorization".to_string(), authorization);

        let payload = RequestDataEncoder::default().encode(Some(&req), None);
        prop_assert!(!payload.json_data().is_empty());
    }
}
