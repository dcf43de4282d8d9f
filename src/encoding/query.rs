//! Query encoding.
//!
//! Parameters are serialized in byte-wise key order as `key=value` pairs
//! joined by `&`. Multi-valued keys are flattened into one comma-joined
//! value. Keys ending in `64` (`mark64`, `txt64`, ...) carry their value as
//! unpadded base64url; every other value is percent-encoded.
//!
//! Percent-encoding leaves ASCII alphanumerics and `-_.~` literal. A literal
//! `+` is always sent as `%2B` and a space as `%20`, so the CDN's query
//! parser never confuses the two.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::params::Params;

/// Key suffix that marks a value for base64url encoding.
pub const BASE64_KEY_SUFFIX: &str = "64";

/// Encode a parameter set into a query string (without the leading `?`).
///
/// Returns an empty string for an empty parameter set.
///
/// # Example
///
/// ```
/// use imgix_url::{encode_query, Params};
///
/// let params = Params::new()
///     .with("w", "320")
///     .with_values("auto", ["format", "compress"]);
///
/// assert_eq!(encode_query(&params), "auto=format%2Ccompress&w=320");
/// ```
pub fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, values)| {
            let (encoded_key, encoded_value) = encode_query_param(key, values);
            format!("{}={}", encoded_key, encoded_value)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode one key and its values.
pub fn encode_query_param(key: &str, values: &[String]) -> (String, String) {
    let encoded_key = encode_query_value(key);

    let value = values.join(",");
    let encoded_value = if is_base64_key(key) {
        base64_encode_value(&value)
    } else {
        encode_query_value(&value)
    };

    (encoded_key, encoded_value)
}

/// Percent-encode a query key or value.
pub fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Whether a key's value should be base64url-encoded.
pub fn is_base64_key(key: &str) -> bool {
    key.ends_with(BASE64_KEY_SUFFIX)
}

/// Base64url-encode a value without `=` padding.
pub fn base64_encode_value(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}
