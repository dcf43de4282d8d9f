//! URL construction tests.
//!
//! These cover the full path from builder configuration to final URL:
//! path escaping, query serialization, base64 parameters, and the
//! library identifier parameter.

use imgix_url::{Params, UrlBuilder, ValidationError, LIB_VERSION};

use super::test_utils::{params, test_builder, TEST_DOMAIN};

// =============================================================================
// Paths
// =============================================================================

#[test]
fn test_url_without_params() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url_from_path("image.jpg"),
        "https://test.imgix.net/image.jpg"
    );
    // Leading slash is optional
    assert_eq!(
        builder.create_url_from_path("/image.jpg"),
        "https://test.imgix.net/image.jpg"
    );
}

#[test]
fn test_url_with_nested_path() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url("users/1.png", &params(&[("w", "400"), ("h", "300")])),
        "https://test.imgix.net/users/1.png?h=300&w=400"
    );
}

#[test]
fn test_url_escapes_plus_in_path() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url_from_path("E+P-003_D.jpeg"),
        "https://test.imgix.net/E%2BP-003_D.jpeg"
    );
}

#[test]
fn test_url_escapes_spaces_in_path() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url("images/demo image.png", &params(&[("w", "100")])),
        "https://test.imgix.net/images/demo%20image.png?w=100"
    );
}

#[test]
fn test_url_tilde_path() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url_from_path("~text"),
        "https://test.imgix.net/~text"
    );
}

#[test]
fn test_url_empty_path() {
    let builder = test_builder();
    let params = Params::new().with_values("auto", ["format", "compress"]);
    assert_eq!(
        builder.create_url("", &params),
        "https://test.imgix.net?auto=format%2Ccompress"
    );
}

#[test]
fn test_url_raw_proxy_path() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url_from_path("http://avatars.com/john-smith.png"),
        "https://test.imgix.net/http%3A%2F%2Favatars.com%2Fjohn-smith.png"
    );
    assert_eq!(
        builder.create_url_from_path("/https://avatars.com/a b.png"),
        "https://test.imgix.net/https%3A%2F%2Favatars.com%2Fa%20b.png"
    );
}

#[test]
fn test_url_encoded_proxy_path_is_unchanged() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url_from_path("http%3A%2F%2Favatars.com%2Fjohn-smith.png"),
        "https://test.imgix.net/http%3A%2F%2Favatars.com%2Fjohn-smith.png"
    );
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_is_sorted() {
    let builder = test_builder();
    let url = builder.create_url(
        "image.jpg",
        &params(&[("q", "50"), ("h", "800"), ("dpr", "2"), ("ar", "4:3")]),
    );
    assert_eq!(url, "https://test.imgix.net/image.jpg?ar=4%3A3&dpr=2&h=800&q=50");
}

#[test]
fn test_query_repeated_values_are_comma_joined() {
    let builder = test_builder();
    let params = Params::new().with_values("auto", ["format", "compress"]);
    assert_eq!(
        builder.create_url("image.png", &params),
        "https://test.imgix.net/image.png?auto=format%2Ccompress"
    );
}

#[test]
fn test_query_escapes_reserved_characters() {
    let builder = test_builder();
    let url = builder.create_url(
        "image.png",
        &params(&[("txt", "<hello world> & +1")]),
    );
    assert_eq!(
        url,
        "https://test.imgix.net/image.png?txt=%3Chello%20world%3E%20%26%20%2B1"
    );
}

#[test]
fn test_query_base64_parameter() {
    let builder = test_builder();
    let url = builder.create_url(
        "image.png",
        &params(&[("mark64", "https://assets.imgix.net/logo.png"), ("w", "200")]),
    );
    assert_eq!(
        url,
        "https://test.imgix.net/image.png?mark64=aHR0cHM6Ly9hc3NldHMuaW1naXgubmV0L2xvZ28ucG5n&w=200"
    );
}

#[test]
fn test_query_base64_unicode() {
    let builder = test_builder();
    let url = builder.create_url(
        "~text",
        &params(&[("txt64", "I cann\u{f8}t bel\u{ee}\u{e9}v\u{2211} it wor\u{f8ff}s! \u{1f631}")]),
    );
    assert_eq!(
        url,
        "https://test.imgix.net/~text?txt64=SSBjYW5uw7h0IGJlbMOuw6l24oiRIGl0IHdvcu-jv3MhIPCfmLE"
    );
}

#[test]
fn test_query_empty_value_is_kept() {
    let builder = test_builder();
    assert_eq!(
        builder.create_url("image.png", &params(&[("fm", "")])),
        "https://test.imgix.net/image.png?fm="
    );
}

// =============================================================================
// Builder Configuration
// =============================================================================

#[test]
fn test_lib_param_on_by_default() {
    let builder = UrlBuilder::new(TEST_DOMAIN).unwrap();
    assert_eq!(
        builder.create_url("image.png", &params(&[("w", "100")])),
        format!("https://test.imgix.net/image.png?ixlib={}&w=100", LIB_VERSION)
    );
}

#[test]
fn test_http_builder() {
    let builder = test_builder().with_https(false);
    assert_eq!(
        builder.create_url("image.png", &params(&[("w", "100")])),
        "http://test.imgix.net/image.png?w=100"
    );
}

#[test]
fn test_domain_with_scheme_and_path() {
    let builder = UrlBuilder::new("https://test.imgix.net/some/path")
        .unwrap()
        .with_lib_param(false);
    assert_eq!(
        builder.create_url_from_path("image.png"),
        "https://test.imgix.net/image.png"
    );
}

#[test]
fn test_invalid_domains() {
    for domain in ["", "bad domain", "https://"] {
        assert!(
            matches!(
                UrlBuilder::new(domain),
                Err(ValidationError::InvalidDomain { .. })
            ),
            "expected {:?} to be rejected",
            domain
        );
    }
}

#[test]
fn test_caller_params_are_not_modified() {
    let builder = UrlBuilder::new(TEST_DOMAIN).unwrap();
    let params = params(&[("w", "100")]);
    let _ = builder.create_url("image.png", &params);
    assert_eq!(params.len(), 1);
    assert!(!params.has("ixlib"));
}

#[test]
fn test_url_is_deterministic() {
    let builder = test_builder();
    let a = builder.create_url("image.png", &params(&[("w", "1"), ("h", "2"), ("fit", "crop")]));
    let b = builder.create_url("image.png", &params(&[("fit", "crop"), ("h", "2"), ("w", "1")]));
    assert_eq!(a, b);
}
