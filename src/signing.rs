//! URL signing.
//!
//! # Signing Scheme
//!
//! A signature is the lowercase hex MD5 digest of the secret token followed by
//! the encoded path and, when present, the encoded query:
//!
//! ```text
//! signature = MD5("{token}{path}")                 (no query)
//! signature = MD5("{token}{path}?{query}")         (with query)
//! ```
//!
//! The digest is appended as an `s` parameter, always last:
//!
//! ```text
//! https://my-social-network.imgix.net/users/1.png?h=300&w=400&s=1a4e48641614d1109c6a7af51be23d18
//! ```
//!
//! The `s` parameter is never part of the sorted parameter set, since its
//! value depends on every other parameter. MD5 is what the CDN verifies; it
//! is a shared-secret integrity check, not protection against an attacker
//! who can brute-force the token.
//!
//! # Example
//!
//! ```rust
//! use imgix_url::UrlSigner;
//!
//! let signer = UrlSigner::new("FOO123bar");
//! let signature = signer.sign("/users/1.png", "h=300&w=400");
//! assert_eq!(signature, "1a4e48641614d1109c6a7af51be23d18");
//!
//! assert!(signer.verify("/users/1.png", "h=300&w=400", &signature).is_ok());
//! ```

use md5::{Digest, Md5};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use url::Url;

use crate::error::SignatureError;

/// Name of the signature query parameter.
pub const SIGNATURE_PARAM: &str = "s";

/// Length in bytes of an MD5 digest.
const DIGEST_LEN: usize = 16;

// =============================================================================
// Free Functions
// =============================================================================

/// Build the trailing signature parameter (`s=<hex>`).
///
/// Returns `None` when the token is empty: the URL is then left unsigned
/// rather than signed with an empty secret.
pub fn sign(token: &str, encoded_path: &str, encoded_query: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let digest = compute_signature(token, encoded_path, encoded_query);
    Some(format!("{}={}", SIGNATURE_PARAM, digest))
}

/// Compute the hex MD5 signature over token, path, and query.
pub fn compute_signature(token: &str, encoded_path: &str, encoded_query: &str) -> String {
    hex::encode(signature_digest(token, encoded_path, encoded_query))
}

fn signature_digest(token: &str, encoded_path: &str, encoded_query: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Md5::new();
    hasher.update(token.as_bytes());
    hasher.update(encoded_path.as_bytes());
    if !encoded_query.is_empty() {
        hasher.update(b"?");
        hasher.update(encoded_query.as_bytes());
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

// =============================================================================
// Signer
// =============================================================================

/// Signs and verifies URLs with a shared secret token.
#[derive(Clone)]
pub struct UrlSigner {
    token: String,
}

impl std::fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlSigner")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl UrlSigner {
    /// Create a signer with the given secret token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Whether this signer will actually sign (the token is non-empty).
    pub fn is_enabled(&self) -> bool {
        !self.token.is_empty()
    }

    /// Compute the hex signature for an encoded path and query.
    pub fn sign(&self, encoded_path: &str, encoded_query: &str) -> String {
        compute_signature(&self.token, encoded_path, encoded_query)
    }

    /// Build the `s=<hex>` parameter, or `None` for an empty token.
    pub fn signature_param(&self, encoded_path: &str, encoded_query: &str) -> Option<String> {
        sign(&self.token, encoded_path, encoded_query)
    }

    /// Verify a hex signature for an encoded path and query.
    ///
    /// The comparison is constant-time.
    pub fn verify(
        &self,
        encoded_path: &str,
        encoded_query: &str,
        signature: &str,
    ) -> Result<(), SignatureError> {
        if !self.is_enabled() {
            return Err(SignatureError::MissingToken);
        }

        let provided = hex::decode(signature).map_err(|_| SignatureError::InvalidSignatureFormat)?;
        if provided.len() != DIGEST_LEN {
            return Err(SignatureError::InvalidSignatureFormat);
        }

        let expected = signature_digest(&self.token, encoded_path, encoded_query);

        if provided.ct_eq(&expected).into() {
            Ok(())
        } else {
            Err(SignatureError::InvalidSignature)
        }
    }

    /// Verify a complete signed URL.
    ///
    /// The `s` parameter must be the last query component. The path and the
    /// query preceding it are re-signed exactly as written in `signed_url`,
    /// without the normalization a URL parser applies (dot segments, the
    /// implicit `/` of an empty path).
    pub fn verify_url(&self, signed_url: &str) -> Result<(), SignatureError> {
        Url::parse(signed_url).map_err(|e| SignatureError::InvalidUrl(e.to_string()))?;

        let (path, query) = split_raw_url(signed_url.trim())
            .ok_or_else(|| SignatureError::InvalidUrl("missing authority".to_string()))?;

        let result = split_signature(query.unwrap_or(""))
            .and_then(|(unsigned_query, signature)| self.verify(path, unsigned_query, signature));

        match &result {
            Err(SignatureError::InvalidSignature) => {
                warn!(path, "Signature verification failed");
            }
            Err(e) => {
                debug!(path, error = %e, "Signature verification failed");
            }
            Ok(()) => {
                debug!(path, "Signature verified");
            }
        }

        result
    }
}

/// Split a URL into its raw path and raw query, as written.
///
/// Returns `None` when there is no `scheme://authority` prefix.
fn split_raw_url(url: &str) -> Option<(&str, Option<&str>)> {
    let (_, after_scheme) = url.split_once("://")?;
    let rest = after_scheme
        .find(['/', '?', '#'])
        .map_or("", |index| &after_scheme[index..]);
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);

    Some(match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    })
}

/// Split a raw query into the unsigned part and the trailing signature.
fn split_signature(query: &str) -> Result<(&str, &str), SignatureError> {
    let prefix = format!("{}=", SIGNATURE_PARAM);

    let (unsigned, last) = match query.rsplit_once('&') {
        Some((unsigned, last)) => (unsigned, last),
        None => ("", query),
    };

    last.strip_prefix(prefix.as_str())
        .map(|signature| (unsigned, signature))
        .ok_or(SignatureError::MissingSignature)
}

// =============================================================================
// Tests
// =============================================================================
