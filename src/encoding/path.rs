//! Path encoding.
//!
//! # Path Classes
//!
//! ```text
//! /folder/file.jpg                          asset path
//! /http://example.com/file.jpg              proxy path, raw
//! /http%3A%2F%2Fexample.com%2Ffile.jpg      proxy path, already encoded
//! ```
//!
//! Asset paths are escaped one segment at a time so `/` separators survive.
//! A raw proxy path is escaped as a single segment, so its `:` and `/`
//! become `%3A` and `%2F`. An already-encoded proxy path is passed through
//! unchanged.
//!
//! Only ASCII alphanumerics and `-_.~` are left literal. In particular a `+`
//! in a filename always becomes `%2B` and can never be mistaken for an
//! encoded space.

use std::borrow::Cow;

const ASCII_PROXY_PREFIXES: [&str; 2] = ["http://", "https://"];
const ENCODED_PROXY_PREFIXES: [&str; 2] = ["http%3A%2F%2F", "https%3A%2F%2F"];

/// How a path is treated by [`encode_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A plain resource path on the configured domain
    Asset,
    /// The path is itself an absolute URL to a remote origin
    Proxy {
        /// Whether the embedded URL was already percent-encoded by the caller
        encoded: bool,
    },
}

/// Classify a path, ignoring a single leading `/`.
pub fn classify_path(path: &str) -> PathKind {
    let path = path.strip_prefix('/').unwrap_or(path);

    if ASCII_PROXY_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return PathKind::Proxy { encoded: false };
    }

    if ENCODED_PROXY_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return PathKind::Proxy { encoded: true };
    }

    PathKind::Asset
}

/// Encode a path for use in a URL.
///
/// The result always starts with `/` unless the input is empty, in which
/// case the result is empty too.
///
/// # Example
///
/// ```
/// use imgix_url::encode_path;
///
/// assert_eq!(encode_path("E+P-003_D.jpeg"), "/E%2BP-003_D.jpeg");
/// assert_eq!(
///     encode_path("http://www.this.com/pic.jpg"),
///     "/http%3A%2F%2Fwww.this.com%2Fpic.jpg"
/// );
/// ```
pub fn encode_path(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let path: Cow<'_, str> = if raw.starts_with('/') {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("/{}", raw))
    };

    match classify_path(&path) {
        PathKind::Proxy { encoded: true } => path.into_owned(),
        PathKind::Proxy { encoded: false } => format!("/{}", urlencoding::encode(&path[1..])),
        PathKind::Asset => format!("/{}", encode_segments(&path[1..])),
    }
}

fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}
