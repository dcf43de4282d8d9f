//! # imgix-url
//!
//! Deterministic URL construction for an image-processing CDN.
//!
//! Given a source domain, an asset path, and a set of transformation
//! parameters, this library produces a fully-qualified URL, optionally signed
//! with the source's secret token. It can also expand one image reference
//! into a `srcset` attribute covering a range of widths or pixel densities.
//!
//! Nothing here fetches or transforms images: every operation is a pure
//! function of its input and the builder configuration.
//!
//! ## Features
//!
//! - **Path encoding**: asset paths are escaped per segment; proxy paths
//!   (an embedded `http://` or `https://` URL) are escaped as one segment
//! - **Deterministic queries**: parameters are serialized in sorted key order,
//!   so the same parameters always give the same URL and signature
//! - **Signing**: MD5 over token, path, and query, appended as a trailing `s`
//! - **Srcset generation**: geometric width ladders with a tolerance bound,
//!   or a 1x–5x pixel-ratio ladder with variable quality
//!
//! ## Architecture
//!
//! - [`validate`] - domain, width, and tolerance validators
//! - [`params`] - the parameter multimap
//! - [`encoding`] - path and query encoders
//! - [`signing`] - signature computation and verification
//! - [`srcset`] - width generation and candidate sets
//! - [`builder`] - URL assembly and the [`UrlBuilder`]
//! - [`config`] - CLI and environment configuration for the binary
//!
//! ## Example
//!
//! ```rust
//! use imgix_url::{Params, SrcsetOptions, UrlBuilder};
//!
//! let builder = UrlBuilder::new("my-social-network.imgix.net")
//!     .unwrap()
//!     .with_token("FOO123bar")
//!     .with_lib_param(false);
//!
//! let params = Params::new().with("w", "400").with("h", "300");
//! assert_eq!(
//!     builder.create_url("/users/1.png", &params),
//!     "https://my-social-network.imgix.net/users/1.png?h=300&w=400&s=1a4e48641614d1109c6a7af51be23d18"
//! );
//!
//! let srcset = builder.create_srcset("/users/1.png", &Params::new(), &SrcsetOptions::default());
//! assert_eq!(srcset.split(",\n").count(), 31);
//! ```

pub mod builder;
pub mod config;
pub mod encoding;
pub mod error;
pub mod params;
pub mod signing;
pub mod srcset;
pub mod validate;

// Re-export commonly used types
pub use builder::{build_url, UrlBuilder, LIB_PARAM, LIB_VERSION};
pub use config::{BuilderArgs, Cli, Command, OutputFormat, SrcsetConfig, UrlConfig, VerifyConfig};
pub use encoding::{classify_path, encode_path, encode_query, PathKind};
pub use error::{SignatureError, ValidationError};
pub use params::Params;
pub use signing::{compute_signature, sign, UrlSigner, SIGNATURE_PARAM};
pub use srcset::{
    build_candidates, join_candidates, select_mode, target_widths, Candidate, Descriptor,
    SrcsetMode, SrcsetOptions, Targets, WidthRange, DEFAULT_WIDTHS, DPR_QUALITIES,
};
pub use validate::{
    validate_domain, validate_range, validate_tolerance, validate_width, validate_widths,
};
