//! URL assembly.
//!
//! [`UrlBuilder`] holds the per-source configuration (domain, token, scheme,
//! library parameter) and turns a path plus [`Params`] into a final URL:
//!
//! ```text
//! {scheme}://{domain}{encoded path}[?{encoded query}][&|?s={signature}]
//! ```
//!
//! The builder is configured once and then only read. Setters take
//! `&mut self`, so swapping the token while other threads build URLs needs
//! external synchronization.

use tracing::debug;

use crate::encoding::{encode_path, encode_query};
use crate::error::ValidationError;
use crate::params::Params;
use crate::signing::sign;
use crate::srcset::{
    build_candidates, join_candidates, select_mode, target_widths, Candidate, SrcsetMode,
    SrcsetOptions, Targets, WidthRange,
};
use crate::validate::{validate_domain, validate_widths};

/// Name of the library identifier parameter.
pub const LIB_PARAM: &str = "ixlib";

/// Value of the library identifier parameter.
pub const LIB_VERSION: &str = concat!("rust-v", env!("CARGO_PKG_VERSION"));

/// Assemble a URL from already-separated parts.
///
/// The path and parameters are encoded here; the signature is appended last
/// when `token` is present and non-empty.
///
/// # Example
///
/// ```
/// use imgix_url::{build_url, Params};
///
/// let params = Params::new().with("w", "400").with("h", "300");
/// let url = build_url(
///     "https",
///     "my-social-network.imgix.net",
///     "users/1.png",
///     &params,
///     Some("FOO123bar"),
/// );
/// assert_eq!(
///     url,
///     "https://my-social-network.imgix.net/users/1.png?h=300&w=400&s=1a4e48641614d1109c6a7af51be23d18"
/// );
/// ```
pub fn build_url(
    scheme: &str,
    host: &str,
    path: &str,
    params: &Params,
    token: Option<&str>,
) -> String {
    let path = encode_path(path);
    let query = encode_query(params);
    let signature = token.and_then(|token| sign(token, &path, &query));

    let mut url = format!("{}://{}{}", scheme, host, path);

    match (query.is_empty(), signature) {
        (true, None) => {}
        (false, None) => {
            url.push('?');
            url.push_str(&query);
        }
        (true, Some(signature)) => {
            url.push('?');
            url.push_str(&signature);
        }
        (false, Some(signature)) => {
            url.push('?');
            url.push_str(&query);
            url.push('&');
            url.push_str(&signature);
        }
    }

    url
}

// =============================================================================
// URL Builder
// =============================================================================

/// Builds (and optionally signs) URLs for one source domain.
///
/// # Example
///
/// ```
/// use imgix_url::{Params, UrlBuilder};
///
/// let builder = UrlBuilder::new("demo.imgix.net")
///     .unwrap()
///     .with_lib_param(false);
///
/// let params = Params::new()
///     .with("w", "320")
///     .with_values("auto", ["format", "compress"]);
///
/// assert_eq!(
///     builder.create_url("path/to/image.jpg", &params),
///     "https://demo.imgix.net/path/to/image.jpg?auto=format%2Ccompress&w=320"
/// );
/// ```
#[derive(Clone)]
pub struct UrlBuilder {
    domain: String,
    token: Option<String>,
    use_https: bool,
    use_lib_param: bool,
}

impl std::fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("domain", &self.domain)
            .field("signed", &self.token.is_some())
            .field("use_https", &self.use_https)
            .field("use_lib_param", &self.use_lib_param)
            .finish()
    }
}

impl UrlBuilder {
    /// Create a builder for a domain, with HTTPS and the library parameter on.
    ///
    /// Any scheme, port, or path in `domain` is dropped.
    pub fn new(domain: &str) -> Result<Self, ValidationError> {
        let domain = validate_domain(domain)?;
        debug!(domain = %domain, "Created URL builder");

        Ok(Self {
            domain,
            token: None,
            use_https: true,
            use_lib_param: true,
        })
    }

    /// Sign every URL with `token`. An empty token leaves URLs unsigned.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    pub fn with_lib_param(mut self, use_lib_param: bool) -> Self {
        self.use_lib_param = use_lib_param;
        self
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    pub fn set_use_https(&mut self, use_https: bool) {
        self.use_https = use_https;
    }

    pub fn set_use_lib_param(&mut self, use_lib_param: bool) {
        self.use_lib_param = use_lib_param;
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn use_lib_param(&self) -> bool {
        self.use_lib_param
    }

    /// Whether URLs from this builder are signed.
    pub fn is_signed(&self) -> bool {
        self.token.is_some()
    }

    /// URL scheme, `https` unless HTTPS has been turned off.
    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    /// Create a URL for a path and parameters.
    pub fn create_url(&self, path: &str, params: &Params) -> String {
        if self.use_lib_param {
            let mut params = params.clone();
            params.set(LIB_PARAM, LIB_VERSION);
            self.assemble(path, &params)
        } else {
            self.assemble(path, params)
        }
    }

    /// Create a URL for a path with no parameters.
    pub fn create_url_from_path(&self, path: &str) -> String {
        self.create_url(path, &Params::new())
    }

    fn assemble(&self, path: &str, params: &Params) -> String {
        build_url(
            self.scheme(),
            &self.domain,
            path,
            params,
            self.token.as_deref(),
        )
    }

    // =========================================================================
    // Srcset
    // =========================================================================

    /// Create a srcset attribute, choosing the mode from `params`.
    ///
    /// With a width, or with both height and aspect ratio, the result is a
    /// 1x–5x pixel-ratio set. Otherwise it is a width set covering
    /// `options.width_range`.
    pub fn create_srcset(&self, path: &str, params: &Params, options: &SrcsetOptions) -> String {
        join_candidates(&self.srcset_candidates(path, params, options))
    }

    /// Like [`UrlBuilder::create_srcset`], returning the individual candidates.
    pub fn srcset_candidates(
        &self,
        path: &str,
        params: &Params,
        options: &SrcsetOptions,
    ) -> Vec<Candidate> {
        let mode = select_mode(params);
        debug!(?mode, path, "Selected srcset mode");

        let targets = match mode {
            SrcsetMode::Ratio => Targets::PixelRatios {
                variable_quality: options.variable_quality,
            },
            SrcsetMode::Width => Targets::Widths(target_widths(&options.width_range)),
        };

        self.build_candidate_set(path, params, &targets)
    }

    /// Create a width-described srcset for every width in a range.
    pub fn create_srcset_from_range(
        &self,
        path: &str,
        params: &Params,
        range: &WidthRange,
    ) -> String {
        let targets = Targets::Widths(target_widths(range));
        join_candidates(&self.build_candidate_set(path, params, &targets))
    }

    /// Create a width-described srcset from an explicit list of widths.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeWidthAtIndex`] for the first
    /// negative width.
    pub fn create_srcset_from_widths(
        &self,
        path: &str,
        params: &Params,
        widths: &[i32],
    ) -> Result<String, ValidationError> {
        let widths = validate_widths(widths)?;
        let targets = Targets::Widths(widths);
        Ok(join_candidates(
            &self.build_candidate_set(path, params, &targets),
        ))
    }

    /// Generate one candidate per target, in target order.
    pub fn build_candidate_set(
        &self,
        path: &str,
        params: &Params,
        targets: &Targets,
    ) -> Vec<Candidate> {
        build_candidates(params, targets, |entry_params| {
            self.create_url(path, entry_params)
        })
    }
}
