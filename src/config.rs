//! Configuration management for the `imgix-url` binary.
//!
//! This module provides the CLI surface:
//! - Command-line arguments via clap
//! - Environment variables with `IX_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use imgix_url::config::{Cli, Command};
//!
//! let cli = Cli::parse();
//! match cli.command {
//!     Command::Url(config) => { /* ... */ }
//!     Command::Srcset(config) => { /* ... */ }
//!     Command::Verify(config) => { /* ... */ }
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `IX_DOMAIN` - Source domain (required for `url` and `srcset`)
//! - `IX_TOKEN` - Secret token used to sign URLs
//! - `IX_HTTP` - Use `http` instead of `https` (default: false)
//! - `IX_NO_LIB_PARAM` - Omit the `ixlib` parameter (default: false)

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::builder::UrlBuilder;
use crate::error::ValidationError;
use crate::params::Params;
use crate::srcset::{
    SrcsetOptions, WidthRange, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_TOLERANCE,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// imgix-url - Build signed image CDN URLs and srcset attributes.
#[derive(Parser, Debug, Clone)]
#[command(name = "imgix-url")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print a single URL
    Url(UrlConfig),
    /// Print a srcset attribute value
    Srcset(SrcsetConfig),
    /// Check the signature of a signed URL
    Verify(VerifyConfig),
}

/// Output format for generated URLs.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, ready to paste
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Builder settings shared by `url` and `srcset`.
#[derive(Args, Debug, Clone)]
pub struct BuilderArgs {
    /// Source domain, e.g. example.imgix.net. A scheme prefix is stripped.
    #[arg(long, env = "IX_DOMAIN")]
    pub domain: String,

    /// Secret token used to sign URLs.
    ///
    /// When not provided, URLs are left unsigned.
    #[arg(long, env = "IX_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Use http instead of https.
    #[arg(long, default_value_t = false, env = "IX_HTTP")]
    pub http: bool,

    /// Omit the ixlib library parameter.
    #[arg(long, default_value_t = false, env = "IX_NO_LIB_PARAM")]
    pub no_lib_param: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl BuilderArgs {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.domain.trim().is_empty() {
            return Err("Domain is required. Set --domain or IX_DOMAIN".to_string());
        }
        Ok(())
    }

    /// Create the URL builder described by these arguments.
    pub fn build(&self) -> Result<UrlBuilder, ValidationError> {
        let builder = UrlBuilder::new(&self.domain)?
            .with_https(!self.http)
            .with_lib_param(!self.no_lib_param)
            .with_token(self.token.clone().unwrap_or_default());
        Ok(builder)
    }
}

/// Configuration for the `url` command.
#[derive(Args, Debug, Clone)]
pub struct UrlConfig {
    #[command(flatten)]
    pub builder: BuilderArgs,

    /// Image path, or an absolute URL to proxy.
    pub path: String,

    /// Transformation parameter (repeatable), e.g. -p w=320 -p auto=format
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl UrlConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.builder.validate()
    }

    pub fn parse_params(&self) -> Result<Params, String> {
        parse_params(&self.params)
    }
}

/// Configuration for the `srcset` command.
#[derive(Args, Debug, Clone)]
pub struct SrcsetConfig {
    #[command(flatten)]
    pub builder: BuilderArgs,

    /// Image path, or an absolute URL to proxy.
    pub path: String,

    /// Transformation parameter (repeatable), e.g. -p h=800 -p ar=4:3
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Minimum width of a fluid-width srcset.
    #[arg(long, allow_negative_numbers = true)]
    pub min_width: Option<i32>,

    /// Maximum width of a fluid-width srcset.
    #[arg(long, allow_negative_numbers = true)]
    pub max_width: Option<i32>,

    /// Width tolerance of a fluid-width srcset (at least 0.01).
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Explicit widths (comma-separated). Overrides the width range.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["min_width", "max_width", "tolerance"]
    )]
    pub widths: Option<Vec<i32>>,

    /// Do not inject default qualities into pixel-ratio candidates.
    #[arg(long, default_value_t = false)]
    pub disable_variable_quality: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SrcsetConfig {
    /// An empty `--widths` list is accepted and yields an empty srcset, as
    /// in [`UrlBuilder::create_srcset_from_widths`].
    pub fn validate(&self) -> Result<(), String> {
        self.builder.validate()
    }

    pub fn parse_params(&self) -> Result<Params, String> {
        parse_params(&self.params)
    }

    /// Srcset options, filling unset range values with the defaults.
    pub fn options(&self) -> Result<SrcsetOptions, ValidationError> {
        let range = WidthRange::new(
            self.min_width.unwrap_or(DEFAULT_MIN_WIDTH as i32),
            self.max_width.unwrap_or(DEFAULT_MAX_WIDTH as i32),
            self.tolerance.unwrap_or(DEFAULT_TOLERANCE),
        )?;

        Ok(SrcsetOptions::new()
            .with_width_range(range)
            .with_variable_quality(!self.disable_variable_quality))
    }
}

/// Configuration for the `verify` command.
#[derive(Args, Debug, Clone)]
pub struct VerifyConfig {
    /// Secret token the URL was signed with.
    #[arg(long, env = "IX_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Signed URL to check.
    pub url: String,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl VerifyConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.token.is_empty() {
            return Err("Token is required. Set --token or IX_TOKEN".to_string());
        }
        Ok(())
    }
}

/// Parse `KEY=VALUE` arguments into parameters.
///
/// Repeating a key appends another value. Only the first `=` splits, so
/// values may themselves contain `=`.
pub fn parse_params(raw: &[String]) -> Result<Params, String> {
    let mut params = Params::new();
    for item in raw {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| format!("Invalid parameter '{}': expected KEY=VALUE", item))?;
        if key.is_empty() {
            return Err(format!("Invalid parameter '{}': empty key", item));
        }
        params.add(key, value);
    }
    Ok(params)
}

// =============================================================================
// Tests
// =============================================================================
