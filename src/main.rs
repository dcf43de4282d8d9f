//! imgix-url - Build signed image CDN URLs and srcset attributes.
//!
//! This binary is a thin shell over the library: it parses configuration,
//! initializes logging, and prints what the [`UrlBuilder`] produces.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgix_url::{
    config::{Cli, Command, OutputFormat, SrcsetConfig, UrlConfig, VerifyConfig},
    join_candidates, select_mode, Candidate, SrcsetMode, Targets, UrlBuilder, UrlSigner,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Url(config) => run_url(config),
        Command::Srcset(config) => run_srcset(config),
        Command::Verify(config) => run_verify(config),
    }
}

// =============================================================================
// Output
// =============================================================================

#[derive(Serialize)]
struct UrlOutput<'a> {
    url: &'a str,
    signed: bool,
}

#[derive(Serialize)]
struct SrcsetOutput<'a> {
    mode: SrcsetMode,
    signed: bool,
    candidates: &'a [Candidate],
    srcset: &'a str,
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Create the builder from already-validated arguments.
fn create_builder(config: &imgix_url::BuilderArgs) -> Option<UrlBuilder> {
    match config.build() {
        Ok(builder) => {
            debug!(
                domain = builder.domain(),
                scheme = builder.scheme(),
                signed = builder.is_signed(),
                "Builder configured"
            );
            Some(builder)
        }
        Err(e) => {
            error!("Configuration error: {}", e);
            None
        }
    }
}

// =============================================================================
// Url Command
// =============================================================================

fn run_url(config: UrlConfig) -> ExitCode {
    init_logging(config.builder.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let Some(builder) = create_builder(&config.builder) else {
        return ExitCode::FAILURE;
    };

    let params = match config.parse_params() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let url = builder.create_url(&config.path, &params);

    match config.format {
        OutputFormat::Text => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(&UrlOutput {
            url: &url,
            signed: builder.is_signed(),
        }),
    }
}

// =============================================================================
// Srcset Command
// =============================================================================

fn run_srcset(config: SrcsetConfig) -> ExitCode {
    init_logging(config.builder.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let Some(builder) = create_builder(&config.builder) else {
        return ExitCode::FAILURE;
    };

    let params = match config.parse_params() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let (mode, candidates) = match config.widths {
        Some(ref widths) => match imgix_url::validate_widths(widths) {
            Ok(widths) => (
                SrcsetMode::Width,
                builder.build_candidate_set(&config.path, &params, &Targets::Widths(widths)),
            ),
            Err(e) => {
                error!("Invalid widths: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => match config.options() {
            Ok(options) => (
                select_mode(&params),
                builder.srcset_candidates(&config.path, &params, &options),
            ),
            Err(e) => {
                error!("Invalid width range: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    debug!(?mode, candidates = candidates.len(), "Generated srcset");
    let srcset = join_candidates(&candidates);

    match config.format {
        OutputFormat::Text => {
            println!("{}", srcset);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(&SrcsetOutput {
            mode,
            signed: builder.is_signed(),
            candidates: &candidates,
            srcset: &srcset,
        }),
    }
}

// =============================================================================
// Verify Command
// =============================================================================

fn run_verify(config: VerifyConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let signer = UrlSigner::new(config.token.as_str());
    match signer.verify_url(&config.url) {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so stdout only carries generated output.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "imgix_url=debug"
    } else {
        "imgix_url=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
