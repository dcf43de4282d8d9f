//! Responsive image candidate sets (`srcset` attributes).
//!
//! # Modes
//!
//! ```text
//! params has w, or has both h and ar   →  ratio mode   (1x … 5x, dpr + q)
//! otherwise                            →  width mode   (100w … 8192w, w)
//! ```
//!
//! A fixed-size image can only vary in pixel density, so it is described
//! by ratio descriptors. A fluid image is described by explicit widths.
//!
//! # Components
//!
//! - [`WidthRange`] / [`target_widths`]: geometric width generation
//! - [`DPR_QUALITIES`]: the 1x–5x ladder with default qualities
//! - [`SrcsetOptions`]: width range plus the variable-quality switch
//! - [`build_candidates`]: drives a URL factory once per target
//!
//! Entries are joined with `",\n"` so the result can be dropped straight
//! into an HTML `srcset` attribute.

mod dpr;
mod widths;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::params::Params;

pub use dpr::{dpr_quality, DPR_QUALITIES};
pub use widths::{
    target_widths, WidthRange, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_TOLERANCE,
    DEFAULT_WIDTHS,
};

/// Separator between candidates in a srcset attribute.
pub const CANDIDATE_SEPARATOR: &str = ",\n";

// =============================================================================
// Options
// =============================================================================

/// Options for [`UrlBuilder::create_srcset`](crate::UrlBuilder::create_srcset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrcsetOptions {
    /// Range used in width mode
    pub width_range: WidthRange,
    /// Inject the ladder's default quality in ratio mode
    pub variable_quality: bool,
}

impl Default for SrcsetOptions {
    fn default() -> Self {
        Self {
            width_range: WidthRange::default(),
            variable_quality: true,
        }
    }
}

impl SrcsetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width_range(mut self, width_range: WidthRange) -> Self {
        self.width_range = width_range;
        self
    }

    pub fn with_variable_quality(mut self, variable_quality: bool) -> Self {
        self.variable_quality = variable_quality;
        self
    }
}

// =============================================================================
// Mode Selection
// =============================================================================

/// How the candidates of a srcset are described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SrcsetMode {
    /// Fluid image, one candidate per target width
    Width,
    /// Fixed-size image, one candidate per pixel ratio
    Ratio,
}

/// Pick the srcset mode from the caller's parameters.
pub fn select_mode(params: &Params) -> SrcsetMode {
    if params.has("w") || (params.has("h") && params.has("ar")) {
        SrcsetMode::Ratio
    } else {
        SrcsetMode::Width
    }
}

// =============================================================================
// Candidates
// =============================================================================

/// Targets to generate candidates for.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets {
    /// Explicit widths, each emitted as `w=<N>` with an `<N>w` descriptor
    Widths(Vec<u32>),
    /// The 1x–5x ladder, each emitted as `dpr=<N>` with an `<N>x` descriptor
    PixelRatios { variable_quality: bool },
}

/// Descriptor that follows a candidate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    Width(u32),
    PixelRatio(u8),
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Width(width) => write!(f, "{}w", width),
            Descriptor::PixelRatio(ratio) => write!(f, "{}x", ratio),
        }
    }
}

impl Serialize for Descriptor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One image candidate: a URL and its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub url: String,
    pub descriptor: Descriptor,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.descriptor)
    }
}

/// Generate one candidate per target.
///
/// `create_url` is called with a copy of `params` that has the driving
/// parameter set; the caller's parameters are never modified.
pub fn build_candidates<F>(params: &Params, targets: &Targets, create_url: F) -> Vec<Candidate>
where
    F: Fn(&Params) -> String,
{
    let candidates: Vec<Candidate> = match targets {
        Targets::Widths(widths) => widths
            .iter()
            .map(|&width| {
                let mut entry_params = params.clone();
                entry_params.set("w", width.to_string());
                Candidate {
                    url: create_url(&entry_params),
                    descriptor: Descriptor::Width(width),
                }
            })
            .collect(),
        Targets::PixelRatios { variable_quality } => {
            let explicit_quality = params.has("q");
            DPR_QUALITIES
                .iter()
                .map(|&(ratio, quality)| {
                    let mut entry_params = params.clone();
                    entry_params.set("dpr", ratio.to_string());
                    if *variable_quality && !explicit_quality {
                        entry_params.set("q", quality.to_string());
                    }
                    Candidate {
                        url: create_url(&entry_params),
                        descriptor: Descriptor::PixelRatio(ratio),
                    }
                })
                .collect()
        }
    };

    debug!(candidates = candidates.len(), "Built srcset candidates");
    candidates
}

/// Join candidates into a srcset attribute value.
pub fn join_candidates(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(Candidate::to_string)
        .collect::<Vec<_>>()
        .join(CANDIDATE_SEPARATOR)
}
