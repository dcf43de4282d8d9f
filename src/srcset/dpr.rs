//! Device-pixel-ratio ladder.
//!
//! Fixed-size images are offered at 1x through 5x. Higher densities default
//! to lower quality so the encoded byte size stays roughly flat as the pixel
//! count grows.

/// Pixel ratios in ascending order, each with its default quality.
pub const DPR_QUALITIES: [(u8, u8); 5] = [(1, 75), (2, 50), (3, 35), (4, 23), (5, 20)];

/// Default quality for a pixel ratio, if the ratio is on the ladder.
pub fn dpr_quality(ratio: u8) -> Option<u8> {
    DPR_QUALITIES
        .iter()
        .find(|(r, _)| *r == ratio)
        .map(|(_, quality)| *quality)
}
