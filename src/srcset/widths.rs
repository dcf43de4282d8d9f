//! Target width generation.
//!
//! Widths grow geometrically from `min` by a factor of `1 + 2 * tolerance`
//! per step. Doubling the tolerance means any rendered width lies within
//! `tolerance` of a generated width in either direction. The requested
//! `max` always closes the sequence.

use crate::error::ValidationError;
use crate::validate::{validate_range, validate_tolerance};

/// Default minimum width of a fluid-width srcset.
pub const DEFAULT_MIN_WIDTH: u32 = 100;

/// Default maximum width of a fluid-width srcset.
pub const DEFAULT_MAX_WIDTH: u32 = 8192;

/// Default width tolerance (8%).
pub const DEFAULT_TOLERANCE: f64 = 0.08;

/// Widths produced by the default range, `100..=8192` at 8% tolerance.
pub const DEFAULT_WIDTHS: [u32; 31] = [
    100, 116, 135, 156, 181, 210, 244, 283, 328, 380, 441, 512, 594, 689, 799, 927, 1075, 1247,
    1446, 1678, 1946, 2257, 2619, 3038, 3524, 4087, 4741, 5500, 6380, 7401, 8192,
];

/// A validated width range with its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRange {
    min: u32,
    max: u32,
    tolerance: f64,
}

impl Default for WidthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WIDTH,
            max: DEFAULT_MAX_WIDTH,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl WidthRange {
    /// Create a width range, validating all three values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either width is negative
    /// - `max` is less than `min`
    /// - `tolerance` is below 0.01
    pub fn new(min: i32, max: i32, tolerance: f64) -> Result<Self, ValidationError> {
        let (min, max) = validate_range(min, max)?;
        let tolerance = validate_tolerance(tolerance)?;
        Ok(Self {
            min,
            max,
            tolerance,
        })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Generate the target widths for this range.
    pub fn target_widths(&self) -> Vec<u32> {
        target_widths(self)
    }
}

/// Generate strictly increasing target widths covering a range.
///
/// The first element is `min` and the last is `max`. A range where
/// `min == max` yields a single width.
///
/// # Example
///
/// ```
/// use imgix_url::{target_widths, WidthRange};
///
/// let range = WidthRange::new(300, 3000, 0.13).unwrap();
/// assert_eq!(
///     target_widths(&range),
///     vec![300, 378, 476, 600, 756, 953, 1200, 1513, 1906, 2401, 3000]
/// );
/// ```
pub fn target_widths(range: &WidthRange) -> Vec<u32> {
    let (min, max) = (range.min, range.max);

    if min == max {
        return vec![min];
    }

    let factor = 1.0 + 2.0 * range.tolerance;
    let mut widths: Vec<u32> = Vec::new();
    let mut width = f64::from(min);

    while width < f64::from(max) {
        let rounded = width.round() as u32;
        // Small widths can round to the previous value
        if widths.last().map_or(true, |&last| rounded > last) {
            widths.push(rounded);
        }
        // Zero never grows
        if width == 0.0 {
            break;
        }
        width *= factor;
    }

    if widths.last().map_or(true, |&last| last < max) {
        widths.push(max);
    }

    widths
}
