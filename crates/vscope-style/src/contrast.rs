//! WCAG relative luminance, contrast ratio, and AA/AAA classification.
//!
//! The math follows the WCAG 2.x definitions exactly; conformance
//! decisions (AA/AAA pass) are made on the raw ratio, not on a rounded
//! display value.

use crate::color::Rgb;

/// Canvas fallback when no ancestor paints a background.
pub const CANVAS_DEFAULT: Rgb = Rgb::new(255, 255, 255);

/// AA minimum ratio for normal text.
pub const AA_NORMAL: f64 = 4.5;
/// AA minimum ratio for large text.
pub const AA_LARGE: f64 = 3.0;
/// AAA minimum ratio for normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// AAA minimum ratio for large text.
pub const AAA_LARGE: f64 = 4.5;

/// Font size/weight needed for the large-text classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Font size in points.
    pub size_pt: f64,
    /// Bold or heavier weight.
    pub bold: bool,
}

impl FontMetrics {
    #[must_use]
    pub const fn new(size_pt: f64, bold: bool) -> Self {
        Self { size_pt, bold }
    }

    /// WCAG large text: >= 18pt, or >= 14pt bold.
    #[must_use]
    pub fn is_large_text(self) -> bool {
        self.size_pt >= 18.0 || (self.bold && self.size_pt >= 14.0)
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        // Browser default body text.
        Self {
            size_pt: 12.0,
            bold: false,
        }
    }
}

/// Contrast classification for a fg/bg pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    /// WCAG contrast ratio, always >= 1.0.
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub is_large_text: bool,
}

impl ContrastResult {
    /// Classify a raw ratio against the AA/AAA thresholds.
    #[must_use]
    pub fn classify(ratio: f64, is_large_text: bool) -> Self {
        let (aa, aaa) = if is_large_text {
            (AA_LARGE, AAA_LARGE)
        } else {
            (AA_NORMAL, AAA_NORMAL)
        };
        Self {
            ratio,
            passes_aa: ratio >= aa,
            passes_aaa: ratio >= aaa,
            is_large_text,
        }
    }
}

/// Relative luminance per WCAG 2.x.
///
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = [color.r, color.g, color.b].map(|c| {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// Contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric: swapping the arguments yields the same ratio.
#[must_use]
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let lf = relative_luminance(fg);
    let lb = relative_luminance(bg);
    let (lighter, darker) = if lf > lb { (lf, lb) } else { (lb, lf) };
    (lighter + 0.05) / (darker + 0.05)
}
