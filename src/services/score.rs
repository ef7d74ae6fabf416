//! Score classification shared by every surface that displays a score.

use serde::Serialize;
use utoipa::ToSchema;

/// Display color band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Label and color band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoreClassification {
    pub label: &'static str,
    pub band: ColorBand,
}

impl ScoreClassification {
    const fn new(label: &'static str, band: ColorBand) -> Self {
        ScoreClassification { label, band }
    }
}

/// Classify a score; bands are inclusive on their lower bound.
///
/// | score        | label     | band   |
/// |--------------|-----------|--------|
/// | >= 90        | Excellent | green  |
/// | 75 to < 90   | Good      | yellow |
/// | 50 to < 75   | Attention | orange |
/// | < 50         | Critical  | red    |
/// | absent / NaN | N/A       | gray   |
pub fn classify(score: Option<f64>) -> ScoreClassification {
    match score.filter(|s| !s.is_nan()) {
        None => ScoreClassification::new("N/A", ColorBand::Gray),
        Some(s) if s >= 90.0 => ScoreClassification::new("Excellent", ColorBand::Green),
        Some(s) if s >= 75.0 => ScoreClassification::new("Good", ColorBand::Yellow),
        Some(s) if s >= 50.0 => ScoreClassification::new("Attention", ColorBand::Orange),
        Some(_) => ScoreClassification::new("Critical", ColorBand::Red),
    }
}

/// Band of a per-runner bar; a runner always has a score.
pub fn bar_band(score: f64) -> ColorBand {
    classify(Some(score)).band
}

/// `passed / total` as a percentage rounded to one decimal place.
///
/// `None` when `total` is zero.
pub fn percentage(passed: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((f64::from(passed) / f64::from(total) * 1000.0).round() / 10.0)
}
