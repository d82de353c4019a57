//! Frame constraint resolution
//!
//! [`FrameConstraints`] captures the optional min/ideal/max bounds a wrapper
//! declares for one view; [`FrameConstraints::resolve`] clamps a proposed
//! size into them. Hostile inputs (NaN, negative, inverted min/max) degrade
//! to the nearest valid bound instead of propagating garbage into layout.

use serde::{Deserialize, Serialize};

/// A width/height pair, in points
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
}

impl Size {
    /// Create a size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Optional min/ideal/max bounds per axis
///
/// Unset bounds leave that side of the axis unconstrained. All constructors
/// go through the same sanitization on resolve, so a constraint built from
/// bad data still resolves to something usable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameConstraints {
    /// Minimum width, if constrained
    pub min_width: Option<f64>,
    /// Preferred width, used when the proposal is unusable
    pub ideal_width: Option<f64>,
    /// Maximum width, if constrained
    pub max_width: Option<f64>,
    /// Minimum height, if constrained
    pub min_height: Option<f64>,
    /// Preferred height, used when the proposal is unusable
    pub ideal_height: Option<f64>,
    /// Maximum height, if constrained
    pub max_height: Option<f64>,
}

impl FrameConstraints {
    /// No constraints on either axis
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Fixed size on both axes
    pub fn exact(width: f64, height: f64) -> Self {
        Self {
            min_width: Some(width),
            ideal_width: Some(width),
            max_width: Some(width),
            min_height: Some(height),
            ideal_height: Some(height),
            max_height: Some(height),
        }
    }

    /// Clamp a proposed size into these constraints
    pub fn resolve(&self, proposed: Size) -> Size {
        Size {
            width: resolve_axis(
                proposed.width,
                self.min_width,
                self.ideal_width,
                self.max_width,
            ),
            height: resolve_axis(
                proposed.height,
                self.min_height,
                self.ideal_height,
                self.max_height,
            ),
        }
    }
}

/// Drop bounds that cannot participate in layout
fn sanitize(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| value.is_finite() && *value >= 0.0)
}

fn resolve_axis(proposed: f64, min: Option<f64>, ideal: Option<f64>, max: Option<f64>) -> f64 {
    let min = sanitize(min);
    let ideal = sanitize(ideal);
    let max = sanitize(max);

    // An unusable proposal falls back to the ideal, then the nearest bound.
    let mut value = if proposed.is_finite() && proposed >= 0.0 {
        proposed
    } else {
        ideal.or(min).or(max).unwrap_or(0.0)
    };

    // Inverted bounds collapse toward the minimum.
    let max = match (min, max) {
        (Some(lo), Some(hi)) => Some(hi.max(lo)),
        (_, hi) => hi,
    };

    if let Some(lo) = min {
        value = value.max(lo);
    }
    if let Some(hi) = max {
        value = value.min(hi);
    }
    value
}
