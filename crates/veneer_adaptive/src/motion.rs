//! Animation duration bounds
//!
//! Platforms bound how long UI animations may run: the wrist and living-room
//! platforms keep motion short, desktop tolerates longer transitions. The
//! bounds are facts about the platform, not a timing engine.

use serde::{Deserialize, Serialize};

use veneer_platform::Platform;

/// Allowed animation duration range for one platform, in seconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationBounds {
    /// Shortest allowed duration
    pub min: f64,
    /// Longest allowed duration
    pub max: f64,
}

/// The duration bounds for a platform
pub fn duration_bounds(platform: Platform) -> DurationBounds {
    match platform {
        Platform::HandheldTouch => DurationBounds { min: 0.1, max: 1.0 },
        Platform::Desktop => DurationBounds { min: 0.1, max: 2.0 },
        Platform::Wrist => DurationBounds { min: 0.05, max: 0.5 },
        Platform::LivingRoomRemote => DurationBounds { min: 0.1, max: 0.8 },
        Platform::SpatialHeadset => DurationBounds { min: 0.1, max: 1.5 },
    }
}

/// Clamp a requested duration into the platform's bounds
///
/// Non-finite requests degrade to the platform minimum.
pub fn clamp_duration(platform: Platform, seconds: f64) -> f64 {
    let bounds = duration_bounds(platform);
    if !seconds.is_finite() {
        return bounds.min;
    }
    seconds.clamp(bounds.min, bounds.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_ordered() {
        for platform in Platform::ALL {
            let bounds = duration_bounds(platform);
            assert!(bounds.min > 0.0, "{platform}");
            assert!(bounds.min <= bounds.max, "{platform}");
        }
    }

    #[test]
    fn test_clamps_both_ends() {
        assert_eq!(clamp_duration(Platform::Wrist, 3.0), 0.5);
        assert_eq!(clamp_duration(Platform::Wrist, 0.0), 0.05);
        assert_eq!(clamp_duration(Platform::Desktop, 1.5), 1.5);
    }

    #[test]
    fn test_nan_degrades_to_minimum() {
        assert_eq!(clamp_duration(Platform::HandheldTouch, f64::NAN), 0.1);
        assert_eq!(clamp_duration(Platform::HandheldTouch, f64::INFINITY), 1.0);
    }
}
