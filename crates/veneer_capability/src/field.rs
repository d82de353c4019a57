//! Capability fields and values
//!
//! A [`CapabilityField`] names one fact about a platform; a
//! [`CapabilityValue`] carries its boolean or numeric value. Accessors are
//! infallible: asking a flag for its scalar (or vice versa) yields the
//! documented default rather than an error, because capability checks must
//! never crash UI construction code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named fact about a platform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityField {
    /// Direct touch input on the main display
    Touch,
    /// Hover feedback (pointer or tracked hands)
    Hover,
    /// Haptic feedback engine
    HapticFeedback,
    /// VoiceOver screen reader
    VoiceOver,
    /// Switch Control scanning input
    SwitchControl,
    /// AssistiveTouch on-screen pointer
    AssistiveTouch,
    /// Minimum hit-target edge length, in points (scalar)
    MinTouchTargetSize,
    /// CarPlay projection is supported by this platform
    CarPlay,
    /// CarPlay projection is currently active
    CarPlayActive,
    /// Vision framework (image analysis) is available
    VisionFramework,
    /// Text recognition (OCR) is available
    Ocr,
}

impl CapabilityField {
    /// All queryable fields, in declaration order
    pub const ALL: [CapabilityField; 11] = [
        CapabilityField::Touch,
        CapabilityField::Hover,
        CapabilityField::HapticFeedback,
        CapabilityField::VoiceOver,
        CapabilityField::SwitchControl,
        CapabilityField::AssistiveTouch,
        CapabilityField::MinTouchTargetSize,
        CapabilityField::CarPlay,
        CapabilityField::CarPlayActive,
        CapabilityField::VisionFramework,
        CapabilityField::Ocr,
    ];

    /// Whether this field carries a scalar value rather than a flag
    pub fn is_scalar(&self) -> bool {
        matches!(self, CapabilityField::MinTouchTargetSize)
    }

    /// Stable lowercase name, suitable for logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            CapabilityField::Touch => "touch",
            CapabilityField::Hover => "hover",
            CapabilityField::HapticFeedback => "haptic-feedback",
            CapabilityField::VoiceOver => "voice-over",
            CapabilityField::SwitchControl => "switch-control",
            CapabilityField::AssistiveTouch => "assistive-touch",
            CapabilityField::MinTouchTargetSize => "min-touch-target-size",
            CapabilityField::CarPlay => "car-play",
            CapabilityField::CarPlayActive => "car-play-active",
            CapabilityField::VisionFramework => "vision-framework",
            CapabilityField::Ocr => "ocr",
        }
    }
}

impl fmt::Display for CapabilityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of one capability field
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CapabilityValue {
    /// Boolean capability
    Flag(bool),
    /// Numeric capability (points, seconds, ...)
    Scalar(f64),
}

impl CapabilityValue {
    /// Interpret as a flag; scalars read as `false`
    pub fn as_flag(&self) -> bool {
        match self {
            CapabilityValue::Flag(value) => *value,
            CapabilityValue::Scalar(_) => false,
        }
    }

    /// Interpret as a scalar; flags read as `0.0`
    pub fn as_scalar(&self) -> f64 {
        match self {
            CapabilityValue::Flag(_) => 0.0,
            CapabilityValue::Scalar(value) => *value,
        }
    }

    /// The documented default for an unknown or future field
    pub fn default_for(field: CapabilityField) -> Self {
        if field.is_scalar() {
            CapabilityValue::Scalar(0.0)
        } else {
            CapabilityValue::Flag(false)
        }
    }
}

impl From<bool> for CapabilityValue {
    fn from(value: bool) -> Self {
        CapabilityValue::Flag(value)
    }
}

impl From<f64> for CapabilityValue {
    fn from(value: f64) -> Self {
        CapabilityValue::Scalar(value)
    }
}

impl fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityValue::Flag(value) => write!(f, "{value}"),
            CapabilityValue::Scalar(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_never_fail() {
        assert!(!CapabilityValue::Flag(false).as_flag());
        assert!(CapabilityValue::Flag(true).as_flag());
        assert_eq!(CapabilityValue::Flag(true).as_scalar(), 0.0);
        assert!(!CapabilityValue::Scalar(44.0).as_flag());
        assert_eq!(CapabilityValue::Scalar(44.0).as_scalar(), 44.0);
    }

    #[test]
    fn test_defaults_match_field_kind() {
        for field in CapabilityField::ALL {
            let default = CapabilityValue::default_for(field);
            if field.is_scalar() {
                assert_eq!(default, CapabilityValue::Scalar(0.0));
            } else {
                assert_eq!(default, CapabilityValue::Flag(false));
            }
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        for a in CapabilityField::ALL {
            for b in CapabilityField::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }
}
