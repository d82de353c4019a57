//! Capability snapshots
//!
//! A [`CapabilitySnapshot`] is every capability field assembled for one
//! platform at one instant, with the platform/device/context metadata needed
//! to validate it. Snapshots are derived fresh on every query — never cached —
//! because overrides can change between calls within the same process, and
//! test isolation depends on that.
//!
//! One shared struct serves production code and tests alike; test-local
//! capability models drifting away from the real one is exactly the failure
//! mode this type exists to prevent.

use serde::{Deserialize, Serialize};

use veneer_platform::{DeviceContext, DeviceType, Platform};

use crate::field::{CapabilityField, CapabilityValue};

/// Every capability field for one platform at one instant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// Platform the snapshot was assembled for
    pub platform: Platform,
    /// Hardware form factor
    pub device_type: DeviceType,
    /// Presentation context
    pub device_context: DeviceContext,

    /// Direct touch input
    pub supports_touch: bool,
    /// Hover feedback
    pub supports_hover: bool,
    /// Haptic feedback engine
    pub supports_haptic_feedback: bool,
    /// VoiceOver screen reader
    pub supports_voice_over: bool,
    /// Switch Control scanning input
    pub supports_switch_control: bool,
    /// AssistiveTouch on-screen pointer
    pub supports_assistive_touch: bool,
    /// Minimum hit-target edge length, in points
    pub min_touch_target_size: f64,
    /// CarPlay projection supported
    pub supports_car_play: bool,
    /// CarPlay projection currently active
    pub is_car_play_active: bool,
    /// Vision framework available
    pub supports_vision_framework: bool,
    /// Text recognition available
    pub supports_ocr: bool,
}

/// A snapshot used as the input to consistency validation
///
/// The glossary-level distinction is that a feature matrix carries the
/// platform/device/context metadata alongside the capability fields; the
/// snapshot type already does, so the two are one type here.
pub type FeatureMatrix = CapabilitySnapshot;

impl CapabilitySnapshot {
    /// Read one field back out of the snapshot
    ///
    /// Total over [`CapabilityField`]; the validator compares snapshots
    /// field-by-field through this accessor so that adding a field cannot
    /// silently escape validation.
    pub fn field(&self, field: CapabilityField) -> CapabilityValue {
        match field {
            CapabilityField::Touch => self.supports_touch.into(),
            CapabilityField::Hover => self.supports_hover.into(),
            CapabilityField::HapticFeedback => self.supports_haptic_feedback.into(),
            CapabilityField::VoiceOver => self.supports_voice_over.into(),
            CapabilityField::SwitchControl => self.supports_switch_control.into(),
            CapabilityField::AssistiveTouch => self.supports_assistive_touch.into(),
            CapabilityField::MinTouchTargetSize => self.min_touch_target_size.into(),
            CapabilityField::CarPlay => self.supports_car_play.into(),
            CapabilityField::CarPlayActive => self.is_car_play_active.into(),
            CapabilityField::VisionFramework => self.supports_vision_framework.into(),
            CapabilityField::Ocr => self.supports_ocr.into(),
        }
    }

    /// Write one field into the snapshot
    ///
    /// Flags and scalars are coerced through the same infallible accessors as
    /// registry queries; a flag written to the scalar field reads as `0.0`.
    pub fn set_field(&mut self, field: CapabilityField, value: CapabilityValue) {
        match field {
            CapabilityField::Touch => self.supports_touch = value.as_flag(),
            CapabilityField::Hover => self.supports_hover = value.as_flag(),
            CapabilityField::HapticFeedback => self.supports_haptic_feedback = value.as_flag(),
            CapabilityField::VoiceOver => self.supports_voice_over = value.as_flag(),
            CapabilityField::SwitchControl => self.supports_switch_control = value.as_flag(),
            CapabilityField::AssistiveTouch => self.supports_assistive_touch = value.as_flag(),
            CapabilityField::MinTouchTargetSize => {
                self.min_touch_target_size = value.as_scalar();
            }
            CapabilityField::CarPlay => self.supports_car_play = value.as_flag(),
            CapabilityField::CarPlayActive => self.is_car_play_active = value.as_flag(),
            CapabilityField::VisionFramework => {
                self.supports_vision_framework = value.as_flag();
            }
            CapabilityField::Ocr => self.supports_ocr = value.as_flag(),
        }
    }
}
