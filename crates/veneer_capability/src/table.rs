//! The static capability table
//!
//! Every `(Platform, CapabilityField)` fact lives in exactly one place: the
//! single `match` below. Correcting a platform fact, or adding a platform, is
//! a one-entry edit here; nothing else in the workspace restates these facts.
//!
//! The table is canonical for the *platform*; device-type refinements (CarPlay
//! is a phone-only fact within the handheld platform) are applied where
//! snapshots are assembled, not here.

use veneer_platform::Platform;

use crate::field::{CapabilityField, CapabilityValue};

/// Edge length of the minimum comfortable touch target, in points
pub const MIN_TOUCH_TARGET_POINTS: f64 = 44.0;

/// The canonical static value for one platform fact
///
/// Total over both enums; there is no failure mode. Fields that make no sense
/// on a platform report the documented default (`false` / `0.0`) rather than
/// erroring, so capability checks can never crash UI construction.
pub fn static_value(platform: Platform, field: CapabilityField) -> CapabilityValue {
    use CapabilityField::*;
    use Platform::*;

    match (platform, field) {
        // Direct touch and its dependents
        (HandheldTouch | Wrist, Touch) => CapabilityValue::Flag(true),
        (Desktop | LivingRoomRemote | SpatialHeadset, Touch) => CapabilityValue::Flag(false),

        // Hover and touch are independent facts: a tablet with a pointer or a
        // headset tracking hands may report both.
        (Desktop | SpatialHeadset, Hover) => CapabilityValue::Flag(true),
        (HandheldTouch | Wrist | LivingRoomRemote, Hover) => CapabilityValue::Flag(false),

        (HandheldTouch | Wrist, HapticFeedback) => CapabilityValue::Flag(true),
        (Desktop | LivingRoomRemote | SpatialHeadset, HapticFeedback) => {
            CapabilityValue::Flag(false)
        }

        // Accessibility: VoiceOver and Switch Control ship everywhere;
        // AssistiveTouch needs a full-size touch screen.
        (_, VoiceOver) => CapabilityValue::Flag(true),
        (_, SwitchControl) => CapabilityValue::Flag(true),
        (HandheldTouch, AssistiveTouch) => CapabilityValue::Flag(true),
        (Desktop | Wrist | LivingRoomRemote | SpatialHeadset, AssistiveTouch) => {
            CapabilityValue::Flag(false)
        }

        // Touch platforms get the fixed 44pt floor; non-touch platforms
        // report zero, never an arbitrary value.
        (HandheldTouch | Wrist, MinTouchTargetSize) => {
            CapabilityValue::Scalar(MIN_TOUCH_TARGET_POINTS)
        }
        (Desktop | LivingRoomRemote | SpatialHeadset, MinTouchTargetSize) => {
            CapabilityValue::Scalar(0.0)
        }

        // CarPlay projects from the handheld phone only; it is never active
        // in the static baseline.
        (HandheldTouch, CarPlay) => CapabilityValue::Flag(true),
        (Desktop | Wrist | LivingRoomRemote | SpatialHeadset, CarPlay) => {
            CapabilityValue::Flag(false)
        }
        (_, CarPlayActive) => CapabilityValue::Flag(false),

        // Image analysis; OCR rides on the vision framework.
        (HandheldTouch | Desktop | SpatialHeadset, VisionFramework) => CapabilityValue::Flag(true),
        (Wrist | LivingRoomRemote, VisionFramework) => CapabilityValue::Flag(false),
        (HandheldTouch | Desktop | SpatialHeadset, Ocr) => CapabilityValue::Flag(true),
        (Wrist | LivingRoomRemote, Ocr) => CapabilityValue::Flag(false),
    }
}
