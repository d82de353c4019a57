//! Feature-matrix validation
//!
//! Two pure checks over an assembled [`CapabilitySnapshot`]:
//!
//! - [`violations`] / [`is_internally_consistent`] evaluate the cross-field
//!   invariants (haptics require touch, OCR requires the vision framework,
//!   CarPlay rules, the 44pt touch-target floor) and report every rule the
//!   snapshot breaks, in rule order.
//! - [`satisfies_platform_constraints`] is the stricter platform-exact check:
//!   every capability field must match the platform's canonical profile from
//!   the static table. It exists to catch silent capability drift when a
//!   table entry or a new field is edited incorrectly.
//!
//! Validation is advisory: tests assert on it, production UI code never gates
//! on it, and nothing here errors or panics.

use std::fmt;

use serde::{Deserialize, Serialize};

use veneer_platform::{DeviceContext, DeviceType, Platform};

use crate::field::CapabilityField;
use crate::snapshot::CapabilitySnapshot;
use crate::table::{static_value, MIN_TOUCH_TARGET_POINTS};

/// One cross-field consistency rule
///
/// Declaration order is evaluation order; [`violations`] reports rules in
/// this order so diagnostics are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsistencyRule {
    /// Haptic feedback requires a touch-capable surface
    HapticsRequireTouch,
    /// AssistiveTouch requires a touch-capable surface
    AssistiveTouchRequiresTouch,
    /// OCR requires the vision framework
    OcrRequiresVision,
    /// Active CarPlay requires CarPlay support
    CarPlayActiveRequiresSupport,
    /// CarPlay support exists only on the handheld phone
    CarPlayIsPhoneOnly,
    /// Active CarPlay requires the in-car context
    CarPlayActiveRequiresInCar,
    /// The automotive device type requires the in-car context
    AutomotiveRequiresInCar,
    /// Touch platforms use the fixed 44pt target floor, others zero
    TouchTargetIsFixed,
}

impl ConsistencyRule {
    /// All rules, in evaluation order
    pub const ALL: [ConsistencyRule; 8] = [
        ConsistencyRule::HapticsRequireTouch,
        ConsistencyRule::AssistiveTouchRequiresTouch,
        ConsistencyRule::OcrRequiresVision,
        ConsistencyRule::CarPlayActiveRequiresSupport,
        ConsistencyRule::CarPlayIsPhoneOnly,
        ConsistencyRule::CarPlayActiveRequiresInCar,
        ConsistencyRule::AutomotiveRequiresInCar,
        ConsistencyRule::TouchTargetIsFixed,
    ];

    /// Human-readable explanation for diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            ConsistencyRule::HapticsRequireTouch => {
                "haptic feedback is reported without a touch surface"
            }
            ConsistencyRule::AssistiveTouchRequiresTouch => {
                "AssistiveTouch is reported without a touch surface"
            }
            ConsistencyRule::OcrRequiresVision => {
                "OCR is reported without the vision framework"
            }
            ConsistencyRule::CarPlayActiveRequiresSupport => {
                "CarPlay is active but not supported"
            }
            ConsistencyRule::CarPlayIsPhoneOnly => {
                "CarPlay support is reported off the handheld phone"
            }
            ConsistencyRule::CarPlayActiveRequiresInCar => {
                "CarPlay is active outside the in-car context"
            }
            ConsistencyRule::AutomotiveRequiresInCar => {
                "automotive device type outside the in-car context"
            }
            ConsistencyRule::TouchTargetIsFixed => {
                "minimum touch target deviates from the fixed floor"
            }
        }
    }

    /// Whether the snapshot satisfies this rule
    pub fn holds(&self, snapshot: &CapabilitySnapshot) -> bool {
        match self {
            ConsistencyRule::HapticsRequireTouch => {
                !snapshot.supports_haptic_feedback || snapshot.supports_touch
            }
            ConsistencyRule::AssistiveTouchRequiresTouch => {
                !snapshot.supports_assistive_touch || snapshot.supports_touch
            }
            ConsistencyRule::OcrRequiresVision => {
                !snapshot.supports_ocr || snapshot.supports_vision_framework
            }
            ConsistencyRule::CarPlayActiveRequiresSupport => {
                !snapshot.is_car_play_active || snapshot.supports_car_play
            }
            ConsistencyRule::CarPlayIsPhoneOnly => {
                !snapshot.supports_car_play
                    || (snapshot.platform == Platform::HandheldTouch
                        && car_play_capable(snapshot.device_type))
            }
            ConsistencyRule::CarPlayActiveRequiresInCar => {
                !snapshot.is_car_play_active || snapshot.device_context == DeviceContext::InCar
            }
            ConsistencyRule::AutomotiveRequiresInCar => {
                snapshot.device_type != DeviceType::Automotive
                    || snapshot.device_context == DeviceContext::InCar
            }
            ConsistencyRule::TouchTargetIsFixed => {
                let expected = if snapshot.supports_touch {
                    MIN_TOUCH_TARGET_POINTS
                } else {
                    0.0
                };
                snapshot.min_touch_target_size == expected
            }
        }
    }
}

impl fmt::Display for ConsistencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Device types that can carry a CarPlay session
fn car_play_capable(device_type: DeviceType) -> bool {
    matches!(device_type, DeviceType::Phone | DeviceType::Automotive)
}

/// Every rule the snapshot violates, in rule order
pub fn violations(snapshot: &CapabilitySnapshot) -> Vec<ConsistencyRule> {
    ConsistencyRule::ALL
        .into_iter()
        .filter(|rule| !rule.holds(snapshot))
        .collect()
}

/// Whether the snapshot violates no cross-field rule
pub fn is_internally_consistent(snapshot: &CapabilitySnapshot) -> bool {
    ConsistencyRule::ALL.iter().all(|rule| rule.holds(snapshot))
}

/// Whether every capability field matches the platform's canonical profile
///
/// Field-exact against the static table, with one relaxation: CarPlay may be
/// active when the full in-car combination holds (supported, CarPlay-capable
/// device, in-car context). Any other flipped field fails.
pub fn satisfies_platform_constraints(snapshot: &CapabilitySnapshot) -> bool {
    if !snapshot.device_type.is_valid_for(snapshot.platform) {
        return false;
    }

    for field in CapabilityField::ALL {
        let actual = snapshot.field(field);
        match field {
            CapabilityField::CarPlay => {
                let expected = static_value(snapshot.platform, field).as_flag()
                    && car_play_capable(snapshot.device_type);
                if actual.as_flag() != expected {
                    return false;
                }
            }
            CapabilityField::CarPlayActive => {
                let in_car_session = snapshot.supports_car_play
                    && car_play_capable(snapshot.device_type)
                    && snapshot.device_context == DeviceContext::InCar;
                if actual.as_flag() && !in_car_session {
                    return false;
                }
            }
            _ => {
                if actual != static_value(snapshot.platform, field) {
                    return false;
                }
            }
        }
    }

    // The metadata couplings are part of the profile too.
    ConsistencyRule::AutomotiveRequiresInCar.holds(snapshot)
        && ConsistencyRule::CarPlayActiveRequiresInCar.holds(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CapabilityValue;
    use crate::registry::CapabilityRegistry;

    fn baseline(platform: Platform) -> CapabilitySnapshot {
        CapabilityRegistry::new().snapshot(platform)
    }

    #[test]
    fn test_all_baselines_are_consistent() {
        for platform in Platform::ALL {
            let snapshot = baseline(platform);
            assert!(is_internally_consistent(&snapshot), "{platform}");
            assert!(violations(&snapshot).is_empty(), "{platform}");
            assert!(satisfies_platform_constraints(&snapshot), "{platform}");
        }
    }

    #[test]
    fn test_haptics_without_touch_is_flagged() {
        let mut snapshot = baseline(Platform::HandheldTouch);
        snapshot.supports_touch = false;
        snapshot.min_touch_target_size = 0.0;

        assert!(!is_internally_consistent(&snapshot));
        let violated = violations(&snapshot);
        assert!(violated.contains(&ConsistencyRule::HapticsRequireTouch));
        assert!(violated.contains(&ConsistencyRule::AssistiveTouchRequiresTouch));
    }

    #[test]
    fn test_ocr_without_vision_is_flagged() {
        let mut snapshot = baseline(Platform::Desktop);
        snapshot.supports_vision_framework = false;

        assert_eq!(violations(&snapshot), vec![ConsistencyRule::OcrRequiresVision]);
    }

    #[test]
    fn test_active_car_play_needs_support_and_context() {
        let mut snapshot = baseline(Platform::Desktop);
        snapshot.is_car_play_active = true;

        let violated = violations(&snapshot);
        assert!(violated.contains(&ConsistencyRule::CarPlayActiveRequiresSupport));
        assert!(violated.contains(&ConsistencyRule::CarPlayActiveRequiresInCar));
    }

    #[test]
    fn test_in_car_phone_session_is_consistent() {
        let registry = CapabilityRegistry::new();
        let mut snapshot = registry.snapshot_for(
            Platform::HandheldTouch,
            DeviceType::Phone,
            DeviceContext::InCar,
        );
        snapshot.is_car_play_active = true;

        assert!(is_internally_consistent(&snapshot));
        assert!(satisfies_platform_constraints(&snapshot));
    }

    #[test]
    fn test_automotive_outside_car_is_flagged() {
        let registry = CapabilityRegistry::new();
        let snapshot = registry.snapshot_for(
            Platform::HandheldTouch,
            DeviceType::Automotive,
            DeviceContext::Standard,
        );

        assert!(violations(&snapshot).contains(&ConsistencyRule::AutomotiveRequiresInCar));
        assert!(!satisfies_platform_constraints(&snapshot));
    }

    #[test]
    fn test_arbitrary_touch_target_is_flagged() {
        let mut snapshot = baseline(Platform::HandheldTouch);
        snapshot.min_touch_target_size = 60.0;

        assert_eq!(violations(&snapshot), vec![ConsistencyRule::TouchTargetIsFixed]);
    }

    #[test]
    fn test_violations_report_in_rule_order() {
        let mut snapshot = baseline(Platform::HandheldTouch);
        snapshot.supports_touch = false;
        snapshot.min_touch_target_size = 0.0;
        snapshot.supports_vision_framework = false;

        assert_eq!(
            violations(&snapshot),
            vec![
                ConsistencyRule::HapticsRequireTouch,
                ConsistencyRule::AssistiveTouchRequiresTouch,
                ConsistencyRule::OcrRequiresVision,
            ]
        );
    }

    #[test]
    fn test_any_single_flip_breaks_desktop_profile() {
        let clean = baseline(Platform::Desktop);
        assert!(satisfies_platform_constraints(&clean));

        for field in CapabilityField::ALL {
            let mut flipped = clean.clone();
            let value = match flipped.field(field) {
                CapabilityValue::Flag(flag) => CapabilityValue::Flag(!flag),
                CapabilityValue::Scalar(scalar) => CapabilityValue::Scalar(scalar + 1.0),
            };
            flipped.set_field(field, value);
            assert!(!satisfies_platform_constraints(&flipped), "{field}");
        }
    }

    #[test]
    fn test_overridden_contradiction_reaches_validator() {
        // Force touch off while haptics stays on, as a test would via
        // overrides, and confirm the assembled snapshot fails validation.
        let mut registry = CapabilityRegistry::new();
        registry.set_override(CapabilityField::Touch, false);
        registry.set_override(CapabilityField::HapticFeedback, true);

        let snapshot = registry.snapshot(Platform::HandheldTouch);
        assert!(!is_internally_consistent(&snapshot));
        assert!(violations(&snapshot).contains(&ConsistencyRule::HapticsRequireTouch));
    }

    #[test]
    fn test_wrong_device_type_breaks_profile() {
        let registry = CapabilityRegistry::new();
        let mut snapshot = registry.snapshot(Platform::Desktop);
        snapshot.device_type = DeviceType::Phone;
        assert!(!satisfies_platform_constraints(&snapshot));
    }
}
