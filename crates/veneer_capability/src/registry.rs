//! Capability registry
//!
//! [`CapabilityRegistry`] answers capability queries: an override installed on
//! this registry wins, the static table answers otherwise. The registry is an
//! explicit context object, not ambient state — each test constructs its own,
//! so parallel test cases cannot observe each other's overrides by
//! construction. Wrapper code that wants ambient access goes through
//! [`crate::ambient`] instead.

use rustc_hash::FxHashMap;
use tracing::debug;

use veneer_platform::{DeviceContext, DeviceType, Platform};

use crate::field::{CapabilityField, CapabilityValue};
use crate::snapshot::CapabilitySnapshot;
use crate::table::static_value;

/// Answers "does platform P support capability C right now"
///
/// Lookups are total: there is no failure mode, and unknown combinations fall
/// back to the documented defaults. The only mutable state is the override
/// map, owned by this registry alone.
#[derive(Clone, Debug, Default)]
pub struct CapabilityRegistry {
    /// Per-registry overrides; empty in production use
    overrides: FxHashMap<CapabilityField, CapabilityValue>,
}

impl CapabilityRegistry {
    /// Create a registry with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up one capability, override first, static table second
    pub fn capability(&self, field: CapabilityField, platform: Platform) -> CapabilityValue {
        if let Some(value) = self.overrides.get(&field) {
            return *value;
        }
        static_value(platform, field)
    }

    /// Install an override for one field
    ///
    /// The override supersedes the static table for every subsequent query on
    /// this registry until cleared.
    pub fn set_override(&mut self, field: CapabilityField, value: impl Into<CapabilityValue>) {
        let value = value.into();
        debug!(field = field.name(), %value, "capability override installed");
        self.overrides.insert(field, value);
    }

    /// Remove one override; clearing an absent override is a no-op
    pub fn clear_override(&mut self, field: CapabilityField) {
        if self.overrides.remove(&field).is_some() {
            debug!(field = field.name(), "capability override cleared");
        }
    }

    /// Remove every override; idempotent
    pub fn clear_all_overrides(&mut self) {
        if !self.overrides.is_empty() {
            debug!(count = self.overrides.len(), "all capability overrides cleared");
            self.overrides.clear();
        }
    }

    /// Whether an override is installed for this field
    pub fn has_override(&self, field: CapabilityField) -> bool {
        self.overrides.contains_key(&field)
    }

    /// Assemble every field for a platform, with its default device type and
    /// the standard context
    ///
    /// Derived fresh on every call; snapshots are never cached because
    /// overrides can change between calls within the same process.
    pub fn snapshot(&self, platform: Platform) -> CapabilitySnapshot {
        self.snapshot_for(platform, DeviceType::default_for(platform), DeviceContext::Standard)
    }

    /// Assemble every field for an explicit (platform, device, context) triple
    pub fn snapshot_for(
        &self,
        platform: Platform,
        device_type: DeviceType,
        device_context: DeviceContext,
    ) -> CapabilitySnapshot {
        let flag = |field| self.capability(field, platform).as_flag();

        // Within the handheld platform only phones (and the head units they
        // project onto) carry CarPlay; an explicit override still wins over
        // the device refinement.
        let supports_car_play = if self.has_override(CapabilityField::CarPlay) {
            flag(CapabilityField::CarPlay)
        } else {
            flag(CapabilityField::CarPlay)
                && matches!(device_type, DeviceType::Phone | DeviceType::Automotive)
        };

        CapabilitySnapshot {
            platform,
            device_type,
            device_context,
            supports_touch: flag(CapabilityField::Touch),
            supports_hover: flag(CapabilityField::Hover),
            supports_haptic_feedback: flag(CapabilityField::HapticFeedback),
            supports_voice_over: flag(CapabilityField::VoiceOver),
            supports_switch_control: flag(CapabilityField::SwitchControl),
            supports_assistive_touch: flag(CapabilityField::AssistiveTouch),
            min_touch_target_size: self
                .capability(CapabilityField::MinTouchTargetSize, platform)
                .as_scalar(),
            supports_car_play,
            is_car_play_active: flag(CapabilityField::CarPlayActive),
            supports_vision_framework: flag(CapabilityField::VisionFramework),
            supports_ocr: flag(CapabilityField::Ocr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_override_wins_over_table() {
        let mut registry = CapabilityRegistry::new();
        assert!(!registry
            .capability(CapabilityField::Touch, Platform::Desktop)
            .as_flag());

        registry.set_override(CapabilityField::Touch, true);
        assert!(registry
            .capability(CapabilityField::Touch, Platform::Desktop)
            .as_flag());
    }

    #[test]
    fn test_clear_restores_prior_value() {
        let mut registry = CapabilityRegistry::new();
        let before = registry.capability(CapabilityField::Touch, Platform::HandheldTouch);

        registry.set_override(CapabilityField::Touch, false);
        registry.clear_override(CapabilityField::Touch);

        let after = registry.capability(CapabilityField::Touch, Platform::HandheldTouch);
        assert_eq!(before, after);
    }

    #[test]
    fn test_clearing_absent_override_is_noop() {
        let mut registry = CapabilityRegistry::new();
        registry.clear_override(CapabilityField::Hover);
        registry.clear_all_overrides();
        assert!(!registry.has_override(CapabilityField::Hover));
    }

    #[test]
    fn test_clear_all_removes_everything() {
        let mut registry = CapabilityRegistry::new();
        registry.set_override(CapabilityField::Touch, false);
        registry.set_override(CapabilityField::MinTouchTargetSize, 60.0);
        registry.clear_all_overrides();

        assert!(!registry.has_override(CapabilityField::Touch));
        assert!(!registry.has_override(CapabilityField::MinTouchTargetSize));
    }

    #[test]
    fn test_scalar_override() {
        let mut registry = CapabilityRegistry::new();
        registry.set_override(CapabilityField::MinTouchTargetSize, 60.0);
        let snapshot = registry.snapshot(Platform::HandheldTouch);
        assert_eq!(snapshot.min_touch_target_size, 60.0);
    }

    #[test]
    fn test_registries_are_isolated_across_threads() {
        // Conflicting overrides on two registries in two threads must not
        // observe each other.
        let touch = thread::spawn(|| {
            let mut registry = CapabilityRegistry::new();
            registry.set_override(CapabilityField::Touch, true);
            registry.capability(CapabilityField::Touch, Platform::Desktop).as_flag()
        });
        let no_touch = thread::spawn(|| {
            let mut registry = CapabilityRegistry::new();
            registry.set_override(CapabilityField::Touch, false);
            registry
                .capability(CapabilityField::Touch, Platform::HandheldTouch)
                .as_flag()
        });

        assert!(touch.join().unwrap());
        assert!(!no_touch.join().unwrap());
    }

    #[test]
    fn test_phone_snapshot_baseline() {
        let registry = CapabilityRegistry::new();
        let snapshot = registry.snapshot(Platform::HandheldTouch);

        assert!(snapshot.supports_touch);
        assert!(!snapshot.supports_hover);
        assert!(snapshot.supports_haptic_feedback);
        assert!(snapshot.supports_voice_over);
        assert!(snapshot.supports_switch_control);
        assert!(snapshot.supports_assistive_touch);
        assert_eq!(snapshot.min_touch_target_size, 44.0);
        assert!(snapshot.supports_car_play);
        assert!(!snapshot.is_car_play_active);
    }

    #[test]
    fn test_desktop_snapshot_baseline() {
        let registry = CapabilityRegistry::new();
        let snapshot = registry.snapshot(Platform::Desktop);

        assert!(!snapshot.supports_touch);
        assert!(snapshot.supports_hover);
        assert!(!snapshot.supports_haptic_feedback);
        assert!(!snapshot.supports_assistive_touch);
        assert_eq!(snapshot.min_touch_target_size, 0.0);
        assert!(!snapshot.supports_car_play);
    }

    #[test]
    fn test_tablet_snapshot_drops_car_play() {
        let registry = CapabilityRegistry::new();
        let snapshot = registry.snapshot_for(
            Platform::HandheldTouch,
            DeviceType::Tablet,
            DeviceContext::Standard,
        );
        assert!(!snapshot.supports_car_play);
        assert!(snapshot.supports_touch);
    }
}
