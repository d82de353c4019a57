//! Touch-target sizing
//!
//! Touch platforms carry a fixed minimum comfortable hit-target edge (44pt,
//! from the capability matrix); controls proposed smaller than that get their
//! hit area expanded. Non-touch platforms pass proposals through untouched.

use veneer_capability::CapabilitySnapshot;

use crate::frame::Size;

/// Expand a proposed control size to the platform's touch floor
///
/// Uses the snapshot's own `min_touch_target_size`, so overridden snapshots
/// behave the way the override says, not the way the host platform would.
pub fn expanded_hit_area(snapshot: &CapabilitySnapshot, proposed: Size) -> Size {
    if !snapshot.supports_touch {
        return proposed;
    }
    let floor = snapshot.min_touch_target_size;
    Size {
        width: proposed.width.max(floor),
        height: proposed.height.max(floor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_capability::CapabilityRegistry;
    use veneer_platform::Platform;

    #[test]
    fn test_small_control_grows_on_touch_platform() {
        let snapshot = CapabilityRegistry::new().snapshot(Platform::HandheldTouch);
        let size = expanded_hit_area(&snapshot, Size::new(20.0, 60.0));
        assert_eq!(size, Size::new(44.0, 60.0));
    }

    #[test]
    fn test_desktop_passes_through() {
        let snapshot = CapabilityRegistry::new().snapshot(Platform::Desktop);
        let size = expanded_hit_area(&snapshot, Size::new(20.0, 12.0));
        assert_eq!(size, Size::new(20.0, 12.0));
    }

    #[test]
    fn test_override_changes_the_floor() {
        use veneer_capability::CapabilityField;

        let mut registry = CapabilityRegistry::new();
        registry.set_override(CapabilityField::MinTouchTargetSize, 60.0);
        let snapshot = registry.snapshot(Platform::HandheldTouch);

        let size = expanded_hit_area(&snapshot, Size::new(44.0, 44.0));
        assert_eq!(size, Size::new(60.0, 60.0));
    }
}
