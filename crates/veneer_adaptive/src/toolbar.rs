//! Toolbar placement mapping
//!
//! Wrapper code declares toolbar items by semantic slot; each platform
//! resolves a slot to its own placement. One table holds all of the facts.

use std::fmt;

use serde::{Deserialize, Serialize};

use veneer_platform::Platform;

/// Semantic toolbar slot declared by wrapper code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolbarSlot {
    /// The screen's primary action
    Primary,
    /// Secondary actions
    Secondary,
    /// Dismiss/cancel
    Cancel,
    /// Confirm/done
    Confirm,
    /// Back/navigation affordance
    Navigation,
}

impl ToolbarSlot {
    /// All slots, in declaration order
    pub const ALL: [ToolbarSlot; 5] = [
        ToolbarSlot::Primary,
        ToolbarSlot::Secondary,
        ToolbarSlot::Cancel,
        ToolbarSlot::Confirm,
        ToolbarSlot::Navigation,
    ];
}

impl fmt::Display for ToolbarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Where a slot lands on a concrete platform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedPlacement {
    /// Leading edge of the bar
    Leading,
    /// Trailing edge of the bar
    Trailing,
    /// Bottom bar (handheld reachability)
    BottomBar,
    /// Collapsed into an overflow menu
    Overflow,
}

/// Resolve a semantic slot for a platform
///
/// Total over both enums. Small screens push secondary actions into
/// overflow; the living-room platform keeps everything in the focus-driven
/// top bar; handhelds put the primary action within thumb reach.
pub fn placement(slot: ToolbarSlot, platform: Platform) -> ResolvedPlacement {
    use Platform::*;
    use ToolbarSlot::*;

    match (platform, slot) {
        (HandheldTouch, Primary) => ResolvedPlacement::BottomBar,
        (HandheldTouch, Secondary) => ResolvedPlacement::Overflow,
        (HandheldTouch, Cancel) => ResolvedPlacement::Leading,
        (HandheldTouch, Confirm) => ResolvedPlacement::Trailing,
        (HandheldTouch, Navigation) => ResolvedPlacement::Leading,

        (Desktop, Primary) => ResolvedPlacement::Trailing,
        (Desktop, Secondary) => ResolvedPlacement::Trailing,
        (Desktop, Cancel) => ResolvedPlacement::Leading,
        (Desktop, Confirm) => ResolvedPlacement::Trailing,
        (Desktop, Navigation) => ResolvedPlacement::Leading,

        // Everything but the essentials overflows on the watch.
        (Wrist, Primary) => ResolvedPlacement::BottomBar,
        (Wrist, Secondary | Cancel) => ResolvedPlacement::Overflow,
        (Wrist, Confirm) => ResolvedPlacement::Trailing,
        (Wrist, Navigation) => ResolvedPlacement::Leading,

        (LivingRoomRemote, Primary | Secondary | Confirm) => ResolvedPlacement::Trailing,
        (LivingRoomRemote, Cancel | Navigation) => ResolvedPlacement::Leading,

        (SpatialHeadset, Primary | Confirm) => ResolvedPlacement::Trailing,
        (SpatialHeadset, Secondary) => ResolvedPlacement::Overflow,
        (SpatialHeadset, Cancel | Navigation) => ResolvedPlacement::Leading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_resolves_everywhere() {
        // The match is exhaustive by construction; this guards the table as
        // platforms and slots are added.
        for platform in Platform::ALL {
            for slot in ToolbarSlot::ALL {
                let _ = placement(slot, platform);
            }
        }
    }

    #[test]
    fn test_handheld_primary_is_reachable() {
        assert_eq!(
            placement(ToolbarSlot::Primary, Platform::HandheldTouch),
            ResolvedPlacement::BottomBar
        );
    }

    #[test]
    fn test_cancel_leads_on_pointer_platforms() {
        assert_eq!(
            placement(ToolbarSlot::Cancel, Platform::Desktop),
            ResolvedPlacement::Leading
        );
        assert_eq!(
            placement(ToolbarSlot::Confirm, Platform::Desktop),
            ResolvedPlacement::Trailing
        );
    }

    #[test]
    fn test_wrist_overflows_secondary() {
        assert_eq!(
            placement(ToolbarSlot::Secondary, Platform::Wrist),
            ResolvedPlacement::Overflow
        );
    }
}
