//! Platform classification
//!
//! The [`Platform`] enum names the five runtime environments Veneer
//! normalizes across. Exactly one platform is current at runtime and it never
//! changes for the lifetime of the process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// The runtime environment the process is presenting UI on
///
/// This is a closed enumeration: adding a platform is a deliberate,
/// workspace-wide event, so downstream `match` statements are intentionally
/// exhaustive rather than carrying a catch-all arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Phone/tablet-class device driven primarily by direct touch
    HandheldTouch,
    /// Pointer-and-keyboard desktop environment
    Desktop,
    /// Wrist-worn device with a tiny touch screen
    Wrist,
    /// 10-foot living-room UI driven by a remote, no touch surface
    LivingRoomRemote,
    /// Spatial-computing headset with hand/eye tracking and hover, no touch
    SpatialHeadset,
}

impl Platform {
    /// All supported platforms, in declaration order
    pub const ALL: [Platform; 5] = [
        Platform::HandheldTouch,
        Platform::Desktop,
        Platform::Wrist,
        Platform::LivingRoomRemote,
        Platform::SpatialHeadset,
    ];

    /// The platform this process is actually running on
    ///
    /// Pure and constant for the process lifetime: the answer comes from the
    /// compile target, not from probing hardware. Non-Apple desktop targets
    /// (Linux, Windows) report [`Platform::Desktop`].
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::HandheldTouch
        } else if cfg!(target_os = "watchos") {
            Platform::Wrist
        } else if cfg!(target_os = "tvos") {
            Platform::LivingRoomRemote
        } else if cfg!(target_os = "visionos") {
            Platform::SpatialHeadset
        } else {
            Platform::Desktop
        }
    }

    /// Stable lowercase name, suitable for logs and config keys
    pub fn name(&self) -> &'static str {
        match self {
            Platform::HandheldTouch => "handheld-touch",
            Platform::Desktop => "desktop",
            Platform::Wrist => "wrist",
            Platform::LivingRoomRemote => "living-room-remote",
            Platform::SpatialHeadset => "spatial-headset",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "handheld-touch" => Ok(Platform::HandheldTouch),
            "desktop" => Ok(Platform::Desktop),
            "wrist" => Ok(Platform::Wrist),
            "living-room-remote" => Ok(Platform::LivingRoomRemote),
            "spatial-headset" => Ok(Platform::SpatialHeadset),
            other => Err(PlatformError::UnknownPlatform(other.to_string())),
        }
    }
}
