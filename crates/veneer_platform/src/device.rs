//! Device type and presentation context classification
//!
//! [`DeviceType`] is a secondary classification alongside [`Platform`]: it is
//! not 1:1 with platforms (handheld touch covers both phones and tablets, and
//! automotive head units only appear under the in-car context).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::platform::Platform;

/// Hardware form factor the UI is presented on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Phone-sized handheld
    Phone,
    /// Tablet-sized handheld
    Tablet,
    /// Desktop or laptop
    Desktop,
    /// Wrist wearable
    Wrist,
    /// Television behind a remote
    LivingRoomRemote,
    /// Spatial-computing headset
    SpatialHeadset,
    /// Automotive head unit (projected from a phone while in a car)
    Automotive,
}

impl DeviceType {
    /// All supported device types, in declaration order
    pub const ALL: [DeviceType; 7] = [
        DeviceType::Phone,
        DeviceType::Tablet,
        DeviceType::Desktop,
        DeviceType::Wrist,
        DeviceType::LivingRoomRemote,
        DeviceType::SpatialHeadset,
        DeviceType::Automotive,
    ];

    /// The canonical device type for a platform
    ///
    /// Handheld touch defaults to [`DeviceType::Phone`]; a tablet host would
    /// report [`DeviceType::Tablet`] via the host toolkit's signal instead.
    pub fn default_for(platform: Platform) -> Self {
        match platform {
            Platform::HandheldTouch => DeviceType::Phone,
            Platform::Desktop => DeviceType::Desktop,
            Platform::Wrist => DeviceType::Wrist,
            Platform::LivingRoomRemote => DeviceType::LivingRoomRemote,
            Platform::SpatialHeadset => DeviceType::SpatialHeadset,
        }
    }

    /// Whether this device type can occur on the given platform
    ///
    /// Automotive is projected from the handheld phone platform, so it is
    /// valid there in addition to the platform defaults.
    pub fn is_valid_for(&self, platform: Platform) -> bool {
        match platform {
            Platform::HandheldTouch => matches!(
                self,
                DeviceType::Phone | DeviceType::Tablet | DeviceType::Automotive
            ),
            Platform::Desktop => matches!(self, DeviceType::Desktop),
            Platform::Wrist => matches!(self, DeviceType::Wrist),
            Platform::LivingRoomRemote => matches!(self, DeviceType::LivingRoomRemote),
            Platform::SpatialHeadset => matches!(self, DeviceType::SpatialHeadset),
        }
    }

    /// Stable lowercase name, suitable for logs and config keys
    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Phone => "phone",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
            DeviceType::Wrist => "wrist",
            DeviceType::LivingRoomRemote => "living-room-remote",
            DeviceType::SpatialHeadset => "spatial-headset",
            DeviceType::Automotive => "automotive",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceType {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceType::ALL
            .into_iter()
            .find(|device| device.name() == s)
            .ok_or_else(|| PlatformError::UnknownDeviceType(s.to_string()))
    }
}

/// Situational mode the platform instance is presenting in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceContext {
    /// Ordinary full-device presentation
    #[default]
    Standard,
    /// Projected onto an automotive head unit
    InCar,
    /// Mirrored or extended onto an external display
    ExternalDisplay,
    /// Sharing the screen with another app (split view)
    SplitView,
    /// Freeform windowing on a tablet (stage manager)
    StageManager,
}

impl DeviceContext {
    /// All supported contexts, in declaration order
    pub const ALL: [DeviceContext; 5] = [
        DeviceContext::Standard,
        DeviceContext::InCar,
        DeviceContext::ExternalDisplay,
        DeviceContext::SplitView,
        DeviceContext::StageManager,
    ];

    /// Stable lowercase name, suitable for logs and config keys
    pub fn name(&self) -> &'static str {
        match self {
            DeviceContext::Standard => "standard",
            DeviceContext::InCar => "in-car",
            DeviceContext::ExternalDisplay => "external-display",
            DeviceContext::SplitView => "split-view",
            DeviceContext::StageManager => "stage-manager",
        }
    }
}

impl fmt::Display for DeviceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceContext {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceContext::ALL
            .into_iter()
            .find(|context| context.name() == s)
            .ok_or_else(|| PlatformError::UnknownDeviceContext(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_is_valid() {
        for platform in Platform::ALL {
            assert!(DeviceType::default_for(platform).is_valid_for(platform));
        }
    }

    #[test]
    fn test_automotive_only_on_handheld() {
        assert!(DeviceType::Automotive.is_valid_for(Platform::HandheldTouch));
        assert!(!DeviceType::Automotive.is_valid_for(Platform::Desktop));
        assert!(!DeviceType::Automotive.is_valid_for(Platform::Wrist));
        assert!(!DeviceType::Automotive.is_valid_for(Platform::LivingRoomRemote));
        assert!(!DeviceType::Automotive.is_valid_for(Platform::SpatialHeadset));
    }

    #[test]
    fn test_tablet_is_handheld_only() {
        assert!(DeviceType::Tablet.is_valid_for(Platform::HandheldTouch));
        assert!(!DeviceType::Tablet.is_valid_for(Platform::Desktop));
    }

    #[test]
    fn test_name_round_trip() {
        for device in DeviceType::ALL {
            assert_eq!(device.name().parse::<DeviceType>().unwrap(), device);
        }
        for context in DeviceContext::ALL {
            assert_eq!(context.name().parse::<DeviceContext>().unwrap(), context);
        }
    }
}
