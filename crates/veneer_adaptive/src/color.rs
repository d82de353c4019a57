//! Semantic platform colors
//!
//! Wrapper code names colors by role; each platform resolves a role to its
//! own fixed sRGB value. Plain lookup only — anything resembling color-space
//! conversion belongs to the host toolkit.

use std::fmt;

use serde::{Deserialize, Serialize};

use veneer_platform::Platform;

/// An sRGB color with straight alpha
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red, 0.0 - 1.0
    pub r: f32,
    /// Green, 0.0 - 1.0
    pub g: f32,
    /// Blue, 0.0 - 1.0
    pub b: f32,
    /// Alpha, 0.0 - 1.0
    pub a: f32,
}

impl Rgba {
    /// Create an opaque color from a 0xRRGGBB literal
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Copy with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8
        )
    }
}

/// Semantic color role declared by wrapper code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    /// Window/screen background
    Background,
    /// Grouped content surface
    Surface,
    /// Primary text
    Label,
    /// Secondary text
    SecondaryLabel,
    /// Hairline separators
    Separator,
    /// Tint/accent
    Accent,
}

impl ColorRole {
    /// All roles, in declaration order
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Label,
        ColorRole::SecondaryLabel,
        ColorRole::Separator,
        ColorRole::Accent,
    ];
}

/// Resolve a color role for a platform
///
/// Handheld and desktop share the light system palette; the wrist and
/// living-room platforms are dark-first; the headset renders on glass, so
/// surfaces carry alpha.
pub fn role_color(role: ColorRole, platform: Platform) -> Rgba {
    use ColorRole::*;
    use Platform::*;

    match (platform, role) {
        (HandheldTouch | Desktop, Background) => Rgba::from_hex(0xF2F2F7),
        (HandheldTouch | Desktop, Surface) => Rgba::from_hex(0xFFFFFF),
        (HandheldTouch | Desktop, Label) => Rgba::from_hex(0x1D1D1F),
        (HandheldTouch | Desktop, SecondaryLabel) => Rgba::from_hex(0x86868B),
        (HandheldTouch | Desktop, Separator) => Rgba::from_hex(0x3C3C43).with_alpha(0.29),
        (HandheldTouch | Desktop, Accent) => Rgba::from_hex(0x007AFF),

        (Wrist | LivingRoomRemote, Background) => Rgba::from_hex(0x000000),
        (Wrist | LivingRoomRemote, Surface) => Rgba::from_hex(0x1C1C1E),
        (Wrist | LivingRoomRemote, Label) => Rgba::from_hex(0xFFFFFF),
        (Wrist | LivingRoomRemote, SecondaryLabel) => Rgba::from_hex(0xEBEBF5).with_alpha(0.6),
        (Wrist | LivingRoomRemote, Separator) => Rgba::from_hex(0x545458).with_alpha(0.65),
        (Wrist, Accent) => Rgba::from_hex(0xFF9500),
        (LivingRoomRemote, Accent) => Rgba::from_hex(0x007AFF),

        (SpatialHeadset, Background) => Rgba::from_hex(0x000000).with_alpha(0.0),
        (SpatialHeadset, Surface) => Rgba::from_hex(0x1C1C1E).with_alpha(0.7),
        (SpatialHeadset, Label) => Rgba::from_hex(0xFFFFFF),
        (SpatialHeadset, SecondaryLabel) => Rgba::from_hex(0xEBEBF5).with_alpha(0.6),
        (SpatialHeadset, Separator) => Rgba::from_hex(0xFFFFFF).with_alpha(0.2),
        (SpatialHeadset, Accent) => Rgba::from_hex(0x007AFF),
    }
}
