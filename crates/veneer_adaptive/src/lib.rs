//! Veneer Adaptive Helpers
//!
//! Thin, pure helpers the UI wrapper layer calls once it has asked the
//! capability matrix what the current platform supports: clamping proposed
//! frames into constraints, expanding hit targets to the platform's touch
//! floor, mapping semantic toolbar slots and color roles to per-platform
//! answers, and bounding animation durations.
//!
//! Everything here is a total function over plain values. No rendering, no
//! view trees, no environment access.

mod color;
mod frame;
mod hit_area;
mod motion;
mod toolbar;

// Re-export all public types
pub use color::{role_color, ColorRole, Rgba};
pub use frame::{FrameConstraints, Size};
pub use hit_area::expanded_hit_area;
pub use motion::{clamp_duration, duration_bounds, DurationBounds};
pub use toolbar::{placement, ResolvedPlacement, ToolbarSlot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{role_color, ColorRole, Rgba};
    pub use crate::frame::{FrameConstraints, Size};
    pub use crate::hit_area::expanded_hit_area;
    pub use crate::motion::{clamp_duration, duration_bounds, DurationBounds};
    pub use crate::toolbar::{placement, ResolvedPlacement, ToolbarSlot};
}
