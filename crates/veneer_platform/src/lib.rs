//! Veneer Platform Model
//!
//! This crate provides the platform classification types shared by the rest of
//! the Veneer workspace: which of the five supported GUI platforms the process
//! is running on, what kind of device it is, and what situational context the
//! app is presented in.
//!
//! # Architecture
//!
//! Three small closed enums carry all of the classification:
//!
//! - [`Platform`] - The runtime environment (handheld touch, desktop, ...)
//! - [`DeviceType`] - The hardware form factor (phone, tablet, automotive, ...)
//! - [`DeviceContext`] - The presentation mode (standard, in-car, split view, ...)
//!
//! The current platform is fixed for the lifetime of the process and is
//! determined purely from the compile target; nothing here probes hardware.
//!
//! # Example
//!
//! ```
//! use veneer_platform::{DeviceType, Platform};
//!
//! let platform = Platform::current();
//! let device = DeviceType::default_for(platform);
//! assert!(!platform.name().is_empty());
//! assert!(device.is_valid_for(platform));
//! ```

mod device;
mod error;
mod platform;

// Re-export all public types
pub use device::{DeviceContext, DeviceType};
pub use error::{PlatformError, Result};
pub use platform::Platform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::device::{DeviceContext, DeviceType};
    pub use crate::error::{PlatformError, Result};
    pub use crate::platform::Platform;
}
