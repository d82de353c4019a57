//! Veneer Capability Matrix
//!
//! Single source of truth for "does platform P support capability C right
//! now". The rest of the workspace (and the out-of-scope UI wrapper layer)
//! asks this crate which input and accessibility features the current
//! platform supports, instead of sprinkling per-platform `match` statements
//! across call sites.
//!
//! # Architecture
//!
//! - [`CapabilityField`] / [`CapabilityValue`] - the queryable facts and
//!   their boolean/numeric values
//! - [`CapabilityRegistry`] - answers queries: per-context overrides first,
//!   the static table second
//! - [`CapabilitySnapshot`] - every field assembled for one platform at one
//!   instant, derived fresh on each query
//! - [`validator`] - cross-field consistency rules and platform-exact
//!   profile checks over a snapshot
//! - [`ambient`] - a thread-local registry for wrapper code, with RAII
//!   override guards for tests
//!
//! # Overrides
//!
//! Tests force capabilities on or off before exercising code under test. Two
//! scoping mechanisms keep parallel tests from observing each other:
//!
//! 1. Each test constructs its own [`CapabilityRegistry`] and threads it
//!    through explicitly. Isolation is structural.
//! 2. Tests that exercise ambient queries install overrides through
//!    [`ambient::OverrideGuard`], which restores the prior value when
//!    dropped. The thread-local store never leaks across threads.
//!
//! # Example
//!
//! ```
//! use veneer_capability::{CapabilityField, CapabilityRegistry};
//! use veneer_platform::Platform;
//!
//! let registry = CapabilityRegistry::new();
//! let touch = registry
//!     .capability(CapabilityField::Touch, Platform::HandheldTouch)
//!     .as_flag();
//! assert!(touch);
//!
//! let snapshot = registry.snapshot(Platform::HandheldTouch);
//! assert!(veneer_capability::validator::is_internally_consistent(&snapshot));
//! ```

pub mod ambient;
mod diagnostics;
mod field;
mod registry;
mod snapshot;
mod table;
pub mod validator;

// Re-export all public types
pub use diagnostics::ConsistencyReport;
pub use field::{CapabilityField, CapabilityValue};
pub use registry::CapabilityRegistry;
pub use snapshot::{CapabilitySnapshot, FeatureMatrix};
pub use table::{static_value, MIN_TOUCH_TARGET_POINTS};
pub use validator::ConsistencyRule;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ambient;
    pub use crate::diagnostics::ConsistencyReport;
    pub use crate::field::{CapabilityField, CapabilityValue};
    pub use crate::registry::CapabilityRegistry;
    pub use crate::snapshot::{CapabilitySnapshot, FeatureMatrix};
    pub use crate::validator::{self, ConsistencyRule};
}
