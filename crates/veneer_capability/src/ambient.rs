//! Ambient (thread-local) capability access
//!
//! Wrapper code that cannot thread a [`CapabilityRegistry`] through its call
//! chain queries the ambient registry instead: one registry per thread,
//! created on first use. Threads never share an ambient registry, so parallel
//! test cases on separate threads cannot observe each other's overrides.
//!
//! Mutation of the ambient registry is only possible through
//! [`OverrideGuard`], which restores the prior state when dropped. A test
//! cannot forget to clear an ambient override; the scope exit does it.

use std::cell::RefCell;

use veneer_platform::Platform;

use crate::field::{CapabilityField, CapabilityValue};
use crate::registry::CapabilityRegistry;
use crate::snapshot::CapabilitySnapshot;

thread_local! {
    static AMBIENT: RefCell<CapabilityRegistry> = RefCell::new(CapabilityRegistry::new());
}

/// Run a closure with shared access to this thread's ambient registry
pub fn with<R>(f: impl FnOnce(&CapabilityRegistry) -> R) -> R {
    AMBIENT.with(|registry| f(&registry.borrow()))
}

/// Look up one capability for the current platform on the ambient registry
pub fn capability(field: CapabilityField) -> CapabilityValue {
    with(|registry| registry.capability(field, Platform::current()))
}

/// Assemble a snapshot of the current platform from the ambient registry
pub fn snapshot() -> CapabilitySnapshot {
    with(|registry| registry.snapshot(Platform::current()))
}

/// An ambient override that uninstalls itself on drop
///
/// Nested guards for the same field restore in reverse drop order, each
/// putting back exactly the state it displaced.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct OverrideGuard {
    field: CapabilityField,
    /// Override that was in place before this guard, if any
    previous: Option<CapabilityValue>,
}

impl OverrideGuard {
    /// Install an override on this thread's ambient registry
    pub fn set(field: CapabilityField, value: impl Into<CapabilityValue>) -> Self {
        let value = value.into();
        let previous = AMBIENT.with(|registry| {
            let mut registry = registry.borrow_mut();
            let previous = registry
                .has_override(field)
                .then(|| registry.capability(field, Platform::current()));
            registry.set_override(field, value);
            previous
        });
        Self { field, previous }
    }
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        AMBIENT.with(|registry| {
            let mut registry = registry.borrow_mut();
            match self.previous {
                Some(value) => registry.set_override(self.field, value),
                None => registry.clear_override(self.field),
            }
        });
    }
}
