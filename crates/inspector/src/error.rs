//! Error taxonomy of the inspection core.
//!
//! "No element tracked" is deliberately not represented here: between
//! selections the engines return empty views and treat writes as no-ops.
//! The only error type is the wiring mistake of calling a hook outside the
//! tracking context, which must fail loudly during component setup.

use thiserror::Error;

/// A dependent accessor was invoked outside a tracking context.
///
/// Returned by the `try_use_*` hooks when no [`crate::ElementTracker`] has
/// been provided to the current component tree; the plain `use_*` hooks
/// panic with this message instead. This signals a programmer error, not a
/// runtime condition, so it is never worth recovering from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{hook}` must be used within a component that provides the element tracking context")]
pub struct ContextError {
    hook: &'static str,
}

impl ContextError {
    pub(crate) fn new(hook: &'static str) -> Self {
        Self { hook }
    }

    /// Name of the hook that was called without a provider.
    pub fn hook(&self) -> &'static str {
        self.hook
    }
}
