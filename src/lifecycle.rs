//! Module-level wiring state for the JS entry points.
//!
//! The wasm start hook, `initPageBehaviors`, `disposePageBehaviors` and
//! `validateForm` share one page. This records whether that page is still
//! waiting for the document, wired, or torn down, so a late
//! `DOMContentLoaded` or a stray `validateForm` never wires a page the caller
//! already replaced or disposed.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Module started; nothing wired yet.
    #[default]
    Waiting,
    Active,
    /// Torn down by the caller. Only an explicit init wires again.
    Disposed,
}

/// Where a `validateForm` call is served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationRoute {
    /// Through the wired page, which owns the input watches.
    Page,
    /// Directly against the document, with watches owned by the module.
    Detached,
}

impl Lifecycle {
    /// Whether the `DOMContentLoaded` hook may wire the default page.
    pub fn may_auto_wire(self) -> bool {
        self == Self::Waiting
    }

    pub fn validation_route(self) -> ValidationRoute {
        match self {
            Self::Active => ValidationRoute::Page,
            Self::Waiting | Self::Disposed => ValidationRoute::Detached,
        }
    }

    /// State after a successful init.
    #[must_use]
    pub fn wired(self) -> Self {
        Self::Active
    }

    /// State after the caller disposes the page. A page that was never wired
    /// is disposed too, which cancels a pending auto-wire.
    #[must_use]
    pub fn disposed(self) -> Self {
        Self::Disposed
    }
}
