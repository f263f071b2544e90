//! Browser page behaviors for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs once the document is ready.
//! It wires a handful of independent behaviors onto markup that follows fixed
//! id/class/attribute conventions: password visibility toggles, flash message
//! dismissal, file-input name display and footer year stamping. It also
//! exports two utilities for form glue: a byte-size formatter and a
//! required-field check.
//!
//! All logic lives in [`page::PageCore`], which drives a [`dom::Document`]
//! and a virtual millisecond clock so it can be tested without a browser. The
//! `hydrate` feature adds the `web-sys` binding that forwards DOM events and
//! real timers into the core.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Host-driven core: wiring, events, timers, disposal |
//! | [`lifecycle`] | Waiting / active / disposed state of the module-level page |
//! | [`registry`] | Typed role → element lookups built at init |
//! | [`behaviors`] | One module per behavior (toggle, flash, file, year, validate) |
//! | [`dom`] | The `Document` port and the in-memory implementation |
//! | [`timers`] | Deadline-ordered, cancellable timer queue |
//! | [`format`] | Byte-size formatting |
//! | [`config`] | DOM conventions and delays, overridable from JSON |
//! | [`consts`] | Default conventions |
//! | [`clock`] | Current calendar year |
//! | [`error`] | Binding-level errors |

pub mod behaviors;
pub mod clock;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod page;
pub mod registry;
pub mod timers;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::BehaviorConfig;
pub use error::PageError;
pub use format::format_file_size;
pub use page::{PageCore, PageEvent};
