//! Flash message lifecycle.
//!
//! ```text
//! Visible --(dismiss | auto-dismiss)--> Fading --(fade delay)--> Hidden
//! ```
//!
//! Hidden is terminal. Triggering a message that is already Fading or Hidden
//! changes nothing, so the manual and automatic paths can race freely.

use crate::config::BehaviorConfig;
use crate::dom::Document;
use crate::timers::TimerId;

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashState {
    #[default]
    Visible,
    Fading,
    Hidden,
}

/// A server-rendered alert and where it is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage<E> {
    pub element: E,
    state: FlashState,
    hide_timer: Option<TimerId>,
}

impl<E: Clone + PartialEq> FlashMessage<E> {
    pub fn new(element: E) -> Self {
        Self { element, state: FlashState::Visible, hide_timer: None }
    }

    pub fn state(&self) -> FlashState {
        self.state
    }

    /// Pending hide timer, if the message is fading.
    pub fn hide_timer(&self) -> Option<TimerId> {
        self.hide_timer
    }

    /// Start fading. Returns `true` when the caller must schedule the hide;
    /// `false` when the message was already on its way out.
    pub fn begin_fade<D: Document<Element = E>>(&mut self, doc: &mut D, config: &BehaviorConfig) -> bool {
        if self.state != FlashState::Visible {
            return false;
        }
        doc.add_class(&self.element, &config.faded_class);
        self.state = FlashState::Fading;
        true
    }

    pub fn set_hide_timer(&mut self, id: TimerId) {
        self.hide_timer = Some(id);
    }

    /// Suppress display. Only a fading message can be hidden.
    pub fn finish_hide<D: Document<Element = E>>(&mut self, doc: &mut D) {
        if self.state != FlashState::Fading {
            return;
        }
        doc.set_style(&self.element, "display", "none");
        self.state = FlashState::Hidden;
        self.hide_timer = None;
    }

    /// Forget the pending hide without hiding. Used on teardown.
    pub fn take_hide_timer(&mut self) -> Option<TimerId> {
        self.hide_timer.take()
    }
}
