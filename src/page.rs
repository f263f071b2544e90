//! Host-driven page core.
//!
//! `PageCore` owns the document, the typed registry, the timer queue and the
//! validation watches. It never reads a real clock: the host reports time via
//! [`PageCore::advance_to`] and arms a single real timer for
//! [`PageCore::next_deadline`]. Separated from the `web-sys` binding so it can
//! be tested without WASM/browser dependencies.
//!
//! LIFECYCLE
//! =========
//! `init` runs every wiring pass synchronously, so no event can reach the core
//! before the page is fully set up. `dispose` cancels pending timers and drops
//! watches; events that arrive afterwards are ignored.

use crate::behaviors::validate::{self, FieldWatch, FormValidation};
use crate::behaviors::{file_input, password, year};
use crate::config::BehaviorConfig;
use crate::dom::Document;
use crate::registry::{AlertId, DismissId, FileInputId, Registry, ToggleId};
use crate::timers::{TimerId, TimerQueue};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// DOM events the host forwards into the core.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<E> {
    ToggleActivated(ToggleId),
    DismissActivated(DismissId),
    FileChanged(FileInputId),
    /// An `input` event on a field that may carry validation watches.
    FieldInput(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    AutoDismiss,
    Hide(AlertId),
}

pub struct PageCore<D: Document> {
    doc: D,
    config: BehaviorConfig,
    registry: Registry<D::Element>,
    timers: TimerQueue<TimerAction>,
    /// Pending page-wide auto-dismiss; `None` once it has fired.
    auto_dismiss_timer: Option<TimerId>,
    watches: Vec<FieldWatch<D::Element>>,
    now_ms: u64,
    disposed: bool,
}

impl<D: Document> PageCore<D> {
    /// Wire every behavior onto `doc` at time zero.
    ///
    /// Scans the registry, stamps `year` into the year markers and schedules
    /// the page-wide auto-dismiss.
    pub fn init(mut doc: D, config: BehaviorConfig, year: i32) -> Self {
        let registry = Registry::scan(&doc, &config);
        let stamped = year::stamp_year(&mut doc, year, &config);

        let mut timers = TimerQueue::new();
        let auto_dismiss_timer = Some(timers.schedule(0, config.auto_dismiss_ms, TimerAction::AutoDismiss));

        log::debug!(
            "page behaviors wired: {} toggle(s), {} alert(s), {} dismiss control(s), {} file input(s), {} year marker(s)",
            registry.toggles().count(),
            registry.alerts().count(),
            registry.dismiss_controls().count(),
            registry.file_inputs().count(),
            stamped,
        );

        Self { doc, config, registry, timers, auto_dismiss_timer, watches: Vec::new(), now_ms: 0, disposed: false }
    }

    /// Apply one DOM event.
    pub fn handle(&mut self, event: PageEvent<D::Element>) {
        if self.disposed {
            log::trace!("event after dispose ignored: {event:?}");
            return;
        }
        match event {
            PageEvent::ToggleActivated(id) => {
                if let Some(toggle) = self.registry.toggle(id).cloned() {
                    password::toggle_visibility(&mut self.doc, &toggle, &self.config);
                }
            }
            PageEvent::DismissActivated(id) => {
                if let Some(alert) = self.registry.dismiss_control(id).map(|control| control.alert) {
                    self.dismiss(alert);
                }
            }
            PageEvent::FileChanged(id) => {
                if let Some(input) = self.registry.file_input(id).cloned() {
                    file_input::sync_file_name(&mut self.doc, &input, &self.config);
                }
            }
            PageEvent::FieldInput(field) => {
                let (fired, kept): (Vec<_>, Vec<_>) =
                    std::mem::take(&mut self.watches).into_iter().partition(|watch| watch.field == field);
                self.watches = kept;
                for watch in &fired {
                    validate::clear_field_error(&mut self.doc, watch, &self.config);
                }
            }
        }
    }

    /// Fire every timer due at or before `now_ms`, in deadline order.
    ///
    /// Each timer runs with the clock set to its own deadline, so a hide
    /// chained from the auto-dismiss lands at `auto_dismiss_ms + fade_ms` even
    /// when the host advances past both at once.
    pub fn advance_to(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        while let Some(fired) = self.timers.pop_due(now_ms) {
            self.now_ms = self.now_ms.max(fired.due_ms);
            match fired.action {
                TimerAction::AutoDismiss => {
                    self.auto_dismiss_timer = None;
                    self.auto_dismiss();
                }
                TimerAction::Hide(alert) => {
                    if let Some(message) = self.registry.alert_mut(alert) {
                        message.finish_hide(&mut self.doc);
                    }
                }
            }
        }
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Earliest pending timer deadline, in core milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        if self.disposed {
            return None;
        }
        self.timers.next_deadline()
    }

    /// Validate `form`, keeping the armed watches until their field's next
    /// input event.
    pub fn validate_form(&mut self, form: &D::Element) -> FormValidation<D::Element> {
        let report = validate::validate_form(&mut self.doc, form, &self.config, None::<fn()>);
        if !self.disposed {
            self.watches.extend(report.watches.iter().cloned());
        }
        report
    }

    /// Cancel pending timers and drop watches. Alerts caught mid-fade stay
    /// faded but displayed.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let mut cancelled = 0;
        let hides = self.registry.alerts_mut().filter_map(|message| message.take_hide_timer());
        for timer in self.auto_dismiss_timer.take().into_iter().chain(hides) {
            if self.timers.cancel(timer) {
                cancelled += 1;
            }
        }
        if !self.timers.is_empty() {
            log::warn!("{} timer(s) left untracked at dispose", self.timers.len());
        }
        self.watches.clear();
        self.disposed = true;
        log::debug!("page behaviors disposed, {cancelled} timer(s) cancelled");
    }

    // --- Queries ---

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn registry(&self) -> &Registry<D::Element> {
        &self.registry
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Number of scheduled timers (auto-dismiss and pending hides).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of armed validation watches.
    pub fn pending_watches(&self) -> usize {
        self.watches.len()
    }

    fn dismiss(&mut self, alert: AlertId) {
        let Some(message) = self.registry.alert_mut(alert) else {
            return;
        };
        if message.begin_fade(&mut self.doc, &self.config) {
            let timer = self.timers.schedule(self.now_ms, self.config.fade_ms, TimerAction::Hide(alert));
            message.set_hide_timer(timer);
        }
    }

    fn auto_dismiss(&mut self) {
        let present = self.doc.elements_with_attribute(None, "role", Some(&self.config.alert_role));
        log::debug!("auto-dismissing {} alert(s)", present.len());
        for element in present {
            let alert = self.registry.track_alert(element);
            self.dismiss(alert);
        }
    }
}
