//! Typed lookups for the elements a page's behaviors bind to.
//!
//! The page is scanned once at init. After that every behavior addresses its
//! elements through the typed ids below instead of re-running id-prefix or
//! attribute queries, so event handlers only carry a small copyable key.

use crate::behaviors::flash::FlashMessage;
use crate::config::BehaviorConfig;
use crate::dom::Document;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToggleId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DismissId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileInputId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlertId(usize);

/// A dismiss control and the alert it closes.
#[derive(Debug, Clone, PartialEq)]
pub struct DismissControl<E> {
    pub control: E,
    pub alert: AlertId,
}

#[derive(Debug, Clone)]
pub struct Registry<E> {
    toggles: Vec<E>,
    dismiss_controls: Vec<DismissControl<E>>,
    file_inputs: Vec<E>,
    alerts: Vec<FlashMessage<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { toggles: Vec::new(), dismiss_controls: Vec::new(), file_inputs: Vec::new(), alerts: Vec::new() }
    }
}

impl<E: Clone + PartialEq> Registry<E> {
    /// Collect every toggle, alert, dismiss control and file input on the page.
    pub fn scan<D: Document<Element = E>>(doc: &D, config: &BehaviorConfig) -> Self {
        let mut registry = Self { toggles: doc.elements_with_id_prefix(&config.toggle_id_prefix), ..Self::default() };

        for alert in doc.elements_with_attribute(None, "role", Some(&config.alert_role)) {
            registry.track_alert(alert);
        }

        for control in doc.elements_with_class(None, &config.dismiss_class) {
            let Some(alert) = doc.closest_with_attribute(&control, "role", &config.alert_role) else {
                log::trace!("dismiss control outside any alert");
                continue;
            };
            let alert = registry.track_alert(alert);
            registry.dismiss_controls.push(DismissControl { control, alert });
        }

        registry.file_inputs = doc
            .elements_with_attribute(None, "type", Some(&config.file_input_type))
            .into_iter()
            .filter(|el| doc.tag_name(el) == "input")
            .collect();

        registry
    }

    /// Register an alert, returning its existing id if already tracked.
    pub fn track_alert(&mut self, element: E) -> AlertId {
        if let Some(index) = self.alerts.iter().position(|alert| alert.element == element) {
            return AlertId(index);
        }
        self.alerts.push(FlashMessage::new(element));
        AlertId(self.alerts.len() - 1)
    }

    // --- Lookups ---

    pub fn toggle(&self, id: ToggleId) -> Option<&E> {
        self.toggles.get(id.0)
    }

    pub fn dismiss_control(&self, id: DismissId) -> Option<&DismissControl<E>> {
        self.dismiss_controls.get(id.0)
    }

    pub fn file_input(&self, id: FileInputId) -> Option<&E> {
        self.file_inputs.get(id.0)
    }

    pub fn alert(&self, id: AlertId) -> Option<&FlashMessage<E>> {
        self.alerts.get(id.0)
    }

    pub fn alert_mut(&mut self, id: AlertId) -> Option<&mut FlashMessage<E>> {
        self.alerts.get_mut(id.0)
    }

    // --- Iteration (for wiring listeners) ---

    pub fn toggles(&self) -> impl Iterator<Item = (ToggleId, &E)> {
        self.toggles.iter().enumerate().map(|(i, el)| (ToggleId(i), el))
    }

    pub fn dismiss_controls(&self) -> impl Iterator<Item = (DismissId, &DismissControl<E>)> {
        self.dismiss_controls.iter().enumerate().map(|(i, c)| (DismissId(i), c))
    }

    pub fn file_inputs(&self) -> impl Iterator<Item = (FileInputId, &E)> {
        self.file_inputs.iter().enumerate().map(|(i, el)| (FileInputId(i), el))
    }

    pub fn alerts(&self) -> impl Iterator<Item = (AlertId, &FlashMessage<E>)> {
        self.alerts.iter().enumerate().map(|(i, a)| (AlertId(i), a))
    }

    pub fn alerts_mut(&mut self) -> impl Iterator<Item = &mut FlashMessage<E>> {
        self.alerts.iter_mut()
    }
}
