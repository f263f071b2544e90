//! Required-field pre-check for form submission glue.
//!
//! A field is invalid when its trimmed value is empty. Each invalid field gets
//! an error border and, once, an inline message `<label> is required` in an
//! element with id `<fieldId>-error` appended to the field's parent.
//!
//! Every invalid field also gets a one-time input watch. The first input
//! event after validation consumes it: if the field is non-empty by then the
//! error styling and message are removed, otherwise nothing happens and the
//! watch is gone anyway. Validating an erred field again arms another watch
//! without duplicating the message, so watches accumulate per call.

use crate::config::BehaviorConfig;
use crate::dom::Document;

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// One-time input subscription on an invalid field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWatch<E> {
    pub field: E,
    pub error_id: String,
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidation<E> {
    pub valid: bool,
    /// Watches armed by this pass, one per invalid field.
    pub watches: Vec<FieldWatch<E>>,
}

/// Check every required field inside `form`.
///
/// `on_valid` runs only when no field is empty.
pub fn validate_form<D, F>(
    doc: &mut D,
    form: &D::Element,
    config: &BehaviorConfig,
    on_valid: Option<F>,
) -> FormValidation<D::Element>
where
    D: Document,
    F: FnOnce(),
{
    let mut watches = Vec::new();
    for field in doc.elements_with_attribute(Some(form), &config.required_attribute, None) {
        if !doc.value(&field).trim().is_empty() {
            continue;
        }
        doc.add_class(&field, &config.field_error_class);

        let error_id = config.error_id(&doc.id(&field));
        if doc.element_by_id(&error_id).is_none() {
            attach_error_message(doc, &field, &error_id, config);
        }
        watches.push(FieldWatch { field, error_id });
    }

    let valid = watches.is_empty();
    if valid {
        if let Some(on_valid) = on_valid {
            on_valid();
        }
    } else {
        log::debug!("form has {} empty required field(s)", watches.len());
    }
    FormValidation { valid, watches }
}

/// Run a consumed watch: clear the field's error if it now has a value.
///
/// Returns `true` when the error was cleared.
pub fn clear_field_error<D: Document>(doc: &mut D, watch: &FieldWatch<D::Element>, config: &BehaviorConfig) -> bool {
    if doc.value(&watch.field).trim().is_empty() {
        return false;
    }
    doc.remove_class(&watch.field, &config.field_error_class);
    if let Some(message) = doc.element_by_id(&watch.error_id) {
        doc.remove(&message);
    }
    true
}

fn attach_error_message<D: Document>(doc: &mut D, field: &D::Element, error_id: &str, config: &BehaviorConfig) {
    let Some(parent) = doc.parent_element(field) else {
        log::trace!("required field #{error_id} has no parent for its message");
        return;
    };
    let Some(message) = doc.create_element(&config.error_message_tag) else {
        log::warn!("could not create error message #{error_id}");
        return;
    };
    let label = doc
        .attribute(field, "placeholder")
        .filter(|placeholder| !placeholder.is_empty())
        .unwrap_or_else(|| config.fallback_field_label.clone());

    doc.set_attribute(&message, "id", error_id);
    doc.set_attribute(&message, "class", &config.error_message_classes);
    doc.set_text(&message, &format!("{label} is required"));
    doc.append_child(&parent, &message);
}
