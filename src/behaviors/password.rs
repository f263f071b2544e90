//! Password visibility toggles.
//!
//! A toggle sits directly after its input. Activating it swaps the input's
//! `type` between masked and plain, then flips the eye icon.

use crate::config::BehaviorConfig;
use crate::dom::Document;

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Flip the input preceding `toggle` between masked and plain text.
///
/// Returns the new `type`, or `None` when the previous sibling is missing or
/// is not an `<input>`.
pub fn toggle_visibility<D: Document>(doc: &mut D, toggle: &D::Element, config: &BehaviorConfig) -> Option<String> {
    let Some(target) = doc.previous_element_sibling(toggle) else {
        log::trace!("password toggle has no previous sibling");
        return None;
    };
    if !doc.tag_name(&target).eq_ignore_ascii_case("input") {
        log::trace!("password toggle sibling is not an input");
        return None;
    }

    let next = if doc.attribute(&target, "type").as_deref() == Some(config.masked_input_type.as_str()) {
        config.plain_input_type.clone()
    } else {
        config.masked_input_type.clone()
    };
    doc.set_attribute(&target, "type", &next);

    if let Some(icon) = doc.first_descendant_with_tag(toggle, &config.icon_tag) {
        doc.toggle_class(&icon, &config.icon_masked_class);
        doc.toggle_class(&icon, &config.icon_plain_class);
    }
    Some(next)
}
