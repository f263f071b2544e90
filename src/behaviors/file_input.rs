//! File input name display.
//!
//! Input `X` shows its selection in element `X-name`, whose parent is hidden
//! while nothing is selected. Only the first file is shown, also for
//! multi-select inputs.

use crate::config::BehaviorConfig;
use crate::dom::Document;

#[cfg(test)]
#[path = "file_input_test.rs"]
mod file_input_test;

/// Sync the name display paired with `input` to its current selection.
///
/// Returns the displayed name, or `None` when nothing is selected or the
/// input has no display element.
pub fn sync_file_name<D: Document>(doc: &mut D, input: &D::Element, config: &BehaviorConfig) -> Option<String> {
    let display_id = config.file_name_id(&doc.id(input));
    let Some(display) = doc.element_by_id(&display_id) else {
        log::trace!("no file name display #{display_id}");
        return None;
    };
    let container = doc.parent_element(&display);

    match doc.selected_file_names(input).into_iter().next() {
        Some(name) => {
            doc.set_text(&display, &name);
            if let Some(container) = container {
                doc.remove_class(&container, &config.hidden_class);
            }
            Some(name)
        }
        None => {
            if let Some(container) = container {
                doc.add_class(&container, &config.hidden_class);
            }
            None
        }
    }
}
