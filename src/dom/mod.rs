//! Document port.
//!
//! The behaviors never touch `web-sys` directly. They read and write the page
//! through [`Document`], whose lookups are named after the conventions they
//! serve instead of taking raw CSS selectors. The browser binding implements
//! it over the live DOM; [`memory::MemoryDocument`] implements it over an
//! arena so every behavior can be exercised natively.

pub mod memory;

pub use memory::{MemoryDocument, NodeId};

/// Read/write access to the element tree a page's behaviors operate on.
///
/// Lookups that take a `scope` search that element's descendants, or the
/// whole document when `scope` is `None`. All lookups return elements in
/// document order.
pub trait Document {
    type Element: Clone + PartialEq + std::fmt::Debug;

    // --- Lookups ---

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<Self::Element>;
    fn elements_with_class(&self, scope: Option<&Self::Element>, class: &str) -> Vec<Self::Element>;

    /// Elements carrying attribute `name`, optionally with exactly `value`.
    fn elements_with_attribute(
        &self,
        scope: Option<&Self::Element>,
        name: &str,
        value: Option<&str>,
    ) -> Vec<Self::Element>;

    // --- Tree navigation ---

    fn previous_element_sibling(&self, el: &Self::Element) -> Option<Self::Element>;
    fn parent_element(&self, el: &Self::Element) -> Option<Self::Element>;
    fn first_descendant_with_tag(&self, el: &Self::Element, tag: &str) -> Option<Self::Element>;

    /// Nearest inclusive ancestor whose attribute `name` equals `value`.
    fn closest_with_attribute(&self, el: &Self::Element, name: &str, value: &str) -> Option<Self::Element>;

    // --- Element state ---

    /// Tag name, lowercase.
    fn tag_name(&self, el: &Self::Element) -> String;
    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: &Self::Element, name: &str, value: &str);
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn add_class(&mut self, el: &Self::Element, class: &str);
    fn remove_class(&mut self, el: &Self::Element, class: &str);
    fn set_text(&mut self, el: &Self::Element, text: &str);
    fn set_style(&mut self, el: &Self::Element, property: &str, value: &str);

    /// Current value of a form control; empty for anything else.
    fn value(&self, el: &Self::Element) -> String;

    /// Names of the files selected in a file input, in selection order.
    fn selected_file_names(&self, el: &Self::Element) -> Vec<String>;

    // --- Tree mutation ---

    fn create_element(&mut self, tag: &str) -> Option<Self::Element>;
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);
    fn remove(&mut self, el: &Self::Element);

    // --- Provided ---

    fn id(&self, el: &Self::Element) -> String {
        self.attribute(el, "id").unwrap_or_default()
    }

    /// Add `class` when absent, remove it when present.
    fn toggle_class(&mut self, el: &Self::Element, class: &str) {
        if self.has_class(el, class) {
            self.remove_class(el, class);
        } else {
            self.add_class(el, class);
        }
    }
}
