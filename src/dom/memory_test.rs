use super::*;

#[test]
fn insert_splits_class_attribute() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let el = doc.insert(body, "DIV", &[("class", "a  b"), ("id", "x")]);
    assert_eq!(doc.tag_name(&el), "div");
    assert!(doc.has_class(&el, "a"));
    assert!(doc.has_class(&el, "b"));
    assert_eq!(doc.attribute(&el, "class").as_deref(), Some("a b"));
    assert_eq!(doc.id(&el), "x");
}

#[test]
fn lookups_follow_document_order() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let outer = doc.insert(body, "div", &[("class", "m")]);
    let inner = doc.insert(outer, "span", &[("class", "m")]);
    let last = doc.insert(body, "p", &[("class", "m")]);
    assert_eq!(doc.elements_with_class(None, "m"), vec![outer, inner, last]);
    assert_eq!(doc.elements_with_class(Some(&outer), "m"), vec![inner]);
}

#[test]
fn attribute_lookup_matches_presence_or_value() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let a = doc.insert(body, "div", &[("role", "alert")]);
    let b = doc.insert(body, "div", &[("role", "status")]);
    assert_eq!(doc.elements_with_attribute(None, "role", Some("alert")), vec![a]);
    assert_eq!(doc.elements_with_attribute(None, "role", None), vec![a, b]);
}

#[test]
fn id_prefix_lookup() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let one = doc.insert(body, "button", &[("id", "togglePassword")]);
    let two = doc.insert(body, "button", &[("id", "togglePasswordConfirm")]);
    doc.insert(body, "button", &[("id", "submit")]);
    assert_eq!(doc.elements_with_id_prefix("togglePassword"), vec![one, two]);
}

#[test]
fn previous_sibling_and_closest() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let alert = doc.insert(body, "div", &[("role", "alert")]);
    let first = doc.insert(alert, "span", &[]);
    let second = doc.insert(alert, "button", &[]);
    assert_eq!(doc.previous_element_sibling(&second), Some(first));
    assert_eq!(doc.previous_element_sibling(&first), None);
    assert_eq!(doc.closest_with_attribute(&second, "role", "alert"), Some(alert));
    assert_eq!(doc.closest_with_attribute(&alert, "role", "alert"), Some(alert));
    assert_eq!(doc.closest_with_attribute(&body, "role", "alert"), None);
}

#[test]
fn removed_nodes_leave_queries() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let el = doc.insert(body, "p", &[("id", "gone")]);
    assert_eq!(doc.element_by_id("gone"), Some(el));
    doc.remove(&el);
    assert_eq!(doc.element_by_id("gone"), None);
    assert!(!doc.is_attached(el));
}

#[test]
fn created_element_is_detached_until_appended() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let el = doc.create_element("p").unwrap();
    doc.set_attribute(&el, "id", "late");
    assert_eq!(doc.element_by_id("late"), None);
    doc.append_child(&body, &el);
    assert_eq!(doc.element_by_id("late"), Some(el));
    assert_eq!(doc.children(body), vec![el]);
}

#[test]
fn toggle_class_flips_membership() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let el = doc.insert(body, "i", &[("class", "fa-eye")]);
    doc.toggle_class(&el, "fa-eye");
    doc.toggle_class(&el, "fa-eye-slash");
    assert_eq!(doc.classes(el), vec!["fa-eye-slash".to_owned()]);
}

#[test]
fn set_text_replaces_children() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let el = doc.insert(body, "span", &[]);
    let child = doc.insert(el, "b", &[]);
    doc.set_text(&el, "2024");
    assert_eq!(doc.text(el), "2024");
    assert!(!doc.is_attached(child));
}
