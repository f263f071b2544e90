use super::*;
use crate::dom::MemoryDocument;

#[test]
fn scan_collects_each_role() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    doc.insert(body, "input", &[("type", "password")]);
    let toggle = doc.insert(body, "button", &[("id", "togglePassword")]);
    let alert = doc.insert(body, "div", &[("role", "alert")]);
    let close = doc.insert(alert, "button", &[("class", "flash-close")]);
    let quiet = doc.insert(body, "div", &[("role", "alert")]);
    let upload = doc.insert(body, "input", &[("type", "file"), ("id", "doc")]);
    doc.insert(body, "button", &[("type", "file")]);

    let registry = Registry::scan(&doc, &BehaviorConfig::default());

    assert_eq!(registry.toggles().map(|(_, el)| *el).collect::<Vec<_>>(), vec![toggle]);
    assert_eq!(registry.alerts().count(), 2);
    let (dismiss_id, control) = registry.dismiss_controls().next().unwrap();
    assert_eq!(control.control, close);
    assert_eq!(registry.alert(control.alert).map(|a| a.element), Some(alert));
    assert_eq!(registry.dismiss_control(dismiss_id).map(|c| c.control), Some(close));
    assert_eq!(registry.file_inputs().map(|(_, el)| *el).collect::<Vec<_>>(), vec![upload]);
    assert!(registry.alerts().any(|(_, a)| a.element == quiet));
}

#[test]
fn dismiss_control_outside_alert_is_skipped() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    doc.insert(body, "button", &[("class", "flash-close")]);
    let registry = Registry::scan(&doc, &BehaviorConfig::default());
    assert_eq!(registry.dismiss_controls().count(), 0);
}

#[test]
fn track_alert_is_idempotent() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let alert = doc.insert(body, "div", &[("role", "alert")]);
    let mut registry = Registry::scan(&doc, &BehaviorConfig::default());
    let first = registry.track_alert(alert);
    let second = registry.track_alert(alert);
    assert_eq!(first, second);
    assert_eq!(registry.alerts().count(), 1);
}

#[test]
fn unknown_ids_resolve_to_none() {
    let doc = MemoryDocument::new();
    let registry = Registry::scan(&doc, &BehaviorConfig::default());
    assert!(registry.toggle(ToggleId(3)).is_none());
    assert!(registry.file_input(FileInputId(0)).is_none());
    assert!(registry.alert(AlertId(0)).is_none());
}

#[test]
fn file_input_type_comes_from_config() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    doc.insert(body, "input", &[("type", "file"), ("id", "plain")]);
    let custom = doc.insert(body, "input", &[("type", "x-upload"), ("id", "custom")]);
    let cfg = BehaviorConfig { file_input_type: "x-upload".to_owned(), ..BehaviorConfig::default() };

    let registry = Registry::scan(&doc, &cfg);
    assert_eq!(registry.file_inputs().map(|(_, el)| *el).collect::<Vec<_>>(), vec![custom]);
}
