use super::*;
use crate::dom::MemoryDocument;

#[test]
fn stamps_every_marker() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let footer = doc.insert(body, "footer", &[]);
    let a = doc.insert(footer, "span", &[("class", "current-year")]);
    let b = doc.insert(body, "span", &[("class", "current-year small")]);
    doc.insert(body, "span", &[("class", "year")]);

    assert_eq!(stamp_year(&mut doc, 2024, &BehaviorConfig::default()), 2);
    assert_eq!(doc.text(a), "2024");
    assert_eq!(doc.text(b), "2024");
}

#[test]
fn restamping_is_idempotent() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let a = doc.insert(body, "span", &[("class", "current-year")]);
    let cfg = BehaviorConfig::default();
    stamp_year(&mut doc, 2025, &cfg);
    stamp_year(&mut doc, 2025, &cfg);
    assert_eq!(doc.text(a), "2025");
}

#[test]
fn page_without_markers_stamps_nothing() {
    let mut doc = MemoryDocument::new();
    assert_eq!(stamp_year(&mut doc, 2024, &BehaviorConfig::default()), 0);
}
