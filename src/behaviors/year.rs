//! Footer year stamping.

use crate::config::BehaviorConfig;
use crate::dom::Document;

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Write `year` into every year marker. Returns how many were stamped.
pub fn stamp_year<D: Document>(doc: &mut D, year: i32, config: &BehaviorConfig) -> usize {
    let text = year.to_string();
    let markers = doc.elements_with_class(None, &config.year_class);
    for marker in &markers {
        doc.set_text(marker, &text);
    }
    markers.len()
}
