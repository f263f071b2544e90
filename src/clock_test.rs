#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_four_digits() {
    let year = current_year();
    assert!((2024..10_000).contains(&year), "unexpected year {year}");
}

#[test]
fn now_ms_is_after_2024() {
    // 2024-01-01T00:00:00Z
    assert!(now_ms() > 1_704_067_200_000.0);
}
