use super::*;

#[test]
fn zero_is_literal_bytes() {
    assert_eq!(format_file_size(0).as_deref(), Some("0 Bytes"));
}

#[test]
fn whole_units_drop_decimals() {
    assert_eq!(format_file_size(1).as_deref(), Some("1 Bytes"));
    assert_eq!(format_file_size(1023).as_deref(), Some("1023 Bytes"));
    assert_eq!(format_file_size(1024).as_deref(), Some("1 KB"));
    assert_eq!(format_file_size(1_048_576).as_deref(), Some("1 MB"));
    assert_eq!(format_file_size(1_073_741_824).as_deref(), Some("1 GB"));
}

#[test]
fn fractions_round_to_two_places() {
    assert_eq!(format_file_size(1536).as_deref(), Some("1.5 KB"));
    assert_eq!(format_file_size(2_621_440).as_deref(), Some("2.5 MB"));
    // 1500 / 1024 = 1.4648...
    assert_eq!(format_file_size(1500).as_deref(), Some("1.46 KB"));
}

#[test]
fn rounding_can_reach_the_next_whole_value() {
    // 1048575 / 1024 = 1023.999...
    assert_eq!(format_file_size(1_048_575).as_deref(), Some("1024 KB"));
}

#[test]
fn terabyte_range_has_no_unit() {
    assert_eq!(format_file_size(1_099_511_627_776), None);
    assert_eq!(format_file_size(u64::MAX), None);
    assert!(format_file_size(1_099_511_627_775).is_some());
}
