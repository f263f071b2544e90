//! Human-readable byte sizes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Unit labels, indexed by power of 1024.
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count as `"<value> <unit>"` with at most two decimals.
///
/// Trailing zeros are dropped (`1536` → `"1.5 KB"`, `1024` → `"1 KB"`).
/// Zero is `"0 Bytes"`. The unit table stops at GB: counts of 1024 GB or
/// more have no unit and return `None`, so callers must guard them.
pub fn format_file_size(bytes: u64) -> Option<String> {
    if bytes == 0 {
        return Some("0 Bytes".to_owned());
    }
    // floor(log1024(bytes)) from the highest set bit; exact for every u64.
    let index = ((u64::BITS - 1 - bytes.leading_zeros()) / 10) as usize;
    let unit = SIZE_UNITS.get(index)?;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let scaled = bytes as f64 / 1024_f64.powi(index as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    Some(format!("{rounded} {unit}"))
}
