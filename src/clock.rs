//! Wall-clock helpers.
//!
//! In the browser the year comes from the JS `Date`, which follows the
//! visitor's local time zone. Native hosts fall back to UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// The current calendar year.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        #[allow(clippy::cast_precision_loss)]
        let ms = (now.unix_timestamp_nanos() / 1_000_000) as f64;
        ms
    }
}
