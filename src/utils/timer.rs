//! Wall-clock timing helpers.
//!
//! All phase measurements in the harness are wall-clock, taken with
//! `std::time::Instant` at phase boundaries. Durations are reported in
//! the `X min. Y sec. Z ms.` form the console output uses.

use std::time::{Duration, Instant};

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: u128 = 60_000;
/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: u128 = 1_000;

/// Run `f` and return its value together with the elapsed wall-clock time.
#[inline]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Format a duration as `X min. Y sec. Z ms.`.
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    format!(
        "{} min. {} sec. {} ms.",
        millis / MILLIS_PER_MINUTE,
        (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        millis % MILLIS_PER_SECOND
    )
}
