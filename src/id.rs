//! ID generation utilities for Dayplan
//!
//! Task ids are timestamp-derived integers, forced strictly monotonic so
//! several creations within the same millisecond still get distinct ids.

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

/// Generate the next task id given the highest id seen so far.
///
/// Returns the current timestamp, bumped past `previous` when the clock
/// has not advanced since the last assignment.
pub fn next_id(previous: u64) -> u64 {
    now_ms().max(previous + 1)
}
