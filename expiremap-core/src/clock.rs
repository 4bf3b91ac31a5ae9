use std::time::{SystemTime, UNIX_EPOCH};

/// Whole seconds between the Unix epoch and `time`, floored.
///
/// Times before the epoch yield negative values, rounded towards negative
/// infinity so that every instant inside one wall-clock second maps to the
/// same number.
pub(crate) fn unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -whole.saturating_add(1)
            } else {
                -whole
            }
        }
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub(crate) fn now_secs() -> i64 {
    unix_secs(SystemTime::now())
}
