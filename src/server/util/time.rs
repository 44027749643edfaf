//! Time helpers.

use chrono::{DateTime, Datelike, Utc};

/// Calendar year of `now` in UTC, the reference point for championship droughts.
pub fn current_year(now: DateTime<Utc>) -> i32 {
    now.year()
}
