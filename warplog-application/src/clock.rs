use chrono::{Duration, NaiveDateTime, Utc};

use warplog_domain::RuntimeConfig;

/// Wall clock in the source timezone, comparable with pull and banner times.
pub fn source_now(config: &RuntimeConfig) -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::hours(i64::from(config.source_utc_offset_hours))
}
