use chrono::prelude::*;

// Unix timestamp in milliseconds, UTC.
pub type Timestamp = i64;

pub trait TimestampTrait: Sized {
    fn from_datetime(dt: &NaiveDateTime) -> Self;
    fn to_datetime(&self) -> Option<NaiveDateTime>;
    fn to_string_millis(&self) -> String;
}

impl TimestampTrait for Timestamp {
    #[inline]
    fn from_datetime(dt: &NaiveDateTime) -> Self {
        dt.and_utc().timestamp_millis()
    }

    /// `None` when the instant falls outside the proleptic calendar range
    /// chrono can represent.
    #[inline]
    fn to_datetime(&self) -> Option<NaiveDateTime> {
        DateTime::<Utc>::from_timestamp_millis(*self).map(|dt| dt.naive_utc())
    }

    fn to_string_millis(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            None => format!("{}ms", self),
        }
    }
}
