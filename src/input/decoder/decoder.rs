use crate::error::Result;
use crate::model::DateRange;

/// Turns one input line into a date range. `Ok(None)` is the null value.
pub trait Decoder {
    fn decode(&self, line: &[u8]) -> Result<Option<DateRange>>;
}
