use serde::Serialize;
use serde_json;

use super::formatter::{to_hex, Entry, Formatter};
use crate::codec::{TypeCodec, DATE_RANGE_CODEC};
use crate::error::Result;
use crate::model::{Bound, DateRange, Timestamp};

#[derive(Serialize)]
struct BoundRepr {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    unbounded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<String>,
}

impl From<&Bound> for BoundRepr {
    fn from(bound: &Bound) -> Self {
        Self {
            unbounded: bound.is_unbounded(),
            timestamp: bound.timestamp(),
            precision: bound.precision().map(|p| p.to_string()),
        }
    }
}

#[derive(Serialize)]
struct EntryRepr<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    range: Option<&'a DateRange>,
    bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lower: Option<BoundRepr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upper: Option<BoundRepr>,
}

/// One JSON object per line; the range itself is carried in its text form.
pub struct JSONFormatter {
    verbose: bool,
}

impl JSONFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for JSONFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let range = entry.range.as_ref();
        let repr = EntryRepr {
            line: if self.verbose {
                Some(entry.line_no)
            } else {
                None
            },
            range,
            bytes: DATE_RANGE_CODEC.serialize(range)?.map(|b| to_hex(&b)),
            lower: range.map(|r| BoundRepr::from(r.lower())),
            upper: range.and_then(|r| r.upper()).map(BoundRepr::from),
        };

        serde_json::to_vec(&repr).map_err(|e| ("JSON serialization failed", e).into())
    }
}
