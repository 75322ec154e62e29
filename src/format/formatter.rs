use crate::error::Result;
use crate::model::DateRange;

/// One successfully decoded input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub line_no: usize,
    pub range: Option<DateRange>,
}

pub trait Formatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>>;
}

pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
