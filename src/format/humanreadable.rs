use super::formatter::{to_hex, Entry, Formatter};
use crate::codec::{TypeCodec, DATE_RANGE_CODEC};
use crate::error::Result;

/// `<canonical text>\t<hex encoding>`, with the line number in front when
/// verbose.
pub struct HumanReadableFormatter {
    verbose: bool,
}

impl HumanReadableFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for HumanReadableFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let text = DATE_RANGE_CODEC.format(entry.range.as_ref());
        let bytes = match DATE_RANGE_CODEC.serialize(entry.range.as_ref())? {
            Some(bytes) => to_hex(&bytes),
            None => String::from("NULL"),
        };

        if self.verbose {
            Ok(format!("{}: {}\t{}", entry.line_no, text, bytes).into_bytes())
        } else {
            Ok(format!("{}\t{}", text, bytes).into_bytes())
        }
    }
}
