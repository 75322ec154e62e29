use std::str;

use super::decoder::Decoder;
use crate::codec::{TypeCodec, DATE_RANGE_CODEC};
use crate::error::{Error, Result};
use crate::model::DateRange;

/// Lines hold date range literals, or `NULL`.
#[derive(Debug, Default)]
pub struct TextDecoder {}

impl TextDecoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Decoder for TextDecoder {
    fn decode(&self, line: &[u8]) -> Result<Option<DateRange>> {
        let text = str::from_utf8(line).map_err(|e| Error::from(("line is not valid UTF-8", e)))?;
        DATE_RANGE_CODEC.parse(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let decoder = TextDecoder::new();
        assert_eq!(
            decoder.decode(b"[2010 TO 2011]").unwrap().unwrap().to_string(),
            "[2010 TO 2011]"
        );
        assert_eq!(decoder.decode(b"null").unwrap(), None);
        assert!(decoder.decode(b"[2010 TO").is_err());
        assert!(decoder.decode(&[0xff, 0xfe]).is_err());
    }
}
