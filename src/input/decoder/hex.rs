use std::str;

use nom::{
    bytes::complete::take_while_m_n,
    combinator::{all_consuming, map_res},
    multi::many0,
};

use super::decoder::Decoder;
use crate::codec::{TypeCodec, DATE_RANGE_CODEC};
use crate::error::{Error, Result};
use crate::model::DateRange;

/// Lines hold the binary encoding as hex digits, or `NULL`. An empty line is
/// an empty buffer, which also decodes to null.
#[derive(Debug, Default)]
pub struct HexDecoder {}

impl HexDecoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Decoder for HexDecoder {
    fn decode(&self, line: &[u8]) -> Result<Option<DateRange>> {
        let text = str::from_utf8(line).map_err(|e| Error::from(("line is not valid UTF-8", e)))?;
        if text.eq_ignore_ascii_case("NULL") {
            return Ok(None);
        }
        let bytes = parse_hex(text.trim())?;
        DATE_RANGE_CODEC.deserialize(Some(bytes.as_slice()))
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let byte = map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u8::from_str_radix(digits, 16),
    );

    let result: nom::IResult<&str, Vec<u8>> = all_consuming(many0(byte))(s);
    match result {
        Ok((_, bytes)) => Ok(bytes),
        Err(_) => Err(Error::from(format!("malformed hex string '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_hex("00ff7F").unwrap(), vec![0x00, 0xff, 0x7f]);
        assert!(parse_hex("0").is_err());
        assert!(parse_hex("0g").is_err());
    }

    #[test]
    fn test_decode() {
        let decoder = HexDecoder::new();
        assert_eq!(decoder.decode(b"05").unwrap().unwrap().to_string(), "*");
        assert_eq!(decoder.decode(b"04").unwrap().unwrap().to_string(), "[* TO *]");
        assert_eq!(decoder.decode(b"").unwrap(), None);
        assert_eq!(decoder.decode(b"NULL").unwrap(), None);
        assert_eq!(
            decoder
                .decode(b"02000000000000000106")
                .unwrap()
                .unwrap()
                .to_string(),
            "[1970-01-01T00:00:00.001Z TO *]"
        );

        let err = decoder.decode(b"7f").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownTag(127));
    }
}
