mod binary;

pub use binary::Layout;

use crate::error::Result;
use crate::model::DateRange;

/// External column type the date range codec is registered under.
pub const DATE_RANGE_TYPE_NAME: &str = "org.apache.cassandra.db.marshal.DateRangeType";

const NULL: &str = "NULL";

/// Process-wide codec instance. Stateless, safe to share across threads.
pub static DATE_RANGE_CODEC: DateRangeCodec = DateRangeCodec;

/// Typed codec contract a driver looks codecs up by. `None` stands for the
/// null value on every edge.
pub trait TypeCodec {
    type Value;

    fn type_name(&self) -> &'static str;

    fn serialize(&self, value: Option<&Self::Value>) -> Result<Option<Vec<u8>>>;

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<Self::Value>>;

    fn parse(&self, text: Option<&str>) -> Result<Option<Self::Value>>;

    fn format(&self, value: Option<&Self::Value>) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeCodec;

impl TypeCodec for DateRangeCodec {
    type Value = DateRange;

    fn type_name(&self) -> &'static str {
        DATE_RANGE_TYPE_NAME
    }

    fn serialize(&self, value: Option<&DateRange>) -> Result<Option<Vec<u8>>> {
        Ok(value.map(binary::encode))
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<DateRange>> {
        match bytes {
            None => Ok(None),
            Some(bytes) if bytes.is_empty() => Ok(None),
            Some(bytes) => binary::decode(bytes).map(Some),
        }
    }

    fn parse(&self, text: Option<&str>) -> Result<Option<DateRange>> {
        match text {
            None => Ok(None),
            Some(text) if text.eq_ignore_ascii_case(NULL) => Ok(None),
            Some(text) => DateRange::parse(text).map(Some),
        }
    }

    fn format(&self, value: Option<&DateRange>) -> String {
        match value {
            None => NULL.to_owned(),
            Some(range) => range.to_string(),
        }
    }
}
