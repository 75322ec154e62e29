use std::convert::TryFrom;

use nom::{
    number::complete::{be_i64, be_u8},
    sequence::pair,
};

use crate::error::{Error, Result};
use crate::model::{Bound, DateRange, Precision, Timestamp};

// Encoded bound: 8-byte big-endian epoch milliseconds + 1-byte precision tag.
const BOUND_LEN: usize = 9;

/// The six mutually exclusive byte layouts, keyed by their leading tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleBounded,
    Closed,
    OpenHigh,
    OpenLow,
    BothOpen,
    SingleUnbounded,
}

impl Layout {
    pub fn of(range: &DateRange) -> Self {
        use Layout::*;
        match (range.lower(), range.upper()) {
            (Bound::Unbounded, None) => SingleUnbounded,
            (Bound::Bounded(_), None) => SingleBounded,
            (Bound::Unbounded, Some(Bound::Unbounded)) => BothOpen,
            (Bound::Unbounded, Some(Bound::Bounded(_))) => OpenLow,
            (Bound::Bounded(_), Some(Bound::Unbounded)) => OpenHigh,
            (Bound::Bounded(_), Some(Bound::Bounded(_))) => Closed,
        }
    }

    pub fn tag(&self) -> u8 {
        use Layout::*;
        match self {
            SingleBounded => 0x00,
            Closed => 0x01,
            OpenHigh => 0x02,
            OpenLow => 0x03,
            BothOpen => 0x04,
            SingleUnbounded => 0x05,
        }
    }

    /// Number of concrete bounds following the tag byte.
    fn bounds(&self) -> usize {
        use Layout::*;
        match self {
            Closed => 2,
            SingleBounded | OpenHigh | OpenLow => 1,
            BothOpen | SingleUnbounded => 0,
        }
    }

    pub fn encoded_len(&self) -> usize {
        1 + BOUND_LEN * self.bounds()
    }
}

impl TryFrom<u8> for Layout {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        use Layout::*;
        match tag {
            0x00 => Ok(SingleBounded),
            0x01 => Ok(Closed),
            0x02 => Ok(OpenHigh),
            0x03 => Ok(OpenLow),
            0x04 => Ok(BothOpen),
            0x05 => Ok(SingleUnbounded),
            tag => Err(Error::unknown_tag(tag)),
        }
    }
}

pub fn encode(range: &DateRange) -> Vec<u8> {
    let layout = Layout::of(range);
    let mut buf = Vec::with_capacity(layout.encoded_len());
    buf.push(layout.tag());

    let bounds = std::iter::once(range.lower()).chain(range.upper());
    for bound in bounds {
        if let Bound::Bounded(moment) = bound {
            buf.extend_from_slice(&moment.timestamp().to_be_bytes());
            buf.push(moment.precision().tag());
        }
    }

    buf
}

pub fn decode(buf: &[u8]) -> Result<DateRange> {
    let tag = match buf.first() {
        Some(tag) => *tag,
        None => return Err(Error::truncated(1, 0)),
    };

    let layout = Layout::try_from(tag)?;
    let expected = layout.encoded_len();
    if buf.len() < expected {
        return Err(Error::truncated(expected, buf.len()));
    }
    if buf.len() > expected {
        return Err(Error::invalid_argument(format!(
            "{} unexpected trailing bytes after date range encoding",
            buf.len() - expected
        )));
    }

    let mut rest = &buf[1..];
    let mut next_bound = || -> Result<Bound> {
        let (r, (timestamp, precision)) = bound(rest)?;
        rest = r;
        Bound::bounded(timestamp, Precision::from_tag(precision)?)
    };

    use Layout::*;
    match layout {
        SingleBounded => Ok(DateRange::single(next_bound()?)),
        Closed => {
            let lower = next_bound()?;
            let upper = next_bound()?;
            DateRange::new(lower, upper)
        }
        OpenHigh => DateRange::new(next_bound()?, Bound::Unbounded),
        OpenLow => DateRange::new(Bound::Unbounded, next_bound()?),
        BothOpen => DateRange::new(Bound::Unbounded, Bound::Unbounded),
        SingleUnbounded => Ok(DateRange::single(Bound::Unbounded)),
    }
}

fn bound(input: &[u8]) -> Result<(&[u8], (Timestamp, u8))> {
    pair(be_i64::<_, nom::error::Error<&[u8]>>, be_u8)(input)
        .map_err(|_| Error::truncated(BOUND_LEN, input.len()))
}
