use std::fmt;

use super::precision::{Precision, Role};
use super::timestamp::{Timestamp, TimestampTrait};
use crate::error::{Error, Result};

/// Text of the unbounded marker, both as a bound and as a whole range.
pub const UNBOUNDED: &str = "*";

/// A concrete instant at some precision. Only obtainable through the `Bound`
/// constructors, so the instant is always inside the calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Moment {
    timestamp: Timestamp,
    precision: Precision,
}

impl Moment {
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.precision.format(self.timestamp) {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.timestamp.to_string_millis()),
        }
    }
}

/// One edge of a [`DateRange`](super::DateRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Unbounded,
    Bounded(Moment),
}

impl Bound {
    /// Stores `timestamp` as-is. Fails if the instant is outside the calendar
    /// range the text form can express.
    pub fn bounded(timestamp: Timestamp, precision: Precision) -> Result<Self> {
        if timestamp.to_datetime().is_none() {
            return Err(Error::invalid_argument(format!(
                "timestamp {} is outside the supported calendar range",
                timestamp
            )));
        }
        Ok(Bound::Bounded(Moment {
            timestamp,
            precision,
        }))
    }

    /// A lower bound: the first millisecond of the period `timestamp` falls
    /// in at `precision`.
    pub fn lower(timestamp: Timestamp, precision: Precision) -> Result<Self> {
        Self::bounded(precision.round_down(timestamp), precision)
    }

    /// An upper bound: the last millisecond of the period.
    pub fn upper(timestamp: Timestamp, precision: Precision) -> Result<Self> {
        Self::bounded(precision.round_up(timestamp), precision)
    }

    pub fn parse_lower(text: &str) -> Result<Self> {
        Self::parse(text, Role::Lower)
    }

    pub fn parse_upper(text: &str) -> Result<Self> {
        Self::parse(text, Role::Upper)
    }

    pub(crate) fn parse(text: &str, role: Role) -> Result<Self> {
        if text == UNBOUNDED {
            return Ok(Bound::Unbounded);
        }
        let (timestamp, precision) = Precision::parse(text, role)?;
        Self::bounded(timestamp, precision)
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Bound::Unbounded => None,
            Bound::Bounded(moment) => Some(moment.timestamp),
        }
    }

    pub fn precision(&self) -> Option<Precision> {
        match self {
            Bound::Unbounded => None,
            Bound::Bounded(moment) => Some(moment.precision),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "{}", UNBOUNDED),
            Bound::Bounded(moment) => write!(f, "{}", moment),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::DateRange;

    #[test]
    fn test_parse() {
        assert_eq!(Bound::parse_lower("*").unwrap(), Bound::Unbounded);
        assert_eq!(Bound::parse_upper("*").unwrap(), Bound::Unbounded);

        let lower = Bound::parse_lower("2010-01").unwrap();
        let upper = Bound::parse_upper("2010-01").unwrap();
        assert_eq!(lower.precision(), Some(Precision::Month));
        assert_eq!(upper.precision(), Some(Precision::Month));
        assert_eq!(
            upper.timestamp().unwrap() - lower.timestamp().unwrap(),
            31 * 24 * 60 * 60 * 1000 - 1
        );
        assert_eq!(lower.to_string(), "2010-01");
        assert_eq!(upper.to_string(), "2010-01");
    }

    #[test]
    fn test_parse_error() {
        let err = Bound::parse_lower("**").unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::Grammar {
                source: "**".to_owned(),
                offset: 0
            }
        );
    }

    #[test]
    fn test_equality() {
        let day = Bound::lower(0, Precision::Day).unwrap();
        let year = Bound::lower(0, Precision::Year).unwrap();
        // Same instant, different precision.
        assert_eq!(day.timestamp(), year.timestamp());
        assert_ne!(day, year);

        let mut set = HashSet::new();
        set.insert(Bound::Unbounded);
        set.insert(Bound::parse_lower("*").unwrap());
        set.insert(day);
        set.insert(Bound::parse_lower("1970-01-01").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_factories_round() {
        // 2011-02-03T04:05:16.789Z
        let instant = 1296705916789;
        let lower = Bound::lower(instant, Precision::Hour).unwrap();
        let upper = Bound::upper(instant, Precision::Hour).unwrap();
        assert_eq!(lower.timestamp(), Some(1296705600000));
        assert_eq!(upper.timestamp(), Some(1296709199999));
        assert_eq!(lower.to_string(), "2011-02-03T04");

        let exact = Bound::bounded(instant, Precision::Hour).unwrap();
        assert_eq!(exact.timestamp(), Some(instant));
        assert!(!exact.is_unbounded());
        assert!(Bound::Unbounded.is_unbounded());
    }

    #[test]
    fn test_out_of_range() {
        let err = Bound::bounded(Timestamp::MAX, Precision::Year).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
        assert!(Bound::upper(Timestamp::MIN, Precision::Day).is_err());
    }

    #[test]
    fn test_display_outside_calendar_range() {
        let far = Bound::Bounded(Moment {
            timestamp: Timestamp::MAX,
            precision: Precision::Year,
        });
        assert_eq!(far.to_string(), format!("{}ms", Timestamp::MAX));

        let err = DateRange::new(far, Bound::lower(0, Precision::Year).unwrap()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::Ordering {
                lower: format!("{}ms", Timestamp::MAX),
                upper: "1970".to_owned()
            }
        );
    }
}
