use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::bound::Bound;
use crate::error::{Error, Result};
use crate::parser::parse_date_range;

/// Separator between the two bounds of a double-bounded range.
pub const RANGE_SEPARATOR: &str = " TO ";

/// A single point in time at some precision (`2011-02`, `*`) or an inclusive
/// interval between two bounds (`[2011-02 TO *]`).
///
/// Equality is structural: `*` and `[* TO *]` are different ranges, and so
/// are `[2001 TO 2002]` and `[2001-01 TO 2002-12]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    lower: Bound,
    upper: Option<Bound>,
}

impl DateRange {
    pub fn single(bound: Bound) -> Self {
        Self {
            lower: bound,
            upper: None,
        }
    }

    pub fn new(lower: Bound, upper: Bound) -> Result<Self> {
        if let (Bound::Bounded(lower_at), Bound::Bounded(upper_at)) = (lower, upper) {
            if lower_at.timestamp() > upper_at.timestamp() {
                return Err(Error::ordering(lower.to_string(), upper.to_string()));
            }
        }

        Ok(Self {
            lower,
            upper: Some(upper),
        })
    }

    pub fn parse(source: &str) -> Result<Self> {
        parse_date_range(source)
    }

    #[inline]
    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> Option<&Bound> {
        self.upper.as_ref()
    }

    #[inline]
    pub fn is_single_bounded(&self) -> bool {
        self.upper.is_none()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.upper {
            None => write!(f, "{}", self.lower),
            Some(upper) => write!(f, "[{}{}{}]", self.lower, RANGE_SEPARATOR, upper),
        }
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateRange::parse(&text).map_err(de::Error::custom)
    }
}
