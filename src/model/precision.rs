use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::prelude::*;
use lazy_static::lazy_static;

use super::timestamp::{Timestamp, TimestampTrait};
use crate::error::{Error, Result};
use crate::parser::parse_datetime;

/// Granularity at which a bound's timestamp is meaningful.
///
/// Variants are declared coarse to fine, so `Precision::Year < Precision::Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Which edge of a range a parsed bound belongs to. Decides the rounding
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lower,
    Upper,
}

lazy_static! {
    // Compiled patterns, indexed by tag.
    static ref PATTERN_ITEMS: Vec<Vec<Vec<Item<'static>>>> = Precision::COARSE_TO_FINE
        .iter()
        .map(|p| {
            p.patterns()
                .iter()
                .map(|pattern| StrftimeItems::new(pattern).collect())
                .collect()
        })
        .collect();
}

impl Precision {
    /// Finest first; the order text is matched against patterns.
    pub const ALL: [Precision; 7] = [
        Precision::Millisecond,
        Precision::Second,
        Precision::Minute,
        Precision::Hour,
        Precision::Day,
        Precision::Month,
        Precision::Year,
    ];

    const COARSE_TO_FINE: [Precision; 7] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
        Precision::Millisecond,
    ];

    /// Wire value. Stable, never reordered.
    pub fn tag(&self) -> u8 {
        use Precision::*;
        match self {
            Year => 0x00,
            Month => 0x01,
            Day => 0x02,
            Hour => 0x03,
            Minute => 0x04,
            Second => 0x05,
            Millisecond => 0x06,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|p| p.tag() == tag)
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("invalid precision tag {}", tag)))
    }

    /// Text patterns, primary (formatting) pattern first.
    pub fn patterns(&self) -> &'static [&'static str] {
        use Precision::*;
        match self {
            Year => &["%Y"],
            Month => &["%Y-%m"],
            Day => &["%Y-%m-%d"],
            Hour => &["%Y-%m-%dT%H", "%Y-%m-%dT%HZ"],
            Minute => &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%MZ"],
            Second => &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%SZ"],
            Millisecond => &["%Y-%m-%dT%H:%M:%S%.3fZ", "%Y-%m-%dT%H:%M:%S%.3f"],
        }
    }

    fn items(&self) -> &'static [Vec<Item<'static>>] {
        &PATTERN_ITEMS[self.tag() as usize]
    }

    /// Forces every field finer than this precision to its minimum.
    ///
    /// Instants outside the calendar range are returned untouched.
    pub fn round_down(&self, ts: Timestamp) -> Timestamp {
        self.round(ts, Role::Lower)
    }

    /// Forces every field finer than this precision to its maximum, e.g. the
    /// day of a month-precision instant becomes the last day of that month.
    pub fn round_up(&self, ts: Timestamp) -> Timestamp {
        self.round(ts, Role::Upper)
    }

    fn round(&self, ts: Timestamp, role: Role) -> Timestamp {
        let dt = match ts.to_datetime() {
            Some(dt) => dt,
            None => return ts,
        };

        let mut fields = Fields::of(&dt);
        for field in Self::COARSE_TO_FINE.iter().filter(|f| *f > self) {
            fields.clamp(*field, role);
        }

        fields
            .to_datetime()
            .map(|dt| Timestamp::from_datetime(&dt))
            .unwrap_or(ts)
    }

    /// Infers the precision of `text` by trying every pattern, finest
    /// precision first, and rounds the instant according to `role`.
    pub fn parse(text: &str, role: Role) -> Result<(Timestamp, Precision)> {
        Self::infer(text, role)
            .ok_or_else(|| Error::grammar(text, 0, "text matches no date precision pattern"))
    }

    pub(crate) fn infer(text: &str, role: Role) -> Option<(Timestamp, Precision)> {
        for precision in Self::ALL.iter() {
            for items in precision.items() {
                if let Some(dt) = parse_datetime(text, items) {
                    let ts = Timestamp::from_datetime(&dt);
                    let ts = match role {
                        Role::Lower => precision.round_down(ts),
                        Role::Upper => precision.round_up(ts),
                    };
                    return Some((ts, *precision));
                }
            }
        }
        None
    }

    /// Formats with the primary pattern. `None` when the instant is outside
    /// the calendar range.
    pub fn format(&self, ts: Timestamp) -> Option<String> {
        let dt = ts.to_datetime()?;
        let items = &self.items()[0];

        if dt.year() <= 0 {
            // Proleptic year, zero-padded to 5 including the sign.
            let rest = dt.format_with_items(items[1..].iter());
            return Some(format!("{:05}{}", dt.year(), rest));
        }

        Some(dt.format_with_items(items.iter()).to_string())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Precision::*;
        let name = match self {
            Year => "YEAR",
            Month => "MONTH",
            Day => "DAY",
            Hour => "HOUR",
            Minute => "MINUTE",
            Second => "SECOND",
            Millisecond => "MILLISECOND",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unknown precision '{}'", s)))
    }
}

struct Fields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
}

impl Fields {
    fn of(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            milli: dt.nanosecond() / 1_000_000,
        }
    }

    // Must be applied coarse to fine: the last day of a month depends on the
    // month already being settled.
    fn clamp(&mut self, field: Precision, role: Role) {
        let up = role == Role::Upper;
        match field {
            Precision::Year => (),
            Precision::Month => self.month = if up { 12 } else { 1 },
            Precision::Day => {
                self.day = if up {
                    days_in_month(self.year, self.month)
                } else {
                    1
                }
            }
            Precision::Hour => self.hour = if up { 23 } else { 0 },
            Precision::Minute => self.minute = if up { 59 } else { 0 },
            Precision::Second => self.second = if up { 59 } else { 0 },
            Precision::Millisecond => self.milli = if up { 999 } else { 0 },
        }
    }

    fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_milli_opt(
            self.hour,
            self.minute,
            self.second,
            self.milli,
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(text: &str) -> Timestamp {
        let dt = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.3f").unwrap();
        Timestamp::from_datetime(&dt)
    }

    #[test]
    fn test_round() {
        let instant = ts("2011-02-03T04:05:16.789");

        #[rustfmt::skip]
        let tests = [
            (Precision::Year,        "2011-01-01T00:00:00.000", "2011-12-31T23:59:59.999"),
            (Precision::Month,       "2011-02-01T00:00:00.000", "2011-02-28T23:59:59.999"),
            (Precision::Day,         "2011-02-03T00:00:00.000", "2011-02-03T23:59:59.999"),
            (Precision::Hour,        "2011-02-03T04:00:00.000", "2011-02-03T04:59:59.999"),
            (Precision::Minute,      "2011-02-03T04:05:00.000", "2011-02-03T04:05:59.999"),
            (Precision::Second,      "2011-02-03T04:05:16.000", "2011-02-03T04:05:16.999"),
            (Precision::Millisecond, "2011-02-03T04:05:16.789", "2011-02-03T04:05:16.789"),
        ];

        for (precision, down, up) in &tests {
            assert_eq!(precision.round_down(instant).to_string_millis(), *down, "{}", precision);
            assert_eq!(precision.round_up(instant).to_string_millis(), *up, "{}", precision);
        }
    }

    #[test]
    fn test_round_up_month_uses_calendar() {
        #[rustfmt::skip]
        let tests = [
            ("2012-02-10T00:00:00.000", "2012-02-29T23:59:59.999"),
            ("1900-02-10T00:00:00.000", "1900-02-28T23:59:59.999"),
            ("2000-02-10T00:00:00.000", "2000-02-29T23:59:59.999"),
            ("2011-04-10T00:00:00.000", "2011-04-30T23:59:59.999"),
            ("0000-02-10T00:00:00.000", "0000-02-29T23:59:59.999"),
        ];

        for (input, expected) in &tests {
            assert_eq!(Precision::Month.round_up(ts(input)).to_string_millis(), *expected);
        }
    }

    #[test]
    fn test_tags() {
        for precision in Precision::ALL.iter() {
            assert_eq!(Precision::from_tag(precision.tag()).unwrap(), *precision);
        }
        assert_eq!(Precision::Year.tag(), 0x00);
        assert_eq!(Precision::Millisecond.tag(), 0x06);

        let err = Precision::from_tag(7).unwrap_err();
        assert_eq!(err.kind(), &crate::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_parse_infers_precision() {
        #[rustfmt::skip]
        let tests = [
            ("2011-02-03T04:05:16.789Z", Precision::Millisecond, "2011-02-03T04:05:16.789", "2011-02-03T04:05:16.789"),
            ("2011-02-03T04:05:16.789",  Precision::Millisecond, "2011-02-03T04:05:16.789", "2011-02-03T04:05:16.789"),
            ("2011-02-03T04:05:16Z",     Precision::Second,      "2011-02-03T04:05:16.000", "2011-02-03T04:05:16.999"),
            ("2011-02-03T04:05",         Precision::Minute,      "2011-02-03T04:05:00.000", "2011-02-03T04:05:59.999"),
            ("2011-02-03T04",            Precision::Hour,        "2011-02-03T04:00:00.000", "2011-02-03T04:59:59.999"),
            ("2011-02-03",               Precision::Day,         "2011-02-03T00:00:00.000", "2011-02-03T23:59:59.999"),
            ("2010-01",                  Precision::Month,       "2010-01-01T00:00:00.000", "2010-01-31T23:59:59.999"),
            ("2010",                     Precision::Year,        "2010-01-01T00:00:00.000", "2010-12-31T23:59:59.999"),
        ];

        for (text, precision, lower, upper) in &tests {
            let (ts, p) = Precision::parse(text, Role::Lower).unwrap();
            assert_eq!((ts.to_string_millis().as_str(), p), (*lower, *precision), "{}", text);
            let (ts, p) = Precision::parse(text, Role::Upper).unwrap();
            assert_eq!((ts.to_string_millis().as_str(), p), (*upper, *precision), "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in &["", "20", "2011-02-3", "2011/02/03", "now", "2011-02-03 04:05"] {
            let err = Precision::parse(text, Role::Lower).unwrap_err();
            assert_eq!(err.offset(), Some(0), "{}", text);
        }
    }

    #[test]
    fn test_format() {
        let instant = ts("2011-02-03T04:05:16.789");

        #[rustfmt::skip]
        let tests = [
            (Precision::Year,        "2011"),
            (Precision::Month,       "2011-02"),
            (Precision::Day,         "2011-02-03"),
            (Precision::Hour,        "2011-02-03T04"),
            (Precision::Minute,      "2011-02-03T04:05"),
            (Precision::Second,      "2011-02-03T04:05:16"),
            (Precision::Millisecond, "2011-02-03T04:05:16.789Z"),
        ];

        for (precision, expected) in &tests {
            assert_eq!(precision.format(instant).unwrap(), *expected);
        }
    }

    #[test]
    fn test_format_proleptic_years() {
        #[rustfmt::skip]
        let tests = [
            ("0000-01-01T00:00:00.000", Precision::Year,        "00000"),
            ("0000-03-04T00:00:00.000", Precision::Day,         "00000-03-04"),
            ("-0001-01-01T00:00:00.000", Precision::Month,      "-0001-01"),
            ("-0500-12-31T23:59:59.999", Precision::Millisecond, "-0500-12-31T23:59:59.999Z"),
            ("0001-01-01T00:00:00.000", Precision::Year,        "0001"),
        ];

        for (input, precision, expected) in &tests {
            let text = precision.format(ts(input)).unwrap();
            assert_eq!(text, *expected);
            let (parsed, p) = Precision::parse(&text, Role::Lower).unwrap();
            assert_eq!((parsed, p), (precision.round_down(ts(input)), *precision));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Precision::Day.to_string(), "DAY");
        assert_eq!("millisecond".parse::<Precision>().unwrap(), Precision::Millisecond);
        assert!("fortnight".parse::<Precision>().is_err());
        assert!(Precision::Year < Precision::Millisecond);
    }
}
