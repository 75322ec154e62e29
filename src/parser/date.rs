use chrono::format::{Fixed, Item, Numeric};
use chrono::{NaiveDate, NaiveDateTime};
use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, one_of},
    combinator::opt,
};

use super::result::{IResult, ParseError, Span};

/// Matches `text` against a compiled strftime pattern. The whole text must be
/// consumed and the fields must form a valid proleptic Gregorian date-time.
///
/// Only the items the precision patterns use are understood: `%Y`, `%m`,
/// `%d`, `%H`, `%M`, `%S`, `%.3f` and literals. Fields missing from the
/// pattern take their minimum value.
pub fn parse_datetime(text: &str, items: &[Item]) -> Option<NaiveDateTime> {
    let mut year = 1970;
    let (mut month, mut day) = (1, 1);
    let (mut hour, mut minute, mut second, mut milli) = (0, 0, 0, 0);

    let mut rest = Span::new(text);
    for item in items {
        let (r, _) = match item {
            Item::Literal(lit) => literal(rest, lit).ok()?,
            Item::Numeric(Numeric::Year, _) => {
                let (r, v) = signed_year(rest).ok()?;
                year = v;
                (r, ())
            }
            Item::Numeric(Numeric::Month, _) => two_digits(rest, &mut month).ok()?,
            Item::Numeric(Numeric::Day, _) => two_digits(rest, &mut day).ok()?,
            Item::Numeric(Numeric::Hour, _) => two_digits(rest, &mut hour).ok()?,
            Item::Numeric(Numeric::Minute, _) => two_digits(rest, &mut minute).ok()?,
            Item::Numeric(Numeric::Second, _) => two_digits(rest, &mut second).ok()?,
            Item::Fixed(Fixed::Nanosecond3) => {
                let (r, _) = char::<_, ParseError>('.')(rest).ok()?;
                let (r, v) = fixed_digits(r, 3).ok()?;
                milli = v;
                (r, ())
            }
            _ => return None,
        };
        rest = r;
    }

    if !rest.fragment().is_empty() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, milli)
}

fn literal<'a>(input: Span<'a>, lit: &str) -> IResult<'a, ()> {
    let (rest, _) = tag(lit)(input)?;
    Ok((rest, ()))
}

fn signed_year(input: Span) -> IResult<i32> {
    // [+-]?[0-9]{4,}
    let (rest, sign) = opt(one_of("+-"))(input)?;
    let (rest, digits) = digit1(rest)?;

    if digits.fragment().len() < 4 {
        return Err(nom::Err::Error(ParseError::new(
            "year must have at least 4 digits".to_owned(),
            input,
        )));
    }

    let year = digits
        .fragment()
        .parse::<i32>()
        .map_err(|e| nom::Err::Error(ParseError::new(e.to_string(), input)))?;

    match sign {
        Some('-') => Ok((rest, -year)),
        _ => Ok((rest, year)),
    }
}

fn two_digits<'a>(input: Span<'a>, field: &mut u32) -> IResult<'a, ()> {
    let (rest, value) = fixed_digits(input, 2)?;
    *field = value;
    Ok((rest, ()))
}

fn fixed_digits(input: Span, count: usize) -> IResult<u32> {
    let (rest, m) = take_while_m_n(count, count, |c: char| c.is_ascii_digit())(input)?;
    let value = m
        .fragment()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, d| acc * 10 + d);
    Ok((rest, value))
}
