use nom::{
    bytes::complete::{tag, take, take_until},
    character::complete::char,
    combinator::{all_consuming, rest},
};

use super::result::{IResult, ParseError, Span};
use crate::error::{Error, Result};
use crate::model::{Bound, DateRange, Role, RANGE_SEPARATOR, UNBOUNDED};

pub fn parse_date_range(source: &str) -> Result<DateRange> {
    match date_range(Span::new(source)) {
        Ok((_, range)) => Ok(range),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into_error(source)),
        Err(nom::Err::Incomplete(_)) => Err(Error::grammar(source, 0, "unexpected end of input")),
    }
}

fn date_range(input: Span) -> IResult<DateRange> {
    //   "*"
    // | "[" bound " TO " bound "]"
    // | bound

    if let Ok((rest, _)) = all_consuming(tag::<_, _, ParseError>(UNBOUNDED))(input) {
        return Ok((rest, DateRange::single(Bound::Unbounded)));
    }

    if input.fragment().starts_with('[') {
        return double_bounded(input);
    }

    let (rest, lower) = bound(input, Role::Lower)?;
    Ok((rest, DateRange::single(lower)))
}

fn double_bounded(input: Span) -> IResult<DateRange> {
    let (inner, _) = char('[')(input)?;

    if !inner.fragment().ends_with(']') {
        return Err(nom::Err::Failure(ParseError::new(
            "missing closing bracket ']'".to_owned(),
            input,
        )));
    }

    let (closing, body) = take(inner.fragment().chars().count() - 1)(inner)?;

    let (separator, lower_text) = match take_until::<_, _, ParseError>(RANGE_SEPARATOR)(body) {
        Ok(v) => v,
        Err(_) => {
            return Err(nom::Err::Failure(ParseError::new(
                format!("missing '{}' separator", RANGE_SEPARATOR.trim()),
                input,
            )))
        }
    };
    let (upper_text, _) = tag(RANGE_SEPARATOR)(separator)?;

    let (_, lower) = bound(lower_text, Role::Lower)?;
    let (_, upper) = bound(upper_text, Role::Upper)?;

    let range = DateRange::new(lower, upper)
        .map_err(|e| nom::Err::Failure(ParseError::rejected(e, lower_text)))?;

    let (rest, _) = char(']')(closing)?;
    Ok((rest, range))
}

fn bound(input: Span, role: Role) -> IResult<Bound> {
    let (remaining, text) = rest(input)?;

    match Bound::parse(text.fragment(), role) {
        Ok(bound) => Ok((remaining, bound)),
        Err(_) => Err(nom::Err::Failure(ParseError::new(
            format!("'{}' matches no date precision pattern", text.fragment()),
            input,
        ))),
    }
}
