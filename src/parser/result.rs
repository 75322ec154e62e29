use nom;

use nom_locate::LocatedSpan;

use crate::error::Error;

pub type Span<'a> = LocatedSpan<&'a str>;

pub type IResult<'a, O> = nom::IResult<Span<'a>, O, ParseError<'a>>;

#[derive(Debug)]
pub struct ParseError<'a> {
    message: String,
    wherein: Span<'a>,
    // Set when the text was well-formed but the value it describes was
    // rejected (e.g. bounds out of order).
    rejection: Option<Error>,
}

impl<'a> ParseError<'a> {
    pub fn new(message: String, wherein: Span<'a>) -> Self {
        Self {
            message,
            wherein,
            rejection: None,
        }
    }

    pub fn rejected(rejection: Error, wherein: Span<'a>) -> Self {
        Self {
            message: rejection.message().to_owned(),
            wherein,
            rejection: Some(rejection),
        }
    }

    pub fn message(&self) -> &String {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.wherein.location_offset()
    }

    pub fn into_error(self, source: &str) -> Error {
        match self.rejection {
            Some(err) => err,
            None => Error::grammar(source, self.offset(), &self.message),
        }
    }
}

impl<'a> nom::error::ParseError<Span<'a>> for ParseError<'a> {
    fn from_error_kind(input: Span<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(format!("parse error {:?}", kind), input)
    }

    fn append(_input: Span<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: Span<'a>, c: char) -> Self {
        Self::new(format!("expected '{}'", c), input)
    }
}
