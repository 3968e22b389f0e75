use std::str::FromStr;

use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map_res};
use nom::{Finish, IResult, Parser};

/// One trimmed line of input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Line {
    Calories(u64),
    Blank,
}

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

fn calories(input: &str) -> IResult<&str, u64> {
    all_consuming(base10_numeric::<u64>).parse(input)
}

/// Classifies a line, ignoring surrounding whitespace. Anything that isn't blank has to be
/// an unsigned decimal that fits in a `u64`.
pub fn parse_line(line: &str) -> Result<Line, nom::error::Error<String>> {
    let line = line.trim();

    if line.is_empty() {
        Ok(Line::Blank)
    } else {
        nom_parse_to_owned(calories, line).map(Line::Calories)
    }
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lets `?` carry a nom error past the lifetime of the line it was parsed from.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}
