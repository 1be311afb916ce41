// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Common utilities for token-level DEF parsing

use nom::{combinator::all_consuming, number::complete::double, IResult, Parser};

use super::{ParseError, ParseResult};

/// Split a line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a whole token as a floating point number
pub fn parse_number(token: &str) -> Option<f64> {
    let result: IResult<&str, f64> = all_consuming(double).parse(token);
    result.ok().map(|(_, value)| value)
}

/// Parse a numeric field, reporting the offending text on failure
pub fn number_field(token: &str, field: &'static str, line: usize) -> ParseResult<f64> {
    parse_number(token).ok_or_else(|| ParseError::InvalidNumber {
        line,
        field,
        text: token.to_string(),
    })
}

/// Fetch a header token by fixed position
pub fn header_token<'a>(
    tokens: &[&'a str],
    index: usize,
    keyword: &'static str,
    line: usize,
) -> ParseResult<&'a str> {
    tokens
        .get(index)
        .copied()
        .ok_or(ParseError::MalformedHeader {
            line,
            keyword,
            needed: index + 1,
            found: tokens.len(),
        })
}

/// Check if a token sequence is the `END COMPONENTS` delimiter
pub fn is_section_end(tokens: &[&str], section_name: &str) -> bool {
    tokens.first() == Some(&"END") && tokens.get(1) == Some(&section_name)
}
