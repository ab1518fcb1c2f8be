//! Message format parser using winnow.
//!
//! Parses printf-style formats into an AST. Handles:
//! - Literal text and the `%%` escape
//! - Positional arguments: `%2$s`
//! - Flags `-`, `+`, `0`, space and custom padding `'c`
//! - Width and `.precision`
//! - Conversions `b c d u o x X f F e E g G s`

use super::ast::*;
use super::error::ParseError;
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_till};

/// Parse a message format into an AST.
pub fn parse_format(input: &str) -> Result<FormatString, ParseError> {
    let mut remaining = input;
    let parsed = format_string(&mut remaining);
    let offset = input.len() - remaining.len();
    let column = input[..offset].chars().count() + 1;
    match parsed {
        Ok(format) if remaining.is_empty() => Ok(format),
        Ok(_) => Err(ParseError::Syntax {
            column,
            message: format!(
                "invalid conversion specification starting at '{}'",
                remaining.chars().take(8).collect::<String>()
            ),
        }),
        Err(e) => Err(ParseError::Syntax {
            column,
            message: format!("parse error: {e}"),
        }),
    }
}

/// Parse a complete format into segments.
fn format_string(input: &mut &str) -> ModalResult<FormatString> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(FormatString {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "%%".value(Segment::Literal("%".to_string())),
        placeholder,
        literal_run,
    ))
    .parse_next(input)
}

/// Parse a run of text up to the next `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '%')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

#[derive(Clone)]
enum Flag {
    LeftAlign,
    PlusSign,
    Padding(char),
}

/// Parse a placeholder: % [argnum$] [flags] [width] [.precision] conversion
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded(
        '%',
        (
            opt(terminated(number, '$')),
            repeat(0.., flag),
            opt(number),
            opt(preceded('.', number)),
            any.verify_map(Conversion::from_char),
        ),
    )
    .map(|(argument, flags, width, precision, conversion): (_, Vec<Flag>, _, _, _)| {
        let mut placeholder = Placeholder {
            argument,
            left_align: false,
            plus_sign: false,
            padding: ' ',
            width,
            precision,
            conversion,
        };
        for flag in flags {
            match flag {
                Flag::LeftAlign => placeholder.left_align = true,
                Flag::PlusSign => placeholder.plus_sign = true,
                Flag::Padding(c) => placeholder.padding = c,
            }
        }
        Segment::Placeholder(placeholder)
    })
    .parse_next(input)
}

fn flag(input: &mut &str) -> ModalResult<Flag> {
    alt((
        '-'.value(Flag::LeftAlign),
        '+'.value(Flag::PlusSign),
        '0'.value(Flag::Padding('0')),
        ' '.value(Flag::Padding(' ')),
        preceded('\'', any).map(Flag::Padding),
    ))
    .parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<usize> {
    digit1
        .try_map(str::parse::<usize>)
        .parse_next(input)
}
