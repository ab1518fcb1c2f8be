//! Joining values and interpolating components into messages.

use std::iter;

use crate::engine::TextError;
use crate::parser::{Conversion, FormatString, Placeholder, Segment, parse_format};
use crate::types::Value;

/// Join `values` into one string.
///
/// Two values become `a <final> b`; three or more are joined with
/// `separator` except the last, which is attached with ` <final> `. When
/// `right_to_left` is set the values are reversed first.
pub fn join_values(
    values: &[String],
    separator: &str,
    final_separator: &str,
    right_to_left: bool,
) -> Vec<String> {
    let mut ordered = values.to_vec();
    if right_to_left {
        ordered.reverse();
    }

    let Some(last) = ordered.pop() else {
        return ordered;
    };
    let joined = match ordered.as_slice() {
        [] => last,
        [first] => format!("{first} {final_separator} {last}"),
        init => format!("{} {final_separator} {last}", init.join(separator)),
    };
    vec![joined]
}

/// Interpolate `args` into a printf-style `message`.
pub fn interpolate(message: &str, args: &[Value]) -> Result<String, TextError> {
    let format = parse_format(message).map_err(|e| TextError::Format {
        message: e.to_string(),
    })?;
    render(&format, args)
}

/// Largest width or precision a placeholder may request.
pub const MAX_FIELD_SIZE: usize = 4096;

/// Render a parsed format with `args`.
///
/// Sequential placeholders consume arguments in order; positional ones
/// (`%2$s`) address them directly without advancing the sequence.
pub fn render(format: &FormatString, args: &[Value]) -> Result<String, TextError> {
    let mut output = String::new();
    let mut next = 0;
    for segment in &format.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(placeholder) => {
                check_field_size(placeholder)?;
                let index = match placeholder.argument {
                    Some(0) => {
                        return Err(TextError::Format {
                            message: "argument positions start at 1".to_string(),
                        });
                    }
                    Some(position) => position - 1,
                    None => {
                        next += 1;
                        next - 1
                    }
                };
                let arg = args.get(index).ok_or_else(|| TextError::Format {
                    message: format!(
                        "too few arguments: placeholder {} requested, {} given",
                        index + 1,
                        args.len()
                    ),
                })?;
                output.push_str(&convert(placeholder, arg));
            }
        }
    }
    Ok(output)
}

fn check_field_size(placeholder: &Placeholder) -> Result<(), TextError> {
    let requested = placeholder
        .width
        .into_iter()
        .chain(placeholder.precision)
        .max()
        .unwrap_or(0);
    if requested > MAX_FIELD_SIZE {
        return Err(TextError::Format {
            message: format!(
                "field size {requested} exceeds the maximum of {MAX_FIELD_SIZE}"
            ),
        });
    }
    Ok(())
}

fn convert(placeholder: &Placeholder, arg: &Value) -> String {
    let (sign, body) = match placeholder.conversion {
        Conversion::Decimal => {
            let n = arg.to_integer();
            (sign_of(n < 0, placeholder.plus_sign), n.unsigned_abs().to_string())
        }
        Conversion::Float => {
            let f = arg.to_float();
            let precision = placeholder.precision.unwrap_or(6);
            (
                sign_of(f.is_sign_negative() && f != 0.0, placeholder.plus_sign),
                format!("{:.*}", precision, f.abs()),
            )
        }
        Conversion::Exponent
        | Conversion::ExponentUpper
        | Conversion::General
        | Conversion::GeneralUpper => {
            let f = arg.to_float();
            let precision = placeholder.precision.unwrap_or(6);
            let body = match placeholder.conversion {
                Conversion::Exponent | Conversion::ExponentUpper => exponent(f.abs(), precision),
                _ => general(f.abs(), precision),
            };
            let body = match placeholder.conversion {
                Conversion::ExponentUpper | Conversion::GeneralUpper => body.to_uppercase(),
                _ => body,
            };
            (sign_of(f.is_sign_negative() && f != 0.0, placeholder.plus_sign), body)
        }
        Conversion::Unsigned => ("", (arg.to_integer() as u64).to_string()),
        Conversion::Binary => ("", format!("{:b}", arg.to_integer() as u64)),
        Conversion::Octal => ("", format!("{:o}", arg.to_integer() as u64)),
        Conversion::HexLower => ("", format!("{:x}", arg.to_integer() as u64)),
        Conversion::HexUpper => ("", format!("{:X}", arg.to_integer() as u64)),
        Conversion::Char => {
            let c = u32::try_from(arg.to_integer())
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            ("", c.to_string())
        }
        Conversion::String => {
            let text = arg.to_string();
            let text = match placeholder.precision {
                Some(precision) => text.chars().take(precision).collect(),
                None => text,
            };
            ("", text)
        }
    };
    pad(placeholder, sign, &body)
}

/// Scientific notation with an explicitly signed exponent: `1.5e+3`.
fn exponent(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// `%g`: `precision` significant digits, in exponent notation when the
/// exponent is below -4 or not below the precision, with trailing zeros
/// removed.
fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i64 = exp.parse().unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exp < -4 || exp >= digits {
        let sign = if exp < 0 { "-" } else { "+" };
        format!("{}e{sign}{}", trim_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exp).unwrap_or(0);
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn sign_of(negative: bool, plus_sign: bool) -> &'static str {
    if negative {
        "-"
    } else if plus_sign {
        "+"
    } else {
        ""
    }
}

fn pad(placeholder: &Placeholder, sign: &str, body: &str) -> String {
    let len = sign.chars().count() + body.chars().count();
    let fill = placeholder.width.unwrap_or(0).saturating_sub(len);
    let padding: String = iter::repeat_n(placeholder.padding, fill).collect();

    if placeholder.left_align {
        format!("{sign}{body}{padding}")
    } else if placeholder.padding == '0' && placeholder.conversion.is_signed() {
        format!("{sign}{padding}{body}")
    } else {
        format!("{padding}{sign}{body}")
    }
}
