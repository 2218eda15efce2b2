//! Common utility functions for investment calculations.
//!
//! This module provides the shared numeric plumbing used by both worksheets:
//! lenient parsing of in-progress field text, saturating arithmetic, the
//! break-even guard, and two-decimal rounding for display.

use std::num::ParseFloatError;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of days a monthly cost is spread over.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Divisor converting a percentage into a ratio.
pub const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Error returned when field text is not a floating-point literal.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid amount '{input}': not a finite number")]
    NotFinite { input: String },
}

/// Trims whitespace and removes `,` thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses normalized text as an `f64`.
///
/// Spelled-out `inf`/`nan` are refused; a literal too large for `f64`
/// still parses (to infinity).
fn parse_float_literal(
    input: &str,
    text: &str,
) -> Result<f64, ParseAmountError> {
    if text.contains(|c: char| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return Err(ParseAmountError::NotFinite {
            input: input.to_string(),
        });
    }

    text.parse::<f64>()
        .map_err(|source| ParseAmountError::Malformed {
            input: input.to_string(),
            source,
        })
}

/// Rewrites a float literal into a form `Decimal` accepts: no leading `+`
/// and digits on both sides of a bare decimal point.
fn decimal_literal(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);

    if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    }
}

/// Converts an `f64` to `Decimal`, saturating at the bounds and rounding
/// magnitudes below `Decimal`'s precision to zero.
fn saturating_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        if value.abs() < 1.0 {
            Decimal::ZERO
        } else if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Exact decimal value of a validated literal, falling back to its float
/// value when the literal is out of `Decimal` range or precision.
fn to_decimal(
    text: &str,
    value: f64,
) -> Decimal {
    if value == 0.0 {
        return Decimal::ZERO;
    }

    let literal = decimal_literal(text);
    let exact = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(&literal)
    } else {
        Decimal::from_str(&literal)
    };

    exact.unwrap_or_else(|_| saturating_from_f64(value))
}

/// Parses field text into a [`Decimal`].
///
/// The text must be a complete floating-point literal once whitespace and
/// `,` separators are removed: plain (`"12."`, `".5"`, `"+3"`) or
/// scientific (`"1.5e3"`). Values beyond `Decimal`'s range saturate at
/// `Decimal::MAX`/`MIN`; values below its precision become zero. Empty text
/// is an error here; callers decide what an empty field means.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use invest_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("12.").unwrap(), dec!(12));
/// assert_eq!(parse_amount("1,250.50").unwrap(), dec!(1250.50));
/// assert_eq!(parse_amount("2e3").unwrap(), dec!(2000));
/// assert_eq!(parse_amount("1e100").unwrap(), Decimal::MAX);
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let text = normalize_amount_input(s);
    let value = parse_float_literal(s, &text)?;
    Ok(to_decimal(&text, value))
}

/// Returns the numeric value of a field, treating empty or unparseable text as 0.
///
/// Never fails.
pub fn numeric(s: &str) -> Decimal {
    parse_amount(s).unwrap_or(Decimal::ZERO)
}

/// Returns `true` if `s` may be stored in an input field.
///
/// Empty text is always acceptable; anything else must be a float literal
/// whose value is at least zero. `"-0"` counts as zero.
pub fn is_acceptable_input(s: &str) -> bool {
    s.is_empty()
        || parse_float_literal(s, &normalize_amount_input(s)).is_ok_and(|value| value >= 0.0)
}

/// Converts a percentage into a ratio.
pub fn margin_ratio(percent: Decimal) -> Decimal {
    percent / PERCENT
}

/// Divides `a` by `b`, saturating at the representable bounds on overflow.
pub fn saturating_div(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_div(b).unwrap_or_else(|| {
        if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Revenue needed to cover `fixed_cost` at the given gross margin ratio.
///
/// A margin of zero or less has no finite break-even point; the result is
/// defined as zero in that case.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use invest_core::calculations::common::break_even_revenue;
///
/// assert_eq!(break_even_revenue(dec!(900), dec!(0.40)), dec!(2250));
/// assert_eq!(break_even_revenue(dec!(900), dec!(0)), dec!(0));
/// ```
pub fn break_even_revenue(
    fixed_cost: Decimal,
    margin_ratio: Decimal,
) -> Decimal {
    if margin_ratio > Decimal::ZERO {
        saturating_div(fixed_cost, margin_ratio)
    } else {
        Decimal::ZERO
    }
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimal digits.
///
/// A negative value keeps its minus sign even when it rounds to zero, so
/// the text always agrees with the value's sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use invest_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(125000)), "125000.00");
/// assert_eq!(format_amount(dec!(-100)), "-100.00");
/// assert_eq!(format_amount(dec!(-0.001)), "-0.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut magnitude = round_half_up(value.abs());
    magnitude.rescale(2);
    if value < Decimal::ZERO {
        format!("-{magnitude}")
    } else {
        magnitude.to_string()
    }
}
