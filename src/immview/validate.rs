//! # Input Validation
//!
//! Turns the three raw strings into a [`ValidatedRequest`].
//!
//! Validation runs in two passes. First every field is parsed as a base-10
//! integer (optional sign, surrounding whitespace ignored) in the order year,
//! month, page. Only when all three parse are the bounds checked, again in that
//! order. Either pass stops at the first problem, so exactly one error is
//! reported and no partial request is ever built.
//!
//! Digit strings too long for a machine integer are treated as numbers that are
//! out of range rather than as non-numbers. Pages have no upper bound short of
//! that limit.

use crate::error::ValidationError;
use crate::model::{Field, RawInput, ValidatedRequest, MAX_YEAR, MIN_YEAR};
use std::num::IntErrorKind;

pub const YEAR_RANGE_MSG: &str = "Year out of valid range (1869-2100)";
pub const MONTH_RANGE_MSG: &str = "Month must be between 1-12";
pub const PAGE_MIN_MSG: &str = "Page number must be at least 1";
pub const PAGE_MAX_MSG: &str = "Page number is too large";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Int(i64),
    Overflow { negative: bool },
}

fn parse_field(raw: &RawInput, field: Field) -> Result<Parsed, ValidationError> {
    match raw.get(field).trim().parse::<i64>() {
        Ok(n) => Ok(Parsed::Int(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Parsed::Overflow { negative: false }),
            IntErrorKind::NegOverflow => Ok(Parsed::Overflow { negative: true }),
            _ => Err(ValidationError::NotANumber(field)),
        },
    }
}

fn out_of_range(field: Field, msg: &str) -> ValidationError {
    ValidationError::OutOfRange(field, msg.to_string())
}

fn check_year(value: Parsed) -> Result<u16, ValidationError> {
    match value {
        Parsed::Int(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => Ok(y as u16),
        _ => Err(out_of_range(Field::Year, YEAR_RANGE_MSG)),
    }
}

fn check_month(value: Parsed) -> Result<u8, ValidationError> {
    match value {
        Parsed::Int(m) if (1..=12).contains(&m) => Ok(m as u8),
        _ => Err(out_of_range(Field::Month, MONTH_RANGE_MSG)),
    }
}

fn check_page(value: Parsed) -> Result<u64, ValidationError> {
    match value {
        Parsed::Int(p) if p >= 1 => Ok(p as u64),
        Parsed::Overflow { negative: false } => Err(out_of_range(Field::Page, PAGE_MAX_MSG)),
        _ => Err(out_of_range(Field::Page, PAGE_MIN_MSG)),
    }
}

/// Validates raw input into a request. Pure: no filesystem or process access.
pub fn validate(raw: &RawInput) -> Result<ValidatedRequest, ValidationError> {
    let year = parse_field(raw, Field::Year)?;
    let month = parse_field(raw, Field::Month)?;
    let page = parse_field(raw, Field::Page)?;

    let year = check_year(year)?;
    let month = check_month(month)?;
    let page = check_page(page)?;

    Ok(ValidatedRequest::new_unchecked(year, month, page))
}
