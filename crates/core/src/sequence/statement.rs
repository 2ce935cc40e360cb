//! Textual sequence statements: `[picker] [(passes)] values [accumulator]`.
//!
//! `values` is one of
//! - a comma list, `1,2,3`, whose items are decimals, hex (`0x1f`), or
//!   repetitions (`45[3]` is three copies of 45);
//! - an inclusive integer range, `1-5` (or descending, `5-1`);
//! - a decimal range, `0.1-0.5`, stepping by the finest precision of either
//!   end;
//! - a single number.
//!
//! Without a picker word the statement picks `once`. `(n)` stops the
//! sequence after `n` passes through its values (`(0)` means no limit), and
//! a trailing accumulator word such as `add` folds the picks into a running
//! output.

use std::str::FromStr;

use super::accumulator::Accumulator;
use super::param_sequence::ParamSequence;
use super::picker::Picker;
use super::Sequence;
use crate::error::StampError;

/// Upper bound on the values a single range or repetition may expand to.
const MAX_EXPANDED_VALUES: usize = 1_000_000;

/// Finest decimal precision a range endpoint may have.
const MAX_RANGE_DECIMALS: usize = 15;

/// A parsed statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub picker: Picker,
    /// Pass limit; `None` when absent or `(0)`.
    pub max_passes: Option<usize>,
    pub values: Vec<f64>,
    pub accumulator: Accumulator,
}

impl Statement {
    /// Builds the stream this statement describes.
    pub fn build(self, seed: Option<u64>) -> Result<ParamSequence, StampError> {
        let sequence = Sequence::new(self.values, self.picker, seed)?
            .with_max_passes(self.max_passes.unwrap_or(0));
        Ok(ParamSequence::new(sequence, self.accumulator))
    }
}

/// A leading or trailing word names a picker or accumulator. Tokens that read
/// as numbers (`nan`, `inf`) or hold list punctuation are left for the
/// values so they fail there.
fn is_word(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphabetic())
        && token.chars().all(|c| c.is_ascii_alphanumeric())
        && token.parse::<f64>().is_err()
}

impl FromStr for Statement {
    type Err = StampError;

    fn from_str(stmt: &str) -> Result<Self, Self::Err> {
        // "repeat(3) 1,2" is read as "repeat (3) 1,2".
        let lowered = stmt.trim().to_ascii_lowercase().replace('(', " (");
        let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(StampError::InvalidStatement("empty statement".into()));
        }

        let picker = match tokens.first().copied() {
            Some(word) if is_word(word) => {
                tokens.remove(0);
                word.parse::<Picker>()?
            }
            _ => Picker::Once,
        };

        let passes = tokens
            .first()
            .copied()
            .and_then(|t| t.strip_prefix('('))
            .and_then(|t| t.strip_suffix(')'));
        let max_passes = match passes {
            Some(n) => {
                let n = n.parse::<usize>().map_err(|_| {
                    StampError::InvalidStatement(format!("bad pass count '({n})'"))
                })?;
                tokens.remove(0);
                (n > 0).then_some(n)
            }
            None => None,
        };

        let accumulator = match tokens.last().copied() {
            Some(word) if tokens.len() > 1 && is_word(word) => {
                tokens.pop();
                word.parse::<Accumulator>()?
            }
            _ => Accumulator::default(),
        };

        // Items may be separated by ", " so the remaining tokens are glued back.
        let expr = tokens.concat();
        if expr.is_empty() {
            return Err(StampError::InvalidStatement(format!(
                "no values in '{}'",
                stmt.trim()
            )));
        }

        let values = parse_values(&expr)?;
        tracing::trace!(%picker, %accumulator, ?max_passes, count = values.len(), "parsed sequence statement");
        Ok(Statement {
            picker,
            max_passes,
            values,
            accumulator,
        })
    }
}

/// Expands a values expression into the list it describes.
pub fn parse_values(expr: &str) -> Result<Vec<f64>, StampError> {
    if expr.contains(',') {
        let mut values = Vec::new();
        for item in expr.split(',') {
            values.extend(parse_item(item)?);
        }
        return Ok(values);
    }
    // A leading '-' is a sign, not a range separator.
    match expr.get(1..).and_then(|tail| tail.find('-')) {
        Some(pos) => parse_range(&expr[..=pos], &expr[pos + 2..]),
        None => parse_item(expr),
    }
}

fn parse_item(item: &str) -> Result<Vec<f64>, StampError> {
    let Some((value, rest)) = item.split_once('[') else {
        return Ok(vec![parse_number(item)?]);
    };
    let count = rest
        .strip_suffix(']')
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| StampError::InvalidStatement(format!("bad repetition '{item}'")))?;
    check_expansion(count)?;
    Ok(vec![parse_number(value)?; count])
}

fn parse_number(token: &str) -> Result<f64, StampError> {
    let bad = || StampError::InvalidStatement(format!("not a number: '{token}'"));
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let magnitude = match digits.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).map_err(|_| bad())? as f64,
        None => digits.parse::<f64>().map_err(|_| bad())?,
    };
    if !magnitude.is_finite() || digits.starts_with(['+', '-']) {
        return Err(bad());
    }
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_range(start: &str, end: &str) -> Result<Vec<f64>, StampError> {
    let lo = parse_number(start)?;
    let hi = parse_number(end)?;
    let places = decimals(start).max(decimals(end));
    if places > MAX_RANGE_DECIMALS {
        return Err(StampError::InvalidStatement(format!(
            "range '{start}-{end}' is finer than {MAX_RANGE_DECIMALS} decimal places"
        )));
    }
    let scale = 10_f64.powi(places as i32);
    let lo = scaled_endpoint(lo, scale, start)?;
    let hi = scaled_endpoint(hi, scale, end)?;

    let len = lo.abs_diff(hi).saturating_add(1);
    check_expansion(usize::try_from(len).unwrap_or(usize::MAX))?;

    let steps: Vec<i64> = if lo <= hi {
        (lo..=hi).collect()
    } else {
        (hi..=lo).rev().collect()
    };
    Ok(steps.into_iter().map(|i| i as f64 / scale).collect())
}

/// `value * scale` as an integer step, or an error if it leaves `i64`.
fn scaled_endpoint(value: f64, scale: f64, token: &str) -> Result<i64, StampError> {
    let scaled = (value * scale).round();
    // 2^63 itself is out of range.
    if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
        return Err(StampError::InvalidStatement(format!(
            "range endpoint '{token}' is out of range"
        )));
    }
    Ok(scaled as i64)
}

/// Digits after the decimal point, zero for integers.
fn decimals(token: &str) -> usize {
    token.split_once('.').map_or(0, |(_, frac)| frac.len())
}

fn check_expansion(len: usize) -> Result<(), StampError> {
    if len > MAX_EXPANDED_VALUES {
        return Err(StampError::InvalidStatement(format!(
            "expands to {len} values, limit is {MAX_EXPANDED_VALUES}"
        )));
    }
    Ok(())
}
