//! How a numeric sequence folds each picked value into its output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StampError;

/// All accumulator names accepted by [`Accumulator::from_str`], in declaration order.
const ACCUMULATOR_NAMES: &[&str] = &[
    "replace", "add", "subtract", "multiply", "divide", "log", "log2", "log10", "pow",
];

/// Combines the running output with each newly picked value.
///
/// The arithmetic accumulators start from the first picked value, so
/// `cycle 10,20 add` yields `10, 30, 40, 60, ...`. The logarithmic and power
/// accumulators ignore the running output and scale the picked value by the
/// pass it was picked in (see [`Sequence::pass`](super::Sequence::pass)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accumulator {
    /// Output the picked value unchanged.
    #[default]
    Replace,
    Add,
    Subtract,
    Multiply,
    /// Division by a zero value yields 0.
    Divide,
    /// `ln(max(|1 + pass * value|, 1))`
    Log,
    /// `log2(max(|1 + pass * value|, 1))`
    Log2,
    /// `log10(max(|1 + pass * value|, 1))`
    Log10,
    /// `value^pass - value`
    Pow,
}

impl Accumulator {
    /// Returns the canonical accumulator names.
    pub fn list_names() -> &'static [&'static str] {
        ACCUMULATOR_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Accumulator::Replace => "replace",
            Accumulator::Add => "add",
            Accumulator::Subtract => "subtract",
            Accumulator::Multiply => "multiply",
            Accumulator::Divide => "divide",
            Accumulator::Log => "log",
            Accumulator::Log2 => "log2",
            Accumulator::Log10 => "log10",
            Accumulator::Pow => "pow",
        }
    }

    /// Folds `value`, picked during `pass`, into the previous output `total`
    /// (`None` before the first value).
    pub fn apply(self, total: Option<f64>, value: f64, pass: usize) -> f64 {
        let log_arg = || (1.0 + pass as f64 * value).abs().max(1.0);
        match (self, total) {
            (Accumulator::Replace, _) => value,
            (Accumulator::Add | Accumulator::Subtract | Accumulator::Multiply, None) => value,
            (Accumulator::Add, Some(t)) => t + value,
            (Accumulator::Subtract, Some(t)) => t - value,
            (Accumulator::Multiply, Some(t)) => t * value,
            (Accumulator::Divide, _) if value == 0.0 => 0.0,
            (Accumulator::Divide, None) => value,
            (Accumulator::Divide, Some(t)) => t / value,
            (Accumulator::Log, _) => log_arg().ln(),
            (Accumulator::Log2, _) => log_arg().log2(),
            (Accumulator::Log10, _) => log_arg().log10(),
            (Accumulator::Pow, _) => value.powf(pass as f64) - value,
        }
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Accumulator {
    type Err = StampError;

    /// Parses an accumulator name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Accumulator::Replace),
            "add" => Ok(Accumulator::Add),
            "subtract" => Ok(Accumulator::Subtract),
            "multiply" => Ok(Accumulator::Multiply),
            "divide" => Ok(Accumulator::Divide),
            "log" => Ok(Accumulator::Log),
            "log2" => Ok(Accumulator::Log2),
            "log10" => Ok(Accumulator::Log10),
            "pow" => Ok(Accumulator::Pow),
            _ => Err(StampError::InvalidConfiguration(format!(
                "unknown accumulator '{s}'"
            ))),
        }
    }
}
