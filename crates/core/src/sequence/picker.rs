//! Strategies a [`Sequence`](super::Sequence) uses to choose its next value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StampError;

/// All picker names accepted by [`Picker::from_str`], in declaration order.
const PICKER_NAMES: &[&str] = &["cycle", "once", "reverse", "yoyo", "shuffle", "random"];

/// How a list-backed sequence picks its next value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Picker {
    /// `1, 2, 3, 1, 2, 3, ...`
    #[default]
    #[serde(alias = "repeat")]
    Cycle,
    /// `1, 2, 3, 3, 3, ...`: clamps to the last value once exhausted.
    Once,
    /// `3, 2, 1, 1, 1, ...`: like `Once` over the reversed list.
    Reverse,
    /// `1, 2, 3, 3, 2, 1, 1, 2, 3, ...`: ping-pong, repeating the endpoints.
    Yoyo,
    /// Cycles through a permutation drawn at construction and at each reset.
    Shuffle,
    /// Uniform draw with replacement on every call.
    Random,
}

impl Picker {
    /// Returns the canonical picker names.
    pub fn list_names() -> &'static [&'static str] {
        PICKER_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Picker::Cycle => "cycle",
            Picker::Once => "once",
            Picker::Reverse => "reverse",
            Picker::Yoyo => "yoyo",
            Picker::Shuffle => "shuffle",
            Picker::Random => "random",
        }
    }
}

impl fmt::Display for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Picker {
    type Err = StampError;

    /// Parses a picker name, ignoring ASCII case. `repeat` is accepted as an
    /// alias for `cycle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cycle" | "repeat" => Ok(Picker::Cycle),
            "once" => Ok(Picker::Once),
            "reverse" => Ok(Picker::Reverse),
            "yoyo" => Ok(Picker::Yoyo),
            "shuffle" => Ok(Picker::Shuffle),
            "random" => Ok(Picker::Random),
            _ => Err(StampError::InvalidConfiguration(format!(
                "unknown picker mode '{s}'"
            ))),
        }
    }
}
