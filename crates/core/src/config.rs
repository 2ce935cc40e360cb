//! Serializable description of a numeric parameter stream.
//!
//! A [`SequenceConfig`] captures everything needed to rebuild a
//! [`ParamSequence`]: the candidate values, the picker, the seed, the pass
//! limit, and the accumulator. Two equal configs with a seed build streams
//! with identical output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StampError;
use crate::params::{param_f64_list, param_opt_str, param_opt_u64, param_opt_usize};
use crate::sequence::{Accumulator, ParamSequence, Picker, Sequence, Statement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub values: Vec<f64>,
    #[serde(default)]
    pub picker: Picker,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_passes: Option<usize>,
    #[serde(default)]
    pub accumulator: Accumulator,
}

impl SequenceConfig {
    /// Creates an unseeded, unlimited config that outputs its picks unchanged.
    pub fn new(values: Vec<f64>, picker: Picker) -> Self {
        Self {
            values,
            picker,
            seed: None,
            max_passes: None,
            accumulator: Accumulator::Replace,
        }
    }

    /// Returns the config with `seed` set.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the config with a pass limit; zero means unlimited.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = (passes > 0).then_some(passes);
        self
    }

    pub fn with_accumulator(mut self, accumulator: Accumulator) -> Self {
        self.accumulator = accumulator;
        self
    }

    /// Parses a statement such as `"yoyo (2) 1-4 add"` into a config.
    pub fn from_statement(stmt: &str, seed: Option<u64>) -> Result<Self, StampError> {
        let Statement {
            picker,
            max_passes,
            values,
            accumulator,
        } = stmt.parse::<Statement>()?;
        Ok(Self {
            values,
            picker,
            seed,
            max_passes,
            accumulator,
        })
    }

    /// Reads `values`, `picker`, `seed`, `max_passes`, and `accumulator` from
    /// a JSON params object.
    ///
    /// Missing keys fall back to `cycle`, unseeded, unlimited, and `replace`.
    /// A key of the wrong type is `StampError::ParamTypeMismatch`; an unknown
    /// picker or accumulator name is `StampError::InvalidConfiguration`.
    pub fn from_json(params: &Value) -> Result<Self, StampError> {
        let picker = match param_opt_str(params, "picker")? {
            Some(name) => name.parse()?,
            None => Picker::default(),
        };
        let accumulator = match param_opt_str(params, "accumulator")? {
            Some(name) => name.parse()?,
            None => Accumulator::default(),
        };
        let config = Self {
            values: param_f64_list(params, "values")?,
            picker,
            seed: param_opt_u64(params, "seed")?,
            max_passes: param_opt_usize(params, "max_passes")?.filter(|&n| n > 0),
            accumulator,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that there is at least one value to pick from.
    pub fn validate(&self) -> Result<(), StampError> {
        if self.values.is_empty() {
            return Err(StampError::EmptyCollection(
                "sequence config has no values".into(),
            ));
        }
        Ok(())
    }

    /// Builds the stream this config describes.
    pub fn build(&self) -> Result<ParamSequence, StampError> {
        self.validate()?;
        let sequence = Sequence::new(self.values.clone(), self.picker, self.seed)?
            .with_max_passes(self.max_passes.unwrap_or(0));
        Ok(ParamSequence::new(sequence, self.accumulator))
    }
}
