//! Numeric sequence with an accumulator: the stream that drives a parameter.

use super::accumulator::Accumulator;
use super::statement::Statement;
use super::Sequence;
use crate::error::StampError;

/// A [`Sequence<f64>`] whose picks are folded through an [`Accumulator`].
///
/// ```
/// use stamp_core::sequence::ParamSequence;
///
/// let mut angle = ParamSequence::from_statement("cycle 10,20 add", None).unwrap();
/// let taken: Vec<f64> = angle.by_ref().take(4).collect();
/// assert_eq!(taken, vec![10.0, 30.0, 40.0, 60.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ParamSequence {
    sequence: Sequence<f64>,
    accumulator: Accumulator,
    /// Previous output; `None` before the first value.
    total: Option<f64>,
}

impl ParamSequence {
    pub fn new(sequence: Sequence<f64>, accumulator: Accumulator) -> Self {
        Self {
            sequence,
            accumulator,
            total: None,
        }
    }

    /// Builds the stream a statement such as `"shuffle (2) 1-8 add"`
    /// describes. See [`Statement`] for the syntax.
    pub fn from_statement(stmt: &str, seed: Option<u64>) -> Result<Self, StampError> {
        stmt.parse::<Statement>()?.build(seed)
    }

    pub fn sequence(&self) -> &Sequence<f64> {
        &self.sequence
    }

    pub fn accumulator(&self) -> Accumulator {
        self.accumulator
    }

    /// Produces the next output. Once the underlying sequence reaches its
    /// pass limit the output holds at its last value.
    pub fn next_value(&mut self) -> f64 {
        if self.sequence.is_done() {
            if let Some(total) = self.total {
                return total;
            }
        }
        let value = self.sequence.next_value();
        let out = self.accumulator.apply(self.total, value, self.sequence.pass());
        self.total = Some(out);
        out
    }

    /// Restarts the sequence and clears the running output.
    pub fn reset(&mut self) -> &mut Self {
        self.sequence.reset();
        self.total = None;
        self
    }

    /// A fresh stream replaying this one's output from the start.
    pub fn copy(&self) -> Self {
        Self::new(self.sequence.copy(), self.accumulator)
    }
}

impl From<Sequence<f64>> for ParamSequence {
    fn from(sequence: Sequence<f64>) -> Self {
        Self::new(sequence, Accumulator::Replace)
    }
}

impl Iterator for ParamSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Picker;

    fn take(seq: &mut ParamSequence, n: usize) -> Vec<f64> {
        seq.by_ref().take(n).collect()
    }

    // -- Statements --

    #[test]
    fn plain_statement_replaces() {
        let mut seq = ParamSequence::from_statement("cycle 10, 20", None).unwrap();
        assert_eq!(seq.accumulator(), Accumulator::Replace);
        assert_eq!(take(&mut seq, 3), vec![10.0, 20.0, 10.0]);
    }

    #[test]
    fn shuffled_range_is_a_permutation() {
        let mut seq = ParamSequence::from_statement("shuffle 1-4", Some(5)).unwrap();
        let mut block = take(&mut seq, 4);
        block.sort_by(f64::total_cmp);
        assert_eq!(block, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn repeat_add_accumulates_rotation() {
        let mut seq = ParamSequence::from_statement("repeat 10,20 add", None).unwrap();
        assert_eq!(take(&mut seq, 5), vec![10.0, 30.0, 40.0, 60.0, 70.0]);
    }

    #[test]
    fn pow_uses_the_pass_index() {
        let mut seq = ParamSequence::from_statement("cycle 2,3 pow", None).unwrap();
        // pass 0: v^0 - v, pass 1: v^1 - v, pass 2: v^2 - v
        assert_eq!(take(&mut seq, 6), vec![-1.0, -2.0, 0.0, 0.0, 2.0, 6.0]);
    }

    // -- Pass limit --

    #[test]
    fn pass_limit_holds_the_accumulated_output() {
        let mut seq = ParamSequence::from_statement("cycle (2) 1,2 add", None).unwrap();
        assert_eq!(take(&mut seq, 7), vec![1.0, 3.0, 4.0, 6.0, 6.0, 6.0, 6.0]);
    }

    // -- Reset and copy --

    #[test]
    fn reset_clears_the_running_total() {
        let mut seq = ParamSequence::from_statement("cycle 5 add", None).unwrap();
        assert_eq!(take(&mut seq, 3), vec![5.0, 10.0, 15.0]);
        assert_eq!(seq.reset().next_value(), 5.0);
    }

    #[test]
    fn copy_replays_from_the_start() {
        let mut seq = ParamSequence::from_statement("random 1-9 multiply", Some(3)).unwrap();
        let expected = take(&mut seq.copy(), 6);
        take(&mut seq, 4);
        assert_eq!(take(&mut seq.copy(), 6), expected);
    }

    #[test]
    fn from_sequence_replaces() {
        let inner = Sequence::new(vec![1.0, 2.0], Picker::Reverse, None).unwrap();
        let mut seq = ParamSequence::from(inner);
        assert_eq!(take(&mut seq, 3), vec![2.0, 1.0, 1.0]);
    }
}
