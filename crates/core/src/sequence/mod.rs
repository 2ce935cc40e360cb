//! Stateful value generators for parameter streams.
//!
//! A [`Sequence`] hands out one value per call from either a fixed list,
//! chosen by a [`Picker`], or a zero-argument generator function. Each
//! sequence owns a private [`Xorshift64`] stream, so a seed reproduces every
//! shuffle and random draw, including the reshuffles after [`Sequence::reset`].
//!
//! [`ParamSequence`] layers an [`Accumulator`] over a numeric sequence and is
//! what a parsed [`Statement`] builds.
//!
//! ```
//! use stamp_core::sequence::{Picker, Sequence};
//!
//! let mut angles = Sequence::new(vec![0.0, 90.0, 180.0], Picker::Once, None).unwrap();
//! let taken: Vec<f64> = angles.by_ref().take(5).collect();
//! assert_eq!(taken, vec![0.0, 90.0, 180.0, 180.0, 180.0]);
//! ```

mod accumulator;
mod param_sequence;
mod picker;
mod statement;

use std::fmt;
use std::rc::Rc;

pub use accumulator::Accumulator;
pub use param_sequence::ParamSequence;
pub use picker::Picker;
pub use statement::{parse_values, Statement};

use crate::error::StampError;
use crate::prng::Xorshift64;

/// Where a sequence's values come from. Shared, never mutated.
enum Source<T> {
    Values(Rc<[T]>),
    Generator(Rc<dyn Fn() -> T>),
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Values(values) => Source::Values(Rc::clone(values)),
            Source::Generator(f) => Source::Generator(Rc::clone(f)),
        }
    }
}

/// A value generator with a fixed picking strategy.
///
/// `Clone` copies the full state, so a clone produces the same future output
/// as the original. [`Sequence::copy`] instead restarts from the beginning.
pub struct Sequence<T> {
    source: Source<T>,
    picker: Picker,
    seed: u64,
    cursor: usize,
    rng: Xorshift64,
    /// Index permutation for [`Picker::Shuffle`]; empty for other pickers.
    order: Vec<usize>,
    /// Values handed out since construction or the last reset.
    picks: usize,
    /// Index of the most recent list pick.
    last: usize,
    /// Passes through the list after which the output freezes.
    max_passes: Option<usize>,
}

impl<T> Sequence<T> {
    /// Creates a list-backed sequence.
    ///
    /// With `seed: None` a seed is drawn from OS entropy once; it is kept so
    /// [`Sequence::copy`] can replay the same output.
    ///
    /// Returns `StampError::EmptyCollection` if `values` is empty.
    pub fn new(
        values: impl Into<Rc<[T]>>,
        picker: Picker,
        seed: Option<u64>,
    ) -> Result<Self, StampError> {
        let values = values.into();
        if values.is_empty() {
            return Err(StampError::EmptyCollection(
                "sequence needs at least one value".into(),
            ));
        }
        let seed = seed.unwrap_or_else(Xorshift64::entropy_seed);
        Ok(Self::build(Source::Values(values), picker, seed))
    }

    /// Like [`Sequence::new`], resolving the picker from its name.
    ///
    /// Returns `StampError::InvalidConfiguration` for an unknown name.
    pub fn with_picker_name(
        values: impl Into<Rc<[T]>>,
        picker: &str,
        seed: Option<u64>,
    ) -> Result<Self, StampError> {
        Self::new(values, picker.parse()?, seed)
    }

    /// Creates a sequence that calls `generator` on every pick. The picker,
    /// cursor, and random stream are never consulted.
    pub fn from_fn(generator: impl Fn() -> T + 'static) -> Self {
        Self::build(Source::Generator(Rc::new(generator)), Picker::default(), 0)
    }

    fn build(source: Source<T>, picker: Picker, seed: u64) -> Self {
        let mut sequence = Self {
            source,
            picker,
            seed,
            cursor: 0,
            rng: Xorshift64::new(seed),
            order: Vec::new(),
            picks: 0,
            last: 0,
            max_passes: None,
        };
        sequence.reshuffle();
        tracing::debug!(%picker, seed, "built sequence");
        sequence
    }

    /// Draws a fresh permutation for shuffle mode; no-op otherwise.
    fn reshuffle(&mut self) {
        if let (Picker::Shuffle, Source::Values(values)) = (self.picker, &self.source) {
            self.order = (0..values.len()).collect();
            self.rng.shuffle(&mut self.order);
        }
    }

    /// Returns the sequence limited to `passes` passes through its list.
    /// After `passes * len` picks every call repeats the final value. Zero
    /// means no limit. Generator sequences ignore the limit.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = (passes > 0).then_some(passes);
        self
    }

    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// Zero-based pass through the list that the most recent value came
    /// from: picks `0..len` are pass 0, the next `len` are pass 1, and so on.
    /// For a generator sequence, the index of the most recent call.
    pub fn pass(&self) -> usize {
        let len = self.values().map_or(1, <[T]>::len);
        self.picks.saturating_sub(1) / len
    }

    /// Whether the pass limit has been reached.
    pub fn is_done(&self) -> bool {
        match (self.max_passes, self.values()) {
            (Some(max), Some(values)) => self.picks >= max.saturating_mul(values.len()),
            _ => false,
        }
    }

    pub fn picker(&self) -> Picker {
        self.picker
    }

    /// The seed the random stream started from (0 for generator sequences).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The fixed value list, or `None` for generator sequences.
    pub fn values(&self) -> Option<&[T]> {
        match &self.source {
            Source::Values(values) => Some(values.as_ref()),
            Source::Generator(_) => None,
        }
    }

    /// Restarts from the first pick. Shuffle mode draws a new permutation
    /// from the continuing random stream, so the seed fixes every block.
    pub fn reset(&mut self) -> &mut Self {
        self.cursor = 0;
        self.picks = 0;
        self.last = 0;
        self.reshuffle();
        tracing::debug!(picker = %self.picker, "reset sequence");
        self
    }

    /// A new sequence sharing this one's source, picker, and seed, starting
    /// from the beginning. Its output replays this sequence's output from
    /// construction, regardless of how far this one has advanced.
    pub fn copy(&self) -> Self {
        let mut copy = Self::build(self.source.clone(), self.picker, self.seed);
        copy.max_passes = self.max_passes;
        copy
    }

    /// Advances the cursor for a list of `len` values and returns the index to
    /// read.
    fn pick_index(&mut self, len: usize) -> usize {
        match self.picker {
            Picker::Cycle => {
                let idx = self.cursor;
                self.cursor = (self.cursor + 1) % len;
                idx
            }
            Picker::Once | Picker::Reverse => {
                let idx = self.cursor.min(len - 1);
                if self.cursor < len {
                    self.cursor += 1;
                }
                if self.picker == Picker::Reverse {
                    len - 1 - idx
                } else {
                    idx
                }
            }
            Picker::Yoyo => {
                let period = 2 * len;
                let step = self.cursor;
                self.cursor = (self.cursor + 1) % period;
                if step < len {
                    step
                } else {
                    period - 1 - step
                }
            }
            Picker::Shuffle => {
                let idx = self.order[self.cursor];
                self.cursor = (self.cursor + 1) % len;
                idx
            }
            Picker::Random => self.rng.next_usize(len),
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Produces the next value. List sequences never run out: `once` and
    /// `reverse` repeat their final value, the rest wrap or redraw.
    pub fn next_value(&mut self) -> T {
        let values = match &self.source {
            Source::Generator(generator) => {
                self.picks = self.picks.saturating_add(1);
                return generator();
            }
            Source::Values(values) => Rc::clone(values),
        };
        if !self.is_done() {
            self.last = self.pick_index(values.len());
            self.picks += 1;
        }
        values[self.last].clone()
    }
}

impl<T: Clone> Iterator for Sequence<T> {
    type Item = T;

    /// Always `Some`: sequences are infinite.
    fn next(&mut self) -> Option<T> {
        Some(self.next_value())
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            picker: self.picker,
            seed: self.seed,
            cursor: self.cursor,
            rng: self.rng.clone(),
            order: self.order.clone(),
            picks: self.picks,
            last: self.last,
            max_passes: self.max_passes,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Sequence");
        match &self.source {
            Source::Values(values) => s.field("values", values),
            Source::Generator(_) => s.field("values", &"<generator>"),
        };
        s.field("picker", &self.picker)
            .field("seed", &self.seed)
            .field("cursor", &self.cursor)
            .field("picks", &self.picks)
            .field("max_passes", &self.max_passes)
            .finish()
    }
}
