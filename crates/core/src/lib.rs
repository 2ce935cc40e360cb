#![deny(unsafe_code)]
//! Core types for stamp, a generative-art toolkit.
//!
//! Provides 2D geometry primitives (`Point`, `Ray`, `BoundingBox`,
//! `Polygon`), the seedable `Xorshift64` PRNG, `Sequence`, a stateful value
//! generator, and `ParamSequence`, which folds a numeric sequence through an
//! `Accumulator` to drive varying parameters such as the rotation of each
//! stamped shape.

pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod prng;
pub mod sequence;

pub use config::SequenceConfig;
pub use error::StampError;
pub use geometry::{BoundingBox, Point, Polygon, Ray};
pub use prng::Xorshift64;
pub use sequence::{Accumulator, ParamSequence, Picker, Sequence};
