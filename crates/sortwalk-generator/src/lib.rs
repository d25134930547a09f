//! Random array generation for the sortwalk games.
//!
//! Arrays are sampled without replacement from a value range, so every
//! generated array holds distinct values. Each generation is driven by a
//! `u64` seed that is reported alongside the values, which makes any array a
//! player has seen reproducible.
//!
//! # Examples
//!
//! ```
//! use sortwalk_generator::ArrayGenerator;
//!
//! let generator = ArrayGenerator::default();
//! let array = generator.generate();
//! assert_eq!(array.values.len(), 8);
//! assert!(array.values.iter().all(|v| (10..100).contains(v)));
//!
//! // The same seed always yields the same array.
//! assert_eq!(generator.generate_with_seed(array.seed), array);
//! ```

use std::ops::Range;

use rand::{SeedableRng as _, seq::index};
use rand_pcg::Pcg64;

/// Number of elements in a standard game.
pub const DEFAULT_LEN: usize = 8;

/// Range values of a standard game are drawn from.
pub const DEFAULT_RANGE: Range<u32> = 10..100;

/// Errors returned when configuring an [`ArrayGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The value range holds fewer distinct values than the requested length.
    #[display("cannot draw {len} distinct values from {start}..{end}")]
    RangeTooSmall {
        /// Requested array length.
        len: usize,
        /// Inclusive lower bound of the range.
        start: u32,
        /// Exclusive upper bound of the range.
        end: u32,
    },
}

/// An array produced by [`ArrayGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArray {
    /// The distinct values, in playing order.
    pub values: Vec<u32>,
    /// Seed that reproduces `values` with the same generator settings.
    pub seed: u64,
}

/// Samples arrays of distinct values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayGenerator {
    len: usize,
    range: Range<u32>,
}

impl ArrayGenerator {
    /// Creates a generator for arrays of `len` distinct values from `range`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RangeTooSmall`] if `range` holds fewer than
    /// `len` values.
    pub fn new(len: usize, range: Range<u32>) -> Result<Self, GenerateError> {
        let available = range.end.saturating_sub(range.start) as usize;
        if available < len {
            return Err(GenerateError::RangeTooSmall {
                len,
                start: range.start,
                end: range.end,
            });
        }
        Ok(Self { len, range })
    }

    /// Returns the length of generated arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if generated arrays are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the range values are drawn from.
    #[must_use]
    pub fn range(&self) -> Range<u32> {
        self.range.clone()
    }

    /// Generates an array from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedArray {
        self.generate_with_seed(rand::random())
    }

    /// Generates the array determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedArray {
        let mut rng = Pcg64::seed_from_u64(seed);
        let span = (self.range.end - self.range.start) as usize;
        // Offsets are below `span`, which fits in a `u32`.
        #[allow(clippy::cast_possible_truncation)]
        let values: Vec<u32> = index::sample(&mut rng, span, self.len)
            .into_iter()
            .map(|offset| self.range.start + offset as u32)
            .collect();
        log::debug!("generated array: seed={seed}, values={values:?}");
        GeneratedArray { values, seed }
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            range: DEFAULT_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_settings() {
        let generator = ArrayGenerator::default();
        assert_eq!(generator.len(), 8);
        assert_eq!(generator.range(), 10..100);
        assert_eq!(ArrayGenerator::new(DEFAULT_LEN, DEFAULT_RANGE), Ok(generator));
    }

    #[test]
    fn test_range_too_small() {
        let err = ArrayGenerator::new(8, 10..15).unwrap_err();
        assert_eq!(
            err,
            GenerateError::RangeTooSmall {
                len: 8,
                start: 10,
                end: 15
            }
        );
        assert_eq!(err.to_string(), "cannot draw 8 distinct values from 10..15");
        assert!(ArrayGenerator::new(1, 20..10).is_err());
    }

    #[test]
    fn test_exact_range_is_permutation() {
        let generator = ArrayGenerator::new(5, 0..5).unwrap();
        let mut values = generator.generate_with_seed(7).values;
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_array() {
        let generator = ArrayGenerator::new(0, 10..10).unwrap();
        assert!(generator.is_empty());
        assert!(generator.generate().values.is_empty());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = ArrayGenerator::default();
        let a = generator.generate_with_seed(42);
        let b = generator.generate_with_seed(42);
        assert_eq!(a, b);
        assert_eq!(a.seed, 42);
    }

    proptest! {
        #[test]
        fn prop_values_are_distinct_and_in_range(seed in any::<u64>()) {
            let generated = ArrayGenerator::default().generate_with_seed(seed);
            prop_assert_eq!(generated.values.len(), 8);
            prop_assert!(generated.values.iter().all(|v| (10..100).contains(v)));
            let distinct: HashSet<_> = generated.values.iter().collect();
            prop_assert_eq!(distinct.len(), 8);
        }
    }
}
