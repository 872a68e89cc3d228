use super::PersonSet;
use crate::{GeneCount, InferenceError};

/// One hypothesis about every individual's gene count.
/// Individuals belonging to neither `one_copy` nor `two_copies` carry zero copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenePartition {
    pub one_copy  : PersonSet,
    pub two_copies: PersonSet,
}

impl GenePartition {
    #[inline]
    pub fn gene_count(&self, person: usize) -> GeneCount {
        if self.two_copies.contains(person) {
            GeneCount::Two
        } else if self.one_copy.contains(person) {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }
}

/// Lazily enumerate every pair of disjoint (`one_copy`, `two_copies`) subsets of `n` individuals.
///
/// `two_copies` walks through every subset of the pedigree, and `one_copy` through every
/// subset of its complement (descending sub-mask enumeration). The iterator thus yields
/// exactly `3^n` distinct partitions.
#[derive(Debug, Clone)]
pub struct GenePartitions {
    full      : u64,
    two_copies: u64,
    one_copy  : u64,
    exhausted : bool,
}

impl GenePartitions {
    /// # Errors
    /// - `PedigreeTooLarge` if `n` exceeds `PersonSet::CAPACITY`
    pub fn new(n: usize) -> Result<Self, InferenceError> {
        let full = PersonSet::full(n)?.bits();
        Ok(Self { full, two_copies: 0, one_copy: full, exhausted: false })
    }

    /// Number of partitions generated for `n` individuals (saturates at `u64::MAX`).
    pub fn total(n: usize) -> u64 {
        3u64.saturating_pow(u32::try_from(n).unwrap_or(u32::MAX))
    }
}

impl Iterator for GenePartitions {
    type Item = GenePartition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None
        }
        let partition = GenePartition {
            one_copy  : PersonSet::from_bits(self.one_copy),
            two_copies: PersonSet::from_bits(self.two_copies),
        };

        // ---- Advance to the next sub-mask of the complement, or to the next `two_copies` subset.
        if self.one_copy != 0 {
            self.one_copy = (self.one_copy - 1) & (self.full & !self.two_copies);
        } else if self.two_copies == self.full {
            self.exhausted = true;
        } else {
            self.two_copies += 1;
            self.one_copy = self.full & !self.two_copies;
        }
        Some(partition)
    }
}
