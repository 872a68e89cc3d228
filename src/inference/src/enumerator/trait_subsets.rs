use pedigree::Pedigree;

use super::PersonSet;
use crate::InferenceError;

/// Lazily enumerate every subset of individuals expressing the trait, keeping only those
/// that are admissible under the pedigree's evidence.
///
/// A candidate subset is admissible iff, for every individual with known evidence, its membership
/// matches that evidence exactly. Individuals with unknown evidence may fall on either side.
/// Inadmissible candidates are silently skipped.
#[derive(Debug, Clone)]
pub struct TraitSubsets {
    known    : u64,
    expressed: u64,
    full     : u64,
    cursor   : Option<u64>,
}

impl TraitSubsets {
    /// # Errors
    /// - `PedigreeTooLarge` if `pedigree` holds more individuals than a `PersonSet` can address.
    pub fn new(pedigree: &Pedigree) -> Result<Self, InferenceError> {
        let full = PersonSet::full(pedigree.len())?;
        let known: PersonSet = pedigree.people().enumerate()
            .filter_map(|(i, person)| person.evidence.is_known().then_some(i))
            .collect();
        // Individuals whose evidence rules out the absence of the trait.
        let expressed: PersonSet = pedigree.people().enumerate()
            .filter_map(|(i, person)| (!person.evidence.admits(false)).then_some(i))
            .collect();
        Ok(Self {
            known    : known.bits(),
            expressed: expressed.bits(),
            full     : full.bits(),
            cursor   : Some(0),
        })
    }

    /// Check whether `candidate` agrees with every known trait status.
    #[inline]
    pub fn admits(&self, candidate: PersonSet) -> bool {
        candidate.bits() & self.known == self.expressed
    }

    /// Number of admissible subsets: `2^(number of individuals with unknown evidence)`
    pub fn total(&self) -> u64 {
        1u64.checked_shl((self.full & !self.known).count_ones()).unwrap_or(u64::MAX)
    }
}

impl Iterator for TraitSubsets {
    type Item = PersonSet;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.cursor {
            self.cursor = (candidate != self.full).then(|| candidate + 1);
            let candidate = PersonSet::from_bits(candidate);
            if self.admits(candidate) {
                return Some(candidate)
            }
        }
        None
    }
}
