use std::rc::Rc;

use pedigree::Pedigree;

use crate::{GeneCount, InferenceError};

mod person_set;
pub use person_set::PersonSet;

mod gene_partitions;
pub use gene_partitions::{GenePartition, GenePartitions};

mod trait_subsets;
pub use trait_subsets::TraitSubsets;

/// One complete hypothesis over the gene count and trait status of every individual.
/// Transient: built for a single evaluation step, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointAssignment {
    pub genes : GenePartition,
    pub traits: PersonSet,
}

impl JointAssignment {
    pub fn new(genes: GenePartition, traits: PersonSet) -> Self {
        Self { genes, traits }
    }

    #[inline]
    pub fn gene_count(&self, person: usize) -> GeneCount {
        self.genes.gene_count(person)
    }

    #[inline]
    pub fn has_trait(&self, person: usize) -> bool {
        self.traits.contains(person)
    }
}

/// Enumerate every admissible joint assignment of `pedigree` exactly once: the Cartesian product
/// of all gene partitions and all evidence-compatible trait subsets.
///
/// Admissible trait subsets are generated once, and shared by every gene partition.
///
/// # Errors
/// - `PedigreeTooLarge` if `pedigree` holds more individuals than a `PersonSet` can address.
pub fn hypotheses(pedigree: &Pedigree) -> Result<impl Iterator<Item = JointAssignment>, InferenceError> {
    let trait_subsets: Rc<[PersonSet]> = TraitSubsets::new(pedigree)?.collect();
    let hypotheses = GenePartitions::new(pedigree.len())?.flat_map(move |genes| {
        let trait_subsets = Rc::clone(&trait_subsets);
        (0..trait_subsets.len()).map(move |i| JointAssignment::new(genes, trait_subsets[i]))
    });
    Ok(hypotheses)
}
