use log::trace;
use pedigree::Pedigree;

use crate::{enumerator::JointAssignment, InferenceError};

mod posterior;
pub use posterior::{GeneDistribution, Posterior, PosteriorRow, Posteriors, TraitDistribution, DEFAULT_PRECISION};

/// Unnormalized running totals of joint probabilities, per individual.
/// # Fields:
/// - `gene`  : per-individual buckets, indexed by gene count.
/// - `traits`: per-individual buckets, indexed by trait status (`[absent, present]`).
///
/// `Marginals` only accepts additions. `normalize()` consumes it and yields read-only `Posteriors`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marginals {
    gene  : Vec<[f64; 3]>,
    traits: Vec<[f64; 2]>,
}

impl Marginals {
    /// Instantiate empty buckets for `n` individuals.
    pub fn new(n: usize) -> Self {
        Self { gene: vec![[0.0; 3]; n], traits: vec![[0.0; 2]; n] }
    }

    /// Number of individuals tracked.
    pub fn len(&self) -> usize {
        self.gene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    /// Add the joint probability `p` of `assignment` to the matching gene and trait bucket of every individual.
    #[inline]
    pub fn add(&mut self, assignment: &JointAssignment, p: f64) {
        for (person, (gene, traits)) in self.gene.iter_mut().zip(self.traits.iter_mut()).enumerate() {
            gene[assignment.gene_count(person).index()] += p;
            traits[usize::from(assignment.has_trait(person))] += p;
        }
    }

    /// Sum two sets of running totals. Commutative, thus suitable as a parallel reduction step.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        for (lhs, rhs) in self.gene.iter_mut().zip(other.gene) {
            lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l += r);
        }
        for (lhs, rhs) in self.traits.iter_mut().zip(other.traits) {
            lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l += r);
        }
        self
    }

    /// Rescale every individual's buckets so that each distribution sums to one.
    ///
    /// # Errors
    /// - `NoConsistentWorld` if any individual's buckets sum to zero (or to a non-finite value),
    ///   i.e. no admissible assignment carries a non-zero probability.
    pub fn normalize(self, pedigree: &Pedigree) -> Result<Posteriors, InferenceError> {
        debug_assert_eq!(self.len(), pedigree.len());
        let is_valid_total = |total: f64| total > 0.0 && total.is_finite();

        let mut posteriors = Vec::with_capacity(self.len());
        for ((person, gene), traits) in pedigree.people().zip(self.gene).zip(self.traits) {
            let gene_total: f64 = gene.iter().sum();
            let trait_total: f64 = traits.iter().sum();
            if !(is_valid_total(gene_total) && is_valid_total(trait_total)) {
                return Err(InferenceError::NoConsistentWorld(person.name.clone()))
            }
            trace!("Normalizing {}: gene total = {gene_total:e}, trait total = {trait_total:e}", person.name);

            posteriors.push(Posterior {
                name       : person.name.clone(),
                gene       : GeneDistribution::new(gene.map(|p| p / gene_total)),
                trait_state: TraitDistribution { present: traits[1] / trait_total, absent: traits[0] / trait_total },
            });
        }
        Ok(Posteriors::new(posteriors))
    }
}
