use std::{fs::File, path::Path};

use located_error::prelude::*;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::GeneCount;

mod error;
pub use error::TablesError;

/// Unconditional probability of carrying 0, 1 or 2 copies of the gene.
pub const DEFAULT_GENE_PRIOR: [f64; 3] = [0.96, 0.03, 0.01];

/// Probability of expressing the trait, given 0, 1 or 2 copies of the gene.
pub const DEFAULT_TRAIT_EMISSION: [f64; 3] = [0.01, 0.56, 0.65];

/// Probability that a transmitted allele mutates into, or out of, the trait-causing allele.
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Tolerance used when checking that the gene prior sums to one.
const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

/// Set of conditional probability tables parameterizing the inference model.
/// # Fields:
/// - `gene_prior`    : P(GeneCount = g) for founders, indexed by `g`.
/// - `trait_emission`: P(Trait = true | GeneCount = g), indexed by `g`. P(Trait = false | g) is its complement.
/// - `mutation_rate` : probability that an allele flips identity when transmitted from a parent to its offspring.
///
/// Tables are immutable once built, and explicitly handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbabilityTables {
    pub gene_prior    : [f64; 3],
    pub trait_emission: [f64; 3],
    pub mutation_rate : f64,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        Self {
            gene_prior    : DEFAULT_GENE_PRIOR,
            trait_emission: DEFAULT_TRAIT_EMISSION,
            mutation_rate : DEFAULT_MUTATION_RATE,
        }
    }
}

impl ProbabilityTables {
    /// Instantiate and validate a new set of tables.
    pub fn new(gene_prior: [f64; 3], trait_emission: [f64; 3], mutation_rate: f64) -> Result<Self, TablesError> {
        let tables = Self { gene_prior, trait_emission, mutation_rate };
        tables.validate()?;
        Ok(tables)
    }

    /// Deserialize and validate a set of tables from a `.yaml` file. e.g.:
    /// ```yaml
    /// gene_prior: [0.96, 0.03, 0.01]
    /// trait_emission: [0.01, 0.56, 0.65]
    /// mutation_rate: 0.01
    /// ```
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While attempting to parse probability tables from {}", path.display());
        let file = File::open(path).map_err(TablesError::Open).with_loc(loc_msg)?;
        let tables: Self = serde_yaml::from_reader(file).map_err(TablesError::Deserialize).with_loc(loc_msg)?;
        tables.validate().with_loc(loc_msg)?;
        debug!("Loaded probability tables from {}: {tables:?}", path.display());
        Ok(tables)
    }

    /// Ensure every probability lies within [0, 1] and that the gene prior is normalized.
    pub fn validate(&self) -> Result<(), TablesError> {
        use TablesError::{InvalidMutationRate, OutOfRange, UnnormalizedPrior};
        let in_range = |p: &f64| (0.0..=1.0).contains(p);

        let tables = [("gene prior", &self.gene_prior), ("trait emission", &self.trait_emission)];
        for (table, probs) in tables {
            if let Some((index, &value)) = probs.iter().enumerate().find(|(_, p)| !in_range(p)) {
                return Err(OutOfRange{table, index, value})
            }
        }

        let prior_sum: f64 = self.gene_prior.iter().sum();
        if (prior_sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(UnnormalizedPrior(prior_sum))
        }

        if !in_range(&self.mutation_rate) {
            return Err(InvalidMutationRate(self.mutation_rate))
        }
        Ok(())
    }

    /// P(GeneCount = `copies`) for a founder.
    #[inline]
    pub fn prior(&self, copies: GeneCount) -> f64 {
        self.gene_prior[copies.index()]
    }

    /// P(Trait = `has_trait` | GeneCount = `copies`)
    #[inline]
    pub fn emission(&self, copies: GeneCount, has_trait: bool) -> f64 {
        let expressed = self.trait_emission[copies.index()];
        if has_trait { expressed } else { 1.0 - expressed }
    }

    /// Probability that a parent carrying `copies` passes the trait-causing allele to any of its offspring.
    /// - 0 copies: the allele can only appear through mutation.
    /// - 1 copy  : one of both alleles is picked at random.
    /// - 2 copies: the allele is passed unless it mutates.
    #[inline]
    pub fn transmission(&self, copies: GeneCount) -> f64 {
        match copies {
            GeneCount::Zero => self.mutation_rate,
            GeneCount::One  => 0.5,
            GeneCount::Two  => 1.0 - self.mutation_rate,
        }
    }
}
