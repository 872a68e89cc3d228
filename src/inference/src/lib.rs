//! Exact posterior inference of gene counts and trait status over a pedigree.
//!
//! Every admissible joint assignment of (gene count, trait status) is enumerated, weighted by its joint
//! probability, and accumulated into per-individual marginals.

mod gene_count;
pub use gene_count::GeneCount;

pub mod tables;
pub use tables::{ProbabilityTables, TablesError};

pub mod enumerator;

mod evaluator;
pub use evaluator::{offspring_genotype_probability, Evaluator};

pub mod accumulator;
pub use accumulator::{Marginals, Posterior, PosteriorRow, Posteriors, DEFAULT_PRECISION};

mod engine;
pub use engine::{Engine, MAX_PEOPLE};

mod error;
pub use error::InferenceError;

use pedigree::Pedigree;

/// Compute the marginal posteriors of every individual within `pedigree`, using a single thread.
///
/// # Errors
/// see `Engine::new()` and `Marginals::normalize()`
pub fn infer(pedigree: &Pedigree, tables: &ProbabilityTables) -> Result<Posteriors, InferenceError> {
    Engine::new(pedigree, tables)?.infer()
}
