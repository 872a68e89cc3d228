use std::time::Instant;

use indicatif::ProgressIterator;
use log::{debug, info};
use pedigree::Pedigree;
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::{
    accumulator::{Marginals, Posteriors},
    enumerator::{self, GenePartitions, JointAssignment, PersonSet, TraitSubsets},
    evaluator::Evaluator,
    InferenceError,
    ProbabilityTables,
};

/// Maximum number of individuals supported by the exact inference engine.
pub const MAX_PEOPLE: usize = 32;

/// Exact inference by enumeration over every admissible joint assignment of a pedigree.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    pedigree: &'a Pedigree,
    tables  : &'a ProbabilityTables,
}

impl<'a> Engine<'a> {
    /// # Errors
    /// - `InvalidTables`    if `tables` fail validation.
    /// - `PedigreeTooLarge` if `pedigree` holds more than `MAX_PEOPLE` individuals.
    pub fn new(pedigree: &'a Pedigree, tables: &'a ProbabilityTables) -> Result<Self, InferenceError> {
        tables.validate()?;
        if pedigree.len() > MAX_PEOPLE {
            return Err(InferenceError::PedigreeTooLarge{got: pedigree.len(), max: MAX_PEOPLE})
        }
        Ok(Self { pedigree, tables })
    }

    fn evaluator(&self) -> Evaluator<'a> {
        Evaluator::new(self.pedigree, self.tables)
    }

    /// Log the size of the hypothesis space, and return the number of admissible trait subsets.
    fn log_search_space(&self) -> Result<u64, InferenceError> {
        let gene_partitions = GenePartitions::total(self.pedigree.len());
        let trait_subsets = TraitSubsets::new(self.pedigree)?.total();
        info!("Enumerating {gene_partitions} gene partitions x {trait_subsets} admissible trait subsets ({} individuals)",
            self.pedigree.len()
        );
        Ok(trait_subsets)
    }

    /// Single-threaded pass over every admissible joint assignment.
    pub fn infer(&self) -> Result<Posteriors, InferenceError> {
        let start = Instant::now();
        let evaluator = self.evaluator();
        let total = GenePartitions::total(self.pedigree.len()).saturating_mul(self.log_search_space()?);

        let mut marginals = Marginals::new(self.pedigree.len());
        let progress = logger::Logger::progress_bar(total, "Enumerating hypotheses");
        for assignment in enumerator::hypotheses(self.pedigree)?.progress_with(progress.clone()) {
            marginals.add(&assignment, evaluator.joint_probability(&assignment));
        }
        progress.finish_and_clear();

        debug!("Enumeration done in {:.3?}", start.elapsed());
        marginals.normalize(self.pedigree)
    }

    /// Multi-threaded pass: gene partitions are dispatched across a pool of `threads` workers, each folding
    /// its share of assignments into a private `Marginals`. Partial results are then summed.
    pub fn infer_parallel(&self, threads: usize) -> Result<Posteriors, InferenceError> {
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        let evaluator = self.evaluator();
        let n = self.pedigree.len();
        self.log_search_space()?;

        let trait_subsets: Vec<PersonSet> = TraitSubsets::new(self.pedigree)?.collect();
        let gene_partitions = GenePartitions::new(n)?;
        let progress = logger::Logger::progress_bar(GenePartitions::total(n), "Enumerating gene partitions");
        let marginals = pool.install(|| {
            gene_partitions
                .par_bridge()
                .fold(|| Marginals::new(n), |mut marginals, genes| {
                    for traits in &trait_subsets {
                        let assignment = JointAssignment::new(genes, *traits);
                        marginals.add(&assignment, evaluator.joint_probability(&assignment));
                    }
                    progress.inc(1);
                    marginals
                })
                .reduce(|| Marginals::new(n), Marginals::merge)
        });
        progress.finish_and_clear();

        debug!("Enumeration done in {:.3?} using {} threads", start.elapsed(), pool.current_num_threads());
        marginals.normalize(self.pedigree)
    }
}
