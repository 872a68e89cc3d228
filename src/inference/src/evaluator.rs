use pedigree::Pedigree;

use crate::{enumerator::JointAssignment, GeneCount, ProbabilityTables};

/// Probability that an offspring carries `copies`, given the transmission probability of each parent.
#[inline]
pub fn offspring_genotype_probability(copies: GeneCount, mother: f64, father: f64) -> f64 {
    match copies {
        GeneCount::Two  => mother * father,
        GeneCount::One  => mother * (1.0 - father) + (1.0 - mother) * father,
        GeneCount::Zero => (1.0 - mother) * (1.0 - father),
    }
}

/// Computes the joint probability of a complete assignment, using the standard Bayesian network
/// factorization: the product, over every individual, of P(genotype | parents) * P(trait | genotype).
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    pedigree: &'a Pedigree,
    tables  : &'a ProbabilityTables,
}

impl<'a> Evaluator<'a> {
    pub fn new(pedigree: &'a Pedigree, tables: &'a ProbabilityTables) -> Self {
        Self { pedigree, tables }
    }

    /// P(GeneCount of `person` | GeneCount of its parents), or the prior if `person` is a founder.
    pub fn genotype_probability(&self, person: usize, assignment: &JointAssignment) -> f64 {
        let copies = assignment.gene_count(person);
        match self.pedigree[person].parents() {
            None          => self.tables.prior(copies),
            Some(parents) => {
                let mother = self.tables.transmission(assignment.gene_count(parents.mother));
                let father = self.tables.transmission(assignment.gene_count(parents.father));
                offspring_genotype_probability(copies, mother, father)
            }
        }
    }

    pub fn person_probability(&self, person: usize, assignment: &JointAssignment) -> f64 {
        let emission = self.tables.emission(assignment.gene_count(person), assignment.has_trait(person));
        self.genotype_probability(person, assignment) * emission
    }

    pub fn joint_probability(&self, assignment: &JointAssignment) -> f64 {
        (0..self.pedigree.len())
            .map(|person| self.person_probability(person, assignment))
            .product()
    }
}
