use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

use crate::GeneCount;

/// Default number of decimals used when displaying probabilities.
pub const DEFAULT_PRECISION: usize = 4;

/// Space padding of a person's name, within tabulated output.
const NAME_DISPLAY_LEN: usize = 12;

/// Normalized probability distribution over an individual's gene count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneDistribution([f64; 3]);

impl GeneDistribution {
    pub(crate) fn new(probs: [f64; 3]) -> Self {
        Self(probs)
    }

    pub fn probability(&self, copies: GeneCount) -> f64 {
        self.0[copies.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Iterate over `(gene count, probability)` pairs, in increasing gene count order.
    pub fn iter(&self) -> impl Iterator<Item = (GeneCount, f64)> + '_ {
        GeneCount::ALL.into_iter().map(|copies| (copies, self.probability(copies)))
    }
}

impl Index<GeneCount> for GeneDistribution {
    type Output = f64;

    fn index(&self, copies: GeneCount) -> &Self::Output {
        &self.0[copies.index()]
    }
}

/// Normalized probability distribution over an individual's trait status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent : f64,
}

impl TraitDistribution {
    pub fn probability(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }

    pub fn sum(&self) -> f64 {
        self.present + self.absent
    }
}

/// Marginal posterior distributions of a single individual.
#[derive(Debug, Clone, PartialEq)]
pub struct Posterior {
    pub name       : String,
    pub gene       : GeneDistribution,
    pub trait_state: TraitDistribution,
}

impl Display for Posterior {
    /// Human readable report. Precision defaults to `DEFAULT_PRECISION` (e.g. `format!("{posterior:.6}")`)
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "  Gene:")?;
        for (copies, p) in self.gene.iter().collect::<Vec<_>>().into_iter().rev() {
            writeln!(f, "    {copies}: {p:.precision$}")?;
        }
        writeln!(f, "  Trait:")?;
        writeln!(f, "    True: {:.precision$}", self.trait_state.present)?;
        write!(f, "    False: {:.precision$}", self.trait_state.absent)
    }
}

/// Single-line, ` - ` separated, representation of a `Posterior`. see `PosteriorRow::HEADER`
pub struct PosteriorRow<'a> {
    posterior: &'a Posterior,
    precision: usize,
}

impl<'a> PosteriorRow<'a> {
    pub const HEADER: &'static str = "name - gene_0 - gene_1 - gene_2 - trait_true - trait_false";

    pub fn new(posterior: &'a Posterior, precision: usize) -> Self {
        Self { posterior, precision }
    }
}

impl Display for PosteriorRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { posterior, precision } = self;
        write!(f, "{: <NAME_DISPLAY_LEN$}", posterior.name)?;
        for (_, p) in posterior.gene.iter() {
            write!(f, " - {p:.precision$}")?;
        }
        write!(f, " - {:.precision$} - {:.precision$}", posterior.trait_state.present, posterior.trait_state.absent)
    }
}

/// Per-individual marginal posteriors of a pedigree, in pedigree declaration order. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Posteriors {
    inner: Vec<Posterior>,
}

impl Posteriors {
    pub(crate) fn new(inner: Vec<Posterior>) -> Self {
        Self { inner }
    }

    pub fn get(&self, name: &str) -> Option<&Posterior> {
        self.inner.iter().find(|posterior| posterior.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posterior> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Tabulated rows, with a leading header line.
    pub fn rows(&self, precision: usize) -> impl Iterator<Item = String> + '_ {
        std::iter::once(PosteriorRow::HEADER.to_string())
            .chain(self.iter().map(move |posterior| PosteriorRow::new(posterior, precision).to_string()))
    }
}

impl<'a> IntoIterator for &'a Posteriors {
    type Item = &'a Posterior;
    type IntoIter = std::slice::Iter<'a, Posterior>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
