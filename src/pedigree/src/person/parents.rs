/// Pedigree indices of an individual's parents. Both are always known together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

impl Parents {
    pub fn new(mother: usize, father: usize) -> Parents {
        Parents { mother, father }
    }

    /// Iterate over `[mother, father]`
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        [self.mother, self.father].into_iter()
    }
}
