use crate::InferenceError;

/// Subset of a pedigree's members, stored as a bit mask over their pedigree indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PersonSet(u64);

impl PersonSet {
    /// Maximum number of individuals a set may hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    pub fn empty() -> Self {
        Self(0)
    }

    /// Set containing every index within `0..n`
    ///
    /// # Errors
    /// - `PedigreeTooLarge` if `n` exceeds `PersonSet::CAPACITY`
    pub fn full(n: usize) -> Result<Self, InferenceError> {
        match n {
            0                         => Ok(Self(0)),
            n if n <= Self::CAPACITY  => Ok(Self(u64::MAX >> (Self::CAPACITY - n))),
            got                       => Err(InferenceError::PedigreeTooLarge{got, max: Self::CAPACITY}),
        }
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && (self.0 >> index) & 1 == 1
    }

    pub fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over the indices contained within this set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let set = *self;
        (0..Self::CAPACITY).filter(move |i| set.contains(*i))
    }
}

impl FromIterator<usize> for PersonSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::empty();
        iter.into_iter().for_each(|index| set.insert(index));
        set
    }
}
