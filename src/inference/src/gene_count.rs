use std::fmt::{self, Display, Formatter};

/// Number of copies of the trait-causing allele carried by an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneCount {
    Zero = 0,
    One  = 1,
    Two  = 2,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [Self::Zero, Self::One, Self::Two];

    #[inline]
    pub fn copies(self) -> u8 {
        self as u8
    }

    /// Index of this gene count within a per-copy table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = u8;

    fn try_from(copies: u8) -> Result<Self, Self::Error> {
        match copies {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(other),
        }
    }
}

impl Display for GeneCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.copies().fmt(f)
    }
}
