use std::fmt::{self, Display, Formatter};

/// Externally known status of an individual's trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Evidence {
    KnownTrue,
    KnownFalse,
    #[default]
    Unknown,
}

impl Evidence {
    /// Fixed trait value, or `None` when the trait is unobserved.
    pub fn value(&self) -> Option<bool> {
        match self {
            Self::KnownTrue  => Some(true),
            Self::KnownFalse => Some(false),
            Self::Unknown    => None,
        }
    }

    /// Check whether a hypothesized trait state is compatible with this evidence.
    pub fn admits(&self, has_trait: bool) -> bool {
        self.value().map_or(true, |known| known == has_trait)
    }

    pub fn is_known(&self) -> bool {
        self.value().is_some()
    }
}

impl From<Option<bool>> for Evidence {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true)  => Self::KnownTrue,
            Some(false) => Self::KnownFalse,
            None        => Self::Unknown,
        }
    }
}

impl Display for Evidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::KnownTrue  => "known true",
            Self::KnownFalse => "known false",
            Self::Unknown    => "unknown",
        };
        repr.fmt(f)
    }
}
