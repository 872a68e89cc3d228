use std::{
    cmp::{Ord, Ordering, PartialOrd},
    hash::{Hash, Hasher},
};

mod evidence;
pub use evidence::Evidence;

mod parents;
pub use parents::Parents;

/// Space padding lengths used for `std::fmt::Display` of Person
const NAME_DISPLAY_LEN    : usize = 12; // Space padding of `self.name`
const EVIDENCE_DISPLAY_LEN: usize = 11; // Space padding of `self.evidence`

/// Pedigree member.
/// # Fields:
/// - `name`    : Unique name of the individual within its pedigree (e.g. 'Harry', 'Lily')
/// - `parents` : Optional pedigree indices of the individual's parents.
///                 - `None`          if the individual is a founder.
///                 - `Some(parents)` if the individual is an offspring.
/// - `evidence`: Observed trait status of the individual (known true, known false or unknown).
#[derive(Debug, Clone)]
pub struct Person {
    pub name    : String,
    parents     : Option<Parents>,
    pub evidence: Evidence,
}

impl Person {
    pub fn new(name: &str, parents: Option<Parents>, evidence: Evidence) -> Person {
        Person { name: name.to_string(), parents, evidence }
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    /// Check whether or not this individual is a founder. Returns `true` if `self.parents == None`
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let role = if self.is_founder() { "founder" } else { "offspring" };
        write!(f, "name: {: <NAME_DISPLAY_LEN$} - trait: {: <EVIDENCE_DISPLAY_LEN$} - {role}", self.name, self.evidence)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
