use std::ops::Index;

use indexmap::IndexMap;

#[cfg(test)] mod tests;

mod person;
pub use person::{Evidence, Parents, Person};

mod builder;
pub use builder::{PedigreeBuilder, PersonRecord};

mod error;
pub use error::PedigreeError;

/// A validated family tree.
/// # Fields:
/// - `people`: IndexMap containing all members of the pedigree (founders and offspring), in declaration order.
///             - Key  : (String) - Name of the individual
///             - Value: (Person) - Individual, whose parents are referenced through their index within this map.
///
/// # Invariants
/// - Parent indices always resolve to a member of this pedigree.
/// - The parent relation is acyclic.
///
/// Both are enforced by `PedigreeBuilder::build()`, which is the only way to obtain a `Pedigree`.
#[derive(Debug, Clone)]
pub struct Pedigree {
    people: IndexMap<String, Person, ahash::RandomState>,
}

impl Pedigree {
    pub(crate) fn from_people(people: IndexMap<String, Person, ahash::RandomState>) -> Self {
        Self { people }
    }

    /// Build and validate a pedigree from a set of loader records.
    pub fn from_records<I>(records: I) -> Result<Self, PedigreeError>
    where   I: IntoIterator<Item = PersonRecord>
    {
        let mut builder = PedigreeBuilder::new();
        for record in records {
            builder.add_record(record);
        }
        builder.build()
    }

    /// Number of individuals within this pedigree.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over all members, in declaration order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn founders(&self) -> impl Iterator<Item = &Person> {
        self.people().filter(|person| person.is_founder())
    }

    pub fn offsprings(&self) -> impl Iterator<Item = &Person> {
        self.people().filter(|person| !person.is_founder())
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    /// Return the `[mother, father]` of a given individual, or `None` if it is a founder.
    pub fn parents_of(&self, person: &Person) -> Option<[&Person; 2]> {
        person.parents().map(|parents| [&self[parents.mother], &self[parents.father]])
    }
}

impl Index<usize> for Pedigree {
    type Output = Person;

    fn index(&self, index: usize) -> &Self::Output {
        &self.people[index]
    }
}

impl std::fmt::Display for Pedigree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for person in self.people() {
            let parents = match self.parents_of(person) {
                None                   => "None".to_string(),
                Some([mother, father]) => format!("{} <-> {}", mother.name, father.name),
            };
            writeln!(f, "{person} - parents: {parents}")?;
        }
        Ok(())
    }
}
