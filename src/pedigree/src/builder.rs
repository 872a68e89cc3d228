use indexmap::IndexMap;
use log::trace;

use crate::{Evidence, Parents, Pedigree, PedigreeError, Person};

/// Raw, unresolved description of a pedigree member, as provided by a pedigree loader.
/// - `mother` and `father` are expected to be both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name          : String,
    pub mother        : Option<String>,
    pub father        : Option<String>,
    pub trait_evidence: Evidence,
}

impl PersonRecord {
    pub fn new(name: &str, mother: Option<&str>, father: Option<&str>, trait_evidence: Evidence) -> Self {
        Self {
            name: name.to_string(),
            mother: mother.map(str::to_string),
            father: father.map(str::to_string),
            trait_evidence
        }
    }

    pub fn founder(name: &str, trait_evidence: Evidence) -> Self {
        Self::new(name, None, None, trait_evidence)
    }

    pub fn offspring(name: &str, parents: [&str; 2], trait_evidence: Evidence) -> Self {
        Self::new(name, Some(parents[0]), Some(parents[1]), trait_evidence)
    }
}

/// Depth-first visitation state used while checking for cyclic ancestry.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {New, Open, Done}

/// Collects `PersonRecord`s and resolves them into a validated `Pedigree`.
///
/// Resolution happens in `build()`, once every record is known: offspring may thus be
/// declared before their parents.
#[derive(Debug, Default)]
pub struct PedigreeBuilder {
    records: Vec<PersonRecord>,
}

impl PedigreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: PersonRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    /// Resolve parent references and validate the resulting pedigree.
    /// # Errors
    /// - `Empty`           if no record was provided.
    /// - `DuplicatePerson` if two records share the same name.
    /// - `SingleParent`    if a record carries a mother without a father, or vice-versa.
    /// - `DanglingParent`  if a parent name does not match any record.
    /// - `SelfParent` / `CyclicAncestry` if the parent relation is not acyclic.
    pub fn build(self) -> Result<Pedigree, PedigreeError> {
        use PedigreeError::{DanglingParent, DuplicatePerson, Empty, SelfParent, SingleParent};
        if self.records.is_empty() {
            return Err(Empty)
        }

        // ---- First pass: register every name, so that parents may be declared after their offspring.
        let mut indices = IndexMap::with_capacity_and_hasher(self.records.len(), ahash::RandomState::new());
        for (i, record) in self.records.iter().enumerate() {
            if indices.insert(record.name.as_str(), i).is_some() {
                return Err(DuplicatePerson(record.name.clone()))
            }
        }

        // ---- Second pass: resolve parent references.
        let resolve = |person: &str, parent: &str| -> Result<usize, PedigreeError> {
            if person == parent {
                return Err(SelfParent(person.to_string()))
            }
            indices.get(parent).copied().ok_or_else(|| DanglingParent{person: person.to_string(), parent: parent.to_string()})
        };

        let mut people = IndexMap::with_capacity_and_hasher(self.records.len(), ahash::RandomState::new());
        for record in &self.records {
            let parents = match (&record.mother, &record.father) {
                (None, None)                 => None,
                (Some(mother), Some(father)) => Some(Parents::new(resolve(&record.name, mother)?, resolve(&record.name, father)?)),
                _                            => return Err(SingleParent{person: record.name.clone()}),
            };
            trace!("Resolved {} (parents: {parents:?})", record.name);
            people.insert(record.name.clone(), Person::new(&record.name, parents, record.trait_evidence));
        }

        let pedigree = Pedigree::from_people(people);
        Self::check_acyclic(&pedigree)?;
        Ok(pedigree)
    }

    /// Ensure no individual is its own ancestor, using an iterative depth-first search.
    fn check_acyclic(pedigree: &Pedigree) -> Result<(), PedigreeError> {
        let mut state = vec![Visit::New; pedigree.len()];
        for root in 0..pedigree.len() {
            if state[root] != Visit::New {
                continue
            }
            // ---- (node, whether its ancestors have already been pushed)
            let mut stack = vec![(root, false)];
            while let Some((node, expanded)) = stack.pop() {
                if expanded {
                    state[node] = Visit::Done;
                    continue
                }
                match state[node] {
                    Visit::Done => continue,
                    Visit::Open => return Err(PedigreeError::CyclicAncestry(pedigree[node].name.clone())),
                    Visit::New  => state[node] = Visit::Open,
                }
                stack.push((node, true));
                for parent in pedigree[node].parents().into_iter().flat_map(Parents::iter) {
                    match state[parent] {
                        Visit::Open => return Err(PedigreeError::CyclicAncestry(pedigree[parent].name.clone())),
                        Visit::New  => stack.push((parent, false)),
                        Visit::Done => (),
                    }
                }
            }
        }
        Ok(())
    }
}
