use crate::{Evidence, Pedigree, PedigreeError, PersonRecord};

/// Mock a single founder individual.
/// # Arguments:
///  - `name`    : raw string slice defining the individual's name (e.g. "Alice")
///  - `evidence`: observed trait status of the individual.
pub fn mock_founder(name: &str, evidence: Evidence) -> Result<Pedigree, PedigreeError> {
    Pedigree::from_records([PersonRecord::founder(name, evidence)])
}

/// Mock a father, mother and child trio, with no evidence.
pub fn mock_trio() -> Result<Pedigree, PedigreeError> {
    Pedigree::from_records([
        PersonRecord::founder("mother", Evidence::Unknown),
        PersonRecord::founder("father", Evidence::Unknown),
        PersonRecord::offspring("child", ["mother", "father"], Evidence::Unknown),
    ])
}

/// Mock a three-member family, where the offspring is declared before its parents.
pub fn mock_family0() -> Result<Pedigree, PedigreeError> {
    Pedigree::from_records([
        PersonRecord::offspring("Harry", ["Lily", "James"], Evidence::Unknown),
        PersonRecord::founder("James", Evidence::KnownTrue),
        PersonRecord::founder("Lily", Evidence::KnownFalse),
    ])
}
