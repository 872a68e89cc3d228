use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Cannot build a pedigree without any individual")]
    Empty,

    #[error("Individual '{0}' is defined more than once")]
    DuplicatePerson(String),

    #[error("Individual '{person}' has a single parent. Mother and father must either both be provided, or both be absent")]
    SingleParent{person: String},

    #[error("Individual '{person}' refers to an unknown parent '{parent}'")]
    DanglingParent{person: String, parent: String},

    #[error("Individual '{0}' is declared as its own parent")]
    SelfParent(String),

    #[error("Cyclic ancestry detected: individual '{0}' is its own ancestor")]
    CyclicAncestry(String),
}
