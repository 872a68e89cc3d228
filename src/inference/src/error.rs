use thiserror::Error;

use crate::TablesError;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Invalid probability tables")]
    InvalidTables(#[from] TablesError),

    #[error("Pedigree holds {got} individuals, while exact inference is restricted to {max} individuals")]
    PedigreeTooLarge{got: usize, max: usize},

    #[error("No consistent world: every admissible assignment has a null probability (first failing individual: '{0}')")]
    NoConsistentWorld(String),

    #[error("Failed to instantiate threadpool")]
    BuildThreadPool(#[from] rayon::ThreadPoolBuildError),
}
