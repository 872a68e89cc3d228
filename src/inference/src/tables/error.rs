use thiserror::Error;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Failed to open probability tables file")]
    Open(#[source] std::io::Error),

    #[error("Failed to deserialize probability tables")]
    Deserialize(#[source] serde_yaml::Error),

    #[error("Invalid {table} probability at index {index}: {value} does not lie within [0, 1]")]
    OutOfRange{table: &'static str, index: usize, value: f64},

    #[error("Gene copy prior probabilities must sum to 1. Got {0}")]
    UnnormalizedPrior(f64),

    #[error("Invalid mutation rate: {0} does not lie within [0, 1]")]
    InvalidMutationRate(f64),
}
