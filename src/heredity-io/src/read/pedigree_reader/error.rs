use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedigreeReaderError {
    #[error("Failed to open pedigree file")]
    Open(#[source] std::io::Error),

    #[error("Invalid pedigree record")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: invalid trait value '{value}' for individual '{name}'. Expected '1', '0', or an empty field")]
    InvalidTrait{line: usize, name: String, value: String},

    #[error("Line {line}: empty individual name")]
    EmptyName{line: usize},
}
