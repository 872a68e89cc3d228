use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("Invalid value for --{arg}: '{value}'")]
    ParseArg{arg: &'static str, value: String},

    #[error("--{arg} must lie between {min} and {max}. Got {value}")]
    OutOfBounds{arg: &'static str, min: usize, max: usize, value: usize},

    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to deserialize command line arguments from '{0}'")]
    Deserialize(String, #[source] serde_yaml::Error),

    #[error("Unable to write serialized arguments into '{0}'")]
    WriteArgs(String, #[source] std::io::Error),
}
