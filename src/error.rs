use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeredityError {
    #[error("Pedigree holds {got} individuals, which exceeds the maximum of {max}. Use '--max-people' to raise this limit")]
    TooManyPeople{got: usize, max: usize},

    #[error("'{}' refers to another yaml configuration file. Nested 'from-yaml' commands are not supported", .0.display())]
    NestedYaml(PathBuf),
}
