use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    fs::File,
    path::{Path, PathBuf},
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, Args};
use serde::{Serialize, Deserialize};
use log::debug;

mod error;
pub use error::ParserError;

/// Upper bound of `--max-people`. Exact enumeration beyond this point is intractable anyway.
pub const MAX_PEOPLE_LIMIT: usize = 32;

/// Upper bound of `--precision`.
pub const MAX_PRECISION: usize = 16;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="heredity-rs", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// heredity-rs: Exact Bayesian inference of gene and trait probabilities within a family tree.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Logger verbosity, derived from `--verbose` and `--quiet`.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {0} else {self.verbose.saturating_add(1)}
    }

    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - Arguments are always logged at the debug level.
    /// - File naming follows the convention '{current time}-{module name}.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the user-provided `--output-dir` folder. Nothing is written if the
    ///   user did not provide any.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    /// - if the output file cannot be written.
    pub fn serialize(&self) -> Result<Option<PathBuf>> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::Serialize)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let output_dir = match &self.commands {
            Commands::Infer { infer } => match &infer.output_dir {
                Some(dir) => dir,
                None      => return Ok(None),
            },
            Commands::FromYaml { .. } => return Ok(None),
        };

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file = output_dir.join(format!("{current_time}-infer.yaml"));
        std::fs::write(&output_file, serialized)
            .map_err(|e| ParserError::WriteArgs(output_file.display().to_string(), e))
            .loc("While writing command line arguments")?;
        Ok(Some(output_file))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    ///
    /// - Returns `FileNotFound` or `PermissionDenied` if the provided `.yaml` is invalid,
    ///   or does not carry read permissions
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let loc_msg = || format!("While deserializing command line arguments from '{}'", yaml.display());
        let file = File::open(yaml).with_loc(loc_msg)?;
        serde_yaml::from_reader(file)
            .map_err(|e| ParserError::Deserialize(yaml.display().to_string(), e))
            .with_loc(loc_msg)
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Compute the posterior gene and trait probabilities of every individual within a pedigree.
    Infer {
        #[clap(flatten)]
        infer: Infer,
    },

    /// Run heredity-rs using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a heredity-rs command using the exact same parameters
    /// and arguments.
    FromYaml {
        yaml: PathBuf,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infer {
    /// Input pedigree definition file.
    ///
    /// Comma-separated file, with a header line and columns 'name,mother,father,trait'.{n}
    /// - mother and father must either both be provided, or both be left empty (founders).{n}
    /// - trait is either '1' (known to express the trait), '0' (known not to), or empty (unknown).
    #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
    pub pedigree: PathBuf,

    /// Alternate probability tables.
    ///
    /// YAML file defining 'gene_prior' (3 values, summing to 1), 'trait_emission' (3 values) and
    /// 'mutation_rate'. Default values are used when this argument is not provided.
    #[clap(short='t', long, required(false), parse(try_from_os_str=valid_input_file))]
    pub tables: Option<PathBuf>,

    /// Number of worker threads.
    ///
    /// A value of 1 performs a sequential enumeration.
    #[clap(short='@', long, default_value("1"), parse(try_from_str=parse_threads))]
    pub threads: usize,

    /// Maximum number of individuals allowed within the pedigree.
    ///
    /// Exact inference enumerates 3^n x 2^k hypotheses, where n is the number of individuals and k
    /// the number of individuals with an unknown trait. Runtime thus quickly becomes prohibitive.
    #[clap(short='N', long, default_value("16"), parse(try_from_str=parse_max_people))]
    pub max_people: usize,

    /// Number of decimals used when printing probabilities.
    #[clap(short='P', long, default_value("4"), parse(try_from_str=parse_precision))]
    pub precision: usize,

    /// Output directory.
    ///
    /// When provided, results are written within '{output-dir}/{pedigree-stem}.probs', and command line
    /// arguments are serialized within '{output-dir}/{timestamp}-infer.yaml'.
    #[clap(short='o', long, required(false), parse(try_from_os_str=valid_output_dir))]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing output files.
    #[clap(short='w', long)]
    pub overwrite: bool,
}

impl Default for Infer {
    fn default() -> Self {
        Self {
            pedigree  : PathBuf::new(),
            tables    : None,
            threads   : 1,
            max_people: 16,
            precision : 4,
            output_dir: None,
            overwrite : false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(&self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(*self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: &FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(*entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, &FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

fn valid_output_dir(s: &OsStr) -> Result<PathBuf> {
    if ! Path::new(s).exists() {
        std::fs::create_dir_all(s).with_loc(|| format!("While creating output directory {}", Path::new(s).display()))?;
    }
    assert_filesystem_entity_is_valid(s, &FileEntity::Directory)
        .loc("While checking for directory validity")?;
    Ok(PathBuf::from(s))
}

/// Parse an integer and ensure it lies within `[min, max]`.
fn parse_bounded(s: &str, arg: &'static str, min: usize, max: usize) -> Result<usize, ParserError> {
    let value = s.trim().parse::<usize>().map_err(|_| ParserError::ParseArg{arg, value: s.to_string()})?;
    if !(min..=max).contains(&value) {
        return Err(ParserError::OutOfBounds{arg, min, max, value})
    }
    Ok(value)
}

fn parse_threads(s: &str) -> Result<usize, ParserError> {
    parse_bounded(s, "threads", 1, usize::MAX)
}

fn parse_max_people(s: &str) -> Result<usize, ParserError> {
    parse_bounded(s, "max-people", 1, MAX_PEOPLE_LIMIT)
}

fn parse_precision(s: &str) -> Result<usize, ParserError> {
    parse_bounded(s, "precision", 0, MAX_PRECISION)
}
