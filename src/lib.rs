use std::path::{Path, PathBuf};

use parser::{Cli, Commands, Infer};
use pedigree::Pedigree;
use inference::{Engine, Posteriors, ProbabilityTables};
use heredity_io::{parse, read::PedigreeReader, write::GenericWriter};

use located_error::prelude::*;
use log::{debug, info};

mod error;
pub use error::HeredityError;

/// File extension of tabulated results.
pub const RESULTS_EXT: &str = "probs";

/// Unpack the command line arguments and run the requested subcommand.
pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Commands::Infer { infer } => {
            // ---- Fail early if results cannot be written.
            let output_file = results_file(&infer)?;
            let posteriors = infer_pedigree(&infer)?;
            write_results(&posteriors, infer.precision, output_file.as_deref())?;
        },

        Commands::FromYaml { yaml } => {
            let cli = Cli::deserialize(&yaml)?;
            if let Commands::FromYaml { .. } = cli.commands {
                return Err(HeredityError::NestedYaml(yaml)).loc("While replaying command line arguments")
            }
            info!("Replaying command line arguments from '{}'", yaml.display());
            logger::Logger::set_level(cli.verbosity());
            self::run(cli)?;
        },
    };
    Ok(())
}

/// Parse a pedigree definition file, and ensure it does not exceed `max_people` individuals.
///
/// # Errors
/// - if the file cannot be parsed, or does not describe a valid pedigree.
/// - `TooManyPeople` if the pedigree is larger than `max_people`
pub fn load_pedigree(path: &Path, max_people: usize) -> Result<Pedigree> {
    let pedigree = PedigreeReader::from_path(path)?.into_pedigree()
        .with_loc(|| format!("While loading pedigree '{}'", path.display()))?;

    if pedigree.len() > max_people {
        return Err(HeredityError::TooManyPeople{got: pedigree.len(), max: max_people})
            .with_loc(|| format!("While loading pedigree '{}'", path.display()))
    }
    debug!("Pedigree:\n{pedigree}");
    Ok(pedigree)
}

/// Load alternate probability tables, or fallback to default values.
///
/// # Errors
/// - if `path` is provided and does not contain valid probability tables.
pub fn load_tables(path: Option<&Path>) -> Result<ProbabilityTables> {
    match path {
        Some(path) => ProbabilityTables::from_yaml(path),
        None       => Ok(ProbabilityTables::default()),
    }
}

/// Load the pedigree and probability tables targeted by `args`, and compute posteriors.
///
/// # Errors
/// see `load_pedigree()`, `load_tables()` and `inference::Engine`
pub fn infer_pedigree(args: &Infer) -> Result<Posteriors> {
    let pedigree = load_pedigree(&args.pedigree, args.max_people)?;
    let tables = load_tables(args.tables.as_deref())?;
    info!("Running inference over {} individuals ({} founders, {} offsprings) using {} thread(s)",
        pedigree.len(), pedigree.founders().count(), pedigree.offsprings().count(), args.threads
    );

    let engine = Engine::new(&pedigree, &tables).loc("While initializing inference engine")?;
    let posteriors = match args.threads {
        0 | 1   => engine.infer(),
        threads => engine.infer_parallel(threads),
    };
    posteriors.loc("While computing posterior probabilities")
}

/// Output file of tabulated results, if the user requested an output directory.
fn results_file(args: &Infer) -> Result<Option<PathBuf>> {
    args.output_dir.as_ref()
        .map(|dir| parse::get_output_file(dir, &args.pedigree, RESULTS_EXT, args.overwrite))
        .transpose()
}

/// Print a human readable report on stdout, and write tabulated results within `output_file`, if any.
///
/// # Errors
/// - if writing to stdout or `output_file` fails.
pub fn write_results(posteriors: &Posteriors, precision: usize, output_file: Option<&Path>) -> Result<()> {
    GenericWriter::new(None::<&Path>)?
        .pretty(true)
        .write_iter(posteriors.iter().map(|posterior| format!("{posterior:.precision$}")))?;

    if let Some(path) = output_file {
        info!("Writing results within '{}'", path.display());
        GenericWriter::new(Some(path))?.write_iter(posteriors.rows(precision))?;
    }
    Ok(())
}
