use std::{fs, path::{Path, PathBuf}};

use located_error::prelude::*;
use log::trace;

mod error;
pub use error::ParseError;

/// Attempt to create the parent directories of a path (if needed) and return an error if it failed.
pub fn create_parent_directory(path: &Path) -> Result<()> {
    use ParseError::CreateParentDirectory;
    let parent_dir = path.parent().unwrap_or(path);
    let loc_msg = || format!("While attempting to create output directory '{}'", path.display());
    fs::create_dir_all(parent_dir).map_err(CreateParentDirectory).with_loc(loc_msg)?;
    Ok(())
}

/// Check if a given file already exists ; raise an error if such is the case, and the user did not explicitly
/// allow file overwriting.
/// # Errors
/// - If the provided `path` already exists and the user did not specifically allow for file
///   overwrite using the `--overwrite` argument
pub fn can_write_file(overwrite: bool, path: &Path) -> Result<bool> {
    let loc_msg = "While ensuring that file permissions were appropriate";
    if !overwrite && path.exists() {
        return Err(ParseError::OverwriteDisallowed{path: path.to_path_buf()}).loc(loc_msg)
    }
    Ok(true)
}

/// Format the path of an output file, using the file stem of `input` and the extension `ext`, e.g.:
/// (`out/`, `data/family0.csv`, `probs`) => `out/family0.probs`
///
/// Parent directories are created if needed.
///
/// # Errors
/// - `InvalidFilename` if `input` has no valid UTF-8 file stem.
/// - `OverwriteDisallowed` if the output file already exists and `overwrite` is false.
/// - `CreateParentDirectory` if `output_dir` cannot be created.
pub fn get_output_file(output_dir: &Path, input: &Path, ext: &str, overwrite: bool) -> Result<PathBuf> {
    let stem = input.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or(ParseError::InvalidFilename)
        .with_loc(|| format!("While attempting to format an output filename from '{}'", input.display()))?;

    let output_file = output_dir.join(format!("{stem}.{ext}"));
    create_parent_directory(&output_file)?;
    can_write_file(overwrite, &output_file)?;
    trace!("Output file: {}", output_file.display());
    Ok(output_file)
}
