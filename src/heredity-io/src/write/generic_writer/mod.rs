use std::{borrow::Cow, fs::File, io::{Write, BufWriter}, path::Path};

use lazy_static::lazy_static;
use located_error::prelude::*;
use regex::Regex;

mod error;
pub use error::WriterError;

/// Field separator used when writing tabulated files.
pub const WRITER_SEPARATOR: &str = "\t";

/// A generic file writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
/// - pretty: keep pretty-print separators as-is, instead of converting them to `WRITER_SEPARATOR`.
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>,
    pretty: bool,
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new `Writer`, linked to a file, or to stdout if `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>> {
        use WriterError::IOError;
        let source: Box<dyn Write + 'a> = match path {
            Some(path) => Box::new(File::create(path).map_err(IOError).loc("While creating file")?),
            None       => Box::new(std::io::stdout()),
        };
        Ok(Self::from_writer(source))
    }

    /// Wrap any `Write` implementor.
    pub fn from_writer(writer: Box<dyn Write + 'a>) -> Self {
        Self { source: BufWriter::new(writer), pretty: false }
    }

    /// Keep pretty-print separators (` - `) within written lines.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Behavior
    ///
    /// Unless `pretty` is set, `write_iter` will search for the regular expression `[ ]+-[ ]+`
    /// within each item and replace matches with `\t`. This effectively removes "Pretty-print"
    /// from the output.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    ///
    /// # Panics
    /// - if parsing the regex required to delete pretty-print characters fails.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"[ ]+-[ ]+").expect("Failed to parse regex.");
        }
        for obj in iter {
            let text = format!("{obj}\n");
            let line = if self.pretty { Cow::Borrowed(text.as_str()) } else { RE.replace_all(&text, WRITER_SEPARATOR) };
            self.source.write_all(line.as_bytes())
                .map_err(WriterError::IOError)
                .loc("While writing contents into file")?;
        }
        self.source.flush().loc("While flushing buffer contents of Writer")
    }
}
