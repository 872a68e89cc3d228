use std::path::{Path, PathBuf};

use clap::Parser;

use super::Fixture;

/// Builds the command line of a `heredity-rs infer` run, using fixtures from `tests/test-data`.
#[derive(Default)]
pub struct HeredityRunnerBuilder {
    pedigree  : Option<String>,
    tables    : Option<String>,
    threads   : Option<usize>,
    max_people: Option<usize>,
    precision : Option<usize>,
    output_dir: Option<String>,
    overwrite : bool,
}

impl HeredityRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pedigree(mut self, pedigree: &str) -> Self {
        self.pedigree = Some(pedigree.to_string());
        self
    }

    pub fn set_tables(mut self, tables: &str) -> Self {
        self.tables = Some(tables.to_string());
        self
    }

    pub fn set_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn set_max_people(mut self, max_people: usize) -> Self {
        self.max_people = Some(max_people);
        self
    }

    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn set_output_dir(mut self, output_dir: &str) -> Self {
        self.output_dir = Some(output_dir.to_string());
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Copy every requested fixture within temporary directories, and format the command line.
    pub fn build(self) -> HeredityRunner {
        let pedigree = Fixture::copy(self.pedigree.as_deref().expect("A pedigree is required"));
        let tables = self.tables.as_deref().map(Fixture::copy);
        let output_dir = self.output_dir.as_deref().map(Fixture::blank);

        let mut args = format!("heredity-rs infer --pedigree {pedigree}");
        if let Some(tables) = &tables {
            args.push_str(&format!(" --tables {tables}"));
        }
        if let Some(threads) = self.threads {
            args.push_str(&format!(" --threads {threads}"));
        }
        if let Some(max_people) = self.max_people {
            args.push_str(&format!(" --max-people {max_people}"));
        }
        if let Some(precision) = self.precision {
            args.push_str(&format!(" --precision {precision}"));
        }
        if let Some(output_dir) = &output_dir {
            args.push_str(&format!(" --output-dir {output_dir}"));
        }
        if self.overwrite {
            args.push_str(" --overwrite");
        }

        HeredityRunner { args, pedigree, _tables: tables, output_dir }
    }
}

/// A ready-to-run `heredity-rs infer` command line. Fixtures live as long as the runner.
pub struct HeredityRunner {
    args: String,
    pedigree: Fixture,
    _tables: Option<Fixture>,
    output_dir: Option<Fixture>,
}

impl HeredityRunner {
    pub fn cli(&self) -> Result<parser::Cli, clap::Error> {
        parser::Cli::try_parse_from(self.args.split_whitespace())
    }

    /// Parse the command line and run `heredity_rs::run()`
    pub fn run(&self) -> anyhow::Result<()> {
        heredity_rs::run(self.cli()?)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Expected location of the tabulated results file.
    pub fn output_probs(&self) -> Option<PathBuf> {
        let stem = self.pedigree.file_stem().expect("Invalid pedigree filename").to_str().expect("Invalid UTF-8");
        self.output_dir().map(|dir| dir.join(format!("{stem}.{}", heredity_rs::RESULTS_EXT)))
    }
}
