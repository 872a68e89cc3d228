#![allow(dead_code)]

mod fixture;
pub use fixture::Fixture;

mod heredity_runner;
pub use heredity_runner::{HeredityRunner, HeredityRunnerBuilder};

/// Expected marginals of a single individual: `[P(0 copy), P(1 copy), P(2 copies)]` and `P(trait)`
pub type Expected<'a> = (&'a str, [f64; 3], f64);

/// Tolerance used when comparing posteriors against published reference values.
pub const REFERENCE_TOLERANCE: f64 = 1e-4;

/// Parse a tab-separated `.probs` file into (header, rows).
pub fn read_probs(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    let mut lines = contents.lines()
        .map(|line| line.split('\t').map(str::to_string).collect::<Vec<String>>());
    let header = lines.next().expect("Missing header line");
    (header, lines.collect())
}
