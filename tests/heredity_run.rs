mod common;
use common::{Expected, Fixture, HeredityRunner, HeredityRunnerBuilder, REFERENCE_TOLERANCE, read_probs};

use clap::Parser;
use float_cmp::assert_approx_eq;
use inference::{GeneCount, Posteriors};
use parser::Infer;
#[cfg(test)] use pretty_assertions::assert_eq;

/// Run inference over a pedigree fixture, without going through the command line.
fn infer_fixture(pedigree: &str, tables: Option<&str>, threads: usize) -> anyhow::Result<Posteriors> {
    let pedigree = Fixture::copy(pedigree);
    let tables = tables.map(Fixture::copy);
    let args = Infer {
        pedigree: pedigree.to_path_buf(),
        tables  : tables.as_deref().map(std::path::Path::to_path_buf),
        threads,
        ..Default::default()
    };
    heredity_rs::infer_pedigree(&args)
}

fn assert_posteriors(posteriors: &Posteriors, expected: &[Expected]) {
    assert_eq!(posteriors.len(), expected.len());
    for (posterior, (name, gene, has_trait)) in posteriors.iter().zip(expected) {
        assert_eq!(&posterior.name, name);
        for copies in GeneCount::ALL {
            assert_approx_eq!(f64, posterior.gene[copies], gene[copies.index()], epsilon = REFERENCE_TOLERANCE);
        }
        assert_approx_eq!(f64, posterior.trait_state.present, *has_trait, epsilon = REFERENCE_TOLERANCE);
        assert_approx_eq!(f64, posterior.trait_state.sum(), 1.0, epsilon = 1e-9);
        assert_approx_eq!(f64, posterior.gene.sum(), 1.0, epsilon = 1e-9);
    }
}

const FAMILY0: [Expected; 3] = [
    ("Harry", [0.5351, 0.4557, 0.0092], 0.2665),
    ("James", [0.2918, 0.5106, 0.1976], 1.0),
    ("Lily" , [0.9827, 0.0136, 0.0036], 0.0),
];

const FAMILY1: [Expected; 6] = [
    ("Arthur" , [0.8636, 0.1035, 0.0329], 0.0),
    ("Charlie", [0.8651, 0.1331, 0.0018], 0.0),
    ("Fred"   , [0.3449, 0.6486, 0.0065], 1.0),
    ("Ginny"  , [0.8168, 0.1805, 0.0027], 0.1110),
    ("Molly"  , [0.8636, 0.1035, 0.0329], 0.0),
    ("Ron"    , [0.8168, 0.1805, 0.0027], 0.1110),
];

const FAMILY2: [Expected; 5] = [
    ("Arthur"  , [0.9509, 0.0344, 0.0147], 0.0),
    ("Hermione", [0.8189, 0.1203, 0.0608], 0.0),
    ("Molly"   , [0.8852, 0.0744, 0.0404], 0.0768),
    ("Ron"     , [0.7808, 0.2149, 0.0043], 0.0),
    ("Rose"    , [0.2890, 0.7022, 0.0088], 1.0),
];

#[test]
fn family0_reference() -> anyhow::Result<()> {
    assert_posteriors(&infer_fixture("pedigree/family0.csv", None, 1)?, &FAMILY0);
    Ok(())
}

#[test]
fn family1_reference() -> anyhow::Result<()> {
    assert_posteriors(&infer_fixture("pedigree/family1.csv", None, 1)?, &FAMILY1);
    Ok(())
}

#[test]
fn family2_reference() -> anyhow::Result<()> {
    assert_posteriors(&infer_fixture("pedigree/family2.csv", None, 1)?, &FAMILY2);
    Ok(())
}

#[test]
fn trio_without_evidence() -> anyhow::Result<()> {
    let expected = [
        ("Child" , [0.9322, 0.0666, 0.0012], 0.0474),
        ("Mother", [0.96, 0.03, 0.01], 0.0329),
        ("Father", [0.96, 0.03, 0.01], 0.0329),
    ];
    assert_posteriors(&infer_fixture("pedigree/trio.csv", None, 1)?, &expected);
    Ok(())
}

#[test]
fn parallel_family1() -> anyhow::Result<()> {
    let sequential = infer_fixture("pedigree/family1.csv", None, 1)?;
    let parallel = infer_fixture("pedigree/family1.csv", None, 3)?;
    assert_posteriors(&parallel, &FAMILY1);
    for (lhs, rhs) in sequential.iter().zip(parallel.iter()) {
        for copies in GeneCount::ALL {
            assert_approx_eq!(f64, lhs.gene[copies], rhs.gene[copies], epsilon = 1e-12);
        }
        assert_approx_eq!(f64, lhs.trait_state.present, rhs.trait_state.present, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn explicit_default_tables() -> anyhow::Result<()> {
    assert_posteriors(&infer_fixture("pedigree/family0.csv", Some("tables/default.yaml"), 1)?, &FAMILY0);
    Ok(())
}

#[test]
fn alternate_tables() -> anyhow::Result<()> {
    let posteriors = infer_fixture("pedigree/family0.csv", Some("tables/no-mutation.yaml"), 1)?;
    let harry = posteriors.get("Harry").expect("Harry should be present");
    assert_approx_eq!(f64, harry.gene[GeneCount::Zero], 0.5414, epsilon = REFERENCE_TOLERANCE);
    assert_approx_eq!(f64, harry.gene[GeneCount::One], 0.4539, epsilon = REFERENCE_TOLERANCE);
    assert_approx_eq!(f64, harry.gene[GeneCount::Two], 0.0047, epsilon = REFERENCE_TOLERANCE);
    assert_approx_eq!(f64, harry.trait_state.present, 0.2627, epsilon = REFERENCE_TOLERANCE);
    Ok(())
}

#[test]
fn unnormalized_tables_are_rejected() {
    assert!(infer_fixture("pedigree/family0.csv", Some("tables/unnormalized.yaml"), 1).is_err());
}

#[test]
fn malformed_pedigrees_are_rejected() {
    for malformed in ["cycle", "single-parent", "duplicate", "invalid-trait", "dangling-parent", "empty"] {
        let result = infer_fixture(&format!("malformed/{malformed}.csv"), None, 1);
        assert!(result.is_err(), "'{malformed}' pedigree should be rejected");
    }
}

/// Run `heredity-rs infer` over family0, writing results within a temporary output directory.
fn run_family0(builder: HeredityRunnerBuilder) -> anyhow::Result<HeredityRunner> {
    let runner = builder
        .set_pedigree("pedigree/family0.csv")
        .set_output_dir("heredity-test-output")
        .build();
    runner.run()?;
    Ok(runner)
}

#[test]
fn cli_writes_results() -> anyhow::Result<()> {
    let runner = run_family0(HeredityRunnerBuilder::new())?;

    let (header, rows) = read_probs(&runner.output_probs().expect("Missing output directory"));
    assert_eq!(header, ["name", "gene_0", "gene_1", "gene_2", "trait_true", "trait_false"]);
    assert_eq!(rows.len(), FAMILY0.len());
    for (row, (name, gene, has_trait)) in rows.iter().zip(FAMILY0) {
        assert_eq!(row[0], name);
        let values: Vec<f64> = row[1..].iter().map(|field| field.parse::<f64>()).collect::<Result<_, _>>()?;
        for (got, want) in values.iter().zip(gene.iter().chain([has_trait, 1.0 - has_trait].iter())) {
            assert_approx_eq!(f64, *got, *want, epsilon = 1e-4 + 5e-5);
        }
    }
    Ok(())
}

#[test]
fn cli_precision() -> anyhow::Result<()> {
    let runner = run_family0(HeredityRunnerBuilder::new().set_precision(2))?;
    let (_, rows) = read_probs(&runner.output_probs().expect("Missing output directory"));
    assert_eq!(rows[1], ["James", "0.29", "0.51", "0.20", "1.00", "0.00"]);
    Ok(())
}

#[test]
fn cli_alternate_tables() -> anyhow::Result<()> {
    let runner = run_family0(HeredityRunnerBuilder::new().set_tables("tables/no-mutation.yaml"))?;
    let (_, rows) = read_probs(&runner.output_probs().expect("Missing output directory"));
    assert_eq!(rows[0][0], "Harry");
    let harry: Vec<f64> = rows[0][1..].iter().map(|field| field.parse::<f64>()).collect::<Result<_, _>>()?;
    for (got, want) in harry.iter().zip([0.5414, 0.4539, 0.0047, 0.2627, 0.7373]) {
        assert_approx_eq!(f64, *got, want, epsilon = 1e-4 + 5e-5);
    }
    Ok(())
}

#[test]
fn cli_rejects_unnormalized_tables() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("pedigree/family0.csv")
        .set_tables("tables/unnormalized.yaml")
        .build();
    assert!(runner.run().is_err());
}

#[test]
fn cli_refuses_overwrite() -> anyhow::Result<()> {
    let runner = run_family0(HeredityRunnerBuilder::new())?;
    assert!(runner.run().is_err(), "Second run should refuse to overwrite results");
    Ok(())
}

#[test]
fn cli_overwrite() -> anyhow::Result<()> {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("pedigree/family2.csv")
        .set_output_dir("heredity-test-output")
        .set_threads(2)
        .overwrite()
        .build();
    runner.run()?;
    runner.run()?;
    let (_, rows) = read_probs(&runner.output_probs().expect("Missing output directory"));
    assert_eq!(rows.len(), FAMILY2.len());
    Ok(())
}

#[test]
fn cli_max_people() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("pedigree/family1.csv")
        .set_max_people(5)
        .build();
    let err = runner.run().expect_err("family1 holds six individuals");
    assert!(matches!(
        err.downcast_ref::<heredity_rs::HeredityError>(),
        Some(heredity_rs::HeredityError::TooManyPeople{got: 6, max: 5})
    ));
}

#[test]
fn from_yaml_replay() -> anyhow::Result<()> {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("pedigree/family0.csv")
        .set_output_dir("heredity-test-output")
        .overwrite()
        .build();

    let yaml = runner.cli()?.serialize()?.expect("Arguments should be written within the output directory");
    let replay = parser::Cli::try_parse_from(["heredity-rs", "from-yaml", yaml.to_str().expect("Invalid UTF-8")])?;
    heredity_rs::run(replay)?;

    let (_, rows) = read_probs(&runner.output_probs().expect("Missing output directory"));
    assert_eq!(rows[0][0], "Harry");
    Ok(())
}
