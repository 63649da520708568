use std::collections::HashMap;

use lcs_lab::fixtures;
use lcs_lab::report::{export_csv_files, write_csv};
use lcs_lab::{HarnessBuilder, RunStatus};

#[test]
fn fixture_sweep_matches_expectations() {
    let fixture_set = fixtures::all();
    let mut harness = HarnessBuilder::new().build();
    let records = harness.run_fixtures(&fixture_set);

    assert_eq!(records.len(), fixture_set.len() * 4);

    for fixture in &fixture_set {
        let case: Vec<_> = records.iter().filter(|r| r.test == fixture.name).collect();
        assert_eq!(case.len(), 4, "{}: wrong record count", fixture.name);

        for record in &case {
            match &record.status {
                RunStatus::Success => {
                    let length = record.length.unwrap();
                    if let Some(expected) = fixture.expected_length {
                        assert_eq!(
                            length, expected,
                            "{}/{}: wrong length",
                            fixture.name, record.algorithm
                        );
                    }
                    if let Some(witness) = &record.witness {
                        if !fixture.expected_witnesses.is_empty() {
                            assert!(
                                fixture.expected_witnesses.contains(&witness.as_slice()),
                                "{}/{}: witness {:?} not in the acceptable set",
                                fixture.name,
                                record.algorithm,
                                String::from_utf8_lossy(witness)
                            );
                        }
                    }
                }
                RunStatus::Skipped => {
                    // Only the exhaustive solver may be skipped, and only
                    // above the configured threshold.
                    assert_eq!(record.algorithm, "exhaustive");
                    assert!(fixture.x.len() > harness.config().exhaustive_limit);
                }
                RunStatus::Error(msg) => {
                    panic!("{}/{}: unexpected error {msg}", fixture.name, record.algorithm)
                }
            }
        }

        // Cross-algorithm consistency: every solver that ran reports the
        // same length.
        let lengths: Vec<u32> = case.iter().filter_map(|r| r.length).collect();
        assert!(
            lengths.windows(2).all(|w| w[0] == w[1]),
            "{}: solvers disagree: {lengths:?}",
            fixture.name
        );
    }

    // The large fixture is the one that trips the guard.
    let skipped: Vec<_> = records
        .iter()
        .filter(|r| r.status == RunStatus::Skipped)
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].test, "large");
}

#[test]
fn csv_report_covers_every_run() {
    let fixture_set = fixtures::all();
    let mut harness = HarnessBuilder::new().build();
    let records = harness.run_fixtures(&fixture_set);

    let mut buf = Vec::new();
    write_csv(&records, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), records.len() + 1);
    assert!(text.contains("\"SKIPPED\""));
}

#[test]
fn per_algorithm_export_writes_one_file_per_solver() {
    let mut harness = HarnessBuilder::new().build();
    let records = harness.run_fixtures(fixtures::COMPARISON);

    let dir = std::env::temp_dir().join(format!("lcs_lab_export_{}", std::process::id()));
    let written = export_csv_files(&dir, &records).unwrap();

    // results_comparison.csv + one file per algorithm.
    assert_eq!(written.len(), 5);
    assert!(written[0].ends_with("results_comparison.csv"));
    for path in &written {
        assert!(path.is_file(), "missing {}", path.display());
    }

    let comparison = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(comparison.lines().count(), records.len() + 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn shrinking_the_limit_skips_more_cases() {
    let mut tight = HarnessBuilder::new().with_exhaustive_limit(3).build();
    let tight_skips = tight
        .run_fixtures(fixtures::EDGE_CASES)
        .iter()
        .filter(|r| r.status == RunStatus::Skipped)
        .count();

    let mut loose = HarnessBuilder::new().with_exhaustive_limit(10).build();
    let loose_skips = loose
        .run_fixtures(fixtures::EDGE_CASES)
        .iter()
        .filter(|r| r.status == RunStatus::Skipped)
        .count();

    assert!(tight_skips > loose_skips);
    assert_eq!(loose_skips, 0);
}

#[test]
fn run_case_records_carry_the_case_name() {
    let mut harness = HarnessBuilder::new().build();
    let records = harness.run_case("adhoc", b"XMJYAUZ", b"MZJAWXU");

    let by_algorithm: HashMap<_, _> = records
        .iter()
        .map(|r| (r.algorithm, r.length.unwrap()))
        .collect();
    assert_eq!(by_algorithm.len(), 4);
    assert!(by_algorithm.values().all(|&l| l == 4));
    assert!(records.iter().all(|r| r.test == "adhoc"));
}
