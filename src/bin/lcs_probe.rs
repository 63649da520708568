use std::env;
use std::io;
use std::path::PathBuf;

use lcs_lab::fixtures::{self, Fixture};
use lcs_lab::measure::{format_memory, format_time};
use lcs_lab::report::{export_csv_files, OutputFormat};
use lcs_lab::{HarnessBuilder, RunRecord, RunStatus};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let result = match options.pair.clone() {
        Some((x, y)) => run_single(&options, x.as_bytes(), y.as_bytes()),
        None => run_comparison(&options),
    };

    if let Err(err) = result {
        eprintln!("lcs_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    exhaustive_limit: usize,
    out_dir: Option<PathBuf>,
    show_table: bool,
    pair: Option<(String, String)>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut exhaustive_limit = 20usize;
        let mut out_dir = None;
        let mut show_table = false;
        let mut positionals: Vec<String> = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--exhaustive-limit=") {
                exhaustive_limit = parse_limit(value)?;
            } else if arg == "--exhaustive-limit" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --exhaustive-limit".to_string())?
                    .into();
                exhaustive_limit = parse_limit(&value)?;
            } else if let Some(value) = arg.strip_prefix("--out-dir=") {
                out_dir = Some(PathBuf::from(value));
            } else if arg == "--out-dir" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --out-dir".to_string())?
                    .into();
                out_dir = Some(PathBuf::from(value));
            } else if arg == "--show-table" {
                show_table = true;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positionals.push(arg);
            }
        }

        let pair = match positionals.len() {
            0 => None,
            2 => Some((positionals[0].clone(), positionals[1].clone())),
            n => return Err(format!("expected zero or two sequences, got {n}")),
        };

        Ok(Self {
            format,
            exhaustive_limit,
            out_dir,
            show_table,
            pair,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin lcs_probe [-- <options>] [X Y]

Runs four LCS solvers (exhaustive, backtracking, standard DP, rolling DP)
over the built-in fixture set, or over the single pair (X, Y) when two
positional sequences are given.

Options:
  --format <csv|table|json>     Structured output format (default: csv)
  --exhaustive-limit <N>        Largest |X| the exhaustive solver is still run on (default: 20)
  --out-dir <DIR>               Write results_comparison.csv plus per-algorithm CSVs to DIR
  --show-table                  Print the DP table in single-pair mode
  -h, --help                    Print this help message

Examples:
  cargo run --bin lcs_probe
  cargo run --bin lcs_probe -- --format table
  cargo run --bin lcs_probe -- --out-dir results
  cargo run --bin lcs_probe -- ABCBDAB BDCABA --show-table
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "exhaustive limit must be a non-negative integer".to_string())
}

fn run_comparison(options: &Options) -> io::Result<()> {
    let fixture_set = fixtures::all();

    eprintln!("{}", "=".repeat(70));
    eprintln!("LCS Solver Comparison");
    eprintln!("{}", "=".repeat(70));
    eprintln!();
    eprintln!("Cases: {} fixtures, 4 solvers each.", fixture_set.len());
    eprintln!(
        "The exhaustive solver is skipped when |X| > {}.",
        options.exhaustive_limit
    );
    eprintln!();

    let mut harness = HarnessBuilder::new()
        .with_exhaustive_limit(options.exhaustive_limit)
        .build();

    let mut records = Vec::new();
    for (idx, fixture) in fixture_set.iter().enumerate() {
        eprintln!(
            "[{}/{}] {} (|X|={}, |Y|={}): {}",
            idx + 1,
            fixture_set.len(),
            fixture.name,
            fixture.x.len(),
            fixture.y.len(),
            fixture.description
        );
        let case_records = harness.run_case(fixture.name, fixture.x, fixture.y);
        for record in &case_records {
            eprintln!("      {}", progress_line(fixture, record));
        }
        records.extend(case_records);
    }

    print_summary(&records, &fixture_set);

    match &options.out_dir {
        Some(dir) => {
            let written = export_csv_files(dir, &records)?;
            for path in written {
                eprintln!("wrote {}", path.display());
            }
            Ok(())
        }
        None => options.format.write(&records, &mut io::stdout().lock()),
    }
}

fn progress_line(fixture: &Fixture, record: &RunRecord) -> String {
    match &record.status {
        RunStatus::Success => {
            let length = record.length.unwrap_or(0);
            let icon = match fixture.expected_length {
                Some(expected) if expected != length => "✗",
                Some(_) => "✓",
                None => "○",
            };
            format!(
                "{} {:<12} length={:<3} time={:<10} mem={}",
                icon,
                record.algorithm,
                length,
                format_time(record.wall_s),
                format_memory(record.rss_delta_kib)
            )
        }
        RunStatus::Skipped => format!("○ {:<12} skipped (input too large)", record.algorithm),
        RunStatus::Error(msg) => format!("✗ {:<12} error: {msg}", record.algorithm),
    }
}

fn print_summary(records: &[RunRecord], fixture_set: &[Fixture]) {
    let mut successes = 0usize;
    let mut skipped = 0usize;
    let mut errors = 0usize;
    let mut wrong = 0usize;

    for record in records {
        match &record.status {
            RunStatus::Success => {
                successes += 1;
                let expected = fixture_set
                    .iter()
                    .find(|f| f.name == record.test)
                    .and_then(|f| f.expected_length);
                if let (Some(expected), Some(got)) = (expected, record.length) {
                    if expected != got {
                        wrong += 1;
                    }
                }
            }
            RunStatus::Skipped => skipped += 1,
            RunStatus::Error(_) => errors += 1,
        }
    }

    eprintln!();
    eprintln!("{}", "=".repeat(70));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(70));
    eprintln!("  Runs: {}", records.len());
    eprintln!("  ✓ Succeeded: {successes}");
    eprintln!("  ○ Skipped:   {skipped}");
    eprintln!("  ✗ Errored:   {errors}");
    if wrong > 0 {
        eprintln!("  ✗ Wrong lengths against expectations: {wrong}");
    } else {
        eprintln!("  All successful runs matched the recorded expectations.");
    }
    eprintln!("{}", "=".repeat(70));
    eprintln!();
}

fn run_single(options: &Options, x: &[u8], y: &[u8]) -> io::Result<()> {
    eprintln!("Single-pair mode");
    eprintln!("X = {:?} (|X|={})", String::from_utf8_lossy(x), x.len());
    eprintln!("Y = {:?} (|Y|={})", String::from_utf8_lossy(y), y.len());
    eprintln!("{}", "=".repeat(70));

    let mut harness = HarnessBuilder::new()
        .with_exhaustive_limit(options.exhaustive_limit)
        .build();
    let records = harness.run_case("single", x, y);

    for record in &records {
        match &record.status {
            RunStatus::Success => {
                let mut line = format!(
                    "✓ {:<12} length={:<3} time={:<10} mem={}",
                    record.algorithm,
                    record.length.unwrap_or(0),
                    format_time(record.wall_s),
                    format_memory(record.rss_delta_kib)
                );
                if let Some(witness) = &record.witness {
                    line.push_str(&format!(
                        " witness={:?}",
                        String::from_utf8_lossy(witness)
                    ));
                }
                eprintln!("{line}");
            }
            RunStatus::Skipped => {
                eprintln!("○ {:<12} skipped (input too large)", record.algorithm)
            }
            RunStatus::Error(msg) => eprintln!("✗ {:<12} error: {msg}", record.algorithm),
        }
    }

    if options.show_table {
        let table = lcs_lab::DpTable::build(x, y);
        eprintln!();
        eprintln!("DP table ({} x {}):", table.rows(), table.cols());
        eprintln!("{}", table.render(x, y));
    }

    options.format.write(&records, &mut io::stdout().lock())
}
