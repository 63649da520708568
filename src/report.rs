//! Report rendering and CSV export.
//!
//! Consumes [`RunRecord`]s and renders them as CSV rows, an aligned console
//! table, or JSON. All three are written by hand; the record shape is flat
//! and stable enough that a serialization framework would buy nothing.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::harness::RunRecord;

/// Structured output format selected on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    pub fn write(self, records: &[RunRecord], out: &mut impl Write) -> io::Result<()> {
        match self {
            OutputFormat::Csv => write_csv(records, out),
            OutputFormat::Table => write_table(records, out),
            OutputFormat::Json => write_json(records, out),
        }
    }
}

fn length_field(record: &RunRecord) -> String {
    match record.length {
        Some(len) => len.to_string(),
        None => String::new(),
    }
}

/// CSV with one row per (test, algorithm) run. The status field is quoted
/// since error messages may contain commas.
pub fn write_csv(records: &[RunRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "test,algorithm,length,wall_s,rss_delta_kib,status")?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{:.6},{},\"{}\"",
            r.test,
            r.algorithm,
            length_field(r),
            r.wall_s,
            r.rss_delta_kib,
            r.status.label().replace('"', "'")
        )?;
    }
    Ok(())
}

/// Aligned console table.
pub fn write_table(records: &[RunRecord], out: &mut impl Write) -> io::Result<()> {
    let mut col1 = "test".len();
    let mut col2 = "algorithm".len();
    for r in records {
        col1 = col1.max(r.test.len());
        col2 = col2.max(r.algorithm.len());
    }

    writeln!(
        out,
        "{:<col1$}  {:<col2$}  {:>7}  {:>12}  {:>14}  {}",
        "test", "algorithm", "length", "wall_s", "rss_delta_kib", "status",
    )?;
    writeln!(
        out,
        "{:-<col1$}  {:-<col2$}  {:-<7}  {:-<12}  {:-<14}  {:-<12}",
        "", "", "", "", "", "",
    )?;
    for r in records {
        writeln!(
            out,
            "{:<col1$}  {:<col2$}  {:>7}  {:>12.6}  {:>14}  {}",
            r.test,
            r.algorithm,
            length_field(r),
            r.wall_s,
            r.rss_delta_kib,
            r.status.label(),
        )?;
    }
    Ok(())
}

/// JSON array with one object per run.
pub fn write_json(records: &[RunRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[")?;
    for (idx, r) in records.iter().enumerate() {
        let length = match r.length {
            Some(len) => len.to_string(),
            None => "null".to_string(),
        };
        writeln!(
            out,
            "  {{\"test\":\"{}\",\"algorithm\":\"{}\",\"length\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"status\":\"{}\"}}{}",
            r.test,
            r.algorithm,
            length,
            r.wall_s,
            r.rss_delta_kib,
            r.status.label().replace('"', "'"),
            if idx + 1 == records.len() { "" } else { "," }
        )?;
    }
    writeln!(out, "]")?;
    Ok(())
}

/// Write `results_comparison.csv` plus one `results_<algorithm>.csv` per
/// algorithm into `dir`, creating it if needed. Returns the paths written.
pub fn export_csv_files(dir: &Path, records: &[RunRecord]) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let comparison = dir.join("results_comparison.csv");
    let mut file = File::create(&comparison)?;
    write_csv(records, &mut file)?;
    written.push(comparison);

    let mut algorithms: Vec<&'static str> = Vec::new();
    for r in records {
        if !algorithms.contains(&r.algorithm) {
            algorithms.push(r.algorithm);
        }
    }

    for algorithm in algorithms {
        let path = dir.join(format!("results_{algorithm}.csv"));
        let mut file = File::create(&path)?;
        writeln!(file, "test,length,wall_s,rss_delta_kib,status")?;
        for r in records.iter().filter(|r| r.algorithm == algorithm) {
            writeln!(
                file,
                "{},{},{:.6},{},\"{}\"",
                r.test,
                length_field(r),
                r.wall_s,
                r.rss_delta_kib,
                r.status.label().replace('"', "'")
            )?;
        }
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::RunStatus;

    fn sample_records() -> Vec<RunRecord> {
        vec![
            RunRecord {
                test: "small".to_string(),
                algorithm: "dp_standard",
                length: Some(4),
                witness: None,
                wall_s: 0.001,
                rss_delta_kib: 12,
                status: RunStatus::Success,
            },
            RunRecord {
                test: "large".to_string(),
                algorithm: "exhaustive",
                length: None,
                witness: None,
                wall_s: 0.0,
                rss_delta_kib: 0,
                status: RunStatus::Skipped,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let mut buf = Vec::new();
        write_csv(&sample_records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "test,algorithm,length,wall_s,rss_delta_kib,status");
        assert!(lines[1].starts_with("small,dp_standard,4,"));
        assert!(lines[2].contains("\"SKIPPED\""));
    }

    #[test]
    fn skipped_runs_leave_the_length_empty() {
        let mut buf = Vec::new();
        write_csv(&sample_records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(2).unwrap().starts_with("large,exhaustive,,"));
    }

    #[test]
    fn json_is_an_array_with_null_lengths_for_skips() {
        let mut buf = Vec::new();
        write_json(&sample_records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.trim_end().ends_with(']'));
        assert!(text.contains("\"length\":null"));
        assert!(text.contains("\"length\":4"));
    }

    #[test]
    fn table_aligns_and_labels() {
        let mut buf = Vec::new();
        write_table(&sample_records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().next().unwrap().contains("algorithm"));
        assert!(text.contains("SUCCESS"));
        assert!(text.contains("SKIPPED"));
    }

    #[test]
    fn format_parsing_rejects_unknowns() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
