//! Report command: write the paginated plain-text report to a file.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use hciis_core::analysis::Engine;
use hciis_core::config::Config;

use crate::report;

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Where to write the report.
    #[arg(short, long, value_name = "PATH", default_value = "hciis-report.txt")]
    pub output: Utf8PathBuf,

    /// Metrics to include (comma-separated). Omit for all metrics.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    output: &'a str,
    pages: usize,
    bytes: usize,
}

/// Analyze a document and write its report.
#[instrument(name = "cmd_report", skip_all, fields(file = %args.file, output = %args.output))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = %args.output, "executing report command");

    let content = super::load_document(&args.file, max_input_bytes)?;
    let checks = args.checks.as_ref().or(config.checks.as_ref());

    let engine = Engine::new().context("failed to initialize analyzers")?;
    let analysis = engine
        .analyze_document(&content, checks.map(Vec::as_slice))
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let rendered = report::render(&analysis, &config.report);
    write_report(&args.output, &rendered)?;

    let summary = ReportSummary {
        output: args.output.as_str(),
        pages: rendered.matches(report::PAGE_BREAK).count() + 1,
        bytes: rendered.len(),
    };
    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} ({} page{})",
            "Report written to".green(),
            summary.output.bold(),
            summary.pages,
            if summary.pages == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Write `rendered` to `path` through a buffered writer.
///
/// The writer only lives inside this function; any failure drops it and
/// surfaces an error naming the path.
pub fn write_report(path: &Utf8Path, rendered: &str) -> anyhow::Result<()> {
    let file = File::create(path.as_std_path())
        .with_context(|| format!("failed to create report {path}"))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .with_context(|| format!("failed to write report {path}"))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush report {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("out.txt")).unwrap();
        write_report(&path, "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn unwritable_path_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("missing").join("out.txt")).unwrap();
        let err = write_report(&path, "hello\n").unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn command_renders_selected_sections() {
        let dir = tempfile::tempdir().unwrap();
        let input = Utf8PathBuf::try_from(dir.path().join("in.txt")).unwrap();
        let output = Utf8PathBuf::try_from(dir.path().join("report.txt")).unwrap();
        std::fs::write(&input, "We must decide whether to approve the plan.").unwrap();

        let args = ReportArgs {
            file: input,
            output: output.clone(),
            checks: Some(vec!["decision_risk".to_string()]),
        };
        cmd_report(args, true, &Config::default(), None).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with(report::TITLE));
        assert!(written.contains("Decision Risk & Ambiguity"));
        assert!(!written.contains("Information Quality"));
    }
}
