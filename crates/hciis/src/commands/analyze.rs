//! Analyze command: score a document on the five metrics.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use hciis_core::analysis::{DocumentReport, Engine, MetricReport};
use hciis_core::config::Config;
use hciis_core::stats::display_decimal;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Metrics to run (comma-separated). Omit for all metrics.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Run the analyzers concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Fail when cognitive load is above this (0–100).
    #[arg(long)]
    pub max_cognitive_load: Option<f64>,

    /// Fail when the manipulation score is above this (0–100).
    #[arg(long)]
    pub max_manipulation: Option<f64>,

    /// Fail when ambiguity is above this (0–1).
    #[arg(long)]
    pub max_ambiguity: Option<f64>,

    /// Fail when information quality is below this (0–100).
    #[arg(long)]
    pub min_quality: Option<f64>,
}

/// Thresholds that turn a metric into a pass/fail result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gates {
    /// Upper bound on cognitive load.
    pub max_cognitive_load: Option<f64>,
    /// Upper bound on the manipulation score.
    pub max_manipulation: Option<f64>,
    /// Upper bound on ambiguity.
    pub max_ambiguity: Option<f64>,
    /// Lower bound on information quality.
    pub min_quality: Option<f64>,
}

impl Gates {
    /// Command-line values win over configured ones.
    pub fn resolve(args: &AnalyzeArgs, config: &Config) -> Self {
        Self {
            max_cognitive_load: args.max_cognitive_load.or(config.max_cognitive_load),
            max_manipulation: args.max_manipulation.or(config.max_manipulation),
            max_ambiguity: args.max_ambiguity.or(config.max_ambiguity),
            min_quality: args.min_quality.or(config.min_quality),
        }
    }

    /// Describe every gate the report violates.
    pub fn violations(&self, report: &DocumentReport) -> Vec<String> {
        let mut failures = Vec::new();

        if let (Some(max), Some(r)) = (self.max_cognitive_load, &report.cognitive_load)
            && r.load > max
        {
            failures.push(format!(
                "cognitive load {} is above maximum {}",
                display_decimal(r.load),
                display_decimal(max)
            ));
        }
        if let (Some(max), Some(r)) = (self.max_manipulation, &report.manipulation)
            && r.score > max
        {
            failures.push(format!(
                "manipulation score {} is above maximum {}",
                display_decimal(r.score),
                display_decimal(max)
            ));
        }
        if let (Some(max), Some(r)) = (self.max_ambiguity, &report.decision_risk)
            && r.ambiguity > max
        {
            failures.push(format!(
                "ambiguity {} is above maximum {}",
                display_decimal(r.ambiguity),
                display_decimal(max)
            ));
        }
        if let (Some(min), Some(r)) = (self.min_quality, &report.information_quality)
            && r.quality < min
        {
            failures.push(format!(
                "information quality {} is below minimum {}",
                display_decimal(r.quality),
                display_decimal(min)
            ));
        }

        failures
    }
}

/// Score a document and enforce configured gates.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, parallel = args.parallel, "executing analyze command");

    let content = super::load_document(&args.file, max_input_bytes)?;
    let checks = args.checks.as_ref().or(config.checks.as_ref());
    let gates = Gates::resolve(&args, config);

    let engine = Engine::new().context("failed to initialize analyzers")?;
    let report = if args.parallel {
        engine.analyze_document_parallel(&content, checks.map(Vec::as_slice))
    } else {
        engine.analyze_document(&content, checks.map(Vec::as_slice))
    }
    .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    let failures = gates.violations(&report);
    if !failures.is_empty() {
        bail!("{}: {}", args.file, failures.join("; "));
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &DocumentReport) {
    println!("{}", file.bold());
    for section in report.sections() {
        print_section(section);
    }
}

fn print_section(section: &dyn MetricReport) {
    println!("\n  {} {}", format!("{}:", section.title()).cyan(), section.headline());
    println!("    {}", section.explanation());
    let breakdown = section.breakdown();
    if !breakdown.is_empty() {
        let parts: Vec<String> = breakdown
            .iter()
            .map(|(name, value)| format!("{name} {}", display_number(*value)))
            .collect();
        println!("    {}", parts.join(", ").dimmed());
    }
}

/// Counts print without a decimal point; measurements keep theirs.
fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() >= 1.0 {
        format!("{value:.0}")
    } else {
        display_decimal(value)
    }
}
