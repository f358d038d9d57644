//! Batch command - run the heuristic parser over many recognized-text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use recor_core::{HeuristicParser, ReceiptParser, ReceiptRecord};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (recognized-text files)
    #[arg(required = true)]
    input: String,

    /// Output file for the aggregate report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ReportFormat,

    /// Continue on error instead of stopping at the first failed file
    #[arg(long)]
    continue_on_error: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// One JSON document with every record
    Json,
    /// One CSV row per file
    Csv,
}

/// One processed file in the aggregate report.
#[derive(Serialize)]
struct BatchEntry {
    file: String,
    #[serde(flatten)]
    record: ReceiptRecord,
}

/// Aggregate report over the whole run.
#[derive(Serialize)]
struct BatchReport {
    total: usize,
    failed: usize,
    entries: Vec<BatchEntry>,
}

pub async fn run(args: BatchArgs, _config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = HeuristicParser::new();
    let mut entries = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for path in &files {
        match fs::read_to_string(path) {
            Ok(text) => {
                let record = parser.parse(&text);
                debug!(
                    "{}: date={}, total={}, store={}",
                    path.display(),
                    record.date.is_some(),
                    record.total_amount.is_some(),
                    record.store_name.is_some()
                );
                entries.push(BatchEntry {
                    file: path.display().to_string(),
                    record,
                });
            }
            Err(e) => {
                failed += 1;
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), e);
                } else {
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let report = BatchReport {
        total: files.len(),
        failed,
        entries,
    };

    let output = match args.format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Csv => format_report_csv(&report)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.total,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(report.total - report.failed).green(),
        style(report.failed).red()
    );

    Ok(())
}

fn format_report_csv(report: &BatchReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["file", "store_name", "date", "total_amount"])?;
    for entry in &report.entries {
        wtr.write_record([
            entry.file.clone(),
            entry.record.store_name.clone().unwrap_or_default(),
            entry.record.date.clone().unwrap_or_default(),
            entry
                .record
                .total_amount
                .map(|a| a.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
