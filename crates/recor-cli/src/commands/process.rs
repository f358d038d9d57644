//! Process command - extract a record from a single capture.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use recor_core::models::config::RecorConfig;
use recor_core::{
    GeminiClient, HeuristicParser, ImageNormalizer, ReceiptExtractor, ReceiptParser,
    ReceiptRecord, VisionExtractor,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file: a capture image, or a recognized-text file
    #[arg(required = true)]
    input: PathBuf,

    /// Treat the input as recognized OCR text and run only the heuristic parser
    #[arg(long)]
    from_text: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// API key for the vision model (image input only)
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Check the extracted record and report issues
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RecorConfig::from_file(std::path::Path::new(path))?
    } else {
        RecorConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    let record = if args.from_text || extension == "txt" {
        pb.set_message("Parsing recognized text...");
        let text = fs::read_to_string(&args.input)?;
        HeuristicParser::new().parse(&text)
    } else {
        process_image(&args, &config, &pb).await?
    };

    pb.finish_with_message("Done");

    // Check the record if requested
    if args.validate {
        let issues = record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    // Format output
    let output = format_record(&record, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn process_image(
    args: &ProcessArgs,
    config: &RecorConfig,
    pb: &ProgressBar,
) -> anyhow::Result<ReceiptRecord> {
    let api_key = args.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!("--api-key or GEMINI_API_KEY is required for image input")
    })?;

    pb.set_message("Normalizing capture...");

    let client = GeminiClient::with_base_url(
        api_key,
        &config.vision.model,
        config.vision.timeout_secs,
        &config.vision.base_url,
    )?;
    let normalizer = ImageNormalizer::new()
        .with_max_width(config.image.max_width)
        .with_jpeg_quality(config.image.jpeg_quality);
    let extractor = VisionExtractor::new(client).with_normalizer(normalizer);

    pb.set_message("Calling vision model...");
    let record = extractor.extract(&args.input).await?;

    Ok(record)
}

pub fn format_record(record: &ReceiptRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ReceiptRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["store_name", "date", "total_amount"])?;
    wtr.write_record([
        record.store_name.clone().unwrap_or_default(),
        record.date.clone().unwrap_or_default(),
        record
            .total_amount
            .map(|a| a.to_string())
            .unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ReceiptRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Store: {}\n",
        record.store_name.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Date:  {}\n",
        record.date.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Total: {}\n",
        record
            .total_amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));

    output
}
