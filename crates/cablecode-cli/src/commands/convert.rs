//! Convert command - turn a BOQ text file into catalog rows.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use cablecode_core::{BatchReport, CableConverter, LineTransformer, OutputRow, SkippedLine};
use cablecode_core::convert::sections;

use super::{load_config, read_input};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input BOQ text file ("-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Treat every line as fire-section context
    #[arg(long)]
    fire: bool,

    /// Exit non-zero if any line was skipped
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// CSV output
    Csv,
    /// JSON output
    Json,
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let converter = CableConverter::with_config(config);

    let text = read_input(&args.input)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Converting...");

    let report = if args.fire {
        convert_forced_fire(&converter, &text)
    } else {
        converter.convert_batch(&text)
    };

    pb.finish_and_clear();
    info!(
        "Converted {} rows, skipped {} lines",
        report.rows.len(),
        report.skipped.len()
    );

    let output = format_rows(&report.rows, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Wrote {} rows to {}",
            style("✓").green(),
            report.rows.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    report_skipped(&report.skipped);

    if args.strict && !report.skipped.is_empty() {
        anyhow::bail!("{} line(s) could not be parsed", report.skipped.len());
    }

    Ok(())
}

/// Batch fold with the fire context forced on for every item line.
/// Section headers are still dropped.
fn convert_forced_fire(converter: &CableConverter, text: &str) -> BatchReport {
    let mut report = BatchReport::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || sections::is_section_header(line) {
            continue;
        }

        match converter.transform(line, true) {
            Ok(rows) => report.rows.extend(rows),
            Err(err) => report.skipped.push(SkippedLine {
                line: line.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    report
}

fn format_rows(rows: &[OutputRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["Item/Text", "Catalog Code", "Quantity", "Unit"])?;
            for row in rows {
                writer.write_record([
                    row.source_line.as_str(),
                    row.catalog_code.as_str(),
                    row.quantity.as_str(),
                    row.unit.as_str(),
                ])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Table => {
            let code_width = rows
                .iter()
                .map(|r| r.catalog_code.len())
                .max()
                .unwrap_or(12)
                .max(12);
            let qty_width = rows
                .iter()
                .map(|r| r.quantity.len())
                .max()
                .unwrap_or(8)
                .max(8);

            let mut out = String::new();
            out.push_str(&format!(
                "{:<code_width$}  {:>qty_width$}  {:<4}  {}\n",
                "Catalog Code", "Quantity", "Unit", "Item/Text"
            ));
            for row in rows {
                out.push_str(&format!(
                    "{:<code_width$}  {:>qty_width$}  {:<4}  {}\n",
                    row.catalog_code, row.quantity, row.unit, row.source_line
                ));
            }
            Ok(out)
        }
    }
}

fn report_skipped(skipped: &[SkippedLine]) {
    for skip in skipped {
        eprintln!(
            "{} Skipped: {}",
            style("⚠").yellow(),
            style(&skip.line).yellow()
        );
    }
}
