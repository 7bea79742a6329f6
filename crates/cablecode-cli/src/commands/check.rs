//! Check command - dry-run parse report, no rows produced.

use clap::Args;
use console::style;

use cablecode_core::convert::sections;
use cablecode_core::parse_line;

use super::read_input;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Input BOQ text file ("-" for stdin)
    #[arg(required = true)]
    input: String,
}

pub fn run(args: CheckArgs, _config_path: Option<&str>) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    let mut parsed_count = 0usize;
    let mut failed_count = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if sections::is_section_header(line) {
            let fire = sections::is_fire_section(line);
            println!(
                "{} {} {}",
                style("§").cyan(),
                style(line).cyan(),
                if fire { style("(fire section)").red() } else { style("").dim() }
            );
            continue;
        }

        match parse_line(line) {
            Ok(parsed) => {
                parsed_count += 1;
                let earth = parsed
                    .earth_size
                    .map(|e| format!(" earth={e}"))
                    .unwrap_or_default();
                let flags = match (parsed.is_fire_rated, parsed.is_earth_cable) {
                    (true, true) => " [fire, earth-item]",
                    (true, false) => " [fire]",
                    (false, true) => " [earth-item]",
                    (false, false) => "",
                };
                println!(
                    "{} {} -> cores={} size={} length={}{}{}",
                    style("✓").green(),
                    line,
                    parsed.cores,
                    parsed.conductor_size,
                    parsed.length,
                    earth,
                    flags
                );
            }
            Err(_) => {
                failed_count += 1;
                println!("{} {} -> no pattern matched", style("✗").red(), line);
            }
        }
    }

    println!(
        "\n{} parsed, {} failed",
        style(parsed_count).green(),
        if failed_count > 0 {
            style(failed_count).red()
        } else {
            style(failed_count).dim()
        }
    );

    Ok(())
}
