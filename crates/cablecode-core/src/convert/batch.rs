//! Batch conversion: a fold over lines threading the fire-section flag.

use tracing::warn;

use super::engine::{CableConverter, LineTransformer};
use super::sections;
use crate::models::line::{BatchReport, SkippedLine};

impl CableConverter {
    /// Convert a whole pasted BOQ text.
    ///
    /// Blank lines are dropped. Section-header lines set the fire flag for
    /// the lines that follow and never become rows themselves. The flag is
    /// an accumulator local to this fold, not converter state. A line that
    /// fails to parse is skipped, warned about, and recorded in the report;
    /// the batch always continues.
    pub fn convert_batch(&self, text: &str) -> BatchReport {
        let mut report = BatchReport::default();
        let mut fire_section = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if sections::is_section_header(line) {
                fire_section = sections::is_fire_section(line);
                continue;
            }

            match self.transform(line, fire_section) {
                Ok(rows) => report.rows.extend(rows),
                Err(err) => {
                    warn!(line, "skipping unparseable line");
                    report.skipped.push(SkippedLine {
                        line: line.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        report
    }
}
