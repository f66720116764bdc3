//! # Batch Validation Report
//!
//! Ingestion and assembly do not log into global state only; every check they
//! perform is handed to a [`ReportSink`] passed in at construction time. The
//! stock sink is [`ValidationReport`], which renders the checks for the CLI.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Validation check result status
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }
}

/// Individual validation check result
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationCheck {
    /// Name of the validation check
    pub name: String,
    /// Result status of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    /// A passing check
    pub fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    /// A check that passed but deserves attention
    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    /// A failed check
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Row counts of one ingested input sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTally {
    /// Sheet title
    pub sheet: String,
    /// Data rows kept for computation
    pub kept: usize,
    /// Blank or placeholder rows skipped
    pub skipped: usize,
    /// Entries of the sheet's procedure block
    pub procedure_entries: usize,
}

impl fmt::Display for SheetTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tab: {} rows kept, {} skipped, {} procedure entries",
            self.sheet, self.kept, self.skipped, self.procedure_entries
        )
    }
}

/// Receiver for the checks performed while ingesting and assembling a batch.
pub trait ReportSink {
    /// Record one check result
    fn record(&mut self, check: ValidationCheck);

    /// Record the row counts of an input sheet that was read without defects
    fn record_sheet(&mut self, tally: SheetTally) {
        self.record(ValidationCheck::ok(tally.to_string()));
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn record(&mut self, check: ValidationCheck) {
        (**self).record(check);
    }

    fn record_sheet(&mut self, tally: SheetTally) {
        (**self).record_sheet(tally);
    }
}

/// Sink that forwards checks to the `log` facade and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn record(&mut self, check: ValidationCheck) {
        match &check.status {
            CheckStatus::Ok => log::debug!("{}", check.name),
            CheckStatus::Warning(msg) => log::warn!("{}: {}", check.name, msg),
            CheckStatus::Failed(msg) => log::error!("{}: {}", check.name, msg),
        }
    }
}

/// Complete validation report for one batch
#[derive(Debug)]
pub struct ValidationReport {
    /// List of individual validation check results
    pub checks: Vec<ValidationCheck>,
    /// Row counts of every input sheet read so far
    pub sheets: Vec<SheetTally>,
    /// Batch the report describes (directory or batch id)
    pub subject: String,
}

impl ValidationReport {
    /// Create a new validation report for the given batch
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            sheets: Vec::new(),
            subject: subject.into(),
        }
    }

    /// Add a validation check result to the report
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Check if any validation checks failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Check if any validation checks produced warnings
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_warning())
    }

    /// Count the number of successful checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Count the number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    /// Count the number of failures
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    /// Data rows kept across all input sheets
    pub fn rows_kept(&self) -> usize {
        self.sheets.iter().map(|t| t.kept).sum()
    }

    /// Rows skipped across all input sheets
    pub fn rows_skipped(&self) -> usize {
        self.sheets.iter().map(|t| t.skipped).sum()
    }

    fn rows_line(&self) -> String {
        format!(
            "{} rows kept, {} skipped across {} input sheets",
            self.rows_kept(),
            self.rows_skipped(),
            self.sheets.len()
        )
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Batch Validation Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=======================").cyan()));
            output.push_str(&format!("{}: {}\n\n", style("Batch").bold(), self.subject));

            for check in &self.checks {
                let (symbol, color_fn): (_, fn(&str) -> console::StyledObject<&str>) = match &check.status {
                    CheckStatus::Ok => (OK, |s| style(s).green()),
                    CheckStatus::Warning(_) => (WARN, |s| style(s).yellow()),
                    CheckStatus::Failed(_) => (FAIL, |s| style(s).red()),
                };

                output.push_str(&format!("[{}] {}", symbol, color_fn(&check.name)));

                match &check.status {
                    CheckStatus::Ok => output.push('\n'),
                    CheckStatus::Warning(msg) => {
                        output.push_str(&format!(" - {}: {}\n", style("WARNING").yellow().bold(), msg));
                    }
                    CheckStatus::Failed(msg) => {
                        output.push_str(&format!(" - {}: {}\n", style("FAILED").red().bold(), msg));
                    }
                }
            }

            if !self.sheets.is_empty() {
                output.push('\n');
                output.push_str(&format!("{}\n", style("Input rows").bold()));
                for tally in &self.sheets {
                    output.push_str(&format!(
                        "  {:<22} {:>4} kept {:>4} skipped\n",
                        tally.sheet,
                        style(tally.kept).green(),
                        style(tally.skipped).dim()
                    ));
                }
                output.push_str(&format!("  {}\n", self.rows_line()));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} passed, {} warnings, {} failed\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));

            output.push('\n');
            if self.has_failures() {
                output.push_str(&format!("{}\n", style("Validation FAILED").red().bold()));
            } else if self.has_warnings() {
                output.push_str(&format!("{}\n", style("Validation PASSED with warnings").yellow().bold()));
            } else {
                output.push_str(&format!("{}\n", style("Validation PASSED").green().bold()));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl ReportSink for ValidationReport {
    fn record(&mut self, check: ValidationCheck) {
        LogSink.record(check.clone());
        self.add_check(check);
    }

    fn record_sheet(&mut self, tally: SheetTally) {
        self.record(ValidationCheck::ok(tally.to_string()));
        self.sheets.push(tally);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Validation Report")?;
        writeln!(f, "=======================")?;
        writeln!(f, "Batch: {}", self.subject)?;
        writeln!(f)?;

        for check in &self.checks {
            let symbol = match &check.status {
                CheckStatus::Ok => "✓",
                CheckStatus::Warning(_) => "⚠",
                CheckStatus::Failed(_) => "✗",
            };

            write!(f, "[{}] {}", symbol, check.name)?;

            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {}", msg)?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {}", msg)?,
            }
        }

        if !self.sheets.is_empty() {
            writeln!(f)?;
            writeln!(f, "Input rows")?;
            for tally in &self.sheets {
                writeln!(
                    f,
                    "  {:<22} {:>4} kept {:>4} skipped",
                    tally.sheet, tally.kept, tally.skipped
                )?;
            }
            writeln!(f, "  {}", self.rows_line())?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;

        if self.has_failures() {
            writeln!(f)?;
            writeln!(f, "Validation FAILED")?;
        } else if self.has_warnings() {
            writeln!(f)?;
            writeln!(f, "Validation PASSED with warnings")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Validation PASSED")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_report_display() {
        let mut report = ValidationReport::new("batch-42");
        report.add_check(ValidationCheck::ok("Test check 1"));
        report.add_check(ValidationCheck::warning("Test check 2", "This is a warning"));
        report.add_check(ValidationCheck::failed("Test check 3", "This failed"));

        let output = format!("{}", report);
        assert!(output.contains("✓"));
        assert!(output.contains("⚠"));
        assert!(output.contains("✗"));
        assert!(output.contains("1 passed, 1 warnings, 1 failed"));
        assert!(output.contains("Validation FAILED"));
    }

    #[test]
    fn test_report_tallies_input_rows() {
        let mut report = ValidationReport::new("batch-42");
        let tally = |sheet: &str, kept, skipped| SheetTally {
            sheet: sheet.to_string(),
            kept,
            skipped,
            procedure_entries: 0,
        };
        report.record_sheet(tally("Monomers", 2, 1));
        report.record_sheet(tally("Catalysts", 1, 0));

        assert_eq!(report.rows_kept(), 3);
        assert_eq!(report.rows_skipped(), 1);
        assert_eq!(report.success_count(), 2);

        let output = format!("{}", report);
        assert!(output.contains("Input rows"));
        assert!(output.contains("Monomers"));
        assert!(output.contains("3 rows kept, 1 skipped across 2 input sheets"));
        assert!(output.contains("Validation PASSED"));
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn push_two(mut sink: impl ReportSink) {
            sink.record(ValidationCheck::ok("first"));
            sink.record(ValidationCheck::warning("second", "careful"));
        }

        let mut report = ValidationReport::new("batch");
        push_two(&mut report);

        assert_eq!(report.checks.len(), 2);
        assert!(report.has_warnings());
        assert!(!report.has_failures());
    }
}
