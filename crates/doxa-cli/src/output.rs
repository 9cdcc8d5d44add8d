//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use doxa_engine::VerificationReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a verification report.
    pub fn format_report(&self, report: &VerificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Quiet => Ok(self.format_quiet(report)),
        }
    }

    /// Full text report: findings, analysis notes, statement table, summary.
    fn format_text(&self, report: &VerificationReport) -> String {
        let mut out = String::new();

        if report.passed() {
            out.push_str(&self.success("All checks passed."));
        } else {
            out.push_str(&self.colorize(
                &format!("{} issues found:", report.violations.len()),
                "red",
            ));
            out.push('\n');
            for error in report.error_strings() {
                out.push_str(&format!("\n  {}", error));
            }
        }

        if !report.crux_notes.is_empty() {
            out.push_str("\n\nCrux analysis:");
            for note in &report.crux_notes {
                out.push_str(&format!("\n  {}", note));
            }
        }

        if !report.pcs_notes.is_empty() {
            out.push_str("\n\nPCS inference strength:");
            for line in &report.pcs_notes {
                out.push_str(&format!("\n{}", line));
            }
        }

        if !report.bottom_lines.is_empty() {
            out.push_str("\n\nBottom line:");
            for line in &report.bottom_lines {
                out.push_str(&format!("\n{}", line));
            }
        }

        if !report.statements.as_map().is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.statement_table(report));
        }

        out.push_str(&format!("\n\nSummary: {}", report.summary()));
        out
    }

    /// Format the statement map as a table.
    fn statement_table(&self, report: &VerificationReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Statement", "Credence", "Tag"]);

        for (title, statement) in report.statements.as_map() {
            let credence = statement
                .credence
                .map(|c| format!("{:.4}", c))
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                title.as_str(),
                credence.as_str(),
                statement.tag.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format the report as JSON.
    fn format_json(&self, report: &VerificationReport) -> Result<String> {
        let bottom_line: Vec<serde_json::Value> = report
            .targets
            .iter()
            .map(|(title, target)| {
                serde_json::json!({
                    "title": title,
                    "implied": target.implied,
                    "log_odds": target.log_odds,
                    "via_entail": target.via_entail,
                    "via_contrary": target.via_contrary,
                })
            })
            .collect();

        let json = serde_json::json!({
            "passed": report.passed(),
            "errors": report.error_strings(),
            "crux_notes": report.crux_notes,
            "pcs_notes": report.pcs_notes,
            "bottom_line": bottom_line,
            "summary": report.summary(),
        });
        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Quiet mode: error strings only.
    fn format_quiet(&self, report: &VerificationReport) -> String {
        report.error_strings().join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}
