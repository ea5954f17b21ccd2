//! Rendering of results and errors in the selected output format.
//!
//! Rendering returns strings; `main` decides where they are written.

mod color;


pub use color::{Paint, color_allowed};

use crate::backend::Revision;
use crate::commands::Report;
use crate::config::OutputFormat;
use crate::error::{DiffstatError, Result};
use crate::settings::Settings;
use serde::Serialize;
use serde_json::json;

/// Stream an error message belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    total_lines: u64,
    changed_lines: u64,
    percentage: f64,
    branch1: &'a str,
    branch2: &'a str,
}

/// Render a measurement for stdout, newline-terminated.
pub fn render_report(report: &Report, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(render_text(report, Paint::new(settings.color))),
        OutputFormat::Json => render_json(report),
        OutputFormat::Custom => Ok(render_custom(report, &settings.separator)),
    }
}

fn render_text(report: &Report, paint: Paint) -> String {
    let metric = &report.metric;

    if !metric.has_changes() {
        return format!("{}\n", paint.green("No changes between the branches."));
    }

    let counted_in = match &report.counted_in {
        Revision::WorkingTree => "working tree".to_string(),
        Revision::Named(name) => format!("branch {}", name),
    };

    format!(
        "Total lines in {}: {}\nLines changed between {} and {}: {}\nPercentage of change: {}\n",
        counted_in,
        paint.cyan(&metric.total_lines.to_string()),
        report.branch1,
        report.branch2,
        paint.yellow(&metric.changed_lines.to_string()),
        paint.green(&format!("{}%", metric.percentage_display())),
    )
}

fn render_json(report: &Report) -> Result<String> {
    let body = JsonReport {
        total_lines: report.metric.total_lines,
        changed_lines: report.metric.changed_lines,
        percentage: report.metric.percentage_rounded(),
        branch1: &report.branch1,
        branch2: &report.branch2,
    };

    serde_json::to_string(&body)
        .map(|line| format!("{}\n", line))
        .map_err(|e| DiffstatError::UserError(format!("failed to serialize result to JSON: {}", e)))
}

fn render_custom(report: &Report, separator: &str) -> String {
    let fields = [
        report.metric.total_lines.to_string(),
        report.metric.changed_lines.to_string(),
        report.metric.percentage_display(),
        report.branch1.clone(),
        report.branch2.clone(),
    ];
    format!("{}\n", fields.join(separator))
}

/// Render an error in the shape of the active format.
///
/// JSON errors go to stdout so consumers parse a single stream; text and
/// custom errors go to stderr.
pub fn render_error(err: &DiffstatError, format: OutputFormat, paint: Paint) -> (Stream, String) {
    match format {
        OutputFormat::Json => (
            Stream::Stdout,
            format!("{}\n", json!({ "error": err.to_string() })),
        ),
        OutputFormat::Text | OutputFormat::Custom => {
            let message = match err {
                DiffstatError::Usage => err.to_string(),
                _ => format!("Error: {}", err),
            };
            (Stream::Stderr, format!("{}\n", paint.red(&message)))
        }
    }
}
