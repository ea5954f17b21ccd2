//! The diffstat command: measure two branches and render the result.


use crate::backend::{Backend, GitBackend, Revision};
use crate::count::{LineTally, count_total_lines};
use crate::diff::{ChangeTally, count_changed_lines};
use crate::error::Result;
use crate::metric::MetricResult;
use crate::output;
use crate::settings::Settings;
use tracing::{debug, info};

/// Everything measured for one pair of branches.
#[derive(Debug, Clone)]
pub struct Report {
    pub branch1: String,
    pub branch2: String,
    /// Where the total line count was taken.
    pub counted_in: Revision,
    pub metric: MetricResult,
    pub lines: LineTally,
    pub changes: ChangeTally,
}

/// Resolve both branches, count total and changed lines, and combine them.
///
/// # Returns
///
/// * `Ok(Report)` - The measurement
/// * `Err(DiffstatError::ReferenceError)` - A branch does not exist
/// * `Err(DiffstatError)` - Enumeration, diff, or parse failure
pub fn measure<B: Backend + ?Sized>(backend: &B, settings: &Settings) -> Result<Report> {
    backend.resolve(&Revision::named(settings.branch1.clone()))?;
    backend.resolve(&Revision::named(settings.branch2.clone()))?;

    let counted_in = settings.total_revision();
    let lines = count_total_lines(backend, &counted_in, &settings.count_options())?;
    for skipped in &lines.skipped {
        debug!(path = %skipped.path.display(), reason = ?skipped.reason, "not counted");
    }

    let changes = count_changed_lines(
        backend,
        &settings.branch1,
        &settings.branch2,
        &settings.change_options(),
    )?;

    let metric = MetricResult::new(lines.total, changes.total);

    Ok(Report {
        branch1: settings.branch1.clone(),
        branch2: settings.branch2.clone(),
        counted_in,
        metric,
        lines,
        changes,
    })
}

/// Measure the configured repository and render the result for stdout.
pub fn cmd_diffstat(settings: &Settings) -> Result<String> {
    let backend = GitBackend::new(&settings.repo_root);
    let report = measure(&backend, settings)?;

    info!(
        total_lines = report.metric.total_lines,
        changed_lines = report.metric.changed_lines,
        files_counted = report.lines.files_counted,
        files_skipped = report.lines.skipped.len(),
        files_exact = report.changes.exact_files,
        files_estimated = report.changes.estimated_files,
        "measured change"
    );

    output::render_report(&report, settings)
}
