//! Report sections, one module per subsystem
//!
//! Reporters do not depend on each other's output; [`run_all`] only fixes
//! the order in which they appear.

pub mod desktop;
pub mod display;
pub mod fontmatch;
pub mod resources;
pub mod toolkit;
pub mod xsettings;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::format::Report;
use crate::traits::Backend;

/// Run every reporter against `backend` in presentation order.
pub fn run_all(backend: &dyn Backend, config: &ReportConfig) -> ReportResult<Report> {
    let mut report = Report::new();
    report.push(toolkit::report_settings(backend.toolkit()));
    report.push(toolkit::report_styles(backend.toolkit()));
    report.push(desktop::report(backend.desktop(), &config.desktop_schema));
    report.push(display::report(backend.display()));
    report.push(resources::report(backend.display()));
    report.push(xsettings::report(backend.xsettings()));
    report.push(fontmatch::report(backend.toolkit(), backend.fonts(), config)?);
    tracing::debug!("Report complete with {} sections", report.sections.len());
    Ok(report)
}
