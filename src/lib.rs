//! font-config-info - desktop font rendering configuration report
//!
//! Prints what GTK, GSettings, the X server, the XSETTINGS manager and
//! Fontconfig each believe the font rendering settings are:
//! - GTK settings and default widget fonts
//! - GNOME interface settings
//! - X11 screen geometry and Xft resources
//! - Fontconfig's match for a font description

pub mod cli;

use std::fmt;
use std::io::Write;

use chrono::{DateTime, TimeZone};
use fontinfo_core::{Backend, Report, ReportConfig, ReportResult};

// Re-export main types for convenience
pub use cli::Args;
pub use fontinfo_core::run_all;

/// First line of the report, in `ctime` format.
pub fn running_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("Running at {}", now.format("%a %b %e %H:%M:%S %Y"))
}

/// Run every reporter and prefix the result with `preamble`.
pub fn generate(backend: &dyn Backend, config: &ReportConfig, preamble: String) -> ReportResult<Report> {
    Ok(run_all(backend, config)?.with_preamble(preamble))
}

pub fn write_report(out: &mut impl Write, report: &Report) -> ReportResult<()> {
    write!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_running_at_matches_ctime() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
        assert_eq!(running_at(&now), "Running at Tue Mar  5 09:07:03 2024");
    }

    #[test]
    fn test_running_at_two_digit_day() {
        let now = Utc.with_ymd_and_hms(2023, 11, 21, 23, 59, 0).unwrap();
        assert_eq!(running_at(&now), "Running at Tue Nov 21 23:59:00 2023");
    }
}
