// src/error.rs
use thiserror::Error;

/// Failures that stop the report.
///
/// A missing setting is never one of these; reporters render absent values
/// as placeholders and carry on.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Toolkit initialization failed: {reason}")]
    ToolkitUnavailable { reason: String },

    #[error("Toolkit has no default settings object")]
    SettingsUnavailable,

    #[error("Cannot open X display {display}")]
    DisplayUnavailable { display: String },

    #[error("Fontconfig library could not be loaded")]
    LibraryUnavailable,

    #[error("Fontconfig could not allocate a pattern")]
    PatternAllocation,

    #[error("Fontconfig returned no match for {query}")]
    FontMatchFailed { query: String },

    #[error("Failed to write report: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Why the XSETTINGS helper produced no data.
#[derive(Error, Debug)]
pub enum HelperUnavailable {
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {status}")]
    ExitStatus { program: String, status: i32 },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },

    #[error("{program} printed no font settings")]
    NoMatchingKeys { program: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_failure_message() {
        assert_eq!(
            ReportError::LibraryUnavailable.to_string(),
            "Fontconfig library could not be loaded"
        );
        assert_ne!(
            ReportError::LibraryUnavailable.to_string(),
            ReportError::PatternAllocation.to_string()
        );
    }

    #[test]
    fn test_empty_dump_message() {
        let err = HelperUnavailable::NoMatchingKeys {
            program: "dump_xsettings".into(),
        };
        assert_eq!(err.to_string(), "dump_xsettings printed no font settings");
    }
}
