//! fontinfo core - backend-agnostic font configuration reporters
//!
//! Each reporter reads one subsystem (toolkit settings, desktop settings
//! store, X display, XSETTINGS helper, Fontconfig) through the traits in
//! [`traits`] and returns a formatted [`Section`]. The GTK/X11 backend lives
//! in a separate crate; [`dummy_backend`] scripts every subsystem for tests.

pub mod config;
pub mod constants;
pub mod dummy_backend;
pub mod error;
pub mod format;
pub mod helper;
pub mod lookup;
pub mod rendering;
pub mod reporters;
pub mod traits;

// Re-export main types
pub use config::ReportConfig;
pub use error::{HelperUnavailable, ReportError, ReportResult};
pub use format::{format_line, Report, Section};
pub use helper::DumpXSettings;
pub use lookup::{
    BackendFault, LookupOutcome, LookupResult, MatchResult, PropertySource, TypedValue, ValueKind,
};
pub use reporters::run_all;

// Re-export traits and types
pub use traits::*;
