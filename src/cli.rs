// src/cli.rs
use clap::Parser;
use fontinfo_core::ReportConfig;

/// Print the font rendering configuration seen by GTK, GSettings, X11 and
/// Fontconfig
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "font-config-info", disable_version_flag = true)]
pub struct Args {
    /// Request bold font from Fontconfig
    #[arg(short = 'b')]
    pub bold: bool,

    /// Specify Pango font description for Fontconfig
    #[arg(short = 'f', value_name = "DESC")]
    pub font: Option<String>,

    /// Request italic font from Fontconfig
    #[arg(short = 'i')]
    pub italic: bool,
}

impl Args {
    pub fn into_config(self) -> ReportConfig {
        let config = ReportConfig::new().with_bold(self.bold).with_italic(self.italic);
        match self.font {
            Some(font) => config.with_font_description(&font),
            None => config,
        }
    }
}

/// Exit status for a rejected command line: 0 for `--help`, 1 for usage
/// errors.
pub fn exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}
