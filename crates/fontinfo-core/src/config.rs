// src/config.rs
use crate::constants::{DESKTOP_INTERFACE_SCHEMA, FALLBACK_DPI, XSETTINGS_HELPER};

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Pango font description for the Fontconfig query; the toolkit's
    /// default widget font is used when this is `None`.
    pub font_description: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub desktop_schema: String,
    pub helper_program: String,
    /// Resolution used to turn points into pixels when the toolkit does not
    /// report one.
    pub fallback_dpi: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            font_description: None,
            bold: false,
            italic: false,
            desktop_schema: DESKTOP_INTERFACE_SCHEMA.to_string(),
            helper_program: XSETTINGS_HELPER.to_string(),
            fallback_dpi: FALLBACK_DPI,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_description(mut self, description: &str) -> Self {
        self.font_description = Some(description.to_string());
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_desktop_schema(mut self, schema: &str) -> Self {
        self.desktop_schema = schema.to_string();
        self
    }

    pub fn with_helper_program(mut self, program: &str) -> Self {
        self.helper_program = program.to_string();
        self
    }

    pub fn with_fallback_dpi(mut self, dpi: f64) -> Self {
        if dpi > 0.0 {
            self.fallback_dpi = dpi;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.font_description, None);
        assert!(!config.bold);
        assert!(!config.italic);
        assert_eq!(config.desktop_schema, "org.gnome.desktop.interface");
        assert_eq!(config.helper_program, "dump_xsettings");
        assert_eq!(config.fallback_dpi, 96.0);
    }

    #[test]
    fn test_builder_chain() {
        let config = ReportConfig::new()
            .with_font_description("Sans Bold 12")
            .with_bold(true)
            .with_italic(true)
            .with_helper_program("/opt/bin/dump_xsettings");
        assert_eq!(config.font_description.as_deref(), Some("Sans Bold 12"));
        assert!(config.bold);
        assert!(config.italic);
        assert_eq!(config.helper_program, "/opt/bin/dump_xsettings");
    }

    #[test]
    fn test_fallback_dpi_rejects_non_positive() {
        let config = ReportConfig::new().with_fallback_dpi(0.0);
        assert_eq!(config.fallback_dpi, 96.0);
        let config = ReportConfig::new().with_fallback_dpi(120.0);
        assert_eq!(config.fallback_dpi, 120.0);
    }
}
