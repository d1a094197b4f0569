//! Desktop backend combining all subsystems

use fontinfo_core::{
    Backend, DesktopSettings, DisplayServer, DumpXSettings, FontMatcher, ReportConfig,
    ReportResult, Toolkit, XSettingsHelper,
};

use crate::display::XDisplay;
use crate::fontconfig::FontconfigMatcher;
use crate::gsettings::GioDesktop;
use crate::toolkit::Gtk4Toolkit;

/// Live GTK4 / X11 / Fontconfig session
pub struct Gtk4Backend {
    toolkit: Gtk4Toolkit,
    desktop: GioDesktop,
    display: XDisplay,
    xsettings: DumpXSettings,
    fonts: FontconfigMatcher,
}

impl Gtk4Backend {
    /// Initialize GTK and connect to the X server and Fontconfig.
    ///
    /// Fails when any of them is unavailable; there is no partial report.
    pub fn new(config: &ReportConfig) -> ReportResult<Self> {
        let toolkit = Gtk4Toolkit::new()?;
        let display = XDisplay::open()?;
        let fonts = FontconfigMatcher::new()?;
        let xsettings = DumpXSettings::new(&config.helper_program);
        tracing::debug!("Backend ready, XSETTINGS helper {}", xsettings.program());

        Ok(Gtk4Backend {
            toolkit,
            desktop: GioDesktop::new(),
            display,
            xsettings,
            fonts,
        })
    }
}

impl Backend for Gtk4Backend {
    fn toolkit(&self) -> &dyn Toolkit {
        &self.toolkit
    }

    fn desktop(&self) -> &dyn DesktopSettings {
        &self.desktop
    }

    fn display(&self) -> &dyn DisplayServer {
        &self.display
    }

    fn xsettings(&self) -> &dyn XSettingsHelper {
        &self.xsettings
    }

    fn fonts(&self) -> &dyn FontMatcher {
        &self.fonts
    }
}
