use crate::constants::{MM_PER_INCH, PANGO_SCALE, POINTS_PER_INCH};
use crate::error::{HelperUnavailable, ReportResult};
use crate::lookup::PropertySource;

/// Access to every subsystem the report reads from
pub trait Backend {
    fn toolkit(&self) -> &dyn Toolkit;
    fn desktop(&self) -> &dyn DesktopSettings;
    fn display(&self) -> &dyn DisplayServer;
    fn xsettings(&self) -> &dyn XSettingsHelper;
    fn fonts(&self) -> &dyn FontMatcher;
}

/// GUI toolkit settings and default widget styles
pub trait Toolkit {
    /// The process-wide settings object.
    fn settings(&self) -> &dyn PropertySource;
    /// Font descriptions resolved for a few freshly created widgets.
    fn widget_fonts(&self) -> Vec<WidgetFont>;
    /// Font description of a default label.
    fn default_font(&self) -> Option<FontDescription>;
    /// Parse a user-supplied font description string.
    fn parse_font(&self, description: &str) -> FontDescription;
}

/// Desktop key/value settings store
pub trait DesktopSettings {
    /// Open a schema; `None` when it is not installed.
    fn open(&self, schema: &str) -> Option<Box<dyn PropertySource + '_>>;
}

/// X11 display server
pub trait DisplayServer {
    fn geometry(&self) -> ScreenGeometry;
    /// Parsed resource manager string; `None` when the server has none.
    fn resources(&self) -> Option<Box<dyn PropertySource + '_>>;
}

/// External program dumping the XSETTINGS manager's values
pub trait XSettingsHelper {
    fn run(&self) -> Result<Vec<(String, String)>, HelperUnavailable>;
}

/// Font matching library
pub trait FontMatcher {
    /// Substitute defaults into `query` and return the best match.
    fn resolve(&self, query: &FontQuery) -> ReportResult<Box<dyn PropertySource + '_>>;
}

// Data structures

/// Resolved font of one widget type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetFont {
    pub widget: String,
    pub description: Option<String>,
}

/// The parts of a Pango font description the font query needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDescription {
    /// Normalized string form.
    pub text: String,
    pub family: Option<String>,
    /// Size in Pango units; zero when unset.
    pub size: i32,
    pub size_is_absolute: bool,
}

impl FontDescription {
    pub fn requested_size(&self) -> Option<RequestedSize> {
        if self.size == 0 {
            None
        } else if self.size_is_absolute {
            Some(RequestedSize::Pixels(f64::from(self.size) / f64::from(PANGO_SCALE)))
        } else {
            Some(RequestedSize::Points(self.size / PANGO_SCALE))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestedSize {
    Points(i32),
    Pixels(f64),
}

impl RequestedSize {
    /// Pixel size at `dpi`.
    pub fn to_pixels(self, dpi: f64) -> f64 {
        match self {
            RequestedSize::Points(points) => f64::from(points) * (dpi / POINTS_PER_INCH),
            RequestedSize::Pixels(pixels) => pixels,
        }
    }
}

/// Constraints for a font match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontQuery {
    pub family: Option<String>,
    pub weight: Option<i32>,
    pub slant: Option<i32>,
    pub size: Option<RequestedSize>,
}

/// Size of the default screen in pixels and millimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width_px: i32,
    pub height_px: i32,
    pub width_mm: i32,
    pub height_mm: i32,
}

impl ScreenGeometry {
    pub fn dpi_x(&self) -> f64 {
        dpi(self.width_px, self.width_mm)
    }

    pub fn dpi_y(&self) -> f64 {
        dpi(self.height_px, self.height_mm)
    }
}

// A zero millimetre dimension yields an infinite (or NaN) DPI.
fn dpi(pixels: i32, millimetres: i32) -> f64 {
    f64::from(pixels) * MM_PER_INCH / f64::from(millimetres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_from_geometry() {
        let geometry = ScreenGeometry {
            width_px: 1920,
            height_px: 1080,
            width_mm: 480,
            height_mm: 270,
        };
        assert!((geometry.dpi_x() - 101.6).abs() < 0.01);
        assert!((geometry.dpi_y() - 101.6).abs() < 0.01);
    }

    #[test]
    fn test_dpi_zero_millimetres_does_not_panic() {
        let geometry = ScreenGeometry {
            width_px: 1024,
            height_px: 0,
            width_mm: 0,
            height_mm: 0,
        };
        assert!(geometry.dpi_x().is_infinite());
        assert!(geometry.dpi_y().is_nan());
    }

    #[test]
    fn test_requested_size_points() {
        let desc = FontDescription {
            text: "Sans 12".into(),
            family: Some("Sans".into()),
            size: 12 * PANGO_SCALE,
            size_is_absolute: false,
        };
        let size = desc.requested_size().unwrap();
        assert_eq!(size, RequestedSize::Points(12));
        assert!((size.to_pixels(96.0) - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_requested_size_pixels() {
        let desc = FontDescription {
            text: "Sans 13px".into(),
            family: Some("Sans".into()),
            size: 13 * PANGO_SCALE + PANGO_SCALE / 2,
            size_is_absolute: true,
        };
        assert_eq!(desc.requested_size(), Some(RequestedSize::Pixels(13.5)));
    }

    #[test]
    fn test_requested_size_unset() {
        assert_eq!(FontDescription::default().requested_size(), None);
    }

    #[test]
    fn test_fractional_points_truncate() {
        let desc = FontDescription {
            size: 10 * PANGO_SCALE + 512,
            ..Default::default()
        };
        assert_eq!(desc.requested_size(), Some(RequestedSize::Points(10)));
    }
}
