//! X11 screen geometry

use crate::format::Section;
use crate::traits::DisplayServer;

pub const TITLE: &str = "X11 display info";

pub fn report(display: &dyn DisplayServer) -> Section {
    let geometry = display.geometry();
    let mut section = Section::new(TITLE);
    section.push_property(
        "screen pixels",
        format!("{}x{}", geometry.width_px, geometry.height_px),
    );
    section.push_property(
        "screen size",
        format!(
            "{}x{} mm ({:.2}x{:.2} DPI)",
            geometry.width_mm,
            geometry.height_mm,
            geometry.dpi_x(),
            geometry.dpi_y()
        ),
    );
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::DummyDisplay;
    use crate::traits::ScreenGeometry;

    #[test]
    fn test_geometry_lines() {
        let display = DummyDisplay::new(ScreenGeometry {
            width_px: 1920,
            height_px: 1200,
            width_mm: 480,
            height_mm: 300,
        });
        let section = report(&display);
        assert_eq!(section.value_of("screen pixels"), Some("1920x1200"));
        assert_eq!(
            section.value_of("screen size"),
            Some("480x300 mm (101.60x101.60 DPI)")
        );
    }

    #[test]
    fn test_zero_size_screen() {
        let display = DummyDisplay::new(ScreenGeometry {
            width_px: 1024,
            height_px: 768,
            width_mm: 0,
            height_mm: 0,
        });
        let section = report(&display);
        assert_eq!(section.value_of("screen size"), Some("0x0 mm (infxinf DPI)"));
    }
}
