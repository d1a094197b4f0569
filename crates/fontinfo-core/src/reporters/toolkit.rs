//! Toolkit settings and default widget styles

use crate::format::{Placeholders, Property, Render, Section};
use crate::lookup::ValueKind;
use crate::traits::Toolkit;

pub const SETTINGS_TITLE: &str = "GtkSettings";
pub const STYLES_TITLE: &str = "GTK styles";

const SETTINGS: [Property; 6] = [
    Property::new("gtk-font-name", ValueKind::Str, Render::Quoted),
    Property::new("gtk-xft-antialias", ValueKind::Int, Render::Tristate),
    Property::new("gtk-xft-hinting", ValueKind::Int, Render::Tristate),
    Property::new("gtk-xft-hintstyle", ValueKind::Str, Render::Quoted),
    Property::new("gtk-xft-rgba", ValueKind::Str, Render::Quoted),
    Property::new("gtk-xft-dpi", ValueKind::Int, Render::XftDpi),
];

/// Print the font-related properties of the toolkit's settings object.
pub fn report_settings(toolkit: &dyn Toolkit) -> Section {
    let mut section = Section::new(SETTINGS_TITLE);
    section.push_properties(toolkit.settings(), &SETTINGS, Placeholders::Settings);
    section
}

/// Print the resolved font of a few default widgets.
pub fn report_styles(toolkit: &dyn Toolkit) -> Section {
    let mut section = Section::new(STYLES_TITLE);
    for font in toolkit.widget_fonts() {
        match font.description {
            Some(description) => section.push_property(&font.widget, format!("\"{}\"", description)),
            None => section.push_property(&font.widget, "[unset]"),
        }
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::DummyToolkit;
    use crate::lookup::TypedValue;
    use crate::traits::WidgetFont;

    #[test]
    fn test_settings_lines() {
        let toolkit = DummyToolkit::new()
            .with_setting("gtk-font-name", TypedValue::Str("Cantarell 11".into()))
            .with_setting("gtk-xft-antialias", TypedValue::Int(1))
            .with_setting("gtk-xft-hinting", TypedValue::Int(0))
            .with_setting("gtk-xft-hintstyle", TypedValue::Str("hintslight".into()))
            .with_setting("gtk-xft-dpi", TypedValue::Int(98304));
        let section = report_settings(&toolkit);

        assert_eq!(section.lines.len(), 6);
        assert_eq!(section.value_of("gtk-font-name"), Some("\"Cantarell 11\""));
        assert_eq!(section.value_of("gtk-xft-antialias"), Some("1 (yes)"));
        assert_eq!(section.value_of("gtk-xft-hinting"), Some("0 (no)"));
        assert_eq!(section.value_of("gtk-xft-hintstyle"), Some("\"hintslight\""));
        assert_eq!(section.value_of("gtk-xft-rgba"), Some("[unset]"));
        assert_eq!(section.value_of("gtk-xft-dpi"), Some("98304 (96.00 DPI)"));
    }

    #[test]
    fn test_settings_defaults() {
        let toolkit = DummyToolkit::new()
            .with_setting("gtk-xft-antialias", TypedValue::Int(-1))
            .with_setting("gtk-xft-dpi", TypedValue::Int(-1));
        let section = report_settings(&toolkit);
        assert_eq!(section.value_of("gtk-xft-antialias"), Some("-1 (default)"));
        assert_eq!(section.value_of("gtk-xft-dpi"), Some("-1 (default)"));
    }

    #[test]
    fn test_settings_type_mismatch() {
        let toolkit =
            DummyToolkit::new().with_setting("gtk-xft-hinting", TypedValue::Str("yes".into()));
        let section = report_settings(&toolkit);
        assert_eq!(section.value_of("gtk-xft-hinting"), Some("[type mismatch]"));
    }

    #[test]
    fn test_styles() {
        let toolkit = DummyToolkit::new()
            .with_widget_font(WidgetFont {
                widget: "GtkLabel".into(),
                description: Some("Cantarell 11".into()),
            })
            .with_widget_font(WidgetFont {
                widget: "GtkButton".into(),
                description: None,
            });
        let section = report_styles(&toolkit);
        assert_eq!(section.title, "GTK styles");
        assert_eq!(section.value_of("GtkLabel"), Some("\"Cantarell 11\""));
        assert_eq!(section.value_of("GtkButton"), Some("[unset]"));
    }
}
