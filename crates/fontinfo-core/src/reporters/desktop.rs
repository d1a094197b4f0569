//! Desktop settings store (GSettings)

use crate::constants::DESKTOP_FONT_KEYS;
use crate::format::{Placeholders, Property, Render, Section};
use crate::lookup::ValueKind;
use crate::traits::DesktopSettings;

pub fn title(schema: &str) -> String {
    format!("GSettings ({})", schema)
}

/// Print the desktop font name and text scaling factor from `schema`.
pub fn report(desktop: &dyn DesktopSettings, schema: &str) -> Section {
    let mut section = Section::new(title(schema));
    let Some(settings) = desktop.open(schema) else {
        tracing::warn!("Settings schema {} is not installed", schema);
        section.push_line("[failed]");
        return section;
    };

    let properties =
        DESKTOP_FONT_KEYS.map(|key| Property::new(key, ValueKind::Any, Render::ByStoredType));
    section.push_properties(settings.as_ref(), &properties, Placeholders::StoredType);
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DESKTOP_INTERFACE_SCHEMA;
    use crate::dummy_backend::DummyDesktop;
    use crate::lookup::TypedValue;

    #[test]
    fn test_string_and_double() {
        let desktop = DummyDesktop::new(DESKTOP_INTERFACE_SCHEMA)
            .with_value("font-name", TypedValue::Str("Cantarell 11".into()))
            .with_value("text-scaling-factor", TypedValue::Double(1.0));
        let section = report(&desktop, DESKTOP_INTERFACE_SCHEMA);
        assert_eq!(section.title, "GSettings (org.gnome.desktop.interface)");
        assert_eq!(section.value_of("font-name"), Some("\"Cantarell 11\""));
        assert_eq!(section.value_of("text-scaling-factor"), Some("1.00"));
    }

    #[test]
    fn test_unset_and_unknown_type() {
        let desktop = DummyDesktop::new(DESKTOP_INTERFACE_SCHEMA)
            .with_value("text-scaling-factor", TypedValue::Int(2));
        let section = report(&desktop, DESKTOP_INTERFACE_SCHEMA);
        assert_eq!(section.value_of("font-name"), Some("[unset]"));
        assert_eq!(section.value_of("text-scaling-factor"), Some("[unknown type]"));
    }

    #[test]
    fn test_missing_schema() {
        let desktop = DummyDesktop::new("org.example.other");
        let section = report(&desktop, DESKTOP_INTERFACE_SCHEMA);
        assert_eq!(section.lines, vec!["[failed]".to_string()]);
    }
}
