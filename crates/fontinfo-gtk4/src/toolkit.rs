//! GTK4 settings object and widget font descriptions

use fontinfo_core::{
    FontDescription, LookupOutcome, LookupResult, PropertySource, ReportError, ReportResult,
    Toolkit, TypedValue, ValueKind, WidgetFont,
};
use gtk4::prelude::*;

/// Properties of the default `GtkSettings` object.
pub struct GtkSettingsSource {
    settings: gtk4::Settings,
}

impl GtkSettingsSource {
    fn typed_value(value: &glib::Value) -> LookupResult {
        let ty = value.type_();
        let typed = if ty == glib::Type::I32 {
            value.get::<i32>().ok().map(TypedValue::Int)
        } else if ty == glib::Type::BOOL {
            value.get::<bool>().ok().map(TypedValue::Bool)
        } else if ty == glib::Type::F64 {
            value.get::<f64>().ok().map(TypedValue::Double)
        } else if ty == glib::Type::STRING {
            // A NULL string property is unset rather than mistyped.
            match value.get::<Option<String>>() {
                Ok(Some(s)) => Some(TypedValue::Str(s)),
                Ok(None) => return Err(LookupOutcome::NotFound),
                Err(_) => None,
            }
        } else {
            None
        };
        typed.ok_or(LookupOutcome::TypeMismatch)
    }
}

impl PropertySource for GtkSettingsSource {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult {
        if self.settings.find_property(key).is_none() {
            tracing::debug!("GtkSettings has no property {}", key);
            return Err(LookupOutcome::NotFound);
        }
        let value = Self::typed_value(&self.settings.property_value(key))?;
        if kind != ValueKind::Any && value.kind() != kind {
            return Err(LookupOutcome::TypeMismatch);
        }
        Ok(value)
    }
}

/// GTK4 toolkit; requires `gtk4::init` to have succeeded.
pub struct Gtk4Toolkit {
    settings: GtkSettingsSource,
}

impl Gtk4Toolkit {
    pub fn new() -> ReportResult<Self> {
        gtk4::init().map_err(|err| ReportError::ToolkitUnavailable {
            reason: err.to_string(),
        })?;
        let settings = gtk4::Settings::default().ok_or(ReportError::SettingsUnavailable)?;
        Ok(Gtk4Toolkit {
            settings: GtkSettingsSource { settings },
        })
    }
}

fn convert_description(desc: &pango::FontDescription) -> FontDescription {
    FontDescription {
        text: desc.to_str().to_string(),
        family: desc.family().map(|family| family.to_string()),
        size: desc.size(),
        size_is_absolute: desc.is_size_absolute(),
    }
}

fn widget_description(widget: &impl IsA<gtk4::Widget>) -> Option<pango::FontDescription> {
    widget.pango_context().font_description()
}

fn widget_font(widget: &impl IsA<gtk4::Widget>) -> WidgetFont {
    WidgetFont {
        widget: widget.type_().name().to_string(),
        description: widget_description(widget).map(|desc| desc.to_str().to_string()),
    }
}

impl Toolkit for Gtk4Toolkit {
    fn settings(&self) -> &dyn PropertySource {
        &self.settings
    }

    // Each widget is dropped, and with it its only reference, before the
    // next one is created.
    fn widget_fonts(&self) -> Vec<WidgetFont> {
        vec![
            widget_font(&gtk4::Label::new(Some("foo"))),
            widget_font(&gtk4::Button::with_label("foo")),
            widget_font(&gtk4::HeaderBar::new()),
        ]
    }

    fn default_font(&self) -> Option<FontDescription> {
        let label = gtk4::Label::new(Some("foo"));
        widget_description(&label).map(|desc| convert_description(&desc))
    }

    fn parse_font(&self, description: &str) -> FontDescription {
        convert_description(&pango::FontDescription::from_string(description))
    }
}
