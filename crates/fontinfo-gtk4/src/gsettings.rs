//! GSettings desktop settings store

use fontinfo_core::{DesktopSettings, LookupOutcome, LookupResult, PropertySource, TypedValue, ValueKind};
use gtk4::gio;
use gtk4::gio::prelude::*;

/// Opens schemas from the default schema source.
#[derive(Debug, Default)]
pub struct GioDesktop;

impl GioDesktop {
    pub fn new() -> Self {
        GioDesktop
    }
}

impl DesktopSettings for GioDesktop {
    fn open(&self, schema_id: &str) -> Option<Box<dyn PropertySource + '_>> {
        // gio::Settings::new aborts on a schema that is not installed.
        let schema = gio::SettingsSchemaSource::default()?.lookup(schema_id, true)?;
        let settings = gio::Settings::new(schema_id);
        tracing::debug!("Opened settings schema {}", schema_id);
        Some(Box::new(SchemaSettings { schema, settings }))
    }
}

struct SchemaSettings {
    schema: gio::SettingsSchema,
    settings: gio::Settings,
}

impl PropertySource for SchemaSettings {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult {
        if !self.schema.has_key(key) {
            return Err(LookupOutcome::NotFound);
        }

        let variant = self.settings.value(key);
        let value = if variant.type_() == glib::VariantTy::STRING {
            variant.str().map(|s| TypedValue::Str(s.to_string()))
        } else if variant.type_() == glib::VariantTy::DOUBLE {
            variant.get::<f64>().map(TypedValue::Double)
        } else {
            None
        }
        .ok_or(LookupOutcome::TypeMismatch)?;

        if kind != ValueKind::Any && value.kind() != kind {
            return Err(LookupOutcome::TypeMismatch);
        }
        Ok(value)
    }
}
