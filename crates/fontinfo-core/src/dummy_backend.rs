//! Dummy backend for exercising reporters without a desktop session

use std::cell::RefCell;
use std::collections::HashMap;

use crate::constants::{DESKTOP_INTERFACE_SCHEMA, PANGO_SCALE};
use crate::error::{HelperUnavailable, ReportError, ReportResult};
use crate::lookup::{LookupOutcome, LookupResult, PropertySource, TypedValue, ValueKind};
use crate::traits::{
    Backend, DesktopSettings, DisplayServer, FontDescription, FontMatcher, FontQuery,
    ScreenGeometry, Toolkit, WidgetFont, XSettingsHelper,
};

/// In-memory property store
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, TypedValue>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: TypedValue) {
        self.values.insert(key.to_string(), value);
    }
}

impl PropertySource for MapSource {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult {
        let value = self.values.get(key).ok_or(LookupOutcome::NotFound)?;
        if kind != ValueKind::Any && value.kind() != kind {
            return Err(LookupOutcome::TypeMismatch);
        }
        Ok(value.clone())
    }
}

/// Scripted toolkit
#[derive(Debug, Clone, Default)]
pub struct DummyToolkit {
    pub settings: MapSource,
    pub widget_fonts: Vec<WidgetFont>,
    pub default_font: Option<FontDescription>,
    pub parsed_fonts: HashMap<String, FontDescription>,
}

impl DummyToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, key: &str, value: TypedValue) -> Self {
        self.settings.insert(key, value);
        self
    }

    pub fn with_widget_font(mut self, font: WidgetFont) -> Self {
        self.widget_fonts.push(font);
        self
    }

    pub fn with_default_font(mut self, font: FontDescription) -> Self {
        self.default_font = Some(font);
        self
    }

    pub fn with_parsed_font(mut self, text: &str, font: FontDescription) -> Self {
        self.parsed_fonts.insert(text.to_string(), font);
        self
    }
}

impl Toolkit for DummyToolkit {
    fn settings(&self) -> &dyn PropertySource {
        &self.settings
    }

    fn widget_fonts(&self) -> Vec<WidgetFont> {
        self.widget_fonts.clone()
    }

    fn default_font(&self) -> Option<FontDescription> {
        self.default_font.clone()
    }

    fn parse_font(&self, description: &str) -> FontDescription {
        self.parsed_fonts
            .get(description)
            .cloned()
            .unwrap_or_else(|| FontDescription {
                text: description.to_string(),
                family: Some(description.to_string()),
                ..Default::default()
            })
    }
}

/// Settings store holding a single schema
#[derive(Debug, Clone)]
pub struct DummyDesktop {
    pub schema: String,
    pub values: MapSource,
}

impl DummyDesktop {
    pub fn new(schema: &str) -> Self {
        Self {
            schema: schema.to_string(),
            values: MapSource::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: TypedValue) -> Self {
        self.values.insert(key, value);
        self
    }
}

impl DesktopSettings for DummyDesktop {
    fn open(&self, schema: &str) -> Option<Box<dyn PropertySource + '_>> {
        (schema == self.schema).then(|| Box::new(self.values.clone()) as Box<dyn PropertySource>)
    }
}

/// Display with fixed geometry and an optional resource database
#[derive(Debug, Clone)]
pub struct DummyDisplay {
    pub geometry: ScreenGeometry,
    pub resources: Option<MapSource>,
}

impl DummyDisplay {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            geometry,
            resources: None,
        }
    }

    pub fn with_resources(mut self, entries: Vec<(&str, Vec<u8>)>) -> Self {
        let mut database = MapSource::new();
        for (name, value) in entries {
            database.insert(name, TypedValue::Bytes(value));
        }
        self.resources = Some(database);
        self
    }
}

impl DisplayServer for DummyDisplay {
    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn resources(&self) -> Option<Box<dyn PropertySource + '_>> {
        self.resources
            .as_ref()
            .map(|database| Box::new(database.clone()) as Box<dyn PropertySource>)
    }
}

/// Helper that either succeeds with canned settings or exits with a status
#[derive(Debug, Clone)]
pub struct DummyXSettings {
    outcome: Result<Vec<(String, String)>, i32>,
}

impl DummyXSettings {
    pub fn succeeding(settings: Vec<(String, String)>) -> Self {
        Self { outcome: Ok(settings) }
    }

    pub fn failing(status: i32) -> Self {
        Self { outcome: Err(status) }
    }
}

impl XSettingsHelper for DummyXSettings {
    fn run(&self) -> Result<Vec<(String, String)>, HelperUnavailable> {
        self.outcome
            .clone()
            .map_err(|status| HelperUnavailable::ExitStatus {
                program: "dump_xsettings".to_string(),
                status,
            })
    }
}

/// Font matcher returning a fixed pattern and recording the last query
#[derive(Debug, Default)]
pub struct DummyFontMatcher {
    pub fields: MapSource,
    pub fail: bool,
    last_query: RefCell<Option<FontQuery>>,
}

impl DummyFontMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: &str, value: TypedValue) -> Self {
        self.fields.insert(key, value);
        self
    }

    pub fn last_query(&self) -> Option<FontQuery> {
        self.last_query.borrow().clone()
    }
}

impl FontMatcher for DummyFontMatcher {
    fn resolve(&self, query: &FontQuery) -> ReportResult<Box<dyn PropertySource + '_>> {
        *self.last_query.borrow_mut() = Some(query.clone());
        if self.fail {
            return Err(ReportError::FontMatchFailed {
                query: format!("{:?}", query),
            });
        }
        Ok(Box::new(self.fields.clone()))
    }
}

/// Every dummy subsystem together, preloaded with a typical desktop
pub struct DummyBackend {
    pub toolkit: DummyToolkit,
    pub desktop: DummyDesktop,
    pub display: DummyDisplay,
    pub xsettings: DummyXSettings,
    pub fonts: DummyFontMatcher,
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyBackend {
    pub fn new() -> Self {
        let default_font = FontDescription {
            text: "Cantarell 11".to_string(),
            family: Some("Cantarell".to_string()),
            size: 11 * PANGO_SCALE,
            size_is_absolute: false,
        };

        DummyBackend {
            toolkit: DummyToolkit::new()
                .with_setting("gtk-font-name", TypedValue::Str("Cantarell 11".into()))
                .with_setting("gtk-xft-antialias", TypedValue::Int(1))
                .with_setting("gtk-xft-hinting", TypedValue::Int(1))
                .with_setting("gtk-xft-hintstyle", TypedValue::Str("hintslight".into()))
                .with_setting("gtk-xft-rgba", TypedValue::Str("rgb".into()))
                .with_setting("gtk-xft-dpi", TypedValue::Int(98304))
                .with_widget_font(WidgetFont {
                    widget: "GtkLabel".into(),
                    description: Some("Cantarell 11".into()),
                })
                .with_default_font(default_font),
            desktop: DummyDesktop::new(DESKTOP_INTERFACE_SCHEMA)
                .with_value("font-name", TypedValue::Str("Cantarell 11".into()))
                .with_value("text-scaling-factor", TypedValue::Double(1.0)),
            display: DummyDisplay::new(ScreenGeometry {
                width_px: 1920,
                height_px: 1080,
                width_mm: 508,
                height_mm: 286,
            })
            .with_resources(vec![
                ("Xft.antialias", b"1\0".to_vec()),
                ("Xft.dpi", b"96\0".to_vec()),
            ]),
            xsettings: DummyXSettings::succeeding(vec![(
                "Xft/DPI".to_string(),
                "98304".to_string(),
            )]),
            fonts: DummyFontMatcher::new()
                .with_field("family", TypedValue::Str("Cantarell".into()))
                .with_field("pixelsize", TypedValue::Double(14.67))
                .with_field("size", TypedValue::Int(11))
                .with_field("antialias", TypedValue::Bool(true))
                .with_field("hinting", TypedValue::Bool(true))
                .with_field("autohint", TypedValue::Bool(false))
                .with_field("hintstyle", TypedValue::Int(1))
                .with_field("rgba", TypedValue::Int(1)),
        }
    }
}

impl Backend for DummyBackend {
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
