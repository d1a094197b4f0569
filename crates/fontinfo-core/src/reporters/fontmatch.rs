//! Fontconfig's resolution of a font description

use crate::config::ReportConfig;
use crate::constants::{
    FC_ANTIALIAS, FC_AUTOHINT, FC_FAMILY, FC_HINTING, FC_HINT_STYLE, FC_PIXEL_SIZE, FC_RGBA,
    FC_SIZE, FC_SLANT_ITALIC, FC_WEIGHT_BOLD, XFT_DPI_SCALE,
};
use crate::error::ReportResult;
use crate::format::{Placeholders, Property, Render, Section};
use crate::lookup::{TypedValue, ValueKind};
use crate::rendering::{hint_style_name, rgba_name};
use crate::traits::{FontDescription, FontMatcher, FontQuery, RequestedSize, Toolkit};

const MATCH_FIELDS: [Property; 8] = [
    Property::new(FC_FAMILY, ValueKind::Str, Render::Plain),
    Property::new(FC_PIXEL_SIZE, ValueKind::Double, Render::Fixed { suffix: " pixels" }),
    Property::new(FC_SIZE, ValueKind::Int, Render::Integer { suffix: " points", names: None }),
    Property::new(FC_ANTIALIAS, ValueKind::Bool, Render::Flag),
    Property::new(FC_HINTING, ValueKind::Bool, Render::Flag),
    Property::new(FC_AUTOHINT, ValueKind::Bool, Render::Flag),
    Property::new(
        FC_HINT_STYLE,
        ValueKind::Int,
        Render::Integer { suffix: "", names: Some(hint_style_name) },
    ),
    Property::new(
        FC_RGBA,
        ValueKind::Int,
        Render::Integer { suffix: "", names: Some(rgba_name) },
    ),
];

pub fn title(description: &FontDescription) -> String {
    format!("Fontconfig ({})", description.text)
}

/// Turn a font description and the bold/italic flags into match constraints.
pub fn build_query(description: &FontDescription, config: &ReportConfig) -> FontQuery {
    FontQuery {
        family: description.family.clone(),
        weight: config.bold.then_some(FC_WEIGHT_BOLD),
        slant: config.italic.then_some(FC_SLANT_ITALIC),
        size: description.requested_size(),
    }
}

/// Rendering resolution: the toolkit's Xft DPI when set, the configured
/// fallback otherwise.
pub fn resolution(toolkit: &dyn Toolkit, config: &ReportConfig) -> f64 {
    match toolkit.settings().get("gtk-xft-dpi", ValueKind::Int) {
        Ok(TypedValue::Int(raw)) if raw > 0 => f64::from(raw) / XFT_DPI_SCALE,
        _ => config.fallback_dpi,
    }
}

pub fn report(
    toolkit: &dyn Toolkit,
    fonts: &dyn FontMatcher,
    config: &ReportConfig,
) -> ReportResult<Section> {
    let description = match &config.font_description {
        Some(text) => toolkit.parse_font(text),
        None => toolkit.default_font().unwrap_or_else(|| {
            tracing::warn!("Toolkit has no default font description");
            FontDescription::default()
        }),
    };

    let mut section = Section::new(title(&description));
    let query = build_query(&description, config);

    if query.weight.is_some() {
        section.push_property("requested weight", "FC_WEIGHT_BOLD");
    }
    if query.slant.is_some() {
        section.push_property("requested slant", "FC_SLANT_ITALIC");
    }
    match query.size {
        Some(RequestedSize::Pixels(pixels)) => {
            section.push_property("requested size", format!("{:.2} pixels", pixels));
        }
        Some(size @ RequestedSize::Points(points)) => {
            let dpi = resolution(toolkit, config);
            section.push_property(
                "requested size",
                format!("{} points ({:.2} pixels at {:.2} DPI)", points, size.to_pixels(dpi), dpi),
            );
        }
        None => section.push_property("requested size", "[unset]"),
    }

    let matched = fonts.resolve(&query)?;
    section.push_properties(matched.as_ref(), &MATCH_FIELDS, Placeholders::MatchResult);
    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PANGO_SCALE;
    use crate::dummy_backend::{DummyFontMatcher, DummyToolkit};

    fn sans(size: i32, absolute: bool) -> FontDescription {
        FontDescription {
            text: "Sans 12".into(),
            family: Some("Sans".into()),
            size: size * PANGO_SCALE,
            size_is_absolute: absolute,
        }
    }

    fn full_match() -> DummyFontMatcher {
        DummyFontMatcher::new()
            .with_field("family", TypedValue::Str("DejaVu Sans".into()))
            .with_field("pixelsize", TypedValue::Double(16.0))
            .with_field("size", TypedValue::Int(12))
            .with_field("antialias", TypedValue::Bool(true))
            .with_field("hinting", TypedValue::Bool(true))
            .with_field("autohint", TypedValue::Bool(false))
            .with_field("hintstyle", TypedValue::Int(2))
            .with_field("rgba", TypedValue::Int(0))
    }

    #[test]
    fn test_build_query() {
        let config = ReportConfig::new().with_bold(true);
        let query = build_query(&sans(12, false), &config);
        assert_eq!(query.family.as_deref(), Some("Sans"));
        assert_eq!(query.weight, Some(200));
        assert_eq!(query.slant, None);
        assert_eq!(query.size, Some(RequestedSize::Points(12)));
    }

    #[test]
    fn test_report_from_user_description() {
        let toolkit = DummyToolkit::new()
            .with_parsed_font("Sans 12", sans(12, false))
            .with_setting("gtk-xft-dpi", TypedValue::Int(98304));
        let matcher = full_match();
        let config = ReportConfig::new().with_font_description("Sans 12").with_italic(true);

        let section = report(&toolkit, &matcher, &config).unwrap();
        assert_eq!(section.title, "Fontconfig (Sans 12)");
        assert_eq!(section.value_of("requested weight"), None);
        assert_eq!(section.value_of("requested slant"), Some("FC_SLANT_ITALIC"));
        assert_eq!(
            section.value_of("requested size"),
            Some("12 points (16.00 pixels at 96.00 DPI)")
        );
        assert_eq!(section.value_of("family"), Some("DejaVu Sans"));
        assert_eq!(section.value_of("pixelsize"), Some("16.00 pixels"));
        assert_eq!(section.value_of("size"), Some("12 points"));
        assert_eq!(section.value_of("antialias"), Some("1"));
        assert_eq!(section.value_of("autohint"), Some("0"));
        assert_eq!(section.value_of("hintstyle"), Some("2 (medium)"));
        assert_eq!(section.value_of("rgba"), Some("0 (unknown)"));

        let query = matcher.last_query().unwrap();
        assert_eq!(query.slant, Some(100));
    }

    #[test]
    fn test_pixel_size_request() {
        let toolkit = DummyToolkit::new().with_default_font(sans(15, true));
        let section = report(&toolkit, &full_match(), &ReportConfig::default()).unwrap();
        assert_eq!(section.value_of("requested size"), Some("15.00 pixels"));
    }

    #[test]
    fn test_fallback_resolution() {
        let toolkit = DummyToolkit::new().with_default_font(sans(9, false));
        let config = ReportConfig::default();
        assert_eq!(resolution(&toolkit, &config), 96.0);
        let section = report(&toolkit, &full_match(), &config).unwrap();
        assert_eq!(
            section.value_of("requested size"),
            Some("9 points (12.00 pixels at 96.00 DPI)")
        );
    }

    #[test]
    fn test_unconstrained_match_prints_every_field() {
        let toolkit = DummyToolkit::new();
        let matcher = DummyFontMatcher::new()
            .with_field("antialias", TypedValue::Bool(true))
            .with_field("hintstyle", TypedValue::Int(9))
            .with_field("rgba", TypedValue::Str("rgb".into()));
        let section = report(&toolkit, &matcher, &ReportConfig::default()).unwrap();

        assert_eq!(section.title, "Fontconfig ()");
        assert_eq!(section.value_of("requested size"), Some("[unset]"));
        for field in MATCH_FIELDS {
            assert!(section.value_of(field.key).is_some(), "missing {}", field.key);
        }
        assert_eq!(section.value_of("family"), Some("[no match]"));
        assert_eq!(section.value_of("antialias"), Some("1"));
        assert_eq!(section.value_of("hintstyle"), Some("9 (invalid)"));
        assert_eq!(section.value_of("rgba"), Some("[type mismatch]"));
        assert_eq!(matcher.last_query(), Some(FontQuery::default()));
    }

    #[test]
    fn test_match_failure_is_fatal() {
        let toolkit = DummyToolkit::new();
        let matcher = DummyFontMatcher::failing();
        assert!(report(&toolkit, &matcher, &ReportConfig::default()).is_err());
    }
}
