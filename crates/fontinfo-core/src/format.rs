//! Columnar text layout for report sections
//!
//! Every property line is `name value` with the name left-justified in a
//! [`NAME_WIDTH`] column followed by a single space. Sections start with a
//! `Title:` header and end with a blank line.

use std::fmt;

use crate::constants::{NAME_WIDTH, RESOURCE_BUFFER_LEN, XFT_DPI_SCALE};
use crate::lookup::{LookupOutcome, LookupResult, PropertySource, TypedValue, ValueKind};

/// Format one `name value` line.
pub fn format_line(name: &str, value: impl fmt::Display) -> String {
    format!("{:<width$} {}", name, value, width = NAME_WIDTH)
}

/// Copy a resource value the way a fixed 256-byte C buffer would: at most
/// 255 bytes, stopping at the first NUL.
pub fn truncate_resource(bytes: &[u8]) -> String {
    let kept = &bytes[..bytes.len().min(RESOURCE_BUFFER_LEN - 1)];
    let end = kept.iter().position(|&b| b == 0).unwrap_or(kept.len());
    String::from_utf8_lossy(&kept[..end]).into_owned()
}

/// How a present value is turned into text.
#[derive(Debug, Clone, Copy)]
pub enum Render {
    /// `"value"`
    Quoted,
    /// `N (yes|no|default)`: negative means default.
    Tristate,
    /// `gtk-xft-dpi` style: `N (D.DD DPI)` or `N (default)`.
    XftDpi,
    /// Strings quoted, doubles with two decimals, nothing else.
    ByStoredType,
    /// Resource bytes, truncated and quoted.
    Resource,
    /// The string as is.
    Plain,
    /// Booleans as `0`/`1`.
    Flag,
    /// Doubles with two decimals and a suffix.
    Fixed { suffix: &'static str },
    /// Integers with a suffix and an optional enum name.
    Integer {
        suffix: &'static str,
        names: Option<fn(i32) -> &'static str>,
    },
}

impl Render {
    pub fn apply(&self, value: &TypedValue) -> Result<String, LookupOutcome> {
        let text = match (self, value) {
            (Render::Quoted, TypedValue::Str(s)) => format!("\"{}\"", s),
            (Render::Tristate, TypedValue::Int(v)) => format!("{} ({})", v, tristate(*v)),
            (Render::XftDpi, TypedValue::Int(v)) => xft_dpi(*v),
            (Render::ByStoredType, TypedValue::Str(s)) => format!("\"{}\"", s),
            (Render::ByStoredType, TypedValue::Double(d)) => format!("{:.2}", d),
            (Render::Resource, TypedValue::Bytes(b)) => format!("\"{}\"", truncate_resource(b)),
            (Render::Resource, TypedValue::Str(s)) => {
                format!("\"{}\"", truncate_resource(s.as_bytes()))
            }
            (Render::Plain, TypedValue::Str(s)) => s.clone(),
            (Render::Flag, TypedValue::Bool(b)) => i32::from(*b).to_string(),
            (Render::Fixed { suffix }, TypedValue::Double(d)) => format!("{:.2}{}", d, suffix),
            (Render::Integer { suffix, names }, TypedValue::Int(v)) => match names {
                Some(name_of) => format!("{}{} ({})", v, suffix, name_of(*v)),
                None => format!("{}{}", v, suffix),
            },
            _ => return Err(LookupOutcome::TypeMismatch),
        };
        Ok(text)
    }
}

fn tristate(value: i32) -> &'static str {
    match value {
        0 => "no",
        v if v > 0 => "yes",
        _ => "default",
    }
}

fn xft_dpi(raw: i32) -> String {
    if raw > 0 {
        format!("{} ({:.2} DPI)", raw, f64::from(raw) / XFT_DPI_SCALE)
    } else {
        format!("{} (default)", raw)
    }
}

/// Placeholder vocabulary for values that could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholders {
    /// `[unset]` for missing values, `[<result>]` otherwise.
    Settings,
    /// `[unset]` for missing values, `[unknown type]` otherwise.
    StoredType,
    /// Always `[<result>]`.
    MatchResult,
}

impl Placeholders {
    pub fn render(self, outcome: LookupOutcome) -> String {
        match (self, outcome) {
            (Placeholders::Settings, LookupOutcome::NotFound)
            | (Placeholders::StoredType, LookupOutcome::NotFound) => "[unset]".to_string(),
            (Placeholders::StoredType, _) => "[unknown type]".to_string(),
            (_, outcome) => format!("[{}]", outcome.result_name()),
        }
    }
}

/// A property a reporter prints: where to find it, what type it has and how
/// to show it.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub key: &'static str,
    pub kind: ValueKind,
    pub render: Render,
}

impl Property {
    pub const fn new(key: &'static str, kind: ValueKind, render: Render) -> Self {
        Self { key, kind, render }
    }

    /// Render a lookup result for this property.
    pub fn describe(&self, result: LookupResult, placeholders: Placeholders) -> String {
        match result.and_then(|value| self.render.apply(&value)) {
            Ok(text) => text,
            Err(outcome) => {
                tracing::debug!("{}: {}", self.key, outcome);
                placeholders.render(outcome)
            }
        }
    }
}

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a `name value` line.
    pub fn push_property(&mut self, name: &str, value: impl fmt::Display) {
        self.lines.push(format_line(name, value));
    }

    /// Append a free-form line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Look up and append every property in `properties`.
    pub fn push_properties(
        &mut self,
        source: &dyn PropertySource,
        properties: &[Property],
        placeholders: Placeholders,
    ) {
        for property in properties {
            let result = source.get(property.key, property.kind);
            self.push_property(property.key, property.describe(result, placeholders));
        }
    }

    /// Value column of the line for `name`, if there is one.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let head = line.get(..NAME_WIDTH)?;
            let value = line.get(NAME_WIDTH + 1..)?;
            (head.trim_end() == name).then_some(value)
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// The full output of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub preamble: Option<String>,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(preamble) = &self.preamble {
            writeln!(f, "{}", preamble)?;
            writeln!(f)?;
        }
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}
