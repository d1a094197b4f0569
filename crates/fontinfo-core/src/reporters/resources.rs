//! X resource database (xrdb)

use crate::constants::XFT_RESOURCES;
use crate::format::{Placeholders, Property, Render, Section};
use crate::lookup::ValueKind;
use crate::traits::DisplayServer;

pub const TITLE: &str = "X resources (xrdb)";

/// Print the Xft resources, each looked up with class `*`.
pub fn report(display: &dyn DisplayServer) -> Section {
    let mut section = Section::new(TITLE);
    let Some(database) = display.resources() else {
        tracing::debug!("X server has no resource manager string");
        section.push_line("[failed]");
        return section;
    };

    let properties = XFT_RESOURCES.map(|name| Property::new(name, ValueKind::Bytes, Render::Resource));
    section.push_properties(database.as_ref(), &properties, Placeholders::Settings);
    section
}
