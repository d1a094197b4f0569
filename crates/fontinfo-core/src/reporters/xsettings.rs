//! XSETTINGS values reported by an external helper

use crate::constants::{XSETTINGS_FONT_NAME_KEY, XSETTINGS_HELPER, XSETTINGS_HELPER_URL, XSETTINGS_XFT_PREFIX};
use crate::format::Section;
use crate::traits::XSettingsHelper;

pub const TITLE: &str = "XSETTINGS";

/// Keep the font-related lines of a `dump_xsettings` listing and split each
/// into key and value at the first run of spaces.
pub fn parse_settings_dump(output: &str) -> Vec<(String, String)> {
    output
        .lines()
        .filter(|line| {
            line.starts_with(XSETTINGS_XFT_PREFIX)
                || line
                    .strip_prefix(XSETTINGS_FONT_NAME_KEY)
                    .is_some_and(|rest| rest.starts_with(' '))
        })
        .map(|line| match line.split_once(' ') {
            Some((key, value)) => (key.to_string(), value.trim_start_matches(' ').to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}

pub fn report(helper: &dyn XSettingsHelper) -> Section {
    let mut section = Section::new(TITLE);
    match helper.run() {
        Ok(settings) => {
            for (key, value) in settings {
                section.push_property(&key, value);
            }
        }
        Err(err) => {
            tracing::debug!("XSETTINGS helper unavailable: {}", err);
            section.push_line(format!("Install {} from {}", XSETTINGS_HELPER, XSETTINGS_HELPER_URL));
            section.push_line("to print this information.");
        }
    }
    section
}
