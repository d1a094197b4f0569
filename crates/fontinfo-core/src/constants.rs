// src/constants.rs

// Layout
pub const NAME_WIDTH: usize = 20;

// Toolkit
/// `gtk-xft-dpi` stores the real DPI multiplied by this factor.
pub const XFT_DPI_SCALE: f64 = 1024.0;
/// Pango sizes are expressed in these units per point (or pixel).
pub const PANGO_SCALE: i32 = 1024;

// Desktop settings
pub const DESKTOP_INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";
pub const DESKTOP_FONT_KEYS: [&str; 2] = ["font-name", "text-scaling-factor"];

// Display geometry
pub const MM_PER_INCH: f64 = 25.4;
pub const POINTS_PER_INCH: f64 = 72.0;
pub const FALLBACK_DPI: f64 = 96.0;

// X resources
pub const RESOURCE_CLASS: &str = "*";
pub const RESOURCE_BUFFER_LEN: usize = 256;
pub const XFT_RESOURCES: [&str; 5] = [
    "Xft.antialias",
    "Xft.hinting",
    "Xft.hintstyle",
    "Xft.rgba",
    "Xft.dpi",
];

// XSETTINGS helper
pub const XSETTINGS_HELPER: &str = "dump_xsettings";
pub const XSETTINGS_HELPER_URL: &str = "https://code.google.com/p/xsettingsd/";
pub const XSETTINGS_FONT_NAME_KEY: &str = "Gtk/FontName";
pub const XSETTINGS_XFT_PREFIX: &str = "Xft/";

// Fontconfig property names and values
pub const FC_FAMILY: &str = "family";
pub const FC_PIXEL_SIZE: &str = "pixelsize";
pub const FC_SIZE: &str = "size";
pub const FC_ANTIALIAS: &str = "antialias";
pub const FC_HINTING: &str = "hinting";
pub const FC_AUTOHINT: &str = "autohint";
pub const FC_HINT_STYLE: &str = "hintstyle";
pub const FC_RGBA: &str = "rgba";

pub const FC_WEIGHT_BOLD: i32 = 200;
pub const FC_SLANT_ITALIC: i32 = 100;
