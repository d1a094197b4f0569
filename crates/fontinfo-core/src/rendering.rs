//! Fontconfig rendering enums

pub const FC_HINT_NONE: i32 = 0;
pub const FC_HINT_SLIGHT: i32 = 1;
pub const FC_HINT_MEDIUM: i32 = 2;
pub const FC_HINT_FULL: i32 = 3;

pub const FC_RGBA_UNKNOWN: i32 = 0;
pub const FC_RGBA_RGB: i32 = 1;
pub const FC_RGBA_BGR: i32 = 2;
pub const FC_RGBA_VRGB: i32 = 3;
pub const FC_RGBA_VBGR: i32 = 4;
pub const FC_RGBA_NONE: i32 = 5;

/// Name of an `FC_HINT_STYLE` value.
pub fn hint_style_name(style: i32) -> &'static str {
    match style {
        FC_HINT_NONE => "none",
        FC_HINT_SLIGHT => "slight",
        FC_HINT_MEDIUM => "medium",
        FC_HINT_FULL => "full",
        _ => "invalid",
    }
}

/// Name of an `FC_RGBA` subpixel order.
pub fn rgba_name(rgba: i32) -> &'static str {
    match rgba {
        FC_RGBA_UNKNOWN => "unknown",
        FC_RGBA_RGB => "rgb",
        FC_RGBA_BGR => "bgr",
        FC_RGBA_VRGB => "vrgb",
        FC_RGBA_VBGR => "vbgr",
        FC_RGBA_NONE => "none",
        _ => "invalid",
    }
}
