//! Xlib display connection and resource database

use std::ffi::{c_char, CString};
use std::ptr::{self, NonNull};

use fontinfo_core::constants::RESOURCE_CLASS;
use fontinfo_core::{
    DisplayServer, LookupOutcome, LookupResult, PropertySource, ReportError, ReportResult,
    ScreenGeometry, TypedValue, ValueKind,
};
use x11::xlib;

/// Connection to the X server named by `$DISPLAY`, closed on drop.
pub struct XDisplay {
    display: NonNull<xlib::Display>,
    screen: i32,
}

impl XDisplay {
    pub fn open() -> ReportResult<Self> {
        let display = NonNull::new(unsafe { xlib::XOpenDisplay(ptr::null()) }).ok_or_else(|| {
            ReportError::DisplayUnavailable {
                display: std::env::var("DISPLAY").unwrap_or_else(|_| "(unset)".to_string()),
            }
        })?;
        let screen = unsafe { xlib::XDefaultScreen(display.as_ptr()) };
        tracing::debug!("Opened X display, default screen {}", screen);
        Ok(XDisplay { display, screen })
    }
}

impl Drop for XDisplay {
    fn drop(&mut self) {
        unsafe { xlib::XCloseDisplay(self.display.as_ptr()) };
    }
}

impl DisplayServer for XDisplay {
    fn geometry(&self) -> ScreenGeometry {
        let display = self.display.as_ptr();
        unsafe {
            ScreenGeometry {
                width_px: xlib::XDisplayWidth(display, self.screen),
                height_px: xlib::XDisplayHeight(display, self.screen),
                width_mm: xlib::XDisplayWidthMM(display, self.screen),
                height_mm: xlib::XDisplayHeightMM(display, self.screen),
            }
        }
    }

    fn resources(&self) -> Option<Box<dyn PropertySource + '_>> {
        let data = unsafe { xlib::XResourceManagerString(self.display.as_ptr()) };
        if data.is_null() {
            return None;
        }
        unsafe { xlib::XrmInitialize() };
        // An empty string parses to a null database, which simply has no entries.
        let database = unsafe { xlib::XrmGetStringDatabase(data) };
        Some(Box::new(ResourceDatabase { database }))
    }
}

/// Parsed `RESOURCE_MANAGER` contents, destroyed on drop.
struct ResourceDatabase {
    database: xlib::XrmDatabase,
}

impl PropertySource for ResourceDatabase {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult {
        if !matches!(kind, ValueKind::Bytes | ValueKind::Any) {
            return Err(LookupOutcome::TypeMismatch);
        }
        if self.database.is_null() {
            return Err(LookupOutcome::NotFound);
        }
        let name = CString::new(key).map_err(|_| LookupOutcome::NotFound)?;
        let class = CString::new(RESOURCE_CLASS).map_err(|_| LookupOutcome::NotFound)?;

        let mut resource_type: *mut c_char = ptr::null_mut();
        let mut value = xlib::XrmValue {
            size: 0,
            addr: ptr::null_mut(),
        };
        let found = unsafe {
            xlib::XrmGetResource(
                self.database,
                name.as_ptr(),
                class.as_ptr(),
                &mut resource_type,
                &mut value,
            )
        };
        if found == 0 || value.addr.is_null() {
            return Err(LookupOutcome::NotFound);
        }

        // Xlib owns the value; copy exactly `size` bytes out of it.
        let bytes =
            unsafe { std::slice::from_raw_parts(value.addr as *const u8, value.size as usize) };
        Ok(TypedValue::Bytes(bytes.to_vec()))
    }
}

impl Drop for ResourceDatabase {
    fn drop(&mut self) {
        if !self.database.is_null() {
            unsafe { xlib::XrmDestroyDatabase(self.database) };
        }
    }
}
