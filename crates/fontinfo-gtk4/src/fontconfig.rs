//! Fontconfig pattern matching

use std::ffi::{c_char, CStr, CString};
use std::fmt;
use std::ptr::{self, NonNull};

use fontconfig_sys::{
    constants::{FC_FAMILY, FC_PIXEL_SIZE, FC_SIZE, FC_SLANT, FC_WEIGHT},
    statics::{LIB, LIB_RESULT},
    FcBool, FcChar8, FcMatchPattern, FcPattern,
};
use fontinfo_core::{
    FontMatcher, FontQuery, LookupOutcome, LookupResult, MatchResult, PropertySource,
    ReportError, ReportResult, RequestedSize, TypedValue, ValueKind,
};

/// Owned `FcPattern`, destroyed on drop.
struct Pattern {
    inner: NonNull<FcPattern>,
}

impl Pattern {
    fn new() -> Option<Self> {
        unsafe { Self::from_raw((LIB.FcPatternCreate)()) }
    }

    /// Take ownership of a pattern returned by Fontconfig.
    unsafe fn from_raw(raw: *mut FcPattern) -> Option<Self> {
        Some(Self {
            inner: NonNull::new(raw)?,
        })
    }

    // All values passed to FcPatternAdd* are copied.
    fn add_string(&mut self, object: &CStr, s: &CStr) -> bool {
        unsafe {
            (LIB.FcPatternAddString)(self.inner.as_ptr(), object.as_ptr(), s.as_ptr() as *const FcChar8)
                != 0
        }
    }

    fn add_integer(&mut self, object: &CStr, i: i32) -> bool {
        unsafe { (LIB.FcPatternAddInteger)(self.inner.as_ptr(), object.as_ptr(), i) != 0 }
    }

    fn add_double(&mut self, object: &CStr, d: f64) -> bool {
        unsafe { (LIB.FcPatternAddDouble)(self.inner.as_ptr(), object.as_ptr(), d) != 0 }
    }

    /// Apply the current configuration's match-pattern rules, then the
    /// library defaults.
    fn substitute(&mut self) {
        unsafe {
            (LIB.FcConfigSubstitute)(ptr::null_mut(), self.inner.as_ptr(), FcMatchPattern);
            (LIB.FcDefaultSubstitute)(self.inner.as_ptr());
        }
    }

    /// Best match from the system font set.
    fn font_match(&self) -> Option<Pattern> {
        let mut result = 0;
        let matched = unsafe {
            Pattern::from_raw((LIB.FcFontMatch)(ptr::null_mut(), self.inner.as_ptr(), &mut result))
        };
        tracing::debug!("FcFontMatch: {}", MatchResult::from_raw(result as u32).as_str());
        matched
    }

    fn get_string(&self, object: &CStr) -> LookupResult {
        let mut dest: *mut FcChar8 = ptr::null_mut();
        let result = unsafe {
            (LIB.FcPatternGetString)(self.inner.as_ptr(), object.as_ptr(), 0, &mut dest)
        };
        MatchResult::from_raw(result as u32).into_outcome()?;
        let dest = NonNull::new(dest).ok_or(LookupOutcome::NotFound)?;
        let value = unsafe { CStr::from_ptr(dest.as_ptr() as *const c_char) };
        Ok(TypedValue::Str(value.to_string_lossy().into_owned()))
    }

    fn get_integer(&self, object: &CStr) -> LookupResult {
        let mut dest = 0;
        let result = unsafe {
            (LIB.FcPatternGetInteger)(self.inner.as_ptr(), object.as_ptr(), 0, &mut dest)
        };
        MatchResult::from_raw(result as u32).into_outcome()?;
        Ok(TypedValue::Int(dest))
    }

    fn get_double(&self, object: &CStr) -> LookupResult {
        let mut dest = 0.0;
        let result = unsafe {
            (LIB.FcPatternGetDouble)(self.inner.as_ptr(), object.as_ptr(), 0, &mut dest)
        };
        MatchResult::from_raw(result as u32).into_outcome()?;
        Ok(TypedValue::Double(dest))
    }

    fn get_bool(&self, object: &CStr) -> LookupResult {
        let mut dest: FcBool = 0;
        let result = unsafe {
            (LIB.FcPatternGetBool)(self.inner.as_ptr(), object.as_ptr(), 0, &mut dest)
        };
        MatchResult::from_raw(result as u32).into_outcome()?;
        Ok(TypedValue::Bool(dest != 0))
    }
}

impl PropertySource for Pattern {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult {
        let object = CString::new(key).map_err(|_| LookupOutcome::NotFound)?;
        match kind {
            ValueKind::Str => self.get_string(&object),
            ValueKind::Int => self.get_integer(&object),
            ValueKind::Double => self.get_double(&object),
            ValueKind::Bool => self.get_bool(&object),
            ValueKind::Bytes | ValueKind::Any => Err(LookupOutcome::TypeMismatch),
        }
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        unsafe { (LIB.FcPatternDestroy)(self.inner.as_ptr()) };
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NonNull::new(unsafe { (LIB.FcNameUnparse)(self.inner.as_ptr()) }) {
            Some(unparsed) => {
                let res = f.write_str(unsafe {
                    &CStr::from_ptr(unparsed.as_ptr() as *const c_char).to_string_lossy()
                });
                unsafe { (LIB.FcStrFree)(unparsed.as_ptr()) };
                res
            }
            None => f.debug_struct("Pattern").finish(),
        }
    }
}

/// Resolves queries against the current Fontconfig configuration.
#[derive(Debug)]
pub struct FontconfigMatcher {
    _private: (),
}

impl FontconfigMatcher {
    pub fn new() -> ReportResult<Self> {
        if LIB_RESULT.as_ref().is_err() {
            tracing::error!("Fontconfig library could not be loaded");
            return Err(ReportError::LibraryUnavailable);
        }
        Ok(FontconfigMatcher { _private: () })
    }

    fn build_pattern(query: &FontQuery) -> ReportResult<Pattern> {
        let mut pattern = Pattern::new().ok_or(ReportError::PatternAllocation)?;

        if let Some(family) = &query.family {
            match CString::new(family.as_str()) {
                Ok(family) => {
                    pattern.add_string(FC_FAMILY, &family);
                }
                Err(_) => tracing::warn!("Ignoring family name with embedded NUL: {:?}", family),
            }
        }
        if let Some(weight) = query.weight {
            pattern.add_integer(FC_WEIGHT, weight);
        }
        if let Some(slant) = query.slant {
            pattern.add_integer(FC_SLANT, slant);
        }
        match query.size {
            Some(RequestedSize::Pixels(pixels)) => {
                pattern.add_double(FC_PIXEL_SIZE, pixels);
            }
            Some(RequestedSize::Points(points)) => {
                pattern.add_integer(FC_SIZE, points);
            }
            None => {}
        }
        Ok(pattern)
    }
}

impl FontMatcher for FontconfigMatcher {
    fn resolve(&self, query: &FontQuery) -> ReportResult<Box<dyn PropertySource + '_>> {
        let mut pattern = Self::build_pattern(query)?;
        tracing::debug!("Fontconfig query: {:?}", pattern);
        pattern.substitute();

        let matched = pattern.font_match().ok_or_else(|| ReportError::FontMatchFailed {
            query: format!("{:?}", pattern),
        })?;
        tracing::debug!("Fontconfig match: {:?}", matched);
        Ok(Box::new(matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontinfo_core::constants as names;

    const MATCH_OBJECTS: [(&str, ValueKind); 8] = [
        (names::FC_FAMILY, ValueKind::Str),
        (names::FC_PIXEL_SIZE, ValueKind::Double),
        (names::FC_SIZE, ValueKind::Int),
        (names::FC_ANTIALIAS, ValueKind::Bool),
        (names::FC_HINTING, ValueKind::Bool),
        (names::FC_AUTOHINT, ValueKind::Bool),
        (names::FC_HINT_STYLE, ValueKind::Int),
        (names::FC_RGBA, ValueKind::Int),
    ];

    fn sans_pattern() -> Pattern {
        let mut pattern = Pattern::new().unwrap();
        assert!(pattern.add_string(FC_FAMILY, c"Sans"));
        assert!(pattern.add_integer(FC_WEIGHT, names::FC_WEIGHT_BOLD));
        pattern
    }

    #[test]
    fn test_typed_getters() {
        let pattern = sans_pattern();
        assert_eq!(
            pattern.get(names::FC_FAMILY, ValueKind::Str),
            Ok(TypedValue::Str("Sans".into()))
        );
        assert_eq!(pattern.get("weight", ValueKind::Int), Ok(TypedValue::Int(200)));
    }

    #[test]
    fn test_wrong_kind_is_type_mismatch() {
        let pattern = sans_pattern();
        assert_eq!(
            pattern.get(names::FC_FAMILY, ValueKind::Int),
            Err(LookupOutcome::TypeMismatch)
        );
    }

    #[test]
    fn test_absent_object_is_no_match() {
        let pattern = sans_pattern();
        let outcome = pattern.get(names::FC_RGBA, ValueKind::Int).unwrap_err();
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert_eq!(outcome.result_name(), "no match");
    }

    #[test]
    fn test_debug_unparses_pattern() {
        let pattern = sans_pattern();
        assert!(format!("{:?}", pattern).starts_with("Sans"));
    }

    #[test]
    fn test_unconstrained_match_answers_every_field() {
        let matcher = FontconfigMatcher::new().unwrap();
        let matched = matcher.resolve(&FontQuery::default()).unwrap();

        for (object, kind) in MATCH_OBJECTS {
            match matched.get(object, kind) {
                Ok(value) => assert_eq!(value.kind(), kind, "{}", object),
                Err(outcome) => assert_ne!(
                    MatchResult::from(outcome),
                    MatchResult::Unknown,
                    "{}",
                    object
                ),
            }
        }
    }

    #[test]
    fn test_sized_query_matches() {
        let matcher = FontconfigMatcher::new().unwrap();
        let query = FontQuery {
            family: Some("Sans".into()),
            weight: None,
            slant: Some(names::FC_SLANT_ITALIC),
            size: Some(RequestedSize::Points(12)),
        };
        let matched = matcher.resolve(&query).unwrap();
        assert!(matched.get(names::FC_FAMILY, ValueKind::Str).is_ok());
    }
}
