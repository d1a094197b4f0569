//! Typed property lookup shared by every settings backend
//!
//! Toolkit settings, the desktop settings store, the X resource database and
//! Fontconfig patterns all answer the same question: "what is the value of
//! this named property, and if there is none, why not". They implement
//! [`PropertySource`] so reporters can be written as tables of property
//! names, expected kinds and renderers.

use std::fmt;

/// The type a reporter expects a property to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Bool,
    Double,
    Str,
    /// Raw bytes, as stored in the X resource database.
    Bytes,
    /// Whatever the store holds; used where the stored type picks the format.
    Any,
}

/// A property value read from a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Int(i32),
    Bool(bool),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl TypedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Int(_) => ValueKind::Int,
            TypedValue::Bool(_) => ValueKind::Bool,
            TypedValue::Double(_) => ValueKind::Double,
            TypedValue::Str(_) => ValueKind::Str,
            TypedValue::Bytes(_) => ValueKind::Bytes,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            TypedValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Failure modes a backend may report for a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFault {
    NoId,
    OutOfMemory,
    Other,
}

/// Why a lookup produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    NotFound,
    TypeMismatch,
    Backend(BackendFault),
}

impl LookupOutcome {
    /// Short description used in bracketed placeholders.
    pub fn result_name(self) -> &'static str {
        MatchResult::from(self).as_str()
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.result_name())
    }
}

/// Fontconfig's `FcResult` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    NoMatch,
    TypeMismatch,
    NoId,
    OutOfMemory,
    Unknown,
}

impl MatchResult {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => MatchResult::Match,
            1 => MatchResult::NoMatch,
            2 => MatchResult::TypeMismatch,
            3 => MatchResult::NoId,
            4 => MatchResult::OutOfMemory,
            _ => MatchResult::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchResult::Match => "match",
            MatchResult::NoMatch => "no match",
            MatchResult::TypeMismatch => "type mismatch",
            MatchResult::NoId => "no id",
            MatchResult::OutOfMemory => "out of memory",
            MatchResult::Unknown => "unknown",
        }
    }

    /// `Ok(())` for [`MatchResult::Match`], the lookup outcome otherwise.
    pub fn into_outcome(self) -> Result<(), LookupOutcome> {
        match self {
            MatchResult::Match => Ok(()),
            MatchResult::NoMatch => Err(LookupOutcome::NotFound),
            MatchResult::TypeMismatch => Err(LookupOutcome::TypeMismatch),
            MatchResult::NoId => Err(LookupOutcome::Backend(BackendFault::NoId)),
            MatchResult::OutOfMemory => Err(LookupOutcome::Backend(BackendFault::OutOfMemory)),
            MatchResult::Unknown => Err(LookupOutcome::Backend(BackendFault::Other)),
        }
    }
}

impl From<LookupOutcome> for MatchResult {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::NotFound => MatchResult::NoMatch,
            LookupOutcome::TypeMismatch => MatchResult::TypeMismatch,
            LookupOutcome::Backend(BackendFault::NoId) => MatchResult::NoId,
            LookupOutcome::Backend(BackendFault::OutOfMemory) => MatchResult::OutOfMemory,
            LookupOutcome::Backend(BackendFault::Other) => MatchResult::Unknown,
        }
    }
}

pub type LookupResult = Result<TypedValue, LookupOutcome>;

/// Read access to a set of named, typed properties.
pub trait PropertySource {
    fn get(&self, key: &str, kind: ValueKind) -> LookupResult;
}
