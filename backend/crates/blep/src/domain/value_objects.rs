//! Domain Value Objects
//!
//! Immutable value types for the blep domain.

use serde_json::Value;
use std::fmt;

/// Country code, always trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalize a raw code; `None` when it is blank
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    /// Wrap a code read back from storage
    pub(crate) fn from_stored(code: String) -> Self {
        Self(code.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of bleps added by one request
///
/// Clients batch rapid clicks into a single request, so the amount is
/// client-controlled. Anything missing, non-numeric or below one counts
/// as a single blep; anything above [`BlepCount::MAX`] is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlepCount(u32);

impl BlepCount {
    pub const DEFAULT: BlepCount = BlepCount(1);
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 50;

    /// Clamp a requested amount into the accepted range
    pub fn from_requested(requested: Option<i64>) -> Self {
        match requested {
            Some(n) if n >= Self::MIN as i64 => Self(n.min(Self::MAX as i64) as u32),
            _ => Self::DEFAULT,
        }
    }

    /// Interpret the raw `count` field of a request body
    ///
    /// Numbers and numeric strings are accepted and truncated toward zero.
    pub fn from_json(raw: Option<&Value>) -> Self {
        let requested = match raw {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(truncate),
            _ => None,
        };
        Self::from_requested(requested)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for BlepCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<BlepCount> for i64 {
    fn from(count: BlepCount) -> Self {
        count.0 as i64
    }
}

fn truncate(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}
