//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is a non-empty, dot-separated list of identifiers made of
//! ASCII alphanumerics and hyphens. Identifiers are compared position by
//! position: numerically when both are numeric, lexically (by byte) when
//! neither is, and a numeric identifier always ranks below a non-numeric one.
//! According to semver.org: https://semver.org/#spec-item-11

use crate::error::{Result, SemVerError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Returns true if the identifier is non-empty and made only of ASCII digits.
pub fn is_numeric_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the identifier matches `[0-9A-Za-z-]+`.
pub fn is_valid_identifier(ident: &str) -> bool {
    let allowed = |b: u8| b.is_ascii_alphanumeric() || b == b'-';
    !ident.is_empty() && ident.bytes().all(allowed)
}

/// Compares two digit strings as unbounded non-negative integers.
///
/// Leading zeros are tolerated, so `"007"` equals `"7"`.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two pre-release identifiers at the same position.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric_identifier(a), is_numeric_identifier(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Pre-release component of a version, e.g. `alpha.1` in `1.0.0-alpha.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<String>,
}

impl PreRelease {
    /// Parse a dot-separated pre-release string
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Every identifier is non-empty and well formed
    /// * `Err` - Empty input, empty identifier, or an illegal character
    pub fn parse(s: &str) -> Result<Self> {
        let identifiers: Vec<String> = s.split('.').map(str::to_string).collect();
        if identifiers.iter().all(|ident| is_valid_identifier(ident)) {
            Ok(PreRelease { identifiers })
        } else {
            Err(SemVerError::invalid_version(s))
        }
    }

    /// The identifiers in sequence order
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Precedence between two pre-releases of the same release tuple.
    ///
    /// The first differing position decides; if one list is a prefix of the
    /// other, the shorter one ranks lower.
    pub fn cmp_precedence(&self, other: &PreRelease) -> Ordering {
        self.identifiers
            .iter()
            .zip(other.identifiers.iter())
            .map(|(a, b)| compare_identifiers(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.identifiers.len().cmp(&other.identifiers.len()))
    }
}

impl FromStr for PreRelease {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::parse(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.join("."))
    }
}
