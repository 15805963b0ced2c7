//! SemVer precedence and the closed set of comparison operators

use crate::domain::version::Version;
use crate::error::{Result, SemVerError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

impl Version {
    /// Precedence between two versions, ignoring build metadata.
    ///
    /// 1. The `(major, minor, patch)` tuple decides if it differs.
    /// 2. A release outranks any pre-release of the same tuple.
    /// 3. Two pre-releases compare identifier by identifier.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => left.cmp_precedence(right),
            })
    }

    /// True if both versions have equal precedence but different build metadata
    pub fn differs_only_in_build(&self, other: &Version) -> bool {
        self.cmp_precedence(other).is_eq() && self.build != other.build
    }
}

/// Three-way precedence comparison of two versions
pub fn compare(left: &Version, right: &Version) -> Ordering {
    left.cmp_precedence(right)
}

/// Comparison operator applied to a precedence ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    Lt,
    Lte,
    Eq,
    Gte,
    Gt,
}

impl CompareOp {
    /// All operators, in declaration order
    pub const ALL: [CompareOp; 5] = [
        CompareOp::Lt,
        CompareOp::Lte,
        CompareOp::Eq,
        CompareOp::Gte,
        CompareOp::Gt,
    ];

    /// Whether `ordering` (left relative to right) satisfies this operator
    pub fn evaluate(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering.is_lt(),
            CompareOp::Lte => ordering.is_le(),
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::Gte => ordering.is_ge(),
            CompareOp::Gt => ordering.is_gt(),
        }
    }

    /// Compare two versions and apply this operator
    pub fn apply(self, left: &Version, right: &Version) -> bool {
        self.evaluate(compare(left, right))
    }

    /// The lowercase tag of this operator
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
            CompareOp::Eq => "eq",
            CompareOp::Gte => "gte",
            CompareOp::Gt => "gt",
        }
    }
}

impl FromStr for CompareOp {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lt" => Ok(CompareOp::Lt),
            "lte" => Ok(CompareOp::Lte),
            "eq" => Ok(CompareOp::Eq),
            "gte" => Ok(CompareOp::Gte),
            "gt" => Ok(CompareOp::Gt),
            other => Err(SemVerError::schema(format!(
                "unknown comparison operator '{}', expected one of lt, lte, eq, gte, gt",
                other
            ))),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
