//! Strict request schemas validated before the engine is invoked
//!
//! Requests are decoded from JSON with unknown fields rejected and no type
//! coercion: `"dry_run": "true"` or `"part": "build"` fail here with a
//! schema error and never reach the engine.

use crate::domain::{BumpPart, CompareOp};
use crate::error::{Result, SemVerError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Arguments of the `bump_version` operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BumpRequest {
    /// Current version, e.g. `1.2.3`, `1.2.3-alpha.1` or `v1.2.3`
    pub version: String,

    /// Which part of the version to bump
    pub part: BumpPart,

    /// Descriptive only: the result is computed the same way either way
    #[serde(default = "default_true", alias = "dryRun")]
    pub dry_run: bool,

    /// Allow a leading `v` prefix
    #[serde(default = "default_true", alias = "allowVPrefix")]
    pub allow_v_prefix: bool,

    /// Preserve pre-release and build metadata instead of clearing them
    #[serde(default, alias = "keepPrerelease")]
    pub keep_prerelease: bool,
}

impl BumpRequest {
    /// Request with default options
    pub fn new(version: impl Into<String>, part: BumpPart) -> Self {
        BumpRequest {
            version: version.into(),
            part,
            dry_run: true,
            allow_v_prefix: true,
            keep_prerelease: false,
        }
    }

    /// Decode and validate a JSON request
    pub fn from_json(json: &str) -> Result<Self> {
        let request: BumpRequest = decode(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Check constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        require_non_empty("version", &self.version)
    }
}

/// Arguments of the `compare_versions` operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareRequest {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,

    /// Comparison operator
    pub op: CompareOp,

    /// Allow a leading `v` prefix on both sides
    #[serde(default = "default_true", alias = "allowVPrefix")]
    pub allow_v_prefix: bool,
}

impl CompareRequest {
    /// Request with default options
    pub fn new(left: impl Into<String>, right: impl Into<String>, op: CompareOp) -> Self {
        CompareRequest {
            left: left.into(),
            right: right.into(),
            op,
            allow_v_prefix: true,
        }
    }

    /// Decode and validate a JSON request
    pub fn from_json(json: &str) -> Result<Self> {
        let request: CompareRequest = decode(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Check constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        require_non_empty("left", &self.left)?;
        require_non_empty("right", &self.right)
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| SemVerError::schema(e.to_string()))
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        let msg = format!("field '{}' must not be empty", field);
        return Err(SemVerError::schema(msg));
    }
    Ok(())
}
