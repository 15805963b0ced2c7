//! The two caller-facing operations
//!
//! Each operation takes an already validated request, runs the engine
//! pipeline (normalize, parse, then bump or compare) and returns a
//! serializable outcome. Any invalid version aborts the whole operation.

use serde::Serialize;

use crate::boundary::BoundaryWarning;
use crate::cli::request::{BumpRequest, CompareRequest};
use crate::domain::{CompareOp, Version};
use crate::error::{Result, SemVerError};

/// Result of `bump_version`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumpOutcome {
    /// The version exactly as given, prefix included
    pub old: String,

    /// The bumped version in canonical form
    pub new: String,

    /// Echo of the request's dry run flag
    #[serde(rename = "dryRun")]
    pub dry_run: bool,

    #[serde(skip)]
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of `compare_versions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareOutcome {
    pub left: String,
    pub right: String,
    pub op: CompareOp,
    pub result: bool,

    #[serde(skip)]
    pub warnings: Vec<BoundaryWarning>,
}

/// Outcome of a tool dispatched by name through [`call_tool`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Bump(BumpOutcome),
    Compare(CompareOutcome),
}

impl ToolOutcome {
    pub fn warnings(&self) -> &[BoundaryWarning] {
        match self {
            ToolOutcome::Bump(outcome) => &outcome.warnings,
            ToolOutcome::Compare(outcome) => &outcome.warnings,
        }
    }
}

/// Bump a SemVer 2.0.0 version
///
/// The result is computed only; `dry_run = false` changes nothing beyond the
/// echoed flag and a [`BoundaryWarning::NothingPersisted`] notice.
pub fn bump_version(request: &BumpRequest) -> Result<BumpOutcome> {
    let current = Version::parse_with_prefix(&request.version, request.allow_v_prefix)?;
    let bumped = current.bump(request.part, request.keep_prerelease)?;
    log::debug!("Bumped '{}' to '{}'", request.version, bumped);

    let mut warnings = Vec::new();
    if !request.dry_run {
        warnings.push(BoundaryWarning::NothingPersisted {
            version: bumped.to_string(),
        });
    }

    Ok(BumpOutcome {
        old: request.version.clone(),
        new: bumped.to_string(),
        dry_run: request.dry_run,
        warnings,
    })
}

/// Compare two SemVer 2.0.0 versions with the requested operator
pub fn compare_versions(request: &CompareRequest) -> Result<CompareOutcome> {
    let left = Version::parse_with_prefix(&request.left, request.allow_v_prefix)?;
    let right = Version::parse_with_prefix(&request.right, request.allow_v_prefix)?;
    let ordering = left.cmp_precedence(&right);
    let result = request.op.evaluate(ordering);
    log::debug!("Compared '{}' with '{}': {:?}", left, right, ordering);

    let mut warnings = Vec::new();
    if left.differs_only_in_build(&right) {
        warnings.push(BoundaryWarning::BuildMetadataIgnored {
            left: request.left.clone(),
            right: request.right.clone(),
        });
    }

    Ok(CompareOutcome {
        left: request.left.clone(),
        right: request.right.clone(),
        op: request.op,
        result,
        warnings,
    })
}

/// Run an operation by tool name on a raw JSON request
///
/// # Arguments
/// * `tool` - `bump_version` or `compare_versions`
/// * `json` - Request arguments, checked against the strict schema first
pub fn call_tool(tool: &str, json: &str) -> Result<ToolOutcome> {
    log::debug!("Dispatching tool '{}'", tool);
    match tool {
        "bump_version" => {
            let request = BumpRequest::from_json(json)?;
            Ok(ToolOutcome::Bump(bump_version(&request)?))
        }
        "compare_versions" => {
            let request = CompareRequest::from_json(json)?;
            Ok(ToolOutcome::Compare(compare_versions(&request)?))
        }
        other => Err(SemVerError::schema(format!(
            "unknown tool '{}', expected bump_version or compare_versions",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BumpPart;

    #[test]
    fn test_bump_outcome_echoes_raw_version() {
        let outcome = bump_version(&BumpRequest::new("v1.2.5", BumpPart::Patch)).unwrap();
        assert_eq!(outcome.old, "v1.2.5");
        assert_eq!(outcome.new, "1.2.6");
        assert!(outcome.dry_run);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_bump_without_dry_run_warns() {
        let mut request = BumpRequest::new("1.2.5", BumpPart::Minor);
        request.dry_run = false;
        let outcome = bump_version(&request).unwrap();
        assert_eq!(outcome.new, "1.3.0");
        assert!(!outcome.dry_run);
        let expected = BoundaryWarning::NothingPersisted {
            version: "1.3.0".to_string(),
        };
        assert_eq!(outcome.warnings, vec![expected]);
    }

    #[test]
    fn test_bump_invalid_version() {
        let request = BumpRequest::new("1.2", BumpPart::Patch);
        match bump_version(&request) {
            Err(SemVerError::InvalidVersion(raw)) => assert_eq!(raw, "1.2"),
            other => panic!("expected InvalidVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_compare_warns_on_build_only_difference() {
        let request = CompareRequest::new("1.0.0+build.1", "1.0.0+build.2", CompareOp::Eq);
        let outcome = compare_versions(&request).unwrap();
        assert!(outcome.result);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_compare_invalid_right_side() {
        let request = CompareRequest::new("1.0.0", "1.0", CompareOp::Lt);
        match compare_versions(&request) {
            Err(SemVerError::InvalidVersion(raw)) => assert_eq!(raw, "1.0"),
            other => panic!("expected InvalidVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = bump_version(&BumpRequest::new("1.2.5", BumpPart::Patch)).unwrap();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"old": "1.2.5", "new": "1.2.6", "dryRun": true})
        );

        let request = CompareRequest::new("1.0.0-alpha", "1.0.0", CompareOp::Lt);
        let outcome = compare_versions(&request).unwrap();
        let expected = serde_json::json!({
            "left": "1.0.0-alpha",
            "right": "1.0.0",
            "op": "lt",
            "result": true
        });
        assert_eq!(serde_json::to_value(&outcome).unwrap(), expected);
    }

    #[test]
    fn test_call_tool_unknown() {
        assert!(matches!(call_tool("repo_rg", "{}"), Err(SemVerError::Schema(_))));
    }
}
