//! Caller-facing surface: strict request schemas and the two operations

pub mod orchestration;
pub mod request;

pub use orchestration::{
    bump_version, call_tool, compare_versions, BumpOutcome, CompareOutcome, ToolOutcome,
};
pub use request::{BumpRequest, CompareRequest};
