pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{BumpPart, CompareOp, PreRelease, Version};
pub use error::{Result, SemVerError};
