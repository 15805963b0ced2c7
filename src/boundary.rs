use std::fmt;

/// Non-fatal notices raised while serving a request.
/// They never change a result and are only reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A bump was requested with dry run disabled; nothing is ever written
    NothingPersisted { version: String },
    /// Compared versions share precedence but carry different build metadata
    BuildMetadataIgnored { left: String, right: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NothingPersisted { version } => {
                write!(
                    f,
                    "Dry run disabled, but '{}' is only computed: nothing is written",
                    version
                )
            }
            BoundaryWarning::BuildMetadataIgnored { left, right } => {
                write!(
                    f,
                    "Build metadata of '{}' and '{}' differs but is ignored for precedence",
                    left, right
                )
            }
        }
    }
}
