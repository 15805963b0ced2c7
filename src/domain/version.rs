use crate::domain::normalize::normalize;
use crate::domain::prerelease::PreRelease;
use crate::error::{Result, SemVerError};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// SemVer 2.0.0 grammar. ASCII classes only: `\d` would admit Unicode digits.
    static ref SEMVER_RE: Regex = Regex::new(concat!(
        r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
        r"(?:-(?P<pre>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    ))
    .expect("SemVer grammar is a valid regex");
}

/// Semantic version representation
///
/// Equality is structural and includes build metadata. Precedence, which
/// ignores build metadata, is available through [`Version::cmp_precedence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<PreRelease>,
    pub build: Option<String>,
}

impl Version {
    /// Create a new release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Attach a pre-release component
    pub fn with_prerelease(mut self, prerelease: PreRelease) -> Self {
        self.prerelease = Some(prerelease);
        self
    }

    /// Attach build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Parse a normalized version string (no prefix)
    ///
    /// The whole string must match
    /// `<major>.<minor>.<patch>[-<prerelease>][+<build>]`.
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err(SemVerError::InvalidVersion)` - Any deviation from the grammar,
    ///   or a numeric component too large for `u64`
    pub fn parse(s: &str) -> Result<Self> {
        let captures = SEMVER_RE
            .captures(s)
            .ok_or_else(|| SemVerError::invalid_version(s))?;

        let component = |name: &str| -> Result<u64> {
            captures[name]
                .parse::<u64>()
                .map_err(|_| SemVerError::invalid_version(s))
        };

        let prerelease = captures
            .name("pre")
            .map(|pre| PreRelease::parse(pre.as_str()))
            .transpose()
            .map_err(|_| SemVerError::invalid_version(s))?;

        let version = Version {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
            prerelease,
            build: captures.name("build").map(|m| m.as_str().to_string()),
        };
        log::trace!("Parsed '{}' as {:?}", s, version);
        Ok(version)
    }

    /// Parse a raw version string, stripping a leading `v` when allowed
    ///
    /// The error always carries the raw input, prefix included.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Version::parse_with_prefix("v1.2.3", true)?, Version::new(1, 2, 3));
    /// assert!(Version::parse_with_prefix("v1.2.3", false).is_err());
    /// ```
    pub fn parse_with_prefix(raw: &str, allow_v_prefix: bool) -> Result<Self> {
        Version::parse(normalize(raw, allow_v_prefix))
            .map_err(|_| SemVerError::invalid_version(raw))
    }
}

impl FromStr for Version {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
