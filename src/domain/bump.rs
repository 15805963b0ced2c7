use crate::domain::version::Version;
use crate::error::{Result, SemVerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version component to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
}

impl BumpPart {
    /// The lowercase tag of this part
    pub fn as_str(self) -> &'static str {
        match self {
            BumpPart::Major => "major",
            BumpPart::Minor => "minor",
            BumpPart::Patch => "patch",
        }
    }
}

impl FromStr for BumpPart {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpPart::Major),
            "minor" => Ok(BumpPart::Minor),
            "patch" => Ok(BumpPart::Patch),
            other => Err(SemVerError::schema(format!(
                "unknown bump part '{}', expected one of major, minor, patch",
                other
            ))),
        }
    }
}

impl fmt::Display for BumpPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn increment(value: u64, part: BumpPart, version: &Version) -> Result<u64> {
    match value.checked_add(1) {
        Some(next) => Ok(next),
        None => {
            let msg = format!("cannot bump {} of {}", part, version);
            Err(SemVerError::overflow(msg))
        }
    }
}

impl Version {
    /// Bump version according to the requested part
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Pre-release and build metadata are dropped unless `keep_prerelease` is
    /// set, whatever the part. `self` is left untouched.
    ///
    /// # Example
    /// ```ignore
    /// let v = Version::parse("1.2.3-alpha.1+build.5")?;
    /// assert_eq!(v.bump(BumpPart::Patch, false)?.to_string(), "1.2.4");
    /// assert_eq!(v.bump(BumpPart::Patch, true)?.to_string(), "1.2.4-alpha.1+build.5");
    /// ```
    pub fn bump(&self, part: BumpPart, keep_prerelease: bool) -> Result<Version> {
        let (major, minor, patch) = match part {
            BumpPart::Major => (increment(self.major, part, self)?, 0, 0),
            BumpPart::Minor => (self.major, increment(self.minor, part, self)?, 0),
            BumpPart::Patch => (self.major, self.minor, increment(self.patch, part, self)?),
        };

        let (prerelease, build) = if keep_prerelease {
            (self.prerelease.clone(), self.build.clone())
        } else {
            (None, None)
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }
}
