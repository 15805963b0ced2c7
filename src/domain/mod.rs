//! Domain logic - the pure SemVer engine: normalize, parse, compare, bump, format

pub mod bump;
pub mod compare;
pub mod normalize;
pub mod prerelease;
pub mod version;

pub use bump::BumpPart;
pub use compare::{compare, CompareOp};
pub use normalize::normalize;
pub use prerelease::PreRelease;
pub use version::Version;
