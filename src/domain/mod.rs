//! Domain logic - pure versioning rules, no I/O

pub mod bump;
pub mod grammar;
pub mod interop;
pub mod state;
pub mod version;

pub use bump::{BumpAxis, VersionBump};
pub use state::ReleaseState;
pub use version::Version;
