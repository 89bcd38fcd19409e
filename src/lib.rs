pub mod cli;
pub mod error;
pub mod name;
pub mod package;
pub mod resources;
pub mod templates;
pub mod validate;

pub use error::{Result, SkillpackError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
