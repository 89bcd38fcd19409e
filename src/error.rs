use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillpackError {
    #[error("Invalid skill name: {0}")]
    InvalidName(String),

    #[error("Directory already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Skill validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, SkillpackError>;
