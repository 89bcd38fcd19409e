//! skillpack package - Validate a skill directory and build its archive

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;

use crate::error::{Result, SkillpackError};
use crate::package::package_skill;
use crate::validate::validate_skill;

#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Path to the skill directory
    pub skill_path: PathBuf,

    /// Directory the .skill archive is written to
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run(args: &PackageArgs) -> Result<()> {
    let skill_path = absolute(&args.skill_path)?;
    let output_dir = absolute(&args.output_dir)?;

    println!("Validating {}...", skill_path.display());
    let errors = validate_skill(&skill_path)?;
    if !errors.is_empty() {
        eprintln!("{}", "Validation failed:".red().bold());
        for error in &errors {
            eprintln!("  - {error}");
        }
        return Err(SkillpackError::ValidationFailed(format!(
            "{} problem(s) found",
            errors.len()
        )));
    }
    println!("{}", "Validation passed!".green());

    let output_path = package_skill(&skill_path, &output_dir)?;
    println!("Created: {}", output_path.display());

    Ok(())
}

// Lexical absolutization: the output directory may not exist yet, so
// canonicalize is not an option.
fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
