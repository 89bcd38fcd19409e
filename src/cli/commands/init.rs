//! skillpack init - Create a new skill directory from the template

use std::fs;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::error::{Result, SkillpackError};
use crate::name;
use crate::resources;
use crate::templates::{self, DescriptorContext};
use crate::validate::DESCRIPTOR_FILE;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Skill name (will be normalized to a lowercase slug)
    pub name: String,

    /// Directory the skill directory is created under
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Comma-separated resource directories: scripts,references,assets
    #[arg(long, value_delimiter = ',')]
    pub resources: Vec<String>,

    /// Skill description for the frontmatter
    #[arg(long, default_value = "")]
    pub description: String,
}

pub fn run(args: &InitArgs) -> Result<()> {
    let skill_name = name::normalize(&args.name);
    if skill_name.is_empty() {
        return Err(SkillpackError::InvalidName(format!(
            "{:?} normalizes to an empty slug",
            args.name
        )));
    }

    let skill_dir = args.path.join(&skill_name);
    if skill_dir.exists() {
        return Err(SkillpackError::AlreadyExists(skill_dir));
    }
    fs::create_dir_all(&skill_dir)?;

    let kinds = resources::parse_tokens(&args.resources);
    for kind in &kinds {
        fs::create_dir(skill_dir.join(kind.dir_name()))?;
    }

    let description = if args.description.trim().is_empty() {
        templates::placeholder_description(&skill_name)
    } else {
        args.description.clone()
    };

    let descriptor = templates::render_descriptor(&DescriptorContext {
        name: skill_name.clone(),
        title: name::title(&skill_name),
        description,
        resources: kinds.clone(),
    })?;
    fs::write(skill_dir.join(DESCRIPTOR_FILE), descriptor)?;

    println!(
        "{} {}/",
        "Created skill:".bold(),
        skill_dir.display()
    );
    println!("  - {DESCRIPTOR_FILE}");
    for kind in &kinds {
        println!("  - {}/", kind.dir_name());
    }

    Ok(())
}
