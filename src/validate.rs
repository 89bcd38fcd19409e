//! Structural validation of a skill directory.
//!
//! Checks accumulate into an ordered error list so a user sees every
//! descriptor problem in one pass. Only the structural prerequisites
//! (directory exists, descriptor exists) short-circuit.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::name;

/// Required descriptor file at the skill root.
pub const DESCRIPTOR_FILE: &str = "SKILL.md";

const FRONTMATTER_DELIMITER: &str = "---";

/// Top-level files that do not belong in a distributable skill.
const EXTRANEOUS_FILES: &[&str] = &[
    "README.md",
    "INSTALLATION_GUIDE.md",
    "QUICK_REFERENCE.md",
    "CHANGELOG.md",
];

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^name:\s*(.+)$").expect("valid regex"));

/// Validate a skill directory, returning every problem found.
///
/// An empty list means the skill is valid. Reading the descriptor can fail
/// on I/O, which is fatal rather than a validation finding.
pub fn validate_skill(skill_path: &Path) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    if !skill_path.is_dir() {
        errors.push(format!("Not a directory: {}", skill_path.display()));
        return Ok(errors);
    }

    let descriptor = skill_path.join(DESCRIPTOR_FILE);
    if !descriptor.is_file() {
        errors.push(format!("Missing {DESCRIPTOR_FILE}"));
        return Ok(errors);
    }

    let content = std::fs::read_to_string(&descriptor)?;
    if content.starts_with(FRONTMATTER_DELIMITER) {
        let parts: Vec<&str> = content.splitn(3, FRONTMATTER_DELIMITER).collect();
        if parts.len() < 3 {
            errors.push("Invalid frontmatter format".to_string());
        } else {
            check_frontmatter(parts[1].trim(), &mut errors);
        }
    } else {
        errors.push(format!(
            "{DESCRIPTOR_FILE} must start with YAML frontmatter (---)"
        ));
    }

    for file in EXTRANEOUS_FILES {
        if skill_path.join(file).is_file() {
            errors.push(format!("Extraneous file: {file}"));
        }
    }

    Ok(errors)
}

fn check_frontmatter(frontmatter: &str, errors: &mut Vec<String>) {
    if !frontmatter.contains("name:") {
        errors.push("Missing 'name' in frontmatter".to_string());
    }
    if !frontmatter.contains("description:") {
        errors.push("Missing 'description' in frontmatter".to_string());
    }

    if let Some(captures) = NAME_LINE.captures(frontmatter) {
        let value = captures[1].trim();
        if !name::is_valid(value) {
            errors.push(format!("Invalid skill name '{value}'"));
        }
    }
}
