//! Descriptor template for new skills.

use crate::error::{Result, SkillpackError};
use crate::resources::ResourceKind;

const DESCRIPTOR_TEMPLATE: &str = r#"---
name: {{name}}
description: {{description}}
---

# {{title}}

Brief description of what this skill does.

## Usage

When to use this skill and how.

## Resources

{{resources}}
"#;

/// Values substituted into the descriptor template.
#[derive(Debug, Clone)]
pub struct DescriptorContext {
    pub name: String,
    pub title: String,
    pub description: String,
    pub resources: Vec<ResourceKind>,
}

impl DescriptorContext {
    fn resources_section(&self) -> String {
        if self.resources.is_empty() {
            return "None yet.".to_string();
        }
        self.resources
            .iter()
            .map(|kind| kind.bullet())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Placeholder used when no description is supplied.
#[must_use]
pub fn placeholder_description(name: &str) -> String {
    format!("Description of what {name} does and when to use it")
}

/// Render the `SKILL.md` content for a new skill.
pub fn render_descriptor(ctx: &DescriptorContext) -> Result<String> {
    if ctx.name.trim().is_empty() {
        return Err(SkillpackError::InvalidName(
            "descriptor name is required".to_string(),
        ));
    }

    Ok(DESCRIPTOR_TEMPLATE
        .replace("{{name}}", &ctx.name)
        .replace("{{title}}", &ctx.title)
        .replace("{{description}}", &ctx.description)
        .replace("{{resources}}", &ctx.resources_section()))
}
