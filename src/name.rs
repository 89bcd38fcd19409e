//! Skill name normalization.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid regex"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("valid regex"));

/// Collapse a requested name to a lowercase hyphenated slug.
///
/// Runs of anything outside `[a-z0-9]` become a single hyphen; leading and
/// trailing hyphens are stripped. May return an empty string, which callers
/// must treat as an invalid name.
#[must_use]
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = NON_ALNUM.replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Human-readable title for a normalized name: hyphens become spaces and
/// each word is title-cased.
#[must_use]
pub fn title(normalized: &str) -> String {
    normalized
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a name value is already a valid slug.
#[must_use]
pub fn is_valid(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}
