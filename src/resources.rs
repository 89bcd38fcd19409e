//! Reserved resource subdirectories a skill may declare.

/// One of the fixed resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Scripts,
    References,
    Assets,
}

impl ResourceKind {
    /// Directory name inside the skill.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Scripts => "scripts",
            Self::References => "references",
            Self::Assets => "assets",
        }
    }

    /// Parse a single token; anything outside the reserved set is `None`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "scripts" => Some(Self::Scripts),
            "references" => Some(Self::References),
            "assets" => Some(Self::Assets),
            _ => None,
        }
    }

    /// Bullet line for the descriptor's Resources section.
    #[must_use]
    pub fn bullet(self) -> String {
        let dir = self.dir_name();
        format!("- **{dir}/**: See [{dir}/]({dir}/) directory")
    }
}

/// Parse requested tokens, silently dropping unknown tokens and duplicates.
/// First-seen order is preserved.
#[must_use]
pub fn parse_tokens(tokens: &[String]) -> Vec<ResourceKind> {
    let mut kinds = Vec::new();
    for token in tokens {
        if let Some(kind) = ResourceKind::parse(token) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}
