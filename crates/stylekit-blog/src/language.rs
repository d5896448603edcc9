//! Display languages for code blocks.

/// Language tag of a code block, used only to pick syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Scss,
    Bash,
    Tsx,
    Vue,
    #[default]
    Text,
}

impl Language {
    /// The tag handed to the highlighter (`language-<tag>` class).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Bash => "bash",
            Self::Tsx => "tsx",
            Self::Vue => "vue",
            Self::Text => "text",
        }
    }

    /// Human-readable label shown in the code block header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scss => "SCSS",
            Self::Bash => "Bash",
            Self::Tsx => "TSX",
            Self::Vue => "Vue",
            Self::Text => "Text",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_highlighter_tag() {
        assert_eq!(Language::Scss.to_string(), "scss");
        assert_eq!(Language::Tsx.label(), "TSX");
        assert_eq!(Language::default().to_string(), "text");
    }
}
