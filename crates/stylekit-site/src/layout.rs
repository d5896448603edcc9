//! Root layout: document metadata and web fonts.

/// A web font family loaded by the layout.
#[derive(Debug, Clone, Copy)]
pub struct FontFace {
    /// Family name as published on Google Fonts
    pub family: &'static str,
    /// Loaded weights, ascending
    pub weights: &'static [u16],
    /// Whether italics are loaded alongside the normal style
    pub italic: bool,
    /// CSS custom property holding the family, without the leading `--`
    pub variable: &'static str,
    /// Generic fallback family
    pub fallback: &'static str,
}

impl FontFace {
    /// The `family=` parameter of a Google Fonts CSS2 request.
    ///
    /// e.g. `JetBrains+Mono:ital,wght@0,400;0,700;1,400;1,700`
    pub fn google_family(&self) -> String {
        let name = self.family.replace(' ', "+");
        let styles: &[u8] = if self.italic { &[0, 1] } else { &[0] };

        let tuples = styles
            .iter()
            .flat_map(|ital| self.weights.iter().map(move |w| format!("{},{}", ital, w)))
            .collect::<Vec<_>>()
            .join(";");

        format!("{}:ital,wght@{}", name, tuples)
    }

    /// Body class that defines the custom property, e.g. `font-rubik`.
    pub fn class_name(&self) -> &'static str {
        self.variable
    }

    /// `.font-rubik { --font-rubik: 'Rubik', sans-serif; }`
    pub fn css(&self) -> String {
        format!(
            ".{0} {{ --{0}: '{1}', {2}; }}",
            self.variable, self.family, self.fallback
        )
    }
}

/// Fonts loaded by every page.
pub const FONTS: [FontFace; 3] = [
    FontFace {
        family: "Montserrat",
        weights: &[400, 500, 600, 700, 800],
        italic: true,
        variable: "font-montserrat",
        fallback: "sans-serif",
    },
    FontFace {
        family: "Rubik",
        weights: &[300, 400, 500, 600, 700, 800, 900],
        italic: true,
        variable: "font-rubik",
        fallback: "sans-serif",
    },
    FontFace {
        family: "JetBrains Mono",
        weights: &[400, 500, 600, 700],
        italic: true,
        variable: "font-jetbrains-mono",
        fallback: "monospace",
    },
];

/// Stylesheet URL loading every font in [`FONTS`].
pub fn google_fonts_url() -> String {
    let families = FONTS
        .iter()
        .map(|font| format!("family={}", font.google_family()))
        .collect::<Vec<_>>()
        .join("&");

    format!("https://fonts.googleapis.com/css2?{}&display=swap", families)
}

/// Classes put on `<body>` so the font custom properties are defined.
pub fn body_class() -> String {
    FONTS
        .iter()
        .map(FontFace::class_name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Document `<title>` and description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    /// Metadata for the documentation of `name`.
    pub fn documentation(name: &str, description: &str) -> Self {
        Self {
            title: format!("{} - Documentation", name),
            description: description.to_string(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::documentation(stylekit_content::TITLE, stylekit_content::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_google_family_parameter() {
        assert_eq!(
            FONTS[2].google_family(),
            "JetBrains+Mono:ital,wght@0,400;0,500;0,600;0,700;1,400;1,500;1,600;1,700"
        );
    }

    #[test]
    fn fonts_url_requests_every_family() {
        let url = google_fonts_url();

        assert!(url.starts_with("https://fonts.googleapis.com/css2?family=Montserrat:"));
        assert!(url.contains("&family=Rubik:ital,wght@0,300;"));
        assert!(url.contains("1,900"));
        assert!(url.ends_with("&display=swap"));
    }

    #[test]
    fn body_class_names_font_variables() {
        assert_eq!(body_class(), "font-montserrat font-rubik font-jetbrains-mono");
        assert_eq!(FONTS[1].css(), ".font-rubik { --font-rubik: 'Rubik', sans-serif; }");
    }

    #[test]
    fn default_metadata() {
        let meta = Metadata::default();
        assert_eq!(meta.title, "StyleKit - Documentation");
        assert_eq!(
            meta.description,
            "A modular SCSS design system with utilities, colors, typography, and animations"
        );
    }
}
