//! StyleKit design tokens.
//!
//! The documentation tables and the generated stylesheet both read these
//! values, so a number shown on the page is the number the CSS uses.

/// Root font size the rem conversions are based on.
pub const BASE_FONT_PX: u32 = 16;

/// Convert pixels to a rem length, e.g. `21` to `1.3125rem`.
pub fn rem(px: u32) -> String {
    format!("{}rem", f64::from(px) / f64::from(BASE_FONT_PX))
}

/// A named color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    /// Name without prefix, e.g. `primary-light`
    pub name: &'static str,
    /// CSS color value
    pub value: &'static str,
}

impl ColorToken {
    /// SCSS variable, e.g. `$color--primary-light`.
    pub fn variable(&self) -> String {
        format!("$color--{}", self.name)
    }

    /// CSS custom property, e.g. `--color-primary-light`.
    pub fn custom_property(&self) -> String {
        format!("--color-{}", self.name)
    }
}

const fn color(name: &'static str, value: &'static str) -> ColorToken {
    ColorToken { name, value }
}

/// The full palette, in documentation order.
pub const PALETTE: [ColorToken; 21] = [
    color("primary", "#4242fa"),
    color("primary-light", "rgba(66, 66, 250, 0.05)"),
    color("primary-lighter", "rgba(66, 66, 250, 0.02)"),
    color("primary-accent", "#fed600"),
    color("primary-accent-light", "#fef1c4"),
    color("primary-accent-lighter", "#fef8e0"),
    color("secondary", "#3dad84"),
    color("secondary-light", "#ecf7f3"),
    color("secondary-lighter", "#f2f9f7"),
    color("base", "#ffffff"),
    color("surface", "#f6f6f6"),
    color("code", "#e8f1fc"),
    color("grey-light", "#e1e5e9"),
    color("grey-medium", "#c6c6c7"),
    color("grey-dark", "#6b7c93"),
    color("grey-darker", "#4f5969"),
    color("error", "#ff4232"),
    color("error-light", "#ffecea"),
    color("link", "#0d6efd"),
    color("dark", "#313030"),
    color("black", "#000"),
];

/// A group of related colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorCategory {
    pub name: &'static str,
    /// Palette names in this category
    pub colors: &'static [&'static str],
    pub description: &'static str,
}

impl ColorCategory {
    /// Comma-separated SCSS variables of the category.
    pub fn variables(&self) -> String {
        self.colors
            .iter()
            .map(|name| format!("$color--{}", name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const COLOR_CATEGORIES: [ColorCategory; 6] = [
    ColorCategory {
        name: "Primary",
        colors: &["primary", "primary-light", "primary-lighter"],
        description: "Main brand color and variants",
    },
    ColorCategory {
        name: "Accent",
        colors: &["primary-accent", "primary-accent-light", "primary-accent-lighter"],
        description: "Accent color for highlights and emphasis",
    },
    ColorCategory {
        name: "Secondary",
        colors: &["secondary", "secondary-light", "secondary-lighter"],
        description: "Secondary brand color and variants",
    },
    ColorCategory {
        name: "Base",
        colors: &["base", "surface", "code"],
        description: "Background and surface colors",
    },
    ColorCategory {
        name: "Grey Scale",
        colors: &["grey-light", "grey-medium", "grey-dark", "grey-darker"],
        description: "Neutral colors for text and borders",
    },
    ColorCategory {
        name: "Semantic",
        colors: &["error", "error-light", "link"],
        description: "Semantic colors for states and actions",
    },
];

/// A font family role.
#[derive(Debug, Clone, Copy)]
pub struct FontFamilyToken {
    /// Role, e.g. `primary`
    pub role: &'static str,
    pub family: &'static str,
    pub fallback: &'static str,
    pub use_case: &'static str,
}

impl FontFamilyToken {
    pub fn variable(&self) -> String {
        format!("$font-family--{}", self.role)
    }

    /// CSS `font-family` value, e.g. `'Rubik', sans-serif`.
    pub fn value(&self) -> String {
        format!("'{}', {}", self.family, self.fallback)
    }
}

pub const FONT_FAMILIES: [FontFamilyToken; 3] = [
    FontFamilyToken {
        role: "primary",
        family: "Rubik",
        fallback: "sans-serif",
        use_case: "Primary UI text",
    },
    FontFamilyToken {
        role: "secondary",
        family: "Montserrat",
        fallback: "sans-serif",
        use_case: "Headings and emphasis",
    },
    FontFamilyToken {
        role: "code",
        family: "JetBrains Mono",
        fallback: "monospace",
        use_case: "Code blocks and technical content",
    },
];

/// Steps of the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeScale {
    VeryLarge,
    Large,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Small,
}

impl TypeScale {
    /// Largest first.
    pub const ALL: [TypeScale; 10] = [
        TypeScale::VeryLarge,
        TypeScale::Large,
        TypeScale::H1,
        TypeScale::H2,
        TypeScale::H3,
        TypeScale::H4,
        TypeScale::H5,
        TypeScale::H6,
        TypeScale::P,
        TypeScale::Small,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::VeryLarge => "very-large",
            Self::Large => "large",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Small => "small",
        }
    }

    pub fn px(self) -> u32 {
        match self {
            Self::VeryLarge => 64,
            Self::Large => 48,
            Self::H1 => 36,
            Self::H2 => 32,
            Self::H3 => 28,
            Self::H4 => 24,
            Self::H5 => 21,
            Self::H6 => 18,
            Self::P => 16,
            Self::Small => 12,
        }
    }

    pub fn variable(self) -> String {
        format!("$font-size--{}", self.key())
    }

    /// Size with its rem equivalent, e.g. `36px (2.25rem)`.
    pub fn describe(self) -> String {
        format!("{}px ({})", self.px(), rem(self.px()))
    }
}

/// A font weight and its common name.
#[derive(Debug, Clone, Copy)]
pub struct FontWeightToken {
    pub weight: u16,
    pub name: &'static str,
}

impl FontWeightToken {
    pub fn variable(&self) -> String {
        format!("$font-weight--{}", self.weight)
    }

    /// e.g. `600 (Semi-Bold)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.weight, self.name)
    }
}

pub const FONT_WEIGHTS: [FontWeightToken; 5] = [
    FontWeightToken { weight: 400, name: "Regular" },
    FontWeightToken { weight: 500, name: "Medium" },
    FontWeightToken { weight: 600, name: "Semi-Bold" },
    FontWeightToken { weight: 700, name: "Bold" },
    FontWeightToken { weight: 800, name: "Extra-Bold" },
];

/// A line-height step.
#[derive(Debug, Clone, Copy)]
pub struct LineHeightToken {
    pub key: &'static str,
    pub value: &'static str,
    pub use_case: &'static str,
}

impl LineHeightToken {
    pub fn variable(&self) -> String {
        format!("$line-height--{}", self.key)
    }
}

pub const LINE_HEIGHTS: [LineHeightToken; 4] = [
    LineHeightToken { key: "large", value: "1.9", use_case: "Loose spacing for readability" },
    LineHeightToken { key: "normal", value: "1.6", use_case: "Standard paragraph text" },
    LineHeightToken { key: "small", value: "1.4", use_case: "Compact headings" },
    LineHeightToken { key: "very-small", value: "1.2", use_case: "Very compact text" },
];

/// Highest key of the spacing scale.
pub const MAX_SPACE: u8 = 9;

/// Pixel value of a spacing step: 4px at step 0, then 8px per step.
pub const fn space_px(step: u8) -> u32 {
    if step == 0 {
        4
    } else {
        step as u32 * 8
    }
}

/// One step of the spacing scale.
#[derive(Debug, Clone, Copy)]
pub struct SpacingStep {
    pub key: u8,
    pub use_case: &'static str,
}

impl SpacingStep {
    pub fn px(&self) -> u32 {
        space_px(self.key)
    }

    pub fn rem(&self) -> String {
        rem(self.px())
    }
}

pub const SPACING_SCALE: [SpacingStep; 10] = [
    SpacingStep { key: 0, use_case: "Micro spacing" },
    SpacingStep { key: 1, use_case: "Tight spacing" },
    SpacingStep { key: 2, use_case: "Default spacing" },
    SpacingStep { key: 3, use_case: "Medium spacing" },
    SpacingStep { key: 4, use_case: "Large spacing" },
    SpacingStep { key: 5, use_case: "Extra large spacing" },
    SpacingStep { key: 6, use_case: "Section spacing" },
    SpacingStep { key: 7, use_case: "Large section spacing" },
    SpacingStep { key: 8, use_case: "Major section spacing" },
    SpacingStep { key: 9, use_case: "Page section spacing" },
];

/// A documented SCSS function.
#[derive(Debug, Clone, Copy)]
pub struct UtilityFunction {
    pub signature: &'static str,
    pub parameters: &'static str,
    pub description: &'static str,
}

pub const UTILITY_FUNCTIONS: [UtilityFunction; 3] = [
    UtilityFunction {
        signature: "rem($px)",
        parameters: "Number (unitless)",
        description: "Converts pixels to rem units (16px base)",
    },
    UtilityFunction {
        signature: "em($px)",
        parameters: "Number (unitless)",
        description: "Converts pixels to em units (16px base)",
    },
    UtilityFunction {
        signature: "space($n, $useEm)",
        parameters: "Number (0-9), Boolean",
        description: "Returns spacing value from scale",
    },
];

/// A keyframe animation.
#[derive(Debug, Clone, Copy)]
pub struct AnimationToken {
    pub name: &'static str,
    pub timing: &'static str,
    pub description: &'static str,
}

pub const ANIMATIONS: [AnimationToken; 4] = [
    AnimationToken {
        name: "loading_animation",
        timing: "4s linear infinite",
        description: "Background position animation for loading states",
    },
    AnimationToken {
        name: "MoveInTop",
        timing: "Custom",
        description: "Slide in from bottom with fade (200px translateY)",
    },
    AnimationToken {
        name: "fadeInDown",
        timing: "Custom",
        description: "Fade in while moving down (20px translateY)",
    },
    AnimationToken {
        name: "fadeUp",
        timing: "Custom",
        description: "Fade in while moving up with horizontal offset",
    },
];

/// A border-radius step.
#[derive(Debug, Clone, Copy)]
pub struct RadiusToken {
    /// Suffix after `$border-radius`, empty for the default
    pub suffix: &'static str,
    pub px: u32,
    pub use_case: &'static str,
}

impl RadiusToken {
    pub fn variable(&self) -> String {
        if self.suffix.is_empty() {
            "$border-radius".to_string()
        } else {
            format!("$border-radius--{}", self.suffix)
        }
    }

    pub fn describe(&self) -> String {
        format!("{}px ({})", self.px, rem(self.px))
    }
}

pub const BORDER_RADII: [RadiusToken; 6] = [
    RadiusToken { suffix: "", px: 4, use_case: "Default, small elements" },
    RadiusToken { suffix: "1", px: 8, use_case: "Buttons, inputs" },
    RadiusToken { suffix: "1-5", px: 12, use_case: "Medium cards" },
    RadiusToken { suffix: "2", px: 16, use_case: "Cards, modals" },
    RadiusToken { suffix: "3", px: 24, use_case: "Large containers" },
    RadiusToken { suffix: "4", px: 32, use_case: "Hero sections" },
];

/// A responsive breakpoint.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    pub name: &'static str,
    pub max_width_px: u32,
    pub device: &'static str,
}

pub const BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint { name: "Mobile S", max_width_px: 320, device: "Small mobile devices" },
    Breakpoint { name: "Mobile", max_width_px: 375, device: "Standard mobile devices" },
    Breakpoint { name: "Mobile Landscape", max_width_px: 568, device: "Mobile in landscape orientation" },
    Breakpoint { name: "iPad S", max_width_px: 768, device: "Small tablets" },
    Breakpoint { name: "Mobile L Landscape", max_width_px: 812, device: "Large mobile in landscape" },
    Breakpoint { name: "iPad", max_width_px: 834, device: "Standard tablets" },
];

/// Maximum width of the page container.
pub const PAGE_MAX_WIDTH_PX: u32 = 1216;

/// Maximum width of page contents with `.page--contents-max-width`.
pub const PAGE_CONTENTS_MAX_WIDTH_PX: u32 = 780;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_rem() {
        assert_eq!(rem(16), "1rem");
        assert_eq!(rem(4), "0.25rem");
        assert_eq!(rem(21), "1.3125rem");
        assert_eq!(rem(64), "4rem");
    }

    #[test]
    fn spacing_scale_is_eight_px_steps_with_micro_start() {
        assert_eq!(SPACING_SCALE.len(), usize::from(MAX_SPACE) + 1);
        for (index, step) in SPACING_SCALE.iter().enumerate() {
            assert_eq!(usize::from(step.key), index);
            let expected = if index == 0 { 4 } else { index as u32 * 8 };
            assert_eq!(step.px(), expected);
        }
        assert_eq!(SPACING_SCALE[3].rem(), "1.5rem");
    }

    #[test]
    fn categories_reference_palette_colors() {
        for category in COLOR_CATEGORIES {
            for name in category.colors {
                assert!(
                    PALETTE.iter().any(|c| c.name == *name),
                    "unknown color {}",
                    name
                );
            }
        }
        assert_eq!(
            COLOR_CATEGORIES[0].variables(),
            "$color--primary, $color--primary-light, $color--primary-lighter"
        );
    }

    #[test]
    fn describes_type_scale() {
        assert_eq!(TypeScale::H1.describe(), "36px (2.25rem)");
        assert_eq!(TypeScale::H5.describe(), "21px (1.3125rem)");
        assert_eq!(TypeScale::Small.variable(), "$font-size--small");
    }

    #[test]
    fn describes_radii() {
        assert_eq!(BORDER_RADII[0].variable(), "$border-radius");
        assert_eq!(BORDER_RADII[2].variable(), "$border-radius--1-5");
        assert_eq!(BORDER_RADII[2].describe(), "12px (0.75rem)");
    }

    #[test]
    fn font_family_values_quote_the_family() {
        assert_eq!(FONT_FAMILIES[2].value(), "'JetBrains Mono', monospace");
        assert_eq!(FONT_FAMILIES[0].variable(), "$font-family--primary");
    }
}
