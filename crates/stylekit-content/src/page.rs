//! The documentation page.
//!
//! [`documentation`] takes no input and always returns the same tree. Code
//! samples come from the [`catalog`](crate::catalog); token tables are
//! derived from [`tokens`](crate::tokens).

use stylekit_blog::{
    Blog, BlogHeader, BlogSection, Callout, CalloutKind, Cell, List, Paragraph, SampleStyle, Table,
};

use crate::catalog::Example;
use crate::styles::{Side, Utility};
use crate::tokens::{
    TypeScale, ANIMATIONS, BORDER_RADII, BREAKPOINTS, COLOR_CATEGORIES, FONT_FAMILIES,
    FONT_WEIGHTS, LINE_HEIGHTS, PALETTE, SPACING_SCALE, UTILITY_FUNCTIONS,
};

/// Name of the documented package.
pub const TITLE: &str = "StyleKit";

/// One-line description of the package.
pub const DESCRIPTION: &str =
    "A modular SCSS design system with utilities, colors, typography, and animations";

/// Repository of the documented package.
pub const REPOSITORY_URL: &str = "https://github.com/san-siva/stylekit";

/// Author profile.
pub const AUTHOR_URL: &str = "https://github.com/san-siva";

const MB1: Utility = Utility::Margin(Side::Bottom, 1);
const MB2: Utility = Utility::Margin(Side::Bottom, 2);
const MT3: Utility = Utility::Margin(Side::Top, 3);

const LOREM: &str = "Lorem ipsum dolor sit amet";
const LOREM_LONG: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Build the documentation page.
pub fn documentation() -> Blog {
    Blog::new(BlogHeader::new(TITLE, DESCRIPTION))
        .section(overview())
        .section(system_requirements())
        .section(installation())
        .section(module_structure())
        .section(usage_patterns())
        .section(colors_module())
        .section(typography_module())
        .section(utils_module())
        .section(animations_module())
        .section(dimensions_module())
        .section(best_practices())
        .section(framework_integration())
        .section(customization())
        .section(performance())
        .section(migration_guide())
        .section(contributing())
        .section(license())
        .section(about())
}

fn p(text: &str, classes: &[Utility]) -> Paragraph {
    Paragraph::new(text).with_classes(classes.iter().map(|u| u.class_name()))
}

/// A bold label introducing the table or code that follows.
fn label(text: &str, classes: &[Utility]) -> Paragraph {
    p(&format!("**{}**", text), classes)
}

/// A nested section holding a lead paragraph and one example.
fn example_section(title: &str, lead: Option<&str>, example: Example) -> BlogSection {
    let section = BlogSection::new(title);
    let section = match lead {
        Some(text) => section.child(p(text, &[MB2])),
        None => section,
    };
    section.child(example.block())
}

fn overview() -> BlogSection {
    BlogSection::new("Overview")
        .child(p(
            "**StyleKit** is a comprehensive, modular SCSS design system that provides a \
             consistent foundation for building modern web applications. It includes a complete \
             set of design tokens, utility classes, typography scales, color palettes, spacing \
             systems, and animations. Built with CSS Modules support, StyleKit ensures style \
             encapsulation while maintaining flexibility for customization.",
            &[MB2],
        ))
        .child(p(
            "Unlike Tailwind or Bootstrap, <mark>**StyleKit** focuses on developer-centric \
             architecture rather than being a rigid framework or library.</mark> I would \
             encourage you to use StyleKit as a starting point for your own design system, and \
             then customize it to fit your needs.",
            &[],
        ))
}

fn system_requirements() -> BlogSection {
    BlogSection::new("System Requirements").child(
        Table::new(
            ["Requirement", "Details"],
            [
                ["Package Manager".into(), "npm, yarn, or pnpm".into()],
                ["SCSS Processor".into(), "sass >= 1.50.0".into()],
                ["Module System".into(), "CSS Modules support".into()],
                [
                    "Framework".into(),
                    "Framework agnostic (React, Vue, Angular, etc.)".into(),
                ],
            ],
        )
        .margin_down(),
    )
}

fn installation() -> BlogSection {
    BlogSection::new("Installation")
        .child(p("Install StyleKit from npm:", &[MB2]))
        .child(Example::InstallNpm.block())
        .child(p("Or using yarn:", &[MB2]))
        .child(Example::InstallYarn.block())
}

fn module_structure() -> BlogSection {
    let module = |file: &str, purpose: &str, features: &str| -> [Cell; 3] {
        [Cell::code(file), purpose.into(), features.into()]
    };

    BlogSection::new("Module Structure")
        .child(p(
            "StyleKit is organized into specialized modules, each handling a specific aspect of \
             your design system:",
            &[MB2],
        ))
        .child(
            Table::new(
                ["Module", "Purpose", "Key Features"],
                [
                    module(
                        "colors.module.scss",
                        "Color palette and variables",
                        "Primary, secondary, accent, grey scale, semantic colors",
                    ),
                    module(
                        "typography.module.scss",
                        "Font families, sizes, and weights",
                        "Type scale, font families, line heights, utility classes",
                    ),
                    module(
                        "utils.module.scss",
                        "Spacing and utility functions",
                        "rem/em functions, spacing scale, margin/padding utilities",
                    ),
                    module(
                        "dimensions.module.scss",
                        "Layout dimensions and breakpoints",
                        "Container styles, page layout, border radius, responsive breakpoints",
                    ),
                    module(
                        "animations.module.scss",
                        "Animation keyframes",
                        "Loading, fade, and movement animations",
                    ),
                    module(
                        "globals.scss",
                        "Global styles and resets",
                        "Base styles, resets, global defaults",
                    ),
                ],
            )
            .margin_down(),
        )
}

fn usage_patterns() -> BlogSection {
    BlogSection::new("Usage Patterns")
        .child(example_section(
            "Import All Modules",
            Some("Import the main module to access all design tokens and utilities:"),
            Example::ImportAllModules,
        ))
        .child(example_section(
            "Import Specific Modules",
            Some("For better performance and explicit dependencies, import only what you need:"),
            Example::ImportSpecificModules,
        ))
        .child(example_section(
            "Use Utility Classes",
            Some("Import utility classes in your component or globally:"),
            Example::UseUtilityClasses,
        ))
}

fn colors_module() -> BlogSection {
    let categories = COLOR_CATEGORIES.iter().map(|category| {
        [
            category.name.into(),
            Cell::code(category.variables()),
            category.description.into(),
        ]
    });

    let swatches = PALETTE
        .iter()
        .map(|color| [Cell::code(color.variable()), Cell::swatch(color.value)]);

    BlogSection::new("Colors Module")
        .child(p(
            "Provides a comprehensive color palette with semantic naming and variants.",
            &[MB2],
        ))
        .child(Table::new(["Category", "Variables", "Description"], categories).margin_down())
        .child(Table::new(["Variable", "Preview"], swatches).margin_down())
        .child(p("Example usage:", &[MT3]))
        .child(Example::ColorsExampleUsage.block())
}

fn typography_module() -> BlogSection {
    let families = FONT_FAMILIES.iter().map(|font| {
        [
            Cell::code(font.variable()),
            font.value().into(),
            font.use_case.into(),
        ]
    });

    let family_samples = FONT_FAMILIES.iter().map(|font| {
        [
            font.family.into(),
            Cell::sample(LOREM_LONG, &SampleStyle::font_family(font.value()).size(18)),
        ]
    });

    let sizes = TypeScale::ALL.iter().map(|scale| {
        [
            Cell::code(scale.variable()),
            scale.describe().into(),
            Cell::code(format!(".font-size--{}", scale.key())),
        ]
    });

    let size_samples = TypeScale::ALL.iter().map(|scale| {
        [
            format!("{}px ({})", scale.px(), scale.key()).into(),
            Cell::sample(
                LOREM,
                &SampleStyle::default().size(scale.px()).line_height("1.2"),
            ),
        ]
    });

    let weights = FONT_WEIGHTS.iter().map(|weight| {
        [
            Cell::code(weight.variable()),
            weight.describe().into(),
            Cell::code(format!(".font-weight--{}", weight.weight)),
        ]
    });

    let weight_samples = FONT_WEIGHTS.iter().map(|weight| {
        [
            weight.describe().into(),
            Cell::sample(
                LOREM_LONG,
                &SampleStyle::default().size(18).weight(weight.weight),
            ),
        ]
    });

    let line_heights = LINE_HEIGHTS.iter().map(|lh| {
        [
            Cell::code(lh.variable()),
            lh.value.into(),
            lh.use_case.into(),
        ]
    });

    BlogSection::new("Typography Module")
        .child(p(
            "Defines a consistent typographic scale with font families, sizes, weights, and line \
             heights.",
            &[MB2],
        ))
        .child(label("Font Families:", &[MB2]))
        .child(Table::new(["Variable", "Value", "Use Case"], families).margin_down())
        .child(Table::new(["Variable", "Preview"], family_samples).margin_down())
        .child(label("Font Sizes:", &[MT3, MB2]))
        .child(Table::new(["Variable", "Size", "Utility Class"], sizes).margin_down())
        .child(Table::new(["Variable", "Preview"], size_samples).margin_down())
        .child(label("Font Weights:", &[MT3, MB2]))
        .child(Table::new(["Variable", "Weight", "Utility Class"], weights).margin_down())
        .child(Table::new(["Variable", "Preview"], weight_samples).margin_down())
        .child(label("Line Heights:", &[MT3, MB2]))
        .child(Table::new(["Variable", "Value", "Use Case"], line_heights).margin_down())
        .child(p("Example usage:", &[MT3, MB2]))
        .child(Example::TypographyExampleUsage.block())
        .child(p("Using utility classes in React/JSX:", &[MT3, MB2]))
        .child(Example::TypographyUtilityClasses.block())
}

fn utils_module() -> BlogSection {
    let functions = UTILITY_FUNCTIONS.iter().map(|f| {
        [
            Cell::code(f.signature),
            f.parameters.into(),
            f.description.into(),
        ]
    });

    let spacing = SPACING_SCALE.iter().map(|step| {
        [
            step.key.to_string().into(),
            format!("{}px", step.px()).into(),
            step.rem().into(),
            step.use_case.into(),
        ]
    });

    BlogSection::new("Utils Module")
        .child(p(
            "Provides utility functions and a comprehensive spacing system.",
            &[MB2],
        ))
        .child(label("Utility Functions:", &[MB2]))
        .child(Table::new(["Function", "Parameters", "Description"], functions).margin_down())
        .child(label("Spacing Scale:", &[MB2]))
        .child(
            Table::new(["Key", "Value (px)", "Value (rem)", "Use Case"], spacing).margin_down(),
        )
        .child(label("Spacing Utility Classes:", &[MB2]))
        .child(p(
            "Auto-generated margin and padding utilities for all sides (top, bottom, left, \
             right):",
            &[MB2],
        ))
        .child(Example::SpacingUtilitiesList.block())
        .child(
            Callout::new(CalloutKind::Info)
                .child(p(
                    "All spacing utility classes are also available with `!important` \
                     modifiers to override other styles when needed.",
                    &[],
                ))
                .margin_down(),
        )
        .child(label("Example usage with functions:", &[MB2]))
        .child(Example::UtilsExampleUsageWithFunctions.block())
        .child(p("Example usage with utility classes:", &[MB2]))
        .child(Example::UtilsExampleUsageWithClasses.block())
}

fn animations_module() -> BlogSection {
    let animations = ANIMATIONS.iter().map(|a| {
        [Cell::code(a.name), a.timing.into(), a.description.into()]
    });

    BlogSection::new("Animations Module")
        .child(p(
            "Provides pre-built keyframe animations for common UI patterns.",
            &[MB2],
        ))
        .child(Table::new(["Animation", "Duration", "Description"], animations).margin_down())
        .child(p("Example usage:", &[MB2]))
        .child(Example::AnimationsExampleUsage.block())
}

fn dimensions_module() -> BlogSection {
    let radii = BORDER_RADII.iter().map(|radius| {
        [
            Cell::code(radius.variable()),
            radius.describe().into(),
            radius.use_case.into(),
        ]
    });

    let breakpoints = BREAKPOINTS.iter().map(|bp| {
        [
            bp.name.into(),
            format!("{}px", bp.max_width_px).into(),
            bp.device.into(),
        ]
    });

    BlogSection::new("Dimensions Module")
        .child(p(
            "Defines layout containers, page structures, border radius values, and responsive \
             breakpoints.",
            &[MB2],
        ))
        .child(label("Container System:", &[MB2]))
        .child(Example::ContainerSystem.block())
        .child(label("Page Layout:", &[MB2]))
        .child(Example::PageLayout.block())
        .child(label("Border Radius Scale:", &[MT3, MB2]))
        .child(Table::new(["Variable", "Value", "Use Case"], radii).margin_down())
        .child(label("Responsive Breakpoints:", &[MT3, MB2]))
        .child(Table::new(["Breakpoint", "Max Width", "Device"], breakpoints).margin_down())
        .child(
            Callout::new(CalloutKind::Info)
                .child(p(
                    "The dimensions module automatically applies responsive padding adjustments \
                     at each breakpoint. The `.page` class uses CSS custom properties to \
                     maintain consistent spacing across different screen sizes.",
                    &[],
                ))
                .margin_down(),
        )
        .child(Example::DimensionsExampleUsage.block())
}

fn best_practices() -> BlogSection {
    let practice = |title: &str, rule: &str, example: Example| {
        BlogSection::new(title)
            .child(label(rule, &[MB2]))
            .child(example.block())
    };

    BlogSection::new("Best Practices")
        .child(p(
            "Follow these guidelines to get the most out of StyleKit:",
            &[MB2],
        ))
        .child(practice(
            "Module Organization",
            "Use namespaces to avoid conflicts:",
            Example::BestPracticesModuleOrganization,
        ))
        .child(practice(
            "Spacing Consistency",
            "Always use the spacing scale:",
            Example::BestPracticesSpacing,
        ))
        .child(practice(
            "Color Usage",
            "Use semantic color names:",
            Example::BestPracticesColors,
        ))
        .child(practice(
            "Typography Scales",
            "Stick to the type scale:",
            Example::BestPracticesTypography,
        ))
        .child(practice(
            "Utility Class Composition",
            "Combine utility classes effectively:",
            Example::BestPracticesUtilityComposition,
        ))
}

fn framework_integration() -> BlogSection {
    BlogSection::new("Framework Integration")
        .child(example_section(
            "React / Next.js",
            None,
            Example::ReactNextjsIntegration,
        ))
        .child(example_section("Vue.js", None, Example::VueIntegration))
        .child(example_section("Angular", None, Example::AngularIntegration))
}

fn customization() -> BlogSection {
    BlogSection::new("Customization")
        .child(p(
            "While StyleKit provides sensible defaults, you can customize it for your needs:",
            &[MB2],
        ))
        .child(example_section(
            "Extending the Color Palette",
            None,
            Example::CustomizationColors,
        ))
        .child(example_section(
            "Custom Spacing Values",
            None,
            Example::CustomizationSpacing,
        ))
        .child(example_section(
            "Typography Override",
            None,
            Example::CustomizationTypography,
        ))
}

fn performance() -> BlogSection {
    BlogSection::new("Performance Considerations")
        .child(
            Callout::new(CalloutKind::Info)
                .child(p(
                    "**Import only what you need:** StyleKit's modular architecture allows you \
                     to import specific modules rather than the entire library, reducing your \
                     bundle size.",
                    &[MB2],
                ))
                .margin_down(),
        )
        .child(Example::PerformanceBundleSize.block())
        .child(label("Utility classes vs. SCSS variables:", &[MB2]))
        .child(List::unordered([
            "Use utility classes for rapid prototyping and simple layouts",
            "Use SCSS variables and functions for complex components with multiple computed \
             styles",
            "Utility classes are included in the CSS bundle only when used (with proper \
             tree-shaking)",
        ]))
}

fn migration_guide() -> BlogSection {
    BlogSection::new("Migration Guide")
        .child(p(
            "If you're migrating from a custom design system or another framework:",
            &[MB2],
        ))
        .child(
            List::ordered([
                "**Audit your current styles:** Identify colors, spacing, and typography \
                 patterns in your existing codebase",
                "**Map to StyleKit tokens:** Find equivalent values in StyleKit's design tokens",
                "**Incremental adoption:** Start with new components, gradually refactor \
                 existing ones",
                "**Create custom tokens:** For values not in StyleKit, create your own tokens \
                 using StyleKit's patterns",
                "**Test thoroughly:** Visual regression testing helps catch unintended changes",
            ])
            .with_item_classes([MB2.class_name()]),
        )
}

fn contributing() -> BlogSection {
    BlogSection::new("Contributing")
        .child(p(
            "Contributions are welcome! Please fork the repository and submit pull requests. For \
             bugs or feature requests, open an issue on the repository.",
            &[MB1],
        ))
        .child(p(
            &format!(
                "[View source code, report issues, and contribute]({})",
                REPOSITORY_URL
            ),
            &[],
        ))
}

fn license() -> BlogSection {
    BlogSection::new("License").child(p("This project is licensed under the MIT License.", &[]))
}

fn about() -> BlogSection {
    BlogSection::new("About").child(p(
        &format!(
            "**Author:** Santhosh Siva\\\n**GitHub:** [{0}]({0})",
            AUTHOR_URL
        ),
        &[],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stylekit_blog::{Language, Node};

    #[test]
    fn top_level_sections_in_order() {
        let blog = documentation();

        assert_eq!(
            blog.section_titles(),
            vec![
                "Overview",
                "System Requirements",
                "Installation",
                "Module Structure",
                "Usage Patterns",
                "Colors Module",
                "Typography Module",
                "Utils Module",
                "Animations Module",
                "Dimensions Module",
                "Best Practices",
                "Framework Integration",
                "Customization",
                "Performance Considerations",
                "Migration Guide",
                "Contributing",
                "License",
                "About",
            ]
        );
    }

    #[test]
    fn composition_is_deterministic() {
        assert_eq!(documentation(), documentation());
    }

    #[test]
    fn header_names_the_package() {
        let blog = documentation();
        assert_eq!(blog.header.title, vec!["StyleKit".to_string()]);
        assert_eq!(blog.header.desc, vec![DESCRIPTION.to_string()]);
    }

    #[test]
    fn installation_has_npm_and_yarn_blocks() {
        let blog = documentation();
        let install = blog.find_section("Installation").unwrap();
        let blocks = install.code_blocks();

        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.language == Language::Bash));
        assert_eq!(blocks[0].code, "npm install @san-siva/stylekit");
        assert_eq!(blocks[1].code, "yarn add @san-siva/stylekit");

        let package = |code: &str| code.split_whitespace().last().unwrap().to_string();
        assert_eq!(package(&blocks[0].code), package(&blocks[1].code));
    }

    #[test]
    fn typography_previews_are_keyed_by_variable() {
        let blog = documentation();
        let typography = blog.find_section("Typography Module").unwrap();
        let headers: Vec<Vec<&str>> = typography
            .tables()
            .iter()
            .map(|t| t.headers().iter().map(String::as_str).collect())
            .collect();

        assert_eq!(
            headers,
            vec![
                vec!["Variable", "Value", "Use Case"],
                vec!["Variable", "Preview"],
                vec!["Variable", "Size", "Utility Class"],
                vec!["Variable", "Preview"],
                vec!["Variable", "Weight", "Utility Class"],
                vec!["Variable", "Preview"],
                vec!["Variable", "Value", "Use Case"],
            ]
        );
    }

    #[test]
    fn spacing_table_follows_scale() {
        let blog = documentation();
        let utils = blog.find_section("Utils Module").unwrap();
        let table = utils
            .tables()
            .into_iter()
            .find(|t| t.headers()[0] == "Key")
            .unwrap();

        assert_eq!(table.rows().len(), 10);
        for (index, row) in table.rows().iter().enumerate() {
            assert_eq!(row[0].plain_text(), index.to_string());
            let expected = if index == 0 { 4 } else { index * 8 };
            assert_eq!(row[1].plain_text(), format!("{}px", expected));
        }
    }

    #[test]
    fn every_table_is_rectangular() {
        let blog = documentation();
        for (section, _) in blog.all_sections() {
            for table in section.tables() {
                for row in table.rows() {
                    assert_eq!(row.len(), table.width(), "ragged table in {}", section.title);
                }
            }
        }
    }

    #[test]
    fn colors_table_lists_whole_palette() {
        let blog = documentation();
        let colors = blog.find_section("Colors Module").unwrap();
        let swatches = colors.tables()[1];

        assert_eq!(swatches.rows().len(), 21);
        assert_eq!(swatches.rows()[0][0].plain_text(), "$color--primary");
        assert_eq!(swatches.rows()[0][1].plain_text(), "#4242fa");
    }

    #[test]
    fn nested_sections_are_in_order() {
        let blog = documentation();
        let titles = |name: &str| -> Vec<String> {
            blog.find_section(name)
                .unwrap()
                .subsections()
                .map(|s| s.title.clone())
                .collect()
        };

        assert_eq!(
            titles("Usage Patterns"),
            vec!["Import All Modules", "Import Specific Modules", "Use Utility Classes"]
        );
        assert_eq!(
            titles("Framework Integration"),
            vec!["React / Next.js", "Vue.js", "Angular"]
        );
        assert_eq!(titles("Best Practices").len(), 5);
        assert_eq!(titles("Customization").len(), 3);
    }

    #[test]
    fn every_catalog_example_appears_once() {
        let blog = documentation();
        let codes: Vec<String> = blog
            .sections
            .iter()
            .flat_map(|s| s.code_blocks())
            .map(|b| b.code.clone())
            .collect();

        for example in Example::ALL {
            let count = codes.iter().filter(|c| c.as_str() == example.source()).count();
            assert_eq!(count, 1, "{} appears {} times", example.name(), count);
        }
        assert_eq!(codes.len(), Example::ALL.len());
    }

    #[test]
    fn migration_steps_are_numbered() {
        let blog = documentation();
        let guide = blog.find_section("Migration Guide").unwrap();
        let list = guide
            .children
            .iter()
            .find_map(|node| match node {
                Node::List(list) => Some(list),
                _ => None,
            })
            .unwrap();

        assert!(list.ordered);
        assert_eq!(list.items.len(), 5);
        assert_eq!(list.item_classes, vec!["margin-bottom--2".to_string()]);
    }
}
