//! Content catalog: literal code examples shown on the documentation page.
//!
//! Every example is addressed by an [`Example`] key. The page refers to
//! examples only through these keys, so a missing or renamed example is a
//! compile error rather than a blank code block.

use stylekit_blog::{CodeBlock, Language};

/// Package name used in install commands and `@use` paths.
pub const PACKAGE: &str = "@san-siva/stylekit";

/// Key of a code example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Example {
    InstallNpm,
    InstallYarn,
    ImportAllModules,
    ImportSpecificModules,
    UseUtilityClasses,
    ColorsExampleUsage,
    TypographyExampleUsage,
    TypographyUtilityClasses,
    SpacingUtilitiesList,
    UtilsExampleUsageWithFunctions,
    UtilsExampleUsageWithClasses,
    AnimationsExampleUsage,
    ContainerSystem,
    PageLayout,
    DimensionsExampleUsage,
    BestPracticesModuleOrganization,
    BestPracticesSpacing,
    BestPracticesColors,
    BestPracticesTypography,
    BestPracticesUtilityComposition,
    ReactNextjsIntegration,
    VueIntegration,
    AngularIntegration,
    CustomizationColors,
    CustomizationSpacing,
    CustomizationTypography,
    PerformanceBundleSize,
}

impl Example {
    /// Every example, in catalog order.
    pub const ALL: [Example; 27] = [
        Example::InstallNpm,
        Example::InstallYarn,
        Example::ImportAllModules,
        Example::ImportSpecificModules,
        Example::UseUtilityClasses,
        Example::ColorsExampleUsage,
        Example::TypographyExampleUsage,
        Example::TypographyUtilityClasses,
        Example::SpacingUtilitiesList,
        Example::UtilsExampleUsageWithFunctions,
        Example::UtilsExampleUsageWithClasses,
        Example::AnimationsExampleUsage,
        Example::ContainerSystem,
        Example::PageLayout,
        Example::DimensionsExampleUsage,
        Example::BestPracticesModuleOrganization,
        Example::BestPracticesSpacing,
        Example::BestPracticesColors,
        Example::BestPracticesTypography,
        Example::BestPracticesUtilityComposition,
        Example::ReactNextjsIntegration,
        Example::VueIntegration,
        Example::AngularIntegration,
        Example::CustomizationColors,
        Example::CustomizationSpacing,
        Example::CustomizationTypography,
        Example::PerformanceBundleSize,
    ];

    /// Stable symbolic name, e.g. `INSTALL_NPM`.
    pub fn name(self) -> &'static str {
        match self {
            Self::InstallNpm => "INSTALL_NPM",
            Self::InstallYarn => "INSTALL_YARN",
            Self::ImportAllModules => "IMPORT_ALL_MODULES",
            Self::ImportSpecificModules => "IMPORT_SPECIFIC_MODULES",
            Self::UseUtilityClasses => "USE_UTILITY_CLASSES",
            Self::ColorsExampleUsage => "COLORS_EXAMPLE_USAGE",
            Self::TypographyExampleUsage => "TYPOGRAPHY_EXAMPLE_USAGE",
            Self::TypographyUtilityClasses => "TYPOGRAPHY_UTILITY_CLASSES",
            Self::SpacingUtilitiesList => "SPACING_UTILITIES_LIST",
            Self::UtilsExampleUsageWithFunctions => "UTILS_EXAMPLE_USAGE_WITH_FUNCTIONS",
            Self::UtilsExampleUsageWithClasses => "UTILS_EXAMPLE_USAGE_WITH_CLASSES",
            Self::AnimationsExampleUsage => "ANIMATIONS_EXAMPLE_USAGE",
            Self::ContainerSystem => "CONTAINER_SYSTEM",
            Self::PageLayout => "PAGE_LAYOUT",
            Self::DimensionsExampleUsage => "DIMENSIONS_EXAMPLE_USAGE",
            Self::BestPracticesModuleOrganization => "BEST_PRACTICES_MODULE_ORGANIZATION",
            Self::BestPracticesSpacing => "BEST_PRACTICES_SPACING",
            Self::BestPracticesColors => "BEST_PRACTICES_COLORS",
            Self::BestPracticesTypography => "BEST_PRACTICES_TYPOGRAPHY",
            Self::BestPracticesUtilityComposition => "BEST_PRACTICES_UTILITY_COMPOSITION",
            Self::ReactNextjsIntegration => "REACT_NEXTJS_INTEGRATION",
            Self::VueIntegration => "VUE_INTEGRATION",
            Self::AngularIntegration => "ANGULAR_INTEGRATION",
            Self::CustomizationColors => "CUSTOMIZATION_COLORS",
            Self::CustomizationSpacing => "CUSTOMIZATION_SPACING",
            Self::CustomizationTypography => "CUSTOMIZATION_TYPOGRAPHY",
            Self::PerformanceBundleSize => "PERFORMANCE_BUNDLE_SIZE",
        }
    }

    /// Display language of the example.
    pub fn language(self) -> Language {
        match self {
            Self::InstallNpm | Self::InstallYarn => Language::Bash,
            Self::UseUtilityClasses
            | Self::TypographyUtilityClasses
            | Self::UtilsExampleUsageWithClasses
            | Self::BestPracticesUtilityComposition
            | Self::ReactNextjsIntegration => Language::Tsx,
            Self::VueIntegration => Language::Vue,
            Self::SpacingUtilitiesList => Language::Text,
            _ => Language::Scss,
        }
    }

    /// The literal example text.
    pub fn source(self) -> &'static str {
        match self {
            Self::InstallNpm => INSTALL_NPM,
            Self::InstallYarn => INSTALL_YARN,
            Self::ImportAllModules => IMPORT_ALL_MODULES,
            Self::ImportSpecificModules => IMPORT_SPECIFIC_MODULES,
            Self::UseUtilityClasses => USE_UTILITY_CLASSES,
            Self::ColorsExampleUsage => COLORS_EXAMPLE_USAGE,
            Self::TypographyExampleUsage => TYPOGRAPHY_EXAMPLE_USAGE,
            Self::TypographyUtilityClasses => TYPOGRAPHY_UTILITY_CLASSES,
            Self::SpacingUtilitiesList => SPACING_UTILITIES_LIST,
            Self::UtilsExampleUsageWithFunctions => UTILS_EXAMPLE_USAGE_WITH_FUNCTIONS,
            Self::UtilsExampleUsageWithClasses => UTILS_EXAMPLE_USAGE_WITH_CLASSES,
            Self::AnimationsExampleUsage => ANIMATIONS_EXAMPLE_USAGE,
            Self::ContainerSystem => CONTAINER_SYSTEM,
            Self::PageLayout => PAGE_LAYOUT,
            Self::DimensionsExampleUsage => DIMENSIONS_EXAMPLE_USAGE,
            Self::BestPracticesModuleOrganization => BEST_PRACTICES_MODULE_ORGANIZATION,
            Self::BestPracticesSpacing => BEST_PRACTICES_SPACING,
            Self::BestPracticesColors => BEST_PRACTICES_COLORS,
            Self::BestPracticesTypography => BEST_PRACTICES_TYPOGRAPHY,
            Self::BestPracticesUtilityComposition => BEST_PRACTICES_UTILITY_COMPOSITION,
            Self::ReactNextjsIntegration => REACT_NEXTJS_INTEGRATION,
            Self::VueIntegration => VUE_INTEGRATION,
            Self::AngularIntegration => ANGULAR_INTEGRATION,
            Self::CustomizationColors => CUSTOMIZATION_COLORS,
            Self::CustomizationSpacing => CUSTOMIZATION_SPACING,
            Self::CustomizationTypography => CUSTOMIZATION_TYPOGRAPHY,
            Self::PerformanceBundleSize => PERFORMANCE_BUNDLE_SIZE,
        }
    }

    /// A code block showing this example.
    pub fn block(self) -> CodeBlock {
        CodeBlock::new(self.language(), self.source())
    }
}

const INSTALL_NPM: &str = "npm install @san-siva/stylekit";

const INSTALL_YARN: &str = "yarn add @san-siva/stylekit";

const IMPORT_ALL_MODULES: &str = r##"@use '@san-siva/stylekit/index.module.scss' as stylekit;

.my-component {
  color: stylekit.$color--primary;
  padding: stylekit.space(2);
  font-size: stylekit.$font-size--h3;
}"##;

const IMPORT_SPECIFIC_MODULES: &str = r##"@use '@san-siva/stylekit/colors.module.scss' as colors;
@use '@san-siva/stylekit/utils.module.scss' as utils;

.card {
  background-color: colors.$color--base;
  border: 1px solid colors.$color--border;
  padding: utils.space(3);
  border-radius: utils.rem(8);
}"##;

const USE_UTILITY_CLASSES: &str = r##"import styles from '@san-siva/stylekit/index.module.scss';

export function MyComponent() {
  return (
    <div className={styles['margin-bottom--3']}>
      <h1 className={styles['font-size--h1']}>Title</h1>
      <p className={styles['margin-top--2']}>Content</p>
    </div>
  );
}"##;

const COLORS_EXAMPLE_USAGE: &str = r##"@use '@san-siva/stylekit/colors.module.scss' as colors;

.button--primary {
  background-color: colors.$color--primary;
  color: colors.$color--base;

  &:hover {
    background-color: colors.$color--primary-light;
  }
}

.alert--error {
  background-color: colors.$color--error-light;
  border-left: 3px solid colors.$color--error;
  color: colors.$color--dark;
}"##;

const TYPOGRAPHY_EXAMPLE_USAGE: &str = r##"@use '@san-siva/stylekit/typography.module.scss' as type;

.heading {
  font-family: type.$font-family--secondary;
  font-size: type.$font-size--h2;
  font-weight: type.$font-weight--700;
  line-height: type.$line-height--small;
}

.body-text {
  font-family: type.$font-family--primary;
  font-size: type.$font-size--p;
  line-height: type.$line-height--normal;
}"##;

const TYPOGRAPHY_UTILITY_CLASSES: &str = r##"import styles from '@san-siva/stylekit/typography.module.scss';

<h1 className={`${styles['font-size--h1']} ${styles['font-weight--700']}`}>
  Welcome
</h1>"##;

const SPACING_UTILITIES_LIST: &str = r##".margin-top--0 through .margin-top--9
.margin-bottom--0 through .margin-bottom--9
.margin-left--0 through .margin-left--9
.margin-right--0 through .margin-right--9

.padding-top--0 through .padding-top--9
.padding-bottom--0 through .padding-bottom--9
.padding-left--0 through .padding-left--9
.padding-right--0 through .padding-right--9"##;

const UTILS_EXAMPLE_USAGE_WITH_FUNCTIONS: &str = r##"@use '@san-siva/stylekit/utils.module.scss' as utils;

.card {
  padding: utils.space(3);        // 24px (1.5rem)
  margin-bottom: utils.space(4);  // 32px (2rem)
  border-radius: utils.rem(8);    // 0.5rem

  .card-header {
    margin-bottom: utils.space(2); // 16px (1rem)
    font-size: utils.rem(20);       // 1.25rem
  }
}"##;

const UTILS_EXAMPLE_USAGE_WITH_CLASSES: &str = r##"import styles from '@san-siva/stylekit/utils.module.scss';

<div className={styles['padding-top--4']}>
  <h2 className={styles['margin-bottom--2']}>Section Title</h2>
  <p className={styles['margin-bottom--3']}>Content here</p>
</div>"##;

const ANIMATIONS_EXAMPLE_USAGE: &str = r##"@use '@san-siva/stylekit/animations.module.scss';

.modal-enter {
  animation: MoveInTop 0.3s ease-out;
}

.notification {
  animation: fadeInDown 0.4s ease-out;
}

.loading-bar {
  animation: loading_animation 4s linear infinite;
  background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%);
  background-size: 200% 100%;
}"##;

const CONTAINER_SYSTEM: &str = r##".container {
  display: flex;
  flex-direction: column;
  justify-content: flex-start;
  padding: 18px;
  min-height: calc(100% - 36px);
  width: calc(100% - 36px);
}

.container--contents-centered {
  justify-content: center;
  align-items: center;
}

.container--no-padding {
  padding: 0;
}"##;

const PAGE_LAYOUT: &str = r##".page {
  --topbar-height: 80px;
  max-width: 1216px;
  margin: 0 auto;
  padding: 48px calculated-sides;

  // Responsive padding and width management
  // Automatically adjusts for mobile, tablet, and desktop
}

.page--contents-max-width {
  > * {
    max-width: 780px;
  }
}

.page--no-extra-padding {
  --width-sections: calc(100% - 32px);
  --padding-sections-left: 32px;
}"##;

const DIMENSIONS_EXAMPLE_USAGE: &str = r##"@use '@san-siva/stylekit/dimensions.module.scss' as dims;

.card {
  border-radius: dims.$border-radius--2;
  max-width: dims.$max-width--page-contents;
}

.rounded-button {
  border-radius: dims.$border-radius--1;
}

// Use built-in container
.my-container {
  @extend .container;
  @extend .container--contents-centered;
}"##;

const BEST_PRACTICES_MODULE_ORGANIZATION: &str = r##"// Good: Use namespaces with @use
@use '@san-siva/stylekit/colors.module.scss' as colors;
@use '@san-siva/stylekit/utils.module.scss' as utils;

.component {
  color: colors.$color--primary;
  padding: utils.space(2);
}

// Avoid: @import mixes everything into global scope
@import '@san-siva/stylekit/colors.module.scss';  // Don't do this"##;

const BEST_PRACTICES_SPACING: &str = r##"// Good: Use spacing scale
.section {
  margin-bottom: utils.space(4);  // 32px from scale
  padding: utils.space(3);         // 24px from scale
}

// Avoid: Arbitrary values break consistency
.section {
  margin-bottom: 35px;  // Don't do this
  padding: 22px;        // Don't do this
}"##;

const BEST_PRACTICES_COLORS: &str = r##"// Good: Semantic naming makes intent clear
.error-message {
  color: colors.$color--error;
  background: colors.$color--error-light;
}

.primary-button {
  background: colors.$color--primary;
  color: colors.$color--base;
}

// Avoid: Direct hex values lose semantic meaning
.error-message {
  color: #ff4232;  // What does this color represent?
}"##;

const BEST_PRACTICES_TYPOGRAPHY: &str = r##"// Good: Use predefined sizes
h1 {
  font-size: type.$font-size--h1;  // 36px
}

.small-text {
  font-size: type.$font-size--small;  // 12px
}

// Avoid: Random font sizes
h1 {
  font-size: 37px;  // Why not 36px from the scale?
}"##;

const BEST_PRACTICES_UTILITY_COMPOSITION: &str = r##"// Good: Compose utilities for rapid development
<div className={`
  ${styles['margin-bottom--4']}
  ${styles['padding-top--3']}
  ${styles['font-size--h2']}
`}>
  Content
</div>

// Also good: Use SCSS variables for complex components
.complex-component {
  margin-bottom: utils.space(4);
  padding-top: utils.space(3);
  font-size: type.$font-size--h2;
  color: colors.$color--primary;
}"##;

const REACT_NEXTJS_INTEGRATION: &str = r##"// Import SCSS module
import styles from '@san-siva/stylekit/index.module.scss';

export function Card({ children }) {
  return (
    <div className={styles['padding-top--4']}>
      <h2 className={`${styles['font-size--h2']} ${styles['margin-bottom--2']}`}>
        Card Title
      </h2>
      <div className={styles['margin-top--3']}>
        {children}
      </div>
    </div>
  );
}"##;

const VUE_INTEGRATION: &str = r##"<template>
  <div :class="$style['padding-top--4']">
    <h2 :class="[$style['font-size--h2'], $style['margin-bottom--2']]">
      Card Title
    </h2>
  </div>
</template>

<style module>
@use '@san-siva/stylekit/index.module.scss' as *;
</style>"##;

const ANGULAR_INTEGRATION: &str = r##"// component.scss
@use '@san-siva/stylekit/colors.module.scss' as colors;
@use '@san-siva/stylekit/utils.module.scss' as utils;

:host {
  display: block;
  padding: utils.space(4);
}

.card {
  background: colors.$color--base;
  border: 1px solid colors.$color--border;
}"##;

const CUSTOMIZATION_COLORS: &str = r##"// your-colors.scss
@use '@san-siva/stylekit/colors.module.scss' as stylekit-colors;

// Add your custom colors
$color--brand: #your-color;
$color--custom: #another-color;

// Use both StyleKit and custom colors
.my-component {
  background: stylekit-colors.$color--primary;
  border-color: $color--brand;
}"##;

const CUSTOMIZATION_SPACING: &str = r##"@use '@san-siva/stylekit/utils.module.scss' as utils;

// Define custom spacing
$spacing-custom: utils.rem(72);

.special-section {
  margin-bottom: $spacing-custom;
  // Or use the built-in space function
  padding: utils.space(5);  // 40px
}"##;

const CUSTOMIZATION_TYPOGRAPHY: &str = r##"@use '@san-siva/stylekit/typography.module.scss' as type;

// Override with your font
$custom-font-family: 'Your Font', sans-serif;

.heading {
  font-family: $custom-font-family;
  // But still use StyleKit's scale
  font-size: type.$font-size--h1;
  font-weight: type.$font-weight--700;
}"##;

const PERFORMANCE_BUNDLE_SIZE: &str = r##"// Smaller bundle: Import specific modules
@use '@san-siva/stylekit/colors.module.scss' as colors;
@use '@san-siva/stylekit/utils.module.scss' as utils;

// vs.

// Larger bundle: Import everything
@use '@san-siva/stylekit/index.module.scss' as stylekit;"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_example_is_non_empty() {
        for example in Example::ALL {
            assert!(
                !example.source().trim().is_empty(),
                "{} is empty",
                example.name()
            );
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = Example::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), Example::ALL.len());
    }

    #[test]
    fn install_commands_reference_package() {
        assert_eq!(Example::InstallNpm.source(), format!("npm install {}", PACKAGE));
        assert_eq!(Example::InstallYarn.source(), format!("yarn add {}", PACKAGE));
        assert_eq!(Example::InstallNpm.language(), Language::Bash);
    }

    #[test]
    fn template_literals_are_unescaped() {
        let source = Example::TypographyUtilityClasses.source();
        assert!(source.contains("{`${styles['font-size--h1']}"));
        assert!(!source.contains('\\'));

        assert!(Example::VueIntegration.source().contains("[$style['font-size--h2']"));
    }

    #[test]
    fn block_carries_language_and_margins() {
        let block = Example::VueIntegration.block();
        assert_eq!(block.language, Language::Vue);
        assert!(block.has_margin_up && block.has_margin_down);
    }
}
