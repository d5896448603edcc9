//! Utility classes provided by the StyleKit stylesheet.
//!
//! Page markup refers to classes through [`Utility`] values. Every value
//! returned by [`Utility::all`] has a rule in the generated stylesheet, and
//! [`Utility::class_name`] is the class that rule selects.

use crate::tokens::{rem, space_px, TypeScale, BREAKPOINTS, FONT_WEIGHTS, MAX_SPACE, PAGE_CONTENTS_MAX_WIDTH_PX, PAGE_MAX_WIDTH_PX};

/// Box side of a spacing utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    Margin(Side, u8),
    Padding(Side, u8),
    FontSize(TypeScale),
    FontWeight(u16),
    Page,
    PageContentsMaxWidth,
    Container,
    ContainerContentsCentered,
    ContainerNoPadding,
    LinkHighlighted,
}

impl Utility {
    /// Every class the stylesheet defines.
    pub fn all() -> Vec<Utility> {
        let mut all = Vec::new();

        for side in Side::ALL {
            for step in 0..=MAX_SPACE {
                all.push(Utility::Margin(side, step));
            }
        }
        for side in Side::ALL {
            for step in 0..=MAX_SPACE {
                all.push(Utility::Padding(side, step));
            }
        }

        all.extend(TypeScale::ALL.into_iter().map(Utility::FontSize));
        all.extend(FONT_WEIGHTS.iter().map(|w| Utility::FontWeight(w.weight)));
        all.extend([
            Utility::Page,
            Utility::PageContentsMaxWidth,
            Utility::Container,
            Utility::ContainerContentsCentered,
            Utility::ContainerNoPadding,
            Utility::LinkHighlighted,
        ]);

        all
    }

    /// Whether the stylesheet has a rule for this class.
    pub fn is_defined(self) -> bool {
        match self {
            Self::Margin(_, step) | Self::Padding(_, step) => step <= MAX_SPACE,
            Self::FontWeight(weight) => FONT_WEIGHTS.iter().any(|w| w.weight == weight),
            _ => true,
        }
    }

    /// The class name, e.g. `margin-bottom--2`.
    pub fn class_name(self) -> String {
        match self {
            Self::Margin(side, step) => format!("margin-{}--{}", side.as_str(), step),
            Self::Padding(side, step) => format!("padding-{}--{}", side.as_str(), step),
            Self::FontSize(scale) => format!("font-size--{}", scale.key()),
            Self::FontWeight(weight) => format!("font-weight--{}", weight),
            Self::Page => "page".to_string(),
            Self::PageContentsMaxWidth => "page--contents-max-width".to_string(),
            Self::Container => "container".to_string(),
            Self::ContainerContentsCentered => "container--contents-centered".to_string(),
            Self::ContainerNoPadding => "container--no-padding".to_string(),
            Self::LinkHighlighted => "a--highlighted".to_string(),
        }
    }

    /// The CSS rule(s) for this class.
    pub fn css(self) -> String {
        let class = self.class_name();
        match self {
            Self::Margin(side, step) => format!(
                ".{} {{ margin-{}: {}; }}",
                class,
                side.as_str(),
                rem(space_px(step))
            ),
            Self::Padding(side, step) => format!(
                ".{} {{ padding-{}: {}; }}",
                class,
                side.as_str(),
                rem(space_px(step))
            ),
            Self::FontSize(scale) => format!(".{} {{ font-size: {}; }}", class, rem(scale.px())),
            Self::FontWeight(weight) => format!(".{} {{ font-weight: {}; }}", class, weight),
            Self::Page => page_css(),
            Self::PageContentsMaxWidth => format!(
                ".{} > * {{ max-width: {}px; }}",
                class, PAGE_CONTENTS_MAX_WIDTH_PX
            ),
            Self::Container => format!(
                ".{} {{ display: flex; flex-direction: column; justify-content: flex-start; \
                 padding: 18px; min-height: calc(100% - 36px); width: calc(100% - 36px); }}",
                class
            ),
            Self::ContainerContentsCentered => format!(
                ".{} {{ justify-content: center; align-items: center; }}",
                class
            ),
            Self::ContainerNoPadding => format!(".{} {{ padding: 0; }}", class),
            Self::LinkHighlighted => format!(
                ".{0} {{ color: var(--color-link); text-decoration: none; \
                 border-bottom: 1px solid currentColor; }}\n\
                 .{0}:hover {{ color: var(--color-primary); }}",
                class
            ),
        }
    }
}

/// `.page` with padding that tightens at each breakpoint.
fn page_css() -> String {
    let mut css = format!(
        ".page {{ --topbar-height: 80px; --padding-sections: 48px; max-width: {}px; \
         margin: 0 auto; padding: 48px var(--padding-sections); }}",
        PAGE_MAX_WIDTH_PX
    );

    // Widest breakpoint first so narrower queries override.
    let mut padding = 40;
    for breakpoint in BREAKPOINTS.iter().rev() {
        css.push_str(&format!(
            "\n@media (max-width: {}px) {{ .page {{ --padding-sections: {}px; }} }}",
            breakpoint.max_width_px, padding
        ));
        padding = (padding - 4).max(16);
    }

    css
}
