//! Asset pipeline for CSS and JavaScript processing.

use stylekit_content::tokens::PALETTE;
use stylekit_content::Utility;

use crate::layout::FONTS;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    ///
    /// Palette custom properties come first, then font classes, utility
    /// classes, the site shell and finally the component styles.
    pub fn generate_css() -> String {
        let mut css = String::new();

        css.push_str(":root {\n");
        for color in PALETTE {
            css.push_str(&format!("  {}: {};\n", color.custom_property(), color.value));
        }
        css.push_str("}\n\n");

        for font in FONTS {
            css.push_str(&font.css());
            css.push('\n');
        }
        css.push('\n');

        css.push_str(BASE_CSS);
        css.push('\n');

        css.push_str("/* Utilities */\n");
        for utility in Utility::all() {
            css.push_str(&utility.css());
            css.push('\n');
        }
        css.push('\n');

        css.push_str(SHELL_CSS);
        css.push('\n');
        css.push_str(stylekit_blog::theme::STYLESHEET);

        css
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BASE_CSS: &str = r#"/* Globals */
*,
*::before,
*::after {
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  margin: 0;
  font-family: var(--font-rubik, system-ui, sans-serif);
  font-size: 1rem;
  line-height: 1.6;
  color: var(--color-dark);
  background: var(--color-base);
  -webkit-font-smoothing: antialiased;
}

h1,
h2,
h3,
h4,
h5,
h6,
p {
  margin: 0;
}

mark {
  background: var(--color-primary-accent-light);
  color: inherit;
  padding: 0 2px;
}
"#;

const SHELL_CSS: &str = r#"/* Shell */
.layout {
  display: grid;
  grid-template-columns: minmax(0, 1fr) 220px;
  gap: 48px;
}

.toc {
  position: sticky;
  top: 48px;
  align-self: start;
  max-height: calc(100vh - 96px);
  overflow-y: auto;
}

.toc__title {
  font-family: var(--font-montserrat, sans-serif);
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--color-grey-dark);
  margin-bottom: 0.75rem;
}

.toc ul {
  list-style: none;
  margin: 0;
  padding: 0;
}

.toc li {
  margin-bottom: 0.25rem;
}

.toc a {
  font-size: 0.875rem;
  color: var(--color-grey-dark);
  text-decoration: none;
  transition: color 0.15s;
}

.toc a:hover,
.toc a.is-active {
  color: var(--color-primary);
}

.toc-level-3 {
  padding-left: 1rem;
}

@media (max-width: 834px) {
  .layout {
    grid-template-columns: minmax(0, 1fr);
  }

  .toc {
    display: none;
  }
}
"#;

const DEFAULT_JS: &str = r#"// StyleKit Docs - Runtime JavaScript
(function() {
  'use strict';

  // Highlight the TOC entry of the section in view
  const tocLinks = new Map();
  document.querySelectorAll('.toc a').forEach(link => {
    tocLinks.set(link.getAttribute('href').slice(1), link);
  });

  if ('IntersectionObserver' in window && tocLinks.size > 0) {
    const observer = new IntersectionObserver(entries => {
      entries.forEach(entry => {
        const link = tocLinks.get(entry.target.id);
        if (link && entry.isIntersecting) {
          tocLinks.forEach(l => l.classList.remove('is-active'));
          link.classList.add('is-active');
        }
      });
    }, { rootMargin: '0px 0px -70% 0px' });

    document.querySelectorAll('.blog-section').forEach(section => {
      if (tocLinks.has(section.id)) observer.observe(section);
    });
  }

  // Copy code button for code blocks
  document.querySelectorAll('.code-block').forEach(figure => {
    // Skip if already has a copy button
    if (figure.querySelector('.copy-btn')) return;

    const btn = document.createElement('button');
    btn.className = 'copy-btn';
    btn.textContent = 'Copy';
    btn.setAttribute('type', 'button');

    btn.addEventListener('click', async () => {
      const code = figure.querySelector('code');
      const text = code ? code.textContent : '';

      try {
        await navigator.clipboard.writeText(text || '');
        btn.textContent = 'Copied!';
        setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
      } catch (err) {
        btn.textContent = 'Error';
        setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
      }
    });

    figure.appendChild(btn);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css_from_tokens() {
        let css = AssetPipeline::generate_css();

        assert!(css.contains("--color-primary: #4242fa;"));
        assert!(css.contains("--color-black: #000;"));
        assert!(css.contains(".font-montserrat { --font-montserrat: 'Montserrat', sans-serif; }"));
        assert!(css.contains(".margin-bottom--2 { margin-bottom: 1rem; }"));
        assert!(css.contains(".font-size--h1 { font-size: 2.25rem; }"));
        assert!(css.contains(".a--highlighted"));
        assert!(css.contains(".code-block"));
    }

    #[test]
    fn defines_every_utility() {
        let css = AssetPipeline::generate_css();
        for utility in Utility::all() {
            assert!(
                css.contains(&format!(".{} ", utility.class_name())),
                "missing rule for {}",
                utility.class_name()
            );
        }
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("addEventListener"));
        assert!(js.contains("clipboard"));
        assert!(js.contains(".code-block"));
    }

    #[test]
    fn minifies_generated_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains(".page"));
        assert!(minified.contains("--color-primary"));
    }
}
