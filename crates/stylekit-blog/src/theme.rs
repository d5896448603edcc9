//! Stylesheet for the presentation components.
//!
//! Colors and fonts are read from custom properties (`--color-*`,
//! `--font-*`) so the host page decides the palette.

/// CSS for every component class emitted by [`BlogRenderer`](crate::BlogRenderer).
pub const STYLESHEET: &str = r#"/* Blog components */

.blog {
  display: flex;
  flex-direction: column;
  color: var(--color-dark, #313030);
  font-family: var(--font-rubik, system-ui, sans-serif);
  line-height: 1.6;
}

.blog-header {
  padding-bottom: 2rem;
  margin-bottom: 2rem;
  border-bottom: 1px solid var(--color-grey-light, #e1e5e9);
}

.blog-header__title {
  font-family: var(--font-montserrat, system-ui, sans-serif);
  font-size: 3rem;
  font-weight: 800;
  line-height: 1.2;
  margin: 0 0 0.5rem;
}

.blog-header__title span {
  display: block;
}

.blog-header__desc {
  font-size: 1.125rem;
  color: var(--color-grey-dark, #6b7c93);
  margin: 0;
}

.blog-section {
  margin-bottom: 3rem;
}

.blog-section .blog-section {
  margin: 2rem 0 1rem;
}

.blog-section__title {
  font-family: var(--font-montserrat, system-ui, sans-serif);
  font-weight: 700;
  line-height: 1.4;
  margin: 0 0 1rem;
}

.blog-section__title a {
  color: inherit;
  text-decoration: none;
}

.blog-section__title a:hover {
  color: var(--color-primary, #4242fa);
}

h2.blog-section__title {
  font-size: 2rem;
}

h3.blog-section__title {
  font-size: 1.5rem;
}

h4.blog-section__title,
h5.blog-section__title,
h6.blog-section__title {
  font-size: 1.125rem;
}

:where(.blog) p {
  margin: 0;
}

.blog code {
  font-family: var(--font-jetbrains-mono, ui-monospace, monospace);
  font-size: 0.875em;
  background: var(--color-code, #e8f1fc);
  padding: 0.125rem 0.375rem;
  border-radius: 0.25rem;
}

.blog mark {
  background: var(--color-primary-accent-light, #fef1c4);
  padding: 0 0.125rem;
}

.blog ul,
.blog ol {
  padding-left: 1.5rem;
  margin: 0 0 1rem;
}

/* Code blocks */
.code-block {
  position: relative;
  margin: 0;
  border: 1px solid var(--color-grey-light, #e1e5e9);
  border-radius: 0.5rem;
  background: var(--color-surface, #f6f6f6);
  overflow: hidden;
}

.code-block.has-margin-up {
  margin-top: 1rem;
}

.code-block.has-margin-down {
  margin-bottom: 1.5rem;
}

.code-block__label {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--color-grey-dark, #6b7c93);
  padding: 0.5rem 1rem;
  border-bottom: 1px solid var(--color-grey-light, #e1e5e9);
}

.code-block pre {
  margin: 0;
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
  line-height: 1.6;
}

.code-block pre code {
  background: none;
  padding: 0;
  font-size: inherit;
}

.copy-btn {
  position: absolute;
  top: 0.375rem;
  right: 0.5rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  background: var(--color-base, #ffffff);
  color: var(--color-grey-darker, #4f5969);
  border: 1px solid var(--color-grey-light, #e1e5e9);
  border-radius: 0.25rem;
  cursor: pointer;
}

.copy-btn:hover {
  color: var(--color-primary, #4242fa);
}

/* Tables */
.table {
  overflow-x: auto;
}

.table.has-margin-down {
  margin-bottom: 1.5rem;
}

.table table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.9375rem;
}

.table th,
.table td {
  text-align: left;
  vertical-align: middle;
  padding: 0.625rem 0.75rem;
  border-bottom: 1px solid var(--color-grey-light, #e1e5e9);
}

.table th {
  font-weight: 600;
  background: var(--color-surface, #f6f6f6);
}

.swatch {
  display: flex;
  align-items: center;
  gap: 12px;
}

.swatch__chip {
  width: 80px;
  height: 40px;
  border: 1px solid var(--color-grey-light, #e1e5e9);
  border-radius: 4px;
}

/* Callouts */
.callout {
  padding: 1rem 1.25rem;
  border-left: 3px solid var(--color-primary, #4242fa);
  border-radius: 0.25rem;
  background: var(--color-primary-light, rgba(66, 66, 250, 0.05));
}

.callout.has-margin-down {
  margin-bottom: 1.5rem;
}

.callout--success {
  border-left-color: var(--color-secondary, #3dad84);
  background: var(--color-secondary-light, #ecf7f3);
}

.callout--warning {
  border-left-color: var(--color-primary-accent, #fed600);
  background: var(--color-primary-accent-lighter, #fef8e0);
}

.callout--error {
  border-left-color: var(--color-error, #ff4232);
  background: var(--color-error-light, #ffecea);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_every_component_class() {
        for class in [
            ".blog-header",
            ".blog-section__title",
            ".code-block.has-margin-up",
            ".code-block.has-margin-down",
            ".table.has-margin-down",
            ".swatch__chip",
            ".callout.has-margin-down",
        ] {
            assert!(STYLESHEET.contains(class), "missing {}", class);
        }
    }
}
