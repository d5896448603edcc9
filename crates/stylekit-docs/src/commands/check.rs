//! Content check command.

use anyhow::Result;
use stylekit_content::{documentation, verify_catalog, verify_page, Example};

/// Run the check command. Fails if any issue is found.
pub async fn run() -> Result<()> {
    let page = documentation();

    let mut issues = verify_catalog();
    issues.extend(verify_page(&page));

    for issue in &issues {
        tracing::error!("{}", issue);
    }

    if !issues.is_empty() {
        anyhow::bail!("Found {} content issue(s)", issues.len());
    }

    tracing::info!(
        "Checked {} examples and {} sections, no issues",
        Example::ALL.len(),
        page.all_sections().len()
    );

    Ok(())
}
