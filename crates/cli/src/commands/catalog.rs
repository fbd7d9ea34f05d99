//! Catalog search command.

use estoca_screens::ProductPicker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Search the catalog, fetching up to `pages` pages.
pub async fn search(term: &str, pages: usize) -> Result<()> {
    let (api, token) = super::context()?;

    let mut picker = ProductPicker::new();
    picker.search(&api, &token, term).await?;

    for _ in 1..pages {
        if !picker.fetch_more(&api, &token).await? {
            break;
        }
    }

    if picker.items().is_empty() {
        tracing::info!("No products match \"{term}\"");
        return Ok(());
    }

    for (i, product) in picker.items().iter().enumerate() {
        tracing::info!("[{i}] {} - {}", product.id, product.name);
    }

    if picker.has_more() {
        tracing::info!("More results available (fetched {} pages)", picker.page_index() + 1);
    }
    Ok(())
}
