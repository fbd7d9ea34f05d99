//! Pantry inspection and editing commands.

use estoca_core::{ProductId, Quantity};
use estoca_screens::PantryScreen;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// List the selected house's pantry, optionally filtered by name.
pub async fn list(filter: Option<&str>) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = PantryScreen::new();
    screen.bootstrap(&api, &token).await?;

    if let Some(filter) = filter {
        screen.set_filter(filter);
    }

    let visible = screen.visible_items();
    if visible.is_empty() {
        tracing::info!("Pantry is empty");
        return Ok(());
    }

    for item in visible {
        tracing::info!("{} - {} x{}", item.product_id, item.name, item.quantity);
    }
    Ok(())
}

/// Set a pantry item's quantity.
pub async fn set(product_id: &str, quantity: u32) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = PantryScreen::new();
    screen.bootstrap(&api, &token).await?;

    screen
        .set_quantity(
            &api,
            &token,
            &ProductId::new(product_id),
            Quantity::new(quantity),
        )
        .await?;
    tracing::info!("Quantity of {product_id} set to {quantity}");
    Ok(())
}

/// Remove a product from the pantry.
pub async fn remove(product_id: &str) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = PantryScreen::new();
    screen.bootstrap(&api, &token).await?;

    screen
        .remove(&api, &token, &ProductId::new(product_id))
        .await?;
    tracing::info!("Removed {product_id} from the pantry");
    Ok(())
}
