//! House management commands.

use estoca_client::NewHouse;
use estoca_core::HouseId;
use estoca_screens::HousesScreen;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// List all houses, marking the selected one.
pub async fn list() -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = HousesScreen::new();
    screen.refresh(&api, &token).await?;

    if screen.houses().is_empty() {
        tracing::info!("No houses registered");
        return Ok(());
    }

    for house in screen.houses() {
        let marker = if screen.selected() == Some(&house.id) {
            " (selected)"
        } else {
            ""
        };
        tracing::info!("{} - {}{}", house.id, house.name, marker);
        tracing::info!("    {}, {} - {}", house.neighborhood, house.city, house.state);
        tracing::info!("    {}, {}", house.street, house.number);
    }
    Ok(())
}

/// Create a house.
pub async fn create(new_house: NewHouse) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = HousesScreen::new();
    screen.refresh(&api, &token).await?;

    let id = screen.create(&api, &token, &new_house).await?;
    tracing::info!("House created: {id}");
    Ok(())
}

/// Select a house as the active context.
pub async fn select(id: &str) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = HousesScreen::new();
    screen.refresh(&api, &token).await?;

    screen.select(&api, &token, &HouseId::new(id)).await?;
    tracing::info!("Selected house: {id}");
    Ok(())
}

/// Delete a house. If it was selected, the selection moves to its
/// predecessor (or the new head).
pub async fn delete(id: &str) -> Result<()> {
    let (api, token) = super::context()?;

    let mut screen = HousesScreen::new();
    screen.refresh(&api, &token).await?;

    screen.delete(&api, &token, &HouseId::new(id)).await?;
    tracing::info!("House deleted: {id}");

    match screen.selected() {
        Some(selected) => tracing::info!("Selection is now: {selected}"),
        None => tracing::info!("No house selected"),
    }
    Ok(())
}
