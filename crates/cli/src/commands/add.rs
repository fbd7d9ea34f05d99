//! Add a catalog product to the pantry or shopping list.
//!
//! Mirrors the app's add flow: search the catalog, pick a result, step the
//! quantity, submit to the selected house.

use estoca_core::Quantity;
use estoca_screens::{AddProductFlow, ScreenError};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Where the chosen product goes.
#[derive(Debug, Clone, Copy)]
pub enum Target {
    Pantry,
    ShoppingList,
}

/// Search for a product and add it to the selected house.
pub async fn run(target: Target, search: &str, pick: usize, quantity: u32) -> Result<()> {
    let (api, token) = super::context()?;

    let details = api.user_details(&token).await?;
    let house = details
        .selected_house
        .ok_or(ScreenError::NoHouseSelected)?;

    let mut flow = AddProductFlow::new();
    flow.picker_mut().search(&api, &token, search).await?;

    let product = flow
        .picker()
        .items()
        .get(pick)
        .cloned()
        .ok_or_else(|| ScreenError::NotFound(format!("search result #{pick}")))?;

    tracing::info!("Adding {} x{quantity}", product.name);
    flow.choose(product);
    flow.set_quantity(Quantity::new(quantity));

    match target {
        Target::Pantry => flow.add_to_pantry(&api, &token, &house).await?,
        Target::ShoppingList => flow.add_to_shopping_list(&api, &token, &house).await?,
    }

    tracing::info!("Done");
    Ok(())
}
