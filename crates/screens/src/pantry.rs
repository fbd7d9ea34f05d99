//! Pantry screen: per-house inventory with quantity edits.
//!
//! The backend stores a pantry as two index-aligned arrays (product ids and
//! quantities) and serves product details from a separate endpoint, so
//! loading is a two-step fetch followed by a join. The join is tolerant:
//! ids the details endpoint doesn't know get a fallback name and the
//! placeholder image, and missing quantity slots read as zero.

use estoca_client::{ApiClient, AuthToken, PantrySummary, ProductDetails};
use estoca_core::{HouseId, ProductId, Quantity};
use tracing::debug;

use crate::error::{Result, ScreenError};

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Name shown for products the catalog no longer knows.
const FALLBACK_NAME: &str = "Unnamed product";

/// One pantry line: a product with its stocked quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryItem {
    pub product_id: ProductId,
    pub name: String,
    /// `data:` URL of the product image, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    pub quantity: Quantity,
    pub house_id: HouseId,
}

/// State of the pantry screen.
#[derive(Debug, Default)]
pub struct PantryScreen {
    house: Option<HouseId>,
    items: Vec<PantryItem>,
    filter: String,
}

impl PantryScreen {
    /// Create an empty screen. Call [`bootstrap`](Self::bootstrap) to bind
    /// it to the user's selected house and load the items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            house: None,
            items: Vec::new(),
            filter: String::new(),
        }
    }

    /// The house this screen operates against, if any.
    #[must_use]
    pub fn house(&self) -> Option<&HouseId> {
        self.house.as_ref()
    }

    /// All loaded items, unfiltered.
    #[must_use]
    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    /// Current name filter.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the local name filter. Filtering never refetches.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Items matching the name filter, case-insensitively. An empty filter
    /// matches everything.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&PantryItem> {
        if self.filter.is_empty() {
            return self.items.iter().collect();
        }

        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Point the screen at another house, clearing the stale item list.
    ///
    /// Returns whether the house actually changed; when it did, the caller
    /// is expected to [`load`](Self::load).
    pub fn change_house(&mut self, house: Option<HouseId>) -> bool {
        if house == self.house {
            return false;
        }

        debug!(house = ?house, "pantry house changed");
        self.house = house;
        self.items.clear();
        true
    }

    fn current_house(&self) -> Result<HouseId> {
        self.house.clone().ok_or(ScreenError::NoHouseSelected)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == *product_id)
    }

    /// Bind the screen to the user's selected house and load its pantry.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NoHouseSelected`] when the user has no
    /// selected house, or an API error.
    pub async fn bootstrap(&mut self, api: &ApiClient, token: &AuthToken) -> Result<()> {
        let details = api.user_details(token).await?;
        let house = details.selected_house.ok_or(ScreenError::NoHouseSelected)?;

        self.change_house(Some(house));
        self.load(api, token).await
    }

    /// Reload the item list for the current house.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NoHouseSelected`] when no house is set, or an
    /// API error; on failure the list is left empty rather than stale.
    pub async fn load(&mut self, api: &ApiClient, token: &AuthToken) -> Result<()> {
        let house = self.current_house()?;
        self.items.clear();

        let summary = api.pantry_summary(token, &house).await?;
        if summary.product_ids.is_empty() {
            return Ok(());
        }

        let details = api
            .pantry_products(token, &house, &summary.product_ids)
            .await?;
        self.items = assemble_items(&house, &summary, &details);
        Ok(())
    }

    /// Set a pantry item's quantity, remotely then locally.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotFound`] if the product is not in the loaded
    /// list, [`ScreenError::NoHouseSelected`] when no house is set, or an
    /// API error (local quantity unchanged).
    pub async fn set_quantity(
        &mut self,
        api: &ApiClient,
        token: &AuthToken,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        let house = self.current_house()?;
        let idx = self
            .position(product_id)
            .ok_or_else(|| ScreenError::NotFound(format!("pantry product {product_id}")))?;

        api.set_pantry_quantity(token, &house, product_id, quantity)
            .await?;

        if let Some(item) = self.items.get_mut(idx) {
            item.quantity = quantity;
        }
        Ok(())
    }

    /// Remove a product from the pantry, remotely then locally.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotFound`] if the product is not in the loaded
    /// list, [`ScreenError::NoHouseSelected`] when no house is set, or an
    /// API error (item kept locally).
    pub async fn remove(
        &mut self,
        api: &ApiClient,
        token: &AuthToken,
        product_id: &ProductId,
    ) -> Result<()> {
        let house = self.current_house()?;
        let idx = self
            .position(product_id)
            .ok_or_else(|| ScreenError::NotFound(format!("pantry product {product_id}")))?;
        let quantity = self.items.get(idx).map_or(Quantity::ZERO, |i| i.quantity);

        api.remove_pantry_product(token, &house, product_id, quantity)
            .await?;

        self.items.remove(idx);
        Ok(())
    }
}

/// Join the backend's parallel arrays with the product details by id.
fn assemble_items(
    house: &HouseId,
    summary: &PantrySummary,
    details: &[ProductDetails],
) -> Vec<PantryItem> {
    summary
        .product_ids
        .iter()
        .enumerate()
        .map(|(i, product_id)| {
            let found = details.iter().find(|d| d.id == *product_id);

            PantryItem {
                product_id: product_id.clone(),
                name: found
                    .and_then(|d| d.name.clone())
                    .unwrap_or_else(|| FALLBACK_NAME.to_owned()),
                image: found.and_then(|d| d.image_b64.as_deref()).map_or_else(
                    || PLACEHOLDER_IMAGE.to_owned(),
                    |b64| format!("data:image/png;base64,{b64}"),
                ),
                quantity: summary.quantities.get(i).copied().map_or(Quantity::ZERO, Quantity::new),
                house_id: house.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summary(ids: &[&str], quantities: &[u32]) -> PantrySummary {
        PantrySummary {
            product_ids: ids.iter().copied().map(ProductId::new).collect(),
            quantities: quantities.to_vec(),
        }
    }

    fn details(id: &str, name: Option<&str>, image_b64: Option<&str>) -> ProductDetails {
        ProductDetails {
            id: ProductId::new(id),
            name: name.map(str::to_owned),
            image_b64: image_b64.map(str::to_owned),
        }
    }

    #[test]
    fn test_join_by_id() {
        let house = HouseId::new("h1");
        let summary = summary(&["p1", "p2"], &[3, 0]);
        let details = [
            details("p2", Some("Feijao"), None),
            details("p1", Some("Arroz"), Some("aGVsbG8=")),
        ];

        let items = assemble_items(&house, &summary, &details);
        assert_eq!(items.len(), 2);

        let first = items.first().unwrap();
        assert_eq!(first.name, "Arroz");
        assert_eq!(first.quantity, Quantity::new(3));
        assert_eq!(first.image, "data:image/png;base64,aGVsbG8=");
        assert_eq!(first.house_id, house);

        let second = items.get(1).unwrap();
        assert_eq!(second.name, "Feijao");
        assert_eq!(second.image, PLACEHOLDER_IMAGE);
        assert_eq!(second.quantity, Quantity::ZERO);
    }

    #[test]
    fn test_join_unknown_id_gets_fallbacks() {
        let house = HouseId::new("h1");
        let summary = summary(&["ghost"], &[2]);

        let items = assemble_items(&house, &summary, &[]);
        let item = items.first().unwrap();
        assert_eq!(item.name, FALLBACK_NAME);
        assert_eq!(item.image, PLACEHOLDER_IMAGE);
        assert_eq!(item.quantity, Quantity::new(2));
    }

    #[test]
    fn test_join_missing_quantity_slot_reads_zero() {
        let house = HouseId::new("h1");
        let summary = summary(&["p1", "p2"], &[5]);
        let details = [details("p1", Some("Arroz"), None)];

        let items = assemble_items(&house, &summary, &details);
        assert_eq!(items.get(1).unwrap().quantity, Quantity::ZERO);
    }

    #[test]
    fn test_join_keeps_duplicates() {
        let house = HouseId::new("h1");
        let summary = summary(&["p1", "p1"], &[1, 2]);
        let details = [details("p1", Some("Arroz"), None)];

        let items = assemble_items(&house, &summary, &details);
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().unwrap().quantity, Quantity::new(1));
        assert_eq!(items.get(1).unwrap().quantity, Quantity::new(2));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let house = HouseId::new("h1");
        let summary = summary(&["p1", "p2"], &[1, 1]);
        let details = [
            details("p1", Some("Arroz Integral"), None),
            details("p2", Some("Feijao"), None),
        ];

        let mut screen = PantryScreen::new();
        screen.house = Some(house.clone());
        screen.items = assemble_items(&house, &summary, &details);

        screen.set_filter("arroz");
        let visible = screen.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().unwrap().name, "Arroz Integral");

        screen.set_filter("");
        assert_eq!(screen.visible_items().len(), 2);
    }

    #[test]
    fn test_change_house_clears_items() {
        let house = HouseId::new("h1");
        let summary = summary(&["p1"], &[1]);

        let mut screen = PantryScreen::new();
        screen.house = Some(house.clone());
        screen.items = assemble_items(&house, &summary, &[]);

        assert!(!screen.change_house(Some(HouseId::new("h1"))));
        assert_eq!(screen.items().len(), 1);

        assert!(screen.change_house(Some(HouseId::new("h2"))));
        assert!(screen.items().is_empty());
    }
}
