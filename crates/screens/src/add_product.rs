//! The shared "add product" flow.
//!
//! Reached from the bottom navigation bar: search the catalog through the
//! [`ProductPicker`], choose a product, step a quantity (never below one),
//! then submit it to the pantry or the shopping list of the given house.

use estoca_client::{ApiClient, AuthToken, CatalogProduct};
use estoca_core::{HouseId, Quantity};

use crate::error::{Result, ScreenError};
use crate::picker::ProductPicker;

/// State of the add-product flow.
#[derive(Debug)]
pub struct AddProductFlow {
    picker: ProductPicker,
    chosen: Option<CatalogProduct>,
    quantity: Quantity,
}

impl Default for AddProductFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AddProductFlow {
    /// Create a fresh flow with the stepper at one.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            picker: ProductPicker::new(),
            chosen: None,
            quantity: Quantity::ONE,
        }
    }

    /// The embedded catalog picker.
    #[must_use]
    pub const fn picker(&self) -> &ProductPicker {
        &self.picker
    }

    /// Mutable access to the embedded picker, for searching and paging.
    pub const fn picker_mut(&mut self) -> &mut ProductPicker {
        &mut self.picker
    }

    /// The product currently chosen for submission, if any.
    #[must_use]
    pub const fn chosen(&self) -> Option<&CatalogProduct> {
        self.chosen.as_ref()
    }

    /// Quantity to submit.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Choose a product from the picker results. Resets the stepper to one.
    pub fn choose(&mut self, product: CatalogProduct) {
        self.chosen = Some(product);
        self.quantity = Quantity::ONE;
    }

    /// Dismiss the chosen product without closing the flow.
    pub fn cancel_selection(&mut self) {
        self.chosen = None;
    }

    /// Step the quantity up.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.increment();
    }

    /// Step the quantity down, never below one.
    pub fn decrement(&mut self) {
        if self.quantity > Quantity::ONE {
            self.quantity = self.quantity.decrement();
        }
    }

    /// Set the quantity directly (number-input path), clamped to at least
    /// one.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity.max(Quantity::ONE);
    }

    /// Close the flow: drop the choice, reset the stepper and the picker.
    pub fn close(&mut self) {
        self.chosen = None;
        self.quantity = Quantity::ONE;
        self.picker.reset();
    }

    /// Submit the chosen product to the house's pantry.
    ///
    /// On success the choice is dismissed; the picker keeps its results so
    /// the user can add another product.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NoProductChosen`] when nothing is chosen, or
    /// an API error (choice kept).
    pub async fn add_to_pantry(
        &mut self,
        api: &ApiClient,
        token: &AuthToken,
        house_id: &HouseId,
    ) -> Result<()> {
        let product = self.chosen.as_ref().ok_or(ScreenError::NoProductChosen)?;

        api.add_pantry_product(token, house_id, &product.id, self.quantity)
            .await?;
        self.chosen = None;
        Ok(())
    }

    /// Submit the chosen product to the house's shopping list.
    ///
    /// On success the choice is dismissed; the picker keeps its results.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NoProductChosen`] when nothing is chosen, or
    /// an API error (choice kept).
    pub async fn add_to_shopping_list(
        &mut self,
        api: &ApiClient,
        token: &AuthToken,
        house_id: &HouseId,
    ) -> Result<()> {
        let product = self.chosen.as_ref().ok_or(ScreenError::NoProductChosen)?;

        api.add_shopping_list_product(token, house_id, &product.id, self.quantity)
            .await?;
        self.chosen = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use estoca_core::ProductId;

    use super::*;

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            name: format!("Produto {id}"),
            image: None,
        }
    }

    #[test]
    fn test_stepper_floor_is_one() {
        let mut flow = AddProductFlow::new();
        assert_eq!(flow.quantity(), Quantity::ONE);

        flow.decrement();
        assert_eq!(flow.quantity(), Quantity::ONE);

        flow.increment();
        flow.increment();
        assert_eq!(flow.quantity(), Quantity::new(3));
        flow.decrement();
        assert_eq!(flow.quantity(), Quantity::new(2));
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut flow = AddProductFlow::new();
        flow.set_quantity(Quantity::ZERO);
        assert_eq!(flow.quantity(), Quantity::ONE);

        flow.set_quantity(Quantity::new(7));
        assert_eq!(flow.quantity(), Quantity::new(7));
    }

    #[test]
    fn test_choose_resets_stepper() {
        let mut flow = AddProductFlow::new();
        flow.increment();
        flow.choose(product("p1"));

        assert_eq!(flow.chosen().unwrap().id, ProductId::new("p1"));
        assert_eq!(flow.quantity(), Quantity::ONE);
    }

    #[test]
    fn test_close_resets_everything() {
        let mut flow = AddProductFlow::new();
        let req = flow.picker_mut().set_term("arroz").unwrap();
        flow.picker_mut().apply_page(
            &req,
            vec![product("p1"), product("p2")],
        );
        flow.choose(product("p1"));
        flow.increment();

        flow.close();
        assert!(flow.chosen().is_none());
        assert_eq!(flow.quantity(), Quantity::ONE);
        assert!(flow.picker().items().is_empty());
        assert!(flow.picker().term().is_empty());
    }
}
