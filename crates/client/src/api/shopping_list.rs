//! Per-house shopping-list endpoints.

use estoca_core::{HouseId, ProductId, Quantity};
use reqwest::Method;
use tracing::instrument;

use crate::auth::AuthToken;
use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// Add a product to the shopping list. The quantity travels as a query
    /// parameter; the request has no body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id, product_id = %product_id))]
    pub async fn add_shopping_list_product(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        let request = self
            .request(
                Method::POST,
                token,
                &format!("casas/{house_id}/lista-de-compras/produtos/{product_id}"),
            )
            .query(&[("quantidade", quantity.get())]);

        Self::send(request).await?;
        Ok(())
    }
}
