//! Per-house pantry endpoints.

use estoca_core::{HouseId, ProductId, Quantity};
use reqwest::Method;
use tracing::instrument;

use crate::auth::AuthToken;
use crate::error::Result;
use crate::types::{PantrySummary, ProductDetails};

use super::ApiClient;

impl ApiClient {
    /// Fetch a house's pantry: parallel arrays of product ids and
    /// quantities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token), fields(house_id = %house_id))]
    pub async fn pantry_summary(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
    ) -> Result<PantrySummary> {
        let response =
            Self::send(self.request(Method::GET, token, &format!("casas/{house_id}/despensa")))
                .await?;
        Self::read_json(response).await
    }

    /// Fetch catalog details for the given product ids, comma-joined into a
    /// single `ids` query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token, ids), fields(house_id = %house_id, count = ids.len()))]
    pub async fn pantry_products(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
        ids: &[ProductId],
    ) -> Result<Vec<ProductDetails>> {
        let ids = ids
            .iter()
            .map(ProductId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let request = self
            .request(
                Method::GET,
                token,
                &format!("casas/{house_id}/despensa/produtos"),
            )
            .query(&[("ids", ids.as_str())]);

        let response = Self::send(request).await?;
        Self::read_json(response).await
    }

    /// Set the quantity of a pantry product. The new quantity travels as a
    /// query parameter; the body is an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id, product_id = %product_id))]
    pub async fn set_pantry_quantity(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        let request = self
            .request(
                Method::PUT,
                token,
                &format!("casas/{house_id}/despensa/produtos/{product_id}"),
            )
            .query(&[("quantidade", quantity.get())])
            .json(&serde_json::json!({}));

        Self::send(request).await?;
        Ok(())
    }

    /// Remove a product from the pantry. The item's current quantity rides
    /// along as a query parameter (a quirk of the backend contract).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id, product_id = %product_id))]
    pub async fn remove_pantry_product(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        let request = self
            .request(
                Method::DELETE,
                token,
                &format!("casas/{house_id}/despensa/produtos/{product_id}"),
            )
            .query(&[("quantidade", quantity.get())]);

        Self::send(request).await?;
        Ok(())
    }

    /// Add a product to the pantry with an initial quantity, carried in the
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id, product_id = %product_id))]
    pub async fn add_pantry_product(
        &self,
        token: &AuthToken,
        house_id: &HouseId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<()> {
        let body = serde_json::json!({ "quantidade": quantity.get() });
        let request = self
            .request(
                Method::POST,
                token,
                &format!("casas/{house_id}/despensa/produtos/{product_id}"),
            )
            .json(&body);

        Self::send(request).await?;
        Ok(())
    }
}
