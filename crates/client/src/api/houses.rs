//! House management and selection endpoints.

use estoca_core::HouseId;
use reqwest::Method;
use tracing::instrument;

use crate::auth::AuthToken;
use crate::error::Result;
use crate::types::{House, NewHouse, UserDetails};

use super::ApiClient;

impl ApiClient {
    /// List all houses owned by the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token))]
    pub async fn list_houses(&self, token: &AuthToken) -> Result<Vec<House>> {
        let response = Self::send(self.request(Method::GET, token, "casas")).await?;
        Self::read_json(response).await
    }

    /// Create a house. The backend assigns the identifier and echoes the
    /// created entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token, new_house), fields(name = %new_house.name))]
    pub async fn create_house(&self, token: &AuthToken, new_house: &NewHouse) -> Result<House> {
        let response =
            Self::send(self.request(Method::POST, token, "casas").json(new_house)).await?;
        Self::read_json(response).await
    }

    /// Delete a house.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id))]
    pub async fn delete_house(&self, token: &AuthToken, house_id: &HouseId) -> Result<()> {
        Self::send(self.request(Method::DELETE, token, &format!("casas/{house_id}"))).await?;
        Ok(())
    }

    /// Mark a house as the user's selected house.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token), fields(house_id = %house_id))]
    pub async fn select_house(&self, token: &AuthToken, house_id: &HouseId) -> Result<()> {
        let body = serde_json::json!({ "casaId": house_id });
        Self::send(
            self.request(Method::PUT, token, "selecionar/casa")
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// Fetch the current user's details, including the selected house.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token))]
    pub async fn user_details(&self, token: &AuthToken) -> Result<UserDetails> {
        let response = Self::send(self.request(Method::GET, token, "users/details")).await?;
        Self::read_json(response).await
    }
}
