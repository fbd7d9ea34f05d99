//! Paginated product catalog search.

use reqwest::Method;
use tracing::instrument;

use crate::auth::AuthToken;
use crate::error::Result;
use crate::types::{CatalogProduct, ProductPageBody};

use super::ApiClient;

impl ApiClient {
    /// Fetch one page of catalog products filtered by `search`.
    ///
    /// `page` is zero-based. The endpoint returns either a page envelope or
    /// a raw array; both are handled.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, token))]
    pub async fn search_products(
        &self,
        token: &AuthToken,
        page: usize,
        size: usize,
        search: &str,
    ) -> Result<Vec<CatalogProduct>> {
        let request = self.request(Method::GET, token, "produtos/paginado").query(&[
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("search", search.to_owned()),
        ]);

        let response = Self::send(request).await?;
        let body: ProductPageBody = Self::read_json(response).await?;
        Ok(body.into_products())
    }
}
