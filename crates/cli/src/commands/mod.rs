//! CLI command implementations, one module per screen flow.

pub mod add;
pub mod catalog;
pub mod houses;
pub mod pantry;

use estoca_client::{ApiClient, ApiConfig, AuthToken};

/// Build the API client and credential from the environment.
pub fn context() -> Result<(ApiClient, AuthToken), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let token = AuthToken::from_env()?;
    Ok((ApiClient::new(&config), token))
}
