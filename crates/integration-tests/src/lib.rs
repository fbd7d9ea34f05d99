//! Integration tests for the Estoca client.
//!
//! The tests in `tests/` run against a live EstocaAI backend and are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! export ESTOCA_API_URL=http://localhost:8080   # or the hosted instance
//! export ESTOCA_API_TOKEN=<token from a logged-in session>
//!
//! cargo test -p estoca-integration-tests -- --ignored
//! ```
//!
//! The tests create and delete their own houses; they do not touch houses
//! they did not create.

use estoca_client::{ApiClient, ApiConfig, AuthToken};

/// Build the API client and credential from the environment.
///
/// # Panics
///
/// Panics when `ESTOCA_API_TOKEN` is unset; the tests cannot run without a
/// credential.
#[must_use]
pub fn context() -> (ApiClient, AuthToken) {
    let config = ApiConfig::from_env().expect("invalid ESTOCA_API_URL");
    let token = AuthToken::from_env().expect("ESTOCA_API_TOKEN must be set");
    (ApiClient::new(&config), token)
}

/// Address fixture for houses created by the tests.
#[must_use]
pub fn test_house(name: &str) -> estoca_client::NewHouse {
    estoca_client::NewHouse {
        name: name.to_owned(),
        state: "SP".to_owned(),
        city: "Sao Paulo".to_owned(),
        neighborhood: "Centro".to_owned(),
        street: "Rua de Teste".to_owned(),
        number: 1,
        complement: None,
    }
}
