//! Domain types for the EstocaAI REST API.
//!
//! The backend speaks Portuguese field names on the wire; these types keep
//! English names in Rust and map with explicit serde renames so the contract
//! stays visible in one place.

use estoca_core::{HouseId, ProductId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Houses
// =============================================================================

/// A user-owned house with its postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    /// Backend-assigned identifier.
    pub id: HouseId,
    /// Display name (e.g. "Casa do Joao").
    #[serde(rename = "nome")]
    pub name: String,
    /// State, two-letter code on the hosted instance.
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: i64,
    /// Address complement (apartment, block). Not all houses carry one.
    #[serde(rename = "complemento", default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

/// Payload for creating a house. The backend assigns the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct NewHouse {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: i64,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

/// Current-user details. Only the selected house is consumed here; other
/// profile fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetails {
    /// Identifier of the house the user currently operates against, if any.
    #[serde(rename = "casaEscolhida", default)]
    pub selected_house: Option<HouseId>,
}

// =============================================================================
// Pantry
// =============================================================================

/// A house's pantry as stored by the backend: parallel arrays of product ids
/// and quantities, index-aligned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PantrySummary {
    #[serde(rename = "produtosIds", default)]
    pub product_ids: Vec<ProductId>,
    #[serde(rename = "produtosQuantidades", default)]
    pub quantities: Vec<u32>,
}

/// Catalog details for a product referenced by a pantry.
///
/// The backend is inconsistent about the id field (`_id` on some documents,
/// `id` on others), so both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetails {
    #[serde(alias = "_id")]
    pub id: ProductId,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    /// Raw base64 image payload, when the product has one.
    #[serde(rename = "imagemb64", default)]
    pub image_b64: Option<String>,
}

// =============================================================================
// Catalog
// =============================================================================

/// A product from the paginated catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response body of `GET /produtos/paginado`.
///
/// The endpoint returns either a Spring-style page envelope
/// (`{"content": [...]}`) or a raw array; both shapes must parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductPageBody {
    Paged { content: Vec<CatalogProduct> },
    Plain(Vec<CatalogProduct>),
}

impl ProductPageBody {
    pub(crate) fn into_products(self) -> Vec<CatalogProduct> {
        match self {
            Self::Paged { content } => content,
            Self::Plain(products) => products,
        }
    }
}
