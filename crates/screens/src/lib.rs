//! Client-state protocols behind the Estoca app screens.
//!
//! Each screen is a thin presentation layer over one of the state machines
//! in this crate; the machines own the interesting invariants and leave
//! rendering, routing and modal visibility to the host UI.
//!
//! # Modules
//!
//! - [`houses`] - Selection-consistency over the house list: the selected
//!   house always points at an existing house, or nothing when the list is
//!   empty, across create/select/delete.
//! - [`picker`] - Incremental paginated catalog search: term changes reset
//!   pagination, "load more" appends without disturbing the viewport, and
//!   stale responses are discarded.
//! - [`pantry`] - Per-house inventory: two-step fetch and join of the
//!   backend's parallel arrays, quantity edits, removals, local name filter.
//! - [`add_product`] - The shared "add product" flow on top of the picker:
//!   choose a product, step a quantity, submit to pantry or shopping list.
//!
//! State transitions are split into pure methods (exercised directly by the
//! unit tests) and thin async drivers that talk to the [`estoca_client`]
//! API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod add_product;
pub mod error;
pub mod houses;
pub mod pantry;
pub mod picker;

pub use add_product::AddProductFlow;
pub use error::{Result, ScreenError};
pub use houses::HousesScreen;
pub use pantry::{PantryItem, PantryScreen};
pub use picker::{PAGE_SIZE, PageRequest, ProductPicker};
