//! Houses screen: list, create, select, delete.
//!
//! The invariant this module exists for: the selected house always points at
//! a house present in the local list, or nothing when the list is empty.
//! Deleting the selected house repairs the selection to the visual
//! predecessor (or the new head), which keeps the user's scroll position and
//! mental model stable instead of jumping to an arbitrary element.

use estoca_client::{ApiClient, AuthToken, House, NewHouse};
use estoca_core::HouseId;
use tracing::debug;

use crate::error::{Result, ScreenError};

/// State of the houses screen.
#[derive(Debug, Default)]
pub struct HousesScreen {
    houses: Vec<House>,
    selected: Option<HouseId>,
}

impl HousesScreen {
    /// Create an empty screen. Call [`refresh`](Self::refresh) to populate
    /// it.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            houses: Vec::new(),
            selected: None,
        }
    }

    /// The houses, in server order.
    #[must_use]
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// Identifier of the selected house, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&HouseId> {
        self.selected.as_ref()
    }

    /// The selected house itself, if any.
    #[must_use]
    pub fn selected_house(&self) -> Option<&House> {
        let id = self.selected.as_ref()?;
        self.houses.iter().find(|h| h.id == *id)
    }

    fn position(&self, id: &HouseId) -> Option<usize> {
        self.houses.iter().position(|h| h.id == *id)
    }

    /// Reload the house list and the user's selection from the backend.
    ///
    /// A selection the server still reports but the list no longer contains
    /// is dropped rather than kept dangling.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails; local state is untouched in
    /// that case.
    pub async fn refresh(&mut self, api: &ApiClient, token: &AuthToken) -> Result<()> {
        let houses = api.list_houses(token).await?;
        let details = api.user_details(token).await?;

        self.selected = details
            .selected_house
            .filter(|id| houses.iter().any(|h| h.id == *id));
        self.houses = houses;
        Ok(())
    }

    /// Select a house.
    ///
    /// Persists the choice, then re-reads the user's details so the local
    /// selection reflects what the server actually stored.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotFound`] if `id` is not in the local list,
    /// or an API error if persistence fails (local selection unchanged).
    pub async fn select(&mut self, api: &ApiClient, token: &AuthToken, id: &HouseId) -> Result<()> {
        if self.position(id).is_none() {
            return Err(ScreenError::NotFound(format!("house {id}")));
        }

        api.select_house(token, id).await?;
        let details = api.user_details(token).await?;
        self.selected = details.selected_house;
        Ok(())
    }

    /// Create a house and append it to the local list.
    ///
    /// The selection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an API error if creation fails.
    pub async fn create(
        &mut self,
        api: &ApiClient,
        token: &AuthToken,
        new_house: &NewHouse,
    ) -> Result<HouseId> {
        let house = api.create_house(token, new_house).await?;
        let id = house.id.clone();
        self.houses.push(house);
        Ok(id)
    }

    /// Delete a house.
    ///
    /// Local state mutates only after the backend confirms the deletion.
    /// If the deleted house was selected, the selection moves to the visual
    /// predecessor (or the new head, or nothing when the list empties) and
    /// the repaired selection is persisted with an explicit re-selection
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotFound`] if `id` is not in the local list,
    /// or an API error. A failure in the re-selection call leaves the local
    /// list and selection already repaired; the server catches up on the
    /// next refresh.
    pub async fn delete(&mut self, api: &ApiClient, token: &AuthToken, id: &HouseId) -> Result<()> {
        let idx = self
            .position(id)
            .ok_or_else(|| ScreenError::NotFound(format!("house {id}")))?;

        api.delete_house(token, id).await?;

        if let Some(next) = self.remove_local(idx) {
            debug!(house_id = %next, "re-selecting after deletion of selected house");
            api.select_house(token, &next).await?;
        }
        Ok(())
    }

    /// Remove the house at `idx` and repair the selection.
    ///
    /// Returns the repaired selection when it moved to another house and
    /// needs to be persisted.
    fn remove_local(&mut self, idx: usize) -> Option<HouseId> {
        let removed = self.houses.remove(idx);
        if self.selected.as_ref() != Some(&removed.id) {
            return None;
        }

        let next = next_selection(&self.houses, idx);
        self.selected.clone_from(&next);
        next
    }
}

/// Pick the replacement selection after removing the house that was at
/// `removed_idx`: the predecessor if there was one, otherwise the new head.
fn next_selection(remaining: &[House], removed_idx: usize) -> Option<HouseId> {
    if remaining.is_empty() {
        return None;
    }
    let pick = removed_idx.saturating_sub(1);
    remaining.get(pick).map(|h| h.id.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn house(id: &str) -> House {
        House {
            id: HouseId::new(id),
            name: format!("Casa {id}"),
            state: "SP".to_owned(),
            city: "Sao Paulo".to_owned(),
            neighborhood: "Centro".to_owned(),
            street: "Rua A".to_owned(),
            number: 1,
            complement: None,
        }
    }

    fn screen(ids: &[&str], selected: Option<&str>) -> HousesScreen {
        HousesScreen {
            houses: ids.iter().copied().map(house).collect(),
            selected: selected.map(HouseId::new),
        }
    }

    #[test]
    fn test_delete_selected_picks_predecessor() {
        // houses [A,B,C], selected B; delete B -> [A,C], selected A
        let mut screen = screen(&["a", "b", "c"], Some("b"));
        let repaired = screen.remove_local(1);

        assert_eq!(repaired, Some(HouseId::new("a")));
        assert_eq!(screen.selected(), Some(&HouseId::new("a")));
        let ids: Vec<_> = screen.houses().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_delete_selected_head_picks_new_head() {
        // houses [A,B,C], selected A; delete A -> [B,C], selected B
        let mut screen = screen(&["a", "b", "c"], Some("a"));
        let repaired = screen.remove_local(0);

        assert_eq!(repaired, Some(HouseId::new("b")));
        assert_eq!(screen.selected(), Some(&HouseId::new("b")));
    }

    #[test]
    fn test_delete_last_selected_clears_selection() {
        // houses [A], selected A; delete A -> [], no selection
        let mut screen = screen(&["a"], Some("a"));
        let repaired = screen.remove_local(0);

        assert_eq!(repaired, None);
        assert_eq!(screen.selected(), None);
        assert!(screen.houses().is_empty());
    }

    #[test]
    fn test_delete_non_selected_keeps_selection() {
        let mut screen = screen(&["a", "b", "c"], Some("c"));
        let repaired = screen.remove_local(0);

        assert_eq!(repaired, None);
        assert_eq!(screen.selected(), Some(&HouseId::new("c")));
    }

    #[test]
    fn test_delete_with_no_selection() {
        let mut screen = screen(&["a", "b"], None);
        assert_eq!(screen.remove_local(1), None);
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn test_selection_never_dangles() {
        // exhaustively delete every position under every selection
        for selected in ["a", "b", "c", "d"] {
            for delete_idx in 0..4 {
                let mut screen = screen(&["a", "b", "c", "d"], Some(selected));
                screen.remove_local(delete_idx);

                if let Some(id) = screen.selected() {
                    assert!(
                        screen.houses().iter().any(|h| h.id == *id),
                        "selected {id} missing after deleting index {delete_idx}"
                    );
                } else {
                    // selection may only disappear if the selected house
                    // itself was deleted
                    assert_eq!(screen.houses().len(), 3);
                }
            }
        }
    }

    #[test]
    fn test_selected_house_lookup() {
        let selected = screen(&["a", "b"], Some("b"));
        assert_eq!(selected.selected_house().unwrap().id, HouseId::new("b"));

        let screen = screen(&["a", "b"], None);
        assert!(screen.selected_house().is_none());
    }

    #[test]
    fn test_next_selection_of_empty_list() {
        assert_eq!(next_selection(&[], 0), None);
    }
}
