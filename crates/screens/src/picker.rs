//! Incremental paginated catalog search.
//!
//! The picker accumulates pages for one search term: changing the term
//! resets pagination and replaces the list, "load more" appends the next
//! page without disturbing the viewport. Each fetch carries a generation
//! counter so a late-arriving response for an abandoned term or a closed
//! picker is discarded instead of overwriting current items.

use estoca_client::{ApiClient, AuthToken, CatalogProduct};
use tracing::debug;

use crate::error::Result;

/// Fixed page size of the catalog endpoint.
pub const PAGE_SIZE: usize = 20;

/// A fetch the picker has committed to.
///
/// Produced by the pure transition methods; the async drivers execute it and
/// feed the outcome back through [`ProductPicker::apply_page`] or
/// [`ProductPicker::fetch_failed`].
#[derive(Debug, Clone)]
pub struct PageRequest {
    term: String,
    page: usize,
    generation: u64,
}

impl PageRequest {
    /// Search term this fetch is for.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }
}

/// State of the paginated product picker.
#[derive(Debug)]
pub struct ProductPicker {
    term: String,
    page_index: usize,
    items: Vec<CatalogProduct>,
    loading: bool,
    has_more: bool,
    generation: u64,
    scroll_offset: f64,
}

impl Default for ProductPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductPicker {
    /// Create an empty picker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            term: String::new(),
            page_index: 0,
            items: Vec::new(),
            loading: false,
            has_more: true,
            generation: 0,
            scroll_offset: 0.0,
        }
    }

    /// Accumulated products, in fetch order.
    #[must_use]
    pub fn items(&self) -> &[CatalogProduct] {
        &self.items
    }

    /// Current search term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Index of the last page committed to.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether another page may exist. Cleared when a page comes back
    /// shorter than [`PAGE_SIZE`].
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Scroll offset of the list viewport, as last reported by the host UI.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Record the viewport's scroll offset. Appending pages never changes
    /// this value, so the view stays where the user left it.
    pub const fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    // =========================================================================
    // Pure transitions
    // =========================================================================

    /// Open the picker: restart pagination for the current term.
    pub fn open(&mut self) -> PageRequest {
        self.page_index = 0;
        self.has_more = true;
        self.begin(0)
    }

    /// Change the search term.
    ///
    /// Returns the page-0 fetch to run, or `None` when the term is
    /// unchanged. Items are cleared immediately; the fetch result replaces
    /// them.
    pub fn set_term(&mut self, term: &str) -> Option<PageRequest> {
        if term == self.term {
            return None;
        }

        self.term = term.to_owned();
        self.page_index = 0;
        self.items.clear();
        self.has_more = true;
        Some(self.begin(0))
    }

    /// Commit to fetching the next page in append mode.
    ///
    /// Returns `None` while a fetch is in flight or when the previous page
    /// was short.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }

        self.page_index += 1;
        Some(self.begin(self.page_index))
    }

    /// Close the picker: clear the term, items and pagination.
    ///
    /// Idempotent. Any in-flight fetch is orphaned and its response will be
    /// discarded.
    pub fn reset(&mut self) {
        self.term.clear();
        self.items.clear();
        self.page_index = 0;
        self.loading = false;
        self.has_more = true;
        self.scroll_offset = 0.0;
        self.generation += 1;
    }

    fn begin(&mut self, page: usize) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        PageRequest {
            term: self.term.clone(),
            page,
            generation: self.generation,
        }
    }

    /// Apply a fetched page.
    ///
    /// Page 0 replaces the items; later pages append, preserving order and
    /// the stored scroll offset. A page whose generation no longer matches
    /// (the term changed or the picker was reset while it was in flight) is
    /// discarded; returns whether the page was applied.
    pub fn apply_page(&mut self, request: &PageRequest, products: Vec<CatalogProduct>) -> bool {
        if request.generation != self.generation {
            debug!(
                term = %request.term,
                page = request.page,
                "discarding stale page response"
            );
            return false;
        }

        self.loading = false;
        self.has_more = products.len() == PAGE_SIZE;
        if request.page == 0 {
            self.items = products;
        } else {
            self.items.extend(products);
        }
        true
    }

    /// Record a failed fetch.
    ///
    /// Rolls back the page index of a failed append so a retry fetches the
    /// same page instead of leaving a gap. Stale failures are ignored.
    pub fn fetch_failed(&mut self, request: &PageRequest) {
        if request.generation != self.generation {
            return;
        }

        self.loading = false;
        if request.page > 0 {
            self.page_index = request.page - 1;
        }
    }

    // =========================================================================
    // Async drivers
    // =========================================================================

    /// Open the picker and fetch the first page for the current term.
    ///
    /// # Errors
    ///
    /// Returns an API error if the fetch fails.
    pub async fn refresh(&mut self, api: &ApiClient, token: &AuthToken) -> Result<()> {
        let request = self.open();
        self.run(api, token, request).await
    }

    /// Change the term and fetch its first page. No-op when the term is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an API error if the fetch fails.
    pub async fn search(&mut self, api: &ApiClient, token: &AuthToken, term: &str) -> Result<()> {
        let Some(request) = self.set_term(term) else {
            return Ok(());
        };
        self.run(api, token, request).await
    }

    /// Fetch the next page in append mode. Returns whether a fetch actually
    /// ran.
    ///
    /// # Errors
    ///
    /// Returns an API error if the fetch fails.
    pub async fn fetch_more(&mut self, api: &ApiClient, token: &AuthToken) -> Result<bool> {
        let Some(request) = self.load_more() else {
            return Ok(false);
        };
        self.run(api, token, request).await?;
        Ok(true)
    }

    async fn run(&mut self, api: &ApiClient, token: &AuthToken, request: PageRequest) -> Result<()> {
        match api
            .search_products(token, request.page, PAGE_SIZE, &request.term)
            .await
        {
            Ok(products) => {
                self.apply_page(&request, products);
                Ok(())
            }
            Err(e) => {
                self.fetch_failed(&request);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use estoca_core::ProductId;

    use super::*;

    fn products(prefix: &str, count: usize) -> Vec<CatalogProduct> {
        (0..count)
            .map(|i| CatalogProduct {
                id: ProductId::new(format!("{prefix}-{i}")),
                name: format!("Produto {prefix} {i}"),
                image: None,
            })
            .collect()
    }

    #[test]
    fn test_term_change_replaces_items() {
        let mut picker = ProductPicker::new();
        let req = picker.set_term("arroz").unwrap();
        assert!(picker.apply_page(&req, products("a", PAGE_SIZE)));
        assert_eq!(picker.items().len(), PAGE_SIZE);

        let req = picker.set_term("feijao").unwrap();
        assert_eq!(picker.page_index(), 0);
        assert!(picker.items().is_empty(), "term change clears items");

        assert!(picker.apply_page(&req, products("b", 5)));
        assert_eq!(picker.items().len(), 5);
        assert!(picker.items().iter().all(|p| p.name.contains("b")));
    }

    #[test]
    fn test_unchanged_term_is_a_no_op() {
        let mut picker = ProductPicker::new();
        let req = picker.set_term("arroz").unwrap();
        picker.apply_page(&req, products("a", 3));

        assert!(picker.set_term("arroz").is_none());
        assert_eq!(picker.items().len(), 3);
    }

    #[test]
    fn test_load_more_appends_preserving_order_and_scroll() {
        let mut picker = ProductPicker::new();
        let req = picker.open();
        picker.apply_page(&req, products("a", PAGE_SIZE));

        picker.set_scroll_offset(1234.5);
        let req = picker.load_more().unwrap();
        assert_eq!(req.page(), 1);
        picker.apply_page(&req, products("b", PAGE_SIZE));

        assert_eq!(picker.items().len(), 2 * PAGE_SIZE);
        let first = picker.items().first().unwrap();
        assert_eq!(first.id, ProductId::new("a-0"));
        let last = picker.items().last().unwrap();
        assert_eq!(last.id, ProductId::new(format!("b-{}", PAGE_SIZE - 1)));
        assert_eq!(picker.scroll_offset(), 1234.5);
    }

    #[test]
    fn test_load_more_blocked_while_loading() {
        let mut picker = ProductPicker::new();
        let _req = picker.open();
        assert!(picker.is_loading());
        assert!(picker.load_more().is_none());
    }

    #[test]
    fn test_short_page_ends_pagination() {
        let mut picker = ProductPicker::new();
        let req = picker.open();
        picker.apply_page(&req, products("a", PAGE_SIZE - 1));

        assert!(!picker.has_more());
        assert!(picker.load_more().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut picker = ProductPicker::new();
        let stale = picker.set_term("ar").unwrap();
        // user keeps typing before the first response lands
        let current = picker.set_term("arroz").unwrap();

        assert!(!picker.apply_page(&stale, products("stale", PAGE_SIZE)));
        assert!(picker.items().is_empty());
        assert!(picker.is_loading(), "stale response must not clear loading");

        assert!(picker.apply_page(&current, products("live", 4)));
        assert_eq!(picker.items().len(), 4);
    }

    #[test]
    fn test_stale_response_after_reset_is_discarded() {
        let mut picker = ProductPicker::new();
        let req = picker.set_term("arroz").unwrap();
        picker.reset();

        assert!(!picker.apply_page(&req, products("a", PAGE_SIZE)));
        assert!(picker.items().is_empty());
    }

    #[test]
    fn test_failed_append_rolls_back_page_index() {
        let mut picker = ProductPicker::new();
        let req = picker.open();
        picker.apply_page(&req, products("a", PAGE_SIZE));

        let req = picker.load_more().unwrap();
        assert_eq!(picker.page_index(), 1);
        picker.fetch_failed(&req);

        assert_eq!(picker.page_index(), 0);
        assert!(!picker.is_loading());
        // the same page can be retried
        assert_eq!(picker.load_more().unwrap().page(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut picker = ProductPicker::new();
        let req = picker.set_term("arroz").unwrap();
        picker.apply_page(&req, products("a", PAGE_SIZE));
        picker.set_scroll_offset(99.0);

        picker.reset();
        let after_once = (
            picker.term().to_owned(),
            picker.items().len(),
            picker.page_index(),
            picker.scroll_offset(),
        );
        picker.reset();
        let after_twice = (
            picker.term().to_owned(),
            picker.items().len(),
            picker.page_index(),
            picker.scroll_offset(),
        );

        assert_eq!(after_once, (String::new(), 0, 0, 0.0));
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn test_duplicates_across_pages_are_kept() {
        // the catalog may repeat an id across pages; the picker does not
        // deduplicate
        let mut picker = ProductPicker::new();
        let req = picker.open();
        picker.apply_page(&req, products("a", PAGE_SIZE));
        let req = picker.load_more().unwrap();
        picker.apply_page(&req, products("a", 3));

        assert_eq!(picker.items().len(), PAGE_SIZE + 3);
    }
}
