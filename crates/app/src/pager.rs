//! Paged food category catalog.
//!
//! Tracks the current page, the selection, and a single-flight load guard.
//! Navigation affordances (`has_prev`/`has_next`) are pure functions of the
//! page counters, so they can drive button state without touching I/O.

use studybites_api_client::endpoints::foods::{FoodCategory, FoodOptionsPage};

/// At most this many category cards are shown per page.
pub const MAX_ITEMS_PER_PAGE: usize = 4;

/// Paged catalog of food categories.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalogPager {
    current_page: usize,
    total_pages: usize,
    items: Vec<FoodCategory>,
    selected: Option<String>,
    loading: bool,
}

impl FoodCatalogPager {
    /// Create an empty pager (one empty page, nothing selected).
    pub fn new() -> Self {
        Self {
            current_page: 0,
            total_pages: 1,
            items: Vec::new(),
            selected: None,
            loading: false,
        }
    }

    /// True when a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    /// True when a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    /// Page to load for "next", or `None` at the last page or mid-load.
    pub fn next_target(&self) -> Option<usize> {
        (self.has_next() && !self.loading).then(|| self.current_page + 1)
    }

    /// Page to load for "previous", or `None` at the first page or mid-load.
    pub fn previous_target(&self) -> Option<usize> {
        (self.has_prev() && !self.loading).then(|| self.current_page - 1)
    }

    /// Claim the load guard. Returns false while another load is in flight;
    /// concurrent loads are rejected, not queued.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Commit a fetched page. Clears the selection and the load guard.
    pub fn apply(&mut self, mut page: FoodOptionsPage) {
        page.foods.truncate(MAX_ITEMS_PER_PAGE);
        self.items = page.foods;
        self.current_page = page.current_page;
        self.total_pages = page.total_pages.max(1);
        self.selected = None;
        self.loading = false;
    }

    /// Release the load guard after a failed fetch; page state is unchanged.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Select a category by id. Returns the entry when it exists on the
    /// current page; an unknown id leaves the selection untouched.
    pub fn select(&mut self, food_id: &str) -> Option<&FoodCategory> {
        let found = self.items.iter().find(|f| f.id == food_id)?;
        self.selected = Some(found.id.clone());
        self.items.iter().find(|f| f.id == food_id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected category id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Entries on the current page.
    pub fn items(&self) -> &[FoodCategory] {
        &self.items
    }

    /// Zero-based current page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total page count (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True while a page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// One-based "N of M" indicator.
    pub fn page_indicator(&self) -> String {
        format!("{} of {}", self.current_page + 1, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str) -> FoodCategory {
        FoodCategory {
            id: id.to_string(),
            name: id.to_uppercase(),
            desc: None,
            image: None,
        }
    }

    fn page(ids: &[&str], current_page: usize, total_pages: usize) -> FoodOptionsPage {
        FoodOptionsPage {
            foods: ids.iter().map(|id| category(id)).collect(),
            current_page,
            total_pages,
        }
    }

    #[test]
    fn test_navigation_affordances() {
        let mut pager = FoodCatalogPager::new();

        for total in 1..=5usize {
            for current in 0..total {
                pager.apply(page(&[], current, total));
                assert_eq!(pager.has_prev(), current > 0, "prev at {current}/{total}");
                assert_eq!(
                    pager.has_next(),
                    current < total - 1,
                    "next at {current}/{total}"
                );
            }
        }
    }

    #[test]
    fn test_edges_are_noops() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&["pizza"], 0, 3));
        assert_eq!(pager.previous_target(), None);
        assert_eq!(pager.next_target(), Some(1));

        pager.apply(page(&["thai"], 2, 3));
        assert_eq!(pager.next_target(), None);
        assert_eq!(pager.previous_target(), Some(1));
    }

    #[test]
    fn test_single_flight_guard() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&["pizza"], 0, 3));

        assert!(pager.begin_load());
        // A second load while one is in flight is rejected, not queued.
        assert!(!pager.begin_load());
        assert_eq!(pager.next_target(), None);
        assert_eq!(pager.previous_target(), None);

        pager.load_failed();
        assert!(pager.begin_load());
    }

    #[test]
    fn test_apply_clears_selection_and_guard() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&["pizza", "sushi"], 0, 2));
        assert!(pager.select("pizza").is_some());
        assert_eq!(pager.selected(), Some("pizza"));

        assert!(pager.begin_load());
        pager.apply(page(&["thai"], 1, 2));
        assert_eq!(pager.selected(), None);
        assert!(!pager.is_loading());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&["pizza"], 0, 1));
        pager.select("pizza");
        assert!(pager.select("ramen").is_none());
        assert_eq!(pager.selected(), Some("pizza"));
    }

    #[test]
    fn test_items_capped_at_four() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&["a", "b", "c", "d", "e", "f"], 0, 1));
        assert_eq!(pager.items().len(), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_page_indicator() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&[], 1, 3));
        assert_eq!(pager.page_indicator(), "2 of 3");
    }

    #[test]
    fn test_total_pages_floor_of_one() {
        let mut pager = FoodCatalogPager::new();
        pager.apply(page(&[], 0, 0));
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_next());
    }
}
