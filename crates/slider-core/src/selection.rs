// ── Selection state ──
//
// Single-writer model of "which category is active". Presentation code
// reads through the query methods and mutates only through
// `select_category`; `initialize` swaps in a fresh feed after a fetch.

use tracing::debug;

use crate::error::SelectionError;
use crate::model::{Category, Feed, Product};

/// The decoded feed plus the currently selected category.
///
/// Starts uninitialized (no feed, empty views). Once a feed is installed
/// the selected index is kept inside `0..categories.len()`; with an empty
/// category list there is no valid selection and every view is empty.
///
/// Mutators take `&mut self`: there is no internal locking, so callers
/// drive the state from one logical thread of control.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    feed: Option<Feed>,
    selected: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state that is already initialized with `feed`.
    pub fn with_feed(feed: Feed) -> Self {
        let mut state = Self::new();
        state.initialize(feed);
        state
    }

    /// Install `feed`, replacing any previous one, and select category 0.
    pub fn initialize(&mut self, feed: Feed) {
        debug!(
            categories = feed.categories.len(),
            replaced = self.feed.is_some(),
            "selection state initialized"
        );
        self.feed = Some(feed);
        self.selected = 0;
    }

    /// `true` once a feed has been installed.
    pub fn is_ready(&self) -> bool {
        self.feed.is_some()
    }

    pub fn feed(&self) -> Option<&Feed> {
        self.feed.as_ref()
    }

    /// All categories, in feed order. Empty before initialization.
    pub fn active_categories(&self) -> &[Category] {
        self.feed
            .as_ref()
            .map(|f| f.categories.as_slice())
            .unwrap_or_default()
    }

    /// Products of the selected category, or nothing if there is none.
    pub fn active_products(&self) -> &[Product] {
        self.selected_category()
            .map(|c| c.products.as_slice())
            .unwrap_or_default()
    }

    /// The selected category, if the selection is valid.
    pub fn selected_category(&self) -> Option<&Category> {
        self.active_categories().get(self.selected)
    }

    /// Selected index, or `None` when there is no valid selection.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_category().map(|_| self.selected)
    }

    /// Whether the category at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }

    /// Make the category at `index` active.
    ///
    /// Out-of-range indexes are rejected and leave the state untouched.
    pub fn select_category(&mut self, index: usize) -> Result<(), SelectionError> {
        let len = self.active_categories().len();
        if index >= len {
            return Err(SelectionError::IndexOutOfRange { index, len });
        }
        debug!(index, "category selected");
        self.selected = index;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn feed() -> Feed {
        Feed::new(
            "Success",
            vec![
                Category::new(1, "Вода", vec![Product::new("11"), Product::new("12")]),
                Category::new(2, "Кулеры", vec![Product::new("21")]),
                Category::new(3, "Пусто", vec![]),
            ],
        )
    }

    #[test]
    fn uninitialized_state_is_empty() {
        let state = SelectionState::new();
        assert!(!state.is_ready());
        assert!(state.active_categories().is_empty());
        assert!(state.active_products().is_empty());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn initialize_selects_first_category() {
        let f = feed();
        let state = SelectionState::with_feed(f.clone());
        assert_eq!(state.active_categories(), f.categories.as_slice());
        assert_eq!(state.active_products(), f.categories[0].products.as_slice());
        assert_eq!(state.selected_index(), Some(0));
        assert!(state.is_selected(0));
        assert!(!state.is_selected(1));
    }

    #[test]
    fn select_category_switches_products() {
        let f = feed();
        let mut state = SelectionState::with_feed(f.clone());
        for i in 0..f.categories.len() {
            state.select_category(i).unwrap();
            assert_eq!(state.active_products(), f.categories[i].products.as_slice());
            assert_eq!(state.selected_category().map(|c| c.id), Some(f.categories[i].id));
        }
    }

    #[test]
    fn out_of_range_selection_leaves_state_unchanged() {
        let mut state = SelectionState::with_feed(feed());
        state.select_category(1).unwrap();

        let err = state.select_category(3).unwrap_err();
        assert_eq!(err, SelectionError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(state.selected_index(), Some(1));

        // Repeating the failure changes nothing either.
        assert!(state.select_category(usize::MAX).is_err());
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn select_before_initialize_fails() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.select_category(0),
            Err(SelectionError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn reinitialize_resets_selection() {
        let mut state = SelectionState::with_feed(feed());
        state.select_category(2).unwrap();

        let replacement = Feed::new(
            "Success",
            vec![Category::new(9, "Новинки", vec![Product::new("91")])],
        );
        state.initialize(replacement.clone());

        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.feed(), Some(&replacement));
        assert_eq!(state.active_products(), replacement.categories[0].products.as_slice());
    }

    #[test]
    fn empty_category_list_has_no_selection() {
        let state = SelectionState::with_feed(Feed::new("Success", vec![]));
        assert!(state.is_ready());
        assert_eq!(state.selected_index(), None);
        assert!(state.active_products().is_empty());
        assert!(!state.is_selected(0));
    }
}
