//! Filter controllers for card and writing lists.
//!
//! A controller owns the fetched item array for the lifetime of its container
//! plus the filter state. Every state change recomputes the full predicate over
//! all items; nothing is patched incrementally, so the same state always yields
//! the same output.

pub mod cards;
pub mod prerendered;
pub mod writing;

pub use cards::{CardFilter, TagFilter};
pub use writing::{TypeFilter, WritingFilter};

/// Class of the tag dropdown widget; clicks outside it close the menu.
pub const DROPDOWN_CLASS: &str = "filter-dropdown";

/// Text fields a free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Lowercased, trimmed form of the search box value.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring match over every search field.
/// `query` must already be normalized; an empty query matches everything.
pub fn matches_search<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|f| f.to_lowercase().contains(query))
}

/// Which items of a prerendered list are shown after a recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    pub visible: Vec<bool>,
}

impl Visibility {
    pub fn any_visible(&self) -> bool {
        self.visible.iter().any(|v| *v)
    }

    /// The empty-list message is shown exactly when nothing else is.
    pub fn show_empty_message(&self) -> bool {
        !self.any_visible()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

/// Open/closed state of the tag dropdown menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDropdown {
    open: bool,
}

impl FilterDropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Click on the dropdown's own toggle button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Document-level click. `target_ancestry` lists the classes of the click
    /// target and each of its ancestors; if none of them is the dropdown
    /// widget the menu closes. Clicks inside leave it alone.
    pub fn on_document_click(&mut self, target_ancestry: &[&str]) {
        if !target_ancestry.iter().any(|c| *c == DROPDOWN_CLASS) {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc(&'static str, &'static str);

    impl Searchable for Doc {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  RuSt \n"), "rust");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_matches_search() {
        let d = Doc("Parser Combinators", "nom and chumsky");
        assert!(matches_search(&d, ""));
        assert!(matches_search(&d, "parser"));
        assert!(matches_search(&d, "chum"));
        assert!(!matches_search(&d, "lexer"));
    }

    #[test]
    fn test_dropdown_outside_click_closes() {
        let mut dd = FilterDropdown::default();
        dd.toggle();
        assert!(dd.is_open());
        dd.on_document_click(&["filter-dropdown__item", "filter-dropdown__menu", DROPDOWN_CLASS, "filter-bar"]);
        assert!(dd.is_open());
        dd.on_document_click(&["card", "card-list"]);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_dropdown_toggle_click_inside_is_not_undone() {
        let mut dd = FilterDropdown::default();
        // The toggle handler runs, then the same click reaches the document.
        dd.toggle();
        dd.on_document_click(&["filter-dropdown__toggle", DROPDOWN_CLASS]);
        assert!(dd.is_open());
        dd.toggle();
        dd.on_document_click(&["filter-dropdown__toggle", DROPDOWN_CLASS]);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_visibility() {
        let v = Visibility { visible: vec![false, true, false] };
        assert!(v.any_visible());
        assert!(!v.show_empty_message());
        assert_eq!(v.visible_count(), 1);
        let none = Visibility { visible: vec![false] };
        assert!(none.show_empty_message());
    }
}
