use crate::models::writing::{sort_newest_first, WritingItem};
use crate::render::writing::render_writing_item;
use crate::render::{filter_empty, html_escape};

use super::{matches_search, normalize_query, Searchable, Visibility};

pub const NO_WRITINGS: &str = "No writings found.";

/// Items carrying a single optional type.
pub trait TypeFacet: Searchable {
    fn kind(&self) -> &str;
}

impl Searchable for WritingItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.excerpt.as_deref().unwrap_or(""),
            self.date.as_str(),
            self.kind_str(),
        ]
    }
}

impl TypeFacet for WritingItem {
    fn kind(&self) -> &str {
        self.kind_str()
    }
}

/// Single-select type filter: one active type, or all when empty.
#[derive(Debug, Clone)]
pub struct TypeFilter<T> {
    items: Vec<T>,
    all_types: Vec<String>,
    active_type: String,
    search_query: String,
}

pub type WritingFilter = TypeFilter<WritingItem>;

impl<T: TypeFacet> TypeFilter<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut all_types: Vec<String> = Vec::new();
        for item in &items {
            let kind = item.kind();
            if !kind.is_empty() && !all_types.iter().any(|t| t == kind) {
                all_types.push(kind.to_string());
            }
        }
        TypeFilter {
            items,
            all_types,
            active_type: String::new(),
            search_query: String::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Distinct non-empty types in the order they first appear.
    pub fn all_types(&self) -> &[String] {
        &self.all_types
    }

    pub fn active_type(&self) -> &str {
        &self.active_type
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// A single type (or none) leaves nothing to choose between.
    pub fn has_filter_bar(&self) -> bool {
        self.all_types.len() > 1
    }

    /// Type button click; `""` is the "All" button.
    pub fn select_type(&mut self, kind: &str) {
        self.active_type = kind.to_string();
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_query = normalize_query(raw);
    }

    pub fn matches(&self, item: &T) -> bool {
        let matches_type = self.active_type.is_empty() || item.kind() == self.active_type;
        matches_type && matches_search(item, &self.search_query)
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.items.iter().filter(|i| self.matches(i)).collect()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            visible: self.items.iter().map(|i| self.matches(i)).collect(),
        }
    }

    /// Search box plus "All" and one button per type; exactly one button
    /// carries `active`.
    pub fn filter_bar_html(&self) -> Option<String> {
        if !self.has_filter_bar() {
            return None;
        }
        let button = |kind: &str, label: &str| -> String {
            format!(
                "<button class=\"writing-filter{}\" data-type=\"{}\">{}</button>",
                if self.active_type == kind { " active" } else { "" },
                html_escape(kind),
                html_escape(label)
            )
        };
        let mut buttons = button("", "All");
        for kind in &self.all_types {
            buttons.push_str(&button(kind, kind));
        }
        Some(format!(
            "<div class=\"writing-filters\">\
<input type=\"text\" class=\"filter-search\" placeholder=\"Search...\" value=\"{}\">{}</div>",
            html_escape(&self.search_query),
            buttons
        ))
    }
}

impl TypeFilter<WritingItem> {
    /// Data-driven list: items arrive in source order and are shown newest first.
    pub fn from_source(mut items: Vec<WritingItem>) -> Self {
        sort_newest_first(&mut items);
        Self::new(items)
    }

    pub fn render(&self) -> String {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return filter_empty(NO_WRITINGS);
        }
        filtered.into_iter().map(render_writing_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writing(title: &str, date: &str, kind: Option<&str>) -> WritingItem {
        WritingItem {
            title: title.into(),
            date: date.into(),
            kind: kind.map(String::from),
            ..Default::default()
        }
    }

    fn sample() -> WritingFilter {
        WritingFilter::from_source(vec![
            writing("Ownership", "January 2023", Some("Essay")),
            writing("Async pitfalls", "May 2024", Some("Talk")),
            writing("Trait objects", "March 2023", Some("Essay")),
            writing("Untyped note", "June 2022", None),
        ])
    }

    fn titles(f: &WritingFilter) -> Vec<&str> {
        f.filtered().iter().map(|w| w.title.as_str()).collect()
    }

    #[test]
    fn test_sorted_newest_first() {
        let f = sample();
        assert_eq!(
            titles(&f),
            vec!["Async pitfalls", "Trait objects", "Ownership", "Untyped note"]
        );
    }

    #[test]
    fn test_types_keep_discovery_order() {
        let f = sample();
        assert_eq!(f.all_types(), &["Talk", "Essay"]);
        assert!(f.has_filter_bar());
    }

    #[test]
    fn test_single_type_has_no_filter_bar() {
        let f = WritingFilter::new(vec![
            writing("a", "May 2020", Some("Essay")),
            writing("b", "May 2021", Some("Essay")),
            writing("c", "May 2021", None),
        ]);
        assert!(!f.has_filter_bar());
        assert!(f.filter_bar_html().is_none());
    }

    #[test]
    fn test_select_type_is_exclusive() {
        let mut f = sample();
        f.select_type("Essay");
        assert_eq!(titles(&f), vec!["Trait objects", "Ownership"]);
        f.select_type("Talk");
        assert_eq!(titles(&f), vec!["Async pitfalls"]);
        f.select_type("");
        assert_eq!(f.filtered().len(), 4);
    }

    #[test]
    fn test_search_matches_date_and_type() {
        let mut f = sample();
        f.set_search("2023");
        assert_eq!(titles(&f), vec!["Trait objects", "Ownership"]);
        f.set_search("TALK");
        assert_eq!(titles(&f), vec!["Async pitfalls"]);
    }

    #[test]
    fn test_active_button_marker() {
        let mut f = sample();
        let bar = f.filter_bar_html().unwrap();
        assert!(bar.contains("<button class=\"writing-filter active\" data-type=\"\">All</button>"));
        f.select_type("Talk");
        let bar = f.filter_bar_html().unwrap();
        assert_eq!(bar.matches(" active\"").count(), 1);
        assert!(bar.contains("<button class=\"writing-filter active\" data-type=\"Talk\">Talk</button>"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut f = sample();
        f.select_type("Talk");
        f.set_search("ownership");
        assert_eq!(f.render(), "<p class=\"filter-empty\">No writings found.</p>");
    }
}
