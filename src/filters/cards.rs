use std::collections::BTreeSet;

use crate::models::card::CardItem;
use crate::render::card::render_card;
use crate::render::{filter_empty, html_escape};

use super::{matches_search, normalize_query, FilterDropdown, Searchable, Visibility};

pub const NO_RESULTS: &str = "No results found.";

/// Items carrying a tag set.
pub trait TagFacet: Searchable {
    fn tags(&self) -> Vec<String>;
}

impl Searchable for CardItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str(), self.context_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl TagFacet for CardItem {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}

/// Multi-select tag filter: an item matches when it carries every active tag
/// and the search query.
#[derive(Debug, Clone)]
pub struct TagFilter<T> {
    items: Vec<T>,
    all_tags: Vec<String>,
    /// In activation order, so badges appear in the order they were picked.
    active_tags: Vec<String>,
    search_query: String,
    pub dropdown: FilterDropdown,
}

pub type CardFilter = TagFilter<CardItem>;

impl<T: TagFacet> TagFilter<T> {
    pub fn new(items: Vec<T>) -> Self {
        let all_tags: Vec<String> = items
            .iter()
            .flat_map(|i| i.tags())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        TagFilter {
            items,
            all_tags,
            active_tags: Vec::new(),
            search_query: String::new(),
            dropdown: FilterDropdown::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Distinct tags across all items, alphabetical.
    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// No tags means nothing to filter by, so no filter bar at all.
    pub fn has_filter_bar(&self) -> bool {
        !self.all_tags.is_empty()
    }

    pub fn is_checked(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// Checkbox change event.
    pub fn set_tag(&mut self, tag: &str, checked: bool) {
        if checked {
            if !self.is_checked(tag) {
                self.active_tags.push(tag.to_string());
            }
        } else {
            self.active_tags.retain(|t| t != tag);
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let checked = self.is_checked(tag);
        self.set_tag(tag, !checked);
    }

    /// The "×" on an active badge; its checkbox unchecks with it.
    pub fn remove_badge(&mut self, tag: &str) {
        self.set_tag(tag, false);
    }

    /// Search box input event; no debounce.
    pub fn set_search(&mut self, raw: &str) {
        self.search_query = normalize_query(raw);
    }

    pub fn matches(&self, item: &T) -> bool {
        let tags = item.tags();
        let matches_tags = self
            .active_tags
            .iter()
            .all(|active| tags.iter().any(|t| t == active));
        matches_tags && matches_search(item, &self.search_query)
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.items.iter().filter(|i| self.matches(i)).collect()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            visible: self.items.iter().map(|i| self.matches(i)).collect(),
        }
    }

    /// Dropdown toggle text.
    pub fn toggle_label(&self) -> String {
        if self.active_tags.is_empty() {
            "Filter by tags".to_string()
        } else {
            format!("Tags ({})", self.active_tags.len())
        }
    }

    pub fn badges_html(&self) -> String {
        self.active_tags
            .iter()
            .map(|tag| {
                let t = html_escape(tag);
                format!(
                    "<span class=\"filter-badge\">{}<button data-tag=\"{}\">&times;</button></span>",
                    t, t
                )
            })
            .collect()
    }

    /// Search box, tag dropdown and active badges, reflecting current state.
    pub fn filter_bar_html(&self) -> Option<String> {
        if !self.has_filter_bar() {
            return None;
        }
        let menu_class = if self.dropdown.is_open() {
            "filter-dropdown__menu open"
        } else {
            "filter-dropdown__menu"
        };
        let options: String = self
            .all_tags
            .iter()
            .map(|tag| {
                let t = html_escape(tag);
                format!(
                    "<label class=\"filter-dropdown__item\"><input type=\"checkbox\" value=\"{}\"{}><span>{}</span></label>",
                    t,
                    if self.is_checked(tag) { " checked" } else { "" },
                    t
                )
            })
            .collect();
        Some(format!(
            "<div class=\"filter-bar\">\
<input type=\"text\" class=\"filter-search\" placeholder=\"Search...\" value=\"{query}\">\
<div class=\"filter-dropdown\"><button class=\"filter-dropdown__toggle\">{label}</button>\
<div class=\"{menu_class}\">{options}</div></div>\
<div class=\"filter-active-tags\">{badges}</div></div>",
            query = html_escape(&self.search_query),
            label = html_escape(&self.toggle_label()),
            menu_class = menu_class,
            options = options,
            badges = self.badges_html(),
        ))
    }
}

impl TagFilter<CardItem> {
    /// List markup for the current state: matching cards, or the
    /// "no results" placeholder.
    pub fn render(&self) -> String {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return filter_empty(NO_RESULTS);
        }
        filtered.into_iter().map(render_card).collect()
    }
}
