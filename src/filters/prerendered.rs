//! Filtering over lists the site generator already rendered. Items are read
//! back from their `data-*` attributes and filtered by visibility instead of
//! being re-rendered.

use super::cards::TagFacet;
use super::writing::TypeFacet;
use super::Searchable;

/// A `.card` element as described by its data attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrerenderedCard {
    pub title: String,
    pub description: String,
    pub context: String,
    tags: Vec<String>,
}

impl PrerenderedCard {
    /// `tags_attr` is the raw `data-tags` value, a JSON string array. Missing
    /// or malformed JSON gives an empty tag set.
    pub fn from_data_attrs(
        title: &str,
        description: &str,
        context: &str,
        tags_attr: Option<&str>,
    ) -> Self {
        PrerenderedCard {
            title: title.to_string(),
            description: description.to_string(),
            context: context.to_string(),
            tags: parse_tags_attr(tags_attr),
        }
    }
}

pub fn parse_tags_attr(raw: Option<&str>) -> Vec<String> {
    let raw = raw.unwrap_or("[]");
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => tags,
        Err(e) => {
            log::debug!("Ignoring malformed data-tags {:?}: {}", raw, e);
            Vec::new()
        }
    }
}

impl Searchable for PrerenderedCard {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str(), self.context.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl TagFacet for PrerenderedCard {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}

/// A `.writing-item` element as described by its data attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrerenderedWriting {
    pub title: String,
    pub date: String,
    pub kind: String,
}

impl Searchable for PrerenderedWriting {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.date.as_str(), self.kind.as_str()]
    }
}

impl TypeFacet for PrerenderedWriting {
    fn kind(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{TagFilter, TypeFilter};

    #[test]
    fn test_malformed_tags_become_empty() {
        assert_eq!(parse_tags_attr(None), Vec::<String>::new());
        assert_eq!(parse_tags_attr(Some("not json")), Vec::<String>::new());
        assert_eq!(parse_tags_attr(Some("{\"a\":1}")), Vec::<String>::new());
        assert_eq!(parse_tags_attr(Some("[\"rust\",\"wasm\"]")), vec!["rust", "wasm"]);
    }

    #[test]
    fn test_card_visibility() {
        let cards = vec![
            PrerenderedCard::from_data_attrs("Engine", "a game engine", "", Some("[\"rust\"]")),
            PrerenderedCard::from_data_attrs("Site", "portfolio", "Freelance", Some("broken")),
        ];
        let mut f = TagFilter::new(cards);
        assert_eq!(f.all_tags(), &["rust"]);
        assert_eq!(f.visibility().visible, vec![true, true]);

        f.set_tag("rust", true);
        assert_eq!(f.visibility().visible, vec![true, false]);

        f.set_tag("rust", false);
        f.set_search("freelance");
        assert_eq!(f.visibility().visible, vec![false, true]);

        f.set_search("zzz");
        assert!(f.visibility().show_empty_message());
    }

    #[test]
    fn test_writing_visibility() {
        let items = vec![
            PrerenderedWriting { title: "A".into(), date: "May 2020".into(), kind: "Essay".into() },
            PrerenderedWriting { title: "B".into(), date: "June 2021".into(), kind: "".into() },
            PrerenderedWriting { title: "C".into(), date: "July 2022".into(), kind: "Talk".into() },
        ];
        let mut f = TypeFilter::new(items);
        assert_eq!(f.all_types(), &["Essay", "Talk"]);
        f.select_type("Talk");
        assert_eq!(f.visibility().visible, vec![false, false, true]);
        f.select_type("");
        f.set_search("june");
        assert_eq!(f.visibility().visible, vec![false, true, false]);
    }
}
