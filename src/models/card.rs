use serde::{Deserialize, Serialize};

use super::null_as_default;
use std::fmt;

/// One project/work entry from a card-list JSON source.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub year: Option<Year>,
    #[serde(default)]
    pub in_progress: Option<bool>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Sources write the year either as a number or as free text ("2021–2023").
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

impl CardItem {
    /// All outbound links: the `links` array wins, a lone `link` is promoted.
    pub fn all_links(&self) -> Vec<&str> {
        match (&self.links, &self.link) {
            (Some(links), _) => links.iter().map(String::as_str).collect(),
            (None, Some(link)) => vec![link.as_str()],
            (None, None) => vec![],
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.unwrap_or(false)
    }

    /// Year text, with empty text treated as missing.
    pub fn year_label(&self) -> Option<String> {
        match &self.year {
            Some(Year::Number(0)) => None,
            Some(y) => {
                let s = y.to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            }
            None => None,
        }
    }

    pub fn context_str(&self) -> &str {
        self.context.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_optional_fields_read_as_empty() {
        let items: Vec<CardItem> = serde_json::from_str(
            r#"[{"title":"Ray Tracer","tags":null,"description":null,"links":null,"year":null},
                {"title":"Blog","tags":["web"]}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].tags.is_empty());
        assert_eq!(items[0].description, "");
        assert!(items[0].all_links().is_empty());
        assert_eq!(items[0].year_label(), None);
        assert_eq!(items[1].tags, vec!["web".to_string()]);
    }
}
