use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A photo album built from one remote folder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Album {
    pub title: String,
    pub cover: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub photos: Vec<String>,
}

impl Album {
    /// Fragment-safe identifier used in the address bar (`#my-trip-2024`).
    pub fn slug(&self) -> String {
        album_slug(&self.title)
    }
}

/// Transliterated to lowercase ASCII, non-alphanumeric runs collapsed to a
/// single hyphen, no edge hyphens. Titles with no letters or digits give "".
pub fn album_slug(title: &str) -> String {
    slug::slugify(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_slug() {
        assert_eq!(album_slug("My Trip, 2024!"), "my-trip-2024");
        assert_eq!(album_slug("  Summer -- Lake  "), "summer-lake");
        assert_eq!(album_slug("Berlin"), "berlin");
        assert_eq!(album_slug("!!!"), "");
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let a: Album = serde_json::from_str(
            r#"{"title":"Oslo","cover":"c.jpg","description":null,"photos":["c.jpg"]}"#,
        )
        .unwrap();
        assert_eq!(a.description, "");
    }
}
