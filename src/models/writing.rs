use chrono::Month;
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WritingItem {
    pub title: String,
    /// Free text, normally "<Month> <Year>" (e.g. "March 2024").
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
}

impl WritingItem {
    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn internal_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    /// Target of the list entry: internal detail page when a slug is set,
    /// otherwise the external link.
    pub fn href(&self) -> String {
        match self.internal_slug() {
            Some(slug) => format!("writing.html?slug={}", slug),
            None => self.link.clone().unwrap_or_default(),
        }
    }

    pub fn is_external(&self) -> bool {
        self.internal_slug().is_none()
    }

    /// Sort key `(year, month0)`. Unknown month names count as January and an
    /// unparseable year as 0, so odd dates sink to the bottom instead of failing.
    pub fn date_key(&self) -> (i64, u32) {
        let mut parts = self.date.split(' ');
        let month = parts
            .next()
            .and_then(|m| m.trim().parse::<Month>().ok())
            .map(|m| m.number_from_month() - 1)
            .unwrap_or(0);
        let year = parts
            .next()
            .and_then(|y| leading_int(y))
            .unwrap_or(0);
        (year, month)
    }
}

/// Newest first; ties keep their source order.
pub fn sort_newest_first(items: &mut [WritingItem]) {
    items.sort_by(|a, b| b.date_key().cmp(&a.date_key()));
}

/// Parses a leading integer the way lenient number parsing does: optional
/// whitespace and sign, then digits; trailing junk is ignored.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}
