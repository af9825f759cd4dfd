//! Markup builders for the data-driven containers.
//! Every function here is pure: record in, HTML fragment out.

pub mod album;
pub mod card;
pub mod link_label;
pub mod writing;

pub use link_label::link_label;

/// Placeholder every data-driven container shows until its data resolves.
pub const LOADER_HTML: &str =
    "<div class=\"loader\"><div class=\"loader__spinner\"></div></div>";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The single "no results" paragraph shown instead of an empty list.
pub fn filter_empty(message: &str) -> String {
    format!("<p class=\"filter-empty\">{}</p>", html_escape(message))
}

/// Wrap a container's inner markup in its element, keeping the marker class
/// so the page scripts and styles still find it.
pub fn container(tag_class: &str, id: &str, inner: &str) -> String {
    format!(
        "<div class=\"{}\" id=\"{}\">{}</div>",
        tag_class,
        html_escape(id),
        inner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn test_filter_empty() {
        assert_eq!(
            filter_empty("No results found."),
            "<p class=\"filter-empty\">No results found.</p>"
        );
    }
}
