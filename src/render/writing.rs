use url::Url;

use crate::models::writing::WritingItem;

use super::html_escape;

/// Render one entry of a writing list.
pub fn render_writing_item(item: &WritingItem) -> String {
    let external = if item.is_external() {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };
    let kind = match item.kind.as_deref().filter(|k| !k.is_empty()) {
        Some(k) => format!("<span class=\"writing-item__type\">{}</span>", html_escape(k)),
        None => String::new(),
    };
    let excerpt = match item.excerpt.as_deref().filter(|e| !e.is_empty()) {
        Some(e) => format!("<p class=\"writing-item__excerpt\">{}</p>", html_escape(e)),
        None => String::new(),
    };

    format!(
        "<a class=\"writing-item\" href=\"{href}\"{external}>\
<div class=\"writing-item__meta\"><span class=\"writing-item__date\">{date}</span>{kind}</div>\
<h3 class=\"writing-item__title\">{title}</h3>{excerpt}\
<span class=\"writing-item__read\">Read &rarr;</span></a>",
        href = html_escape(&item.href()),
        external = external,
        date = html_escape(&item.date),
        kind = kind,
        title = html_escape(&item.title),
        excerpt = excerpt,
    )
}

/// The detail view of one writing, selected from the collection by slug.
#[derive(Debug, Clone, PartialEq)]
pub struct WritingPage {
    /// Document title; `None` when the slug matched nothing.
    pub document_title: Option<String>,
    pub body: String,
}

/// Pick the `slug` query parameter out of a page address.
pub fn slug_from_address(address: &str) -> Option<String> {
    let url = Url::parse(address)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(address)))
        .ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "slug")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

pub fn render_writing_page(items: &[WritingItem], slug: &str, author: &str) -> WritingPage {
    let item = match items.iter().find(|i| i.slug.as_deref() == Some(slug)) {
        Some(i) => i,
        None => {
            return WritingPage {
                document_title: None,
                body: "<p>Writing not found.</p>".to_string(),
            }
        }
    };

    let kind = match item.kind.as_deref().filter(|k| !k.is_empty()) {
        Some(k) => format!("<span class=\"writing-item__type\">{}</span>", html_escape(k)),
        None => String::new(),
    };
    let paragraphs: String = item
        .content
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    let document_title = if author.is_empty() {
        item.title.clone()
    } else {
        format!("{} \u{2014} {}", item.title, author)
    };

    WritingPage {
        document_title: Some(document_title),
        body: format!(
            "<header class=\"writing-page__header\">{kind}<h1>{title}</h1>\
<time class=\"writing-page__date\">{date}</time></header>\
<div class=\"writing-page__body\">{paragraphs}</div>",
            kind = kind,
            title = html_escape(&item.title),
            date = html_escape(&item.date),
            paragraphs = paragraphs,
        ),
    }
}
