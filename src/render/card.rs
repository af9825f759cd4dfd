use crate::models::card::CardItem;

use super::{html_escape, link_label};

/// Render one project card.
pub fn render_card(item: &CardItem) -> String {
    let tags: String = item
        .tags
        .iter()
        .map(|t| format!("<span class=\"card__tag\">{}</span>", html_escape(t)))
        .collect();

    let links: String = item
        .all_links()
        .into_iter()
        .map(|url| {
            format!(
                "<a class=\"card__link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{} &rarr;</a>",
                html_escape(url),
                link_label(url)
            )
        })
        .collect();

    let meta = match item.context.as_deref().filter(|c| !c.is_empty()) {
        Some(ctx) => format!("<div class=\"card__meta\">{}</div>", html_escape(ctx)),
        None => String::new(),
    };

    let year = item
        .year_label()
        .map(|y| format!("<span class=\"card__year\">{}</span>", html_escape(&y)))
        .unwrap_or_default();

    let in_progress = if item.is_in_progress() {
        "<span class=\"card__status\">In Progress</span>"
    } else {
        ""
    };

    let mut html = String::from("<article class=\"card\">");
    html.push_str(&format!(
        "<div class=\"card__header\"><h3 class=\"card__title\">{}</h3>{}{}</div>",
        html_escape(&item.title),
        in_progress,
        year
    ));
    html.push_str(&meta);
    html.push_str(&format!(
        "<p class=\"card__description\">{}</p>",
        html_escape(&item.description)
    ));
    if !tags.is_empty() {
        html.push_str(&format!("<div class=\"card__tags\">{}</div>", tags));
    }
    if !links.is_empty() {
        html.push_str(&format!("<div class=\"card__links\">{}</div>", links));
    }
    html.push_str("</article>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::card::Year;

    fn card() -> CardItem {
        CardItem {
            title: "Compiler".into(),
            description: "A tiny compiler".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_card_has_no_optional_sections() {
        let html = render_card(&card());
        assert!(html.contains("<h3 class=\"card__title\">Compiler</h3>"));
        assert!(html.contains("A tiny compiler"));
        assert!(!html.contains("card__meta"));
        assert!(!html.contains("card__tags"));
        assert!(!html.contains("card__links"));
        assert!(!html.contains("card__year"));
        assert!(!html.contains("In Progress"));
    }

    #[test]
    fn test_full_card() {
        let mut c = card();
        c.context = Some("Side project".into());
        c.tags = vec!["rust".into(), "cli".into()];
        c.year = Some(Year::Number(2023));
        c.in_progress = Some(true);
        c.links = Some(vec![
            "https://github.com/me/compiler".into(),
            "https://example.com".into(),
        ]);
        let html = render_card(&c);
        assert!(html.contains("<div class=\"card__meta\">Side project</div>"));
        assert!(html.contains("<span class=\"card__tag\">rust</span><span class=\"card__tag\">cli</span>"));
        assert!(html.contains("<span class=\"card__year\">2023</span>"));
        assert!(html.contains("<span class=\"card__status\">In Progress</span>"));
        assert!(html.contains("GitHub Repo &rarr;"));
        assert!(html.contains("Website &rarr;"));
    }

    #[test]
    fn test_single_link_is_promoted() {
        let mut c = card();
        c.link = Some("https://youtu.be/xyz".into());
        let html = render_card(&c);
        assert!(html.contains("href=\"https://youtu.be/xyz\""));
        assert!(html.contains("YouTube &rarr;"));
    }

    #[test]
    fn test_escapes_text() {
        let mut c = card();
        c.title = "<script>".into();
        let html = render_card(&c);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
