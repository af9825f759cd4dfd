/// Mobile navigation menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav__links open"
        } else {
            "nav__links"
        }
    }
}

/// Last path segment of the current location, `index.html` for a bare `/`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "index.html",
    }
}

/// Which nav links point at the current page.
pub fn active_links(pathname: &str, hrefs: &[&str]) -> Vec<bool> {
    let page = current_page(pathname);
    hrefs.iter().map(|h| *h == page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/projects.html"), "projects.html");
        assert_eq!(current_page("/site/writing.html"), "writing.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
    }

    #[test]
    fn test_active_links() {
        let hrefs = ["index.html", "projects.html", "photos.html"];
        assert_eq!(active_links("/projects.html", &hrefs), vec![false, true, false]);
        assert_eq!(active_links("/", &hrefs), vec![true, false, false]);
    }

    #[test]
    fn test_toggle() {
        let mut nav = NavToggle::default();
        assert_eq!(nav.links_class(), "nav__links");
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.links_class(), "nav__links open");
        nav.toggle();
        assert!(!nav.is_open());
    }
}
