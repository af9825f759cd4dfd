//! The page-wide image overlay. One instance serves every album on the page.

use crate::render::html_escape;

/// Which element of the overlay a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The explicit "×" control.
    CloseControl,
    /// Anything else inside the overlay, image included.
    Overlay,
}

/// Handlers that ran for one click, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    CloseControl,
    Overlay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    src: String,
    alt: String,
    active: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, src: &str, alt: &str) {
        self.src = src.to_string();
        self.alt = alt.to_string();
        self.active = true;
    }

    /// Hides the overlay. The image source stays set.
    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Dispatch a click the way it bubbles: the close control handles it and
    /// stops propagation, so the overlay handler never sees it.
    pub fn click(&mut self, target: ClickTarget) -> Vec<Handler> {
        match target {
            ClickTarget::CloseControl => {
                self.close();
                vec![Handler::CloseControl]
            }
            ClickTarget::Overlay => {
                self.close();
                vec![Handler::Overlay]
            }
        }
    }

    /// Document keydown. Only Escape does anything.
    pub fn on_keydown(&mut self, key: &str) {
        if key == "Escape" {
            self.close();
        }
    }

    pub fn render(&self) -> String {
        format!(
            "<div class=\"lightbox{}\"><button class=\"lightbox__close\">&times;</button><img src=\"{}\" alt=\"{}\"></div>",
            if self.active { " active" } else { "" },
            html_escape(&self.src),
            html_escape(&self.alt)
        )
    }
}
