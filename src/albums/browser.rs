use crate::lightbox::Lightbox;
use crate::models::album::Album;
use crate::render::album::{render_album_expanded, render_album_grid};

/// What the album container shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserState {
    Grid,
    Expanded(usize),
}

/// Side effects the host page must carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// New history entry with this address fragment (no leading `#`).
    PushHistory(String),
    /// Rewrite the current entry's fragment; `None` clears it.
    ReplaceHistory(Option<String>),
    ScrollIntoView,
}

/// Map an address fragment to a browser state. Used on initial load and on
/// every history navigation. Unknown or empty fragments mean the grid; when
/// two albums share a slug the first one wins.
pub fn fragment_to_state(fragment: &str, albums: &[Album]) -> BrowserState {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return BrowserState::Grid;
    }
    albums
        .iter()
        .position(|a| a.slug() == fragment)
        .map(BrowserState::Expanded)
        .unwrap_or(BrowserState::Grid)
}

/// Slugs claimed by more than one album, in first-seen order.
pub fn duplicate_slugs(albums: &[Album]) -> Vec<String> {
    let slugs: Vec<String> = albums.iter().map(Album::slug).collect();
    let mut dups: Vec<String> = Vec::new();
    for (i, slug) in slugs.iter().enumerate() {
        if slugs[..i].contains(slug) && !dups.contains(slug) {
            dups.push(slug.clone());
        }
    }
    dups
}

/// Grid / single-album view over a fixed set of albums.
#[derive(Debug, Clone)]
pub struct AlbumBrowser {
    albums: Vec<Album>,
    state: BrowserState,
}

impl AlbumBrowser {
    /// Start from whatever fragment the page was opened with. Entering an
    /// album this way neither scrolls nor touches history.
    pub fn new(albums: Vec<Album>, initial_fragment: &str) -> Self {
        let state = fragment_to_state(initial_fragment, &albums);
        AlbumBrowser { albums, state }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn state(&self) -> BrowserState {
        self.state
    }

    pub fn current_album(&self) -> Option<&Album> {
        match self.state {
            BrowserState::Grid => None,
            BrowserState::Expanded(i) => self.albums.get(i),
        }
    }

    /// Click on the cover tile at `index`. An album whose title has no
    /// slug-able characters opens without a history entry.
    pub fn click_cover(&mut self, index: usize) -> Vec<Effect> {
        let album = match self.albums.get(index) {
            Some(a) => a,
            None => return vec![],
        };
        let slug = album.slug();
        self.state = BrowserState::Expanded(index);
        if slug.is_empty() {
            return vec![Effect::ScrollIntoView];
        }
        vec![Effect::PushHistory(slug), Effect::ScrollIntoView]
    }

    /// The "All Albums" button.
    pub fn click_back(&mut self) -> Vec<Effect> {
        self.state = BrowserState::Grid;
        vec![Effect::ReplaceHistory(None)]
    }

    /// Back/forward navigation: the fragment alone decides the state.
    pub fn on_history_navigation(&mut self, fragment: &str) {
        self.state = fragment_to_state(fragment, &self.albums);
    }

    /// Click on a photo of the open album; shows it in the shared lightbox
    /// with the album title as alt text.
    pub fn click_photo(&self, photo: usize, lightbox: &mut Lightbox) -> bool {
        let album = match self.current_album() {
            Some(a) => a,
            None => return false,
        };
        match album.photos.get(photo) {
            Some(src) => {
                lightbox.open(src, &album.title);
                true
            }
            None => false,
        }
    }

    /// Full container markup for the current state: the grid, and the
    /// expanded view, exactly one of them visible.
    pub fn render(&self) -> String {
        match self.current_album() {
            Some(album) => format!(
                "{}<div class=\"album-expanded\" style=\"display:block\">{}</div>",
                render_album_grid(&self.albums)
                    .replacen("<div class=\"albums__grid\">", "<div class=\"albums__grid\" style=\"display:none\">", 1),
                render_album_expanded(album)
            ),
            None => format!(
                "{}<div class=\"album-expanded\" style=\"display:none\"></div>",
                render_album_grid(&self.albums)
            ),
        }
    }
}
