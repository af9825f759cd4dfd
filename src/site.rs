//! Prerender every configured container into an HTML fragment.
//!
//! Containers are independent: each one resolves its own data source and a
//! failure leaves only that container on its loading placeholder.

use log::{error, info, warn};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::albums::browser::duplicate_slugs;
use crate::albums::{list_albums, AlbumBrowser, FolderLister, ImageTransform, LoadOptions};
use crate::config::{ContainerConfig, ContainerKind, SiteConfig};
use crate::filters::{CardFilter, WritingFilter};
use crate::models::card::CardItem;
use crate::models::writing::WritingItem;
use crate::render::writing::render_writing_page;
use crate::render::{container, LOADER_HTML};
use crate::sources::fetch_json;

/// One output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub html: String,
    /// False when the container is stuck on its loading placeholder.
    pub loaded: bool,
}

impl Fragment {
    fn loading(c: &ContainerConfig) -> Self {
        Fragment {
            path: PathBuf::from(format!("{}.html", c.id)),
            html: container(c.kind.css_class(), &c.id, LOADER_HTML),
            loaded: false,
        }
    }
}

/// True when `name` is usable as a single output path component.
pub fn is_plain_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| matches!(c, '/' | '\\' | ':' | '\0'))
}

fn build_card_list(site: &SiteConfig, c: &ContainerConfig, source: &str) -> Fragment {
    let items: Vec<CardItem> = match fetch_json(source, &site.site.root) {
        Ok(items) => items,
        Err(e) => {
            error!("[{}] card source failed: {}", c.id, e);
            return Fragment::loading(c);
        }
    };
    let filter = CardFilter::new(items);
    info!(
        "[{}] {} card(s), {} tag(s)",
        c.id,
        filter.items().len(),
        filter.all_tags().len()
    );
    let mut html = filter.filter_bar_html().unwrap_or_default();
    html.push_str(&container(c.kind.css_class(), &c.id, &filter.render()));
    Fragment {
        path: PathBuf::from(format!("{}.html", c.id)),
        html,
        loaded: true,
    }
}

fn build_writing_list(site: &SiteConfig, c: &ContainerConfig, source: &str) -> Fragment {
    let items: Vec<WritingItem> = match fetch_json(source, &site.site.root) {
        Ok(items) => items,
        Err(e) => {
            error!("[{}] writing source failed: {}", c.id, e);
            return Fragment::loading(c);
        }
    };
    let filter = WritingFilter::from_source(items);
    info!(
        "[{}] {} writing(s), {} type(s)",
        c.id,
        filter.items().len(),
        filter.all_types().len()
    );
    let mut html = filter.filter_bar_html().unwrap_or_default();
    html.push_str(&container(c.kind.css_class(), &c.id, &filter.render()));
    Fragment {
        path: PathBuf::from(format!("{}.html", c.id)),
        html,
        loaded: true,
    }
}

/// One detail page per writing that has a slug, under `<id>/<slug>.html`.
fn build_writing_pages(site: &SiteConfig, c: &ContainerConfig, source: &str) -> Vec<Fragment> {
    let items: Vec<WritingItem> = match fetch_json(source, &site.site.root) {
        Ok(items) => items,
        Err(e) => {
            error!("[{}] writing source failed: {}", c.id, e);
            return vec![Fragment::loading(c)];
        }
    };
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pages: Vec<Fragment> = Vec::new();
    for slug in items.iter().filter_map(|item| item.internal_slug()) {
        if !is_plain_segment(slug) {
            warn!("[{}] writing slug {:?} is not a plain file name; page skipped", c.id, slug);
            continue;
        }
        if !seen.insert(slug) {
            warn!("[{}] several writings share the slug {:?}; the first one wins", c.id, slug);
            continue;
        }
        let page = render_writing_page(&items, slug, &site.site.author);
        let title = page.document_title.unwrap_or_default();
        pages.push(Fragment {
            path: Path::new(&c.id).join(format!("{}.html", slug)),
            html: format!(
                "<title>{}</title>\n{}",
                crate::render::html_escape(&title),
                container(c.kind.css_class(), &c.id, &page.body)
            ),
            loaded: true,
        });
    }
    info!("[{}] {} writing page(s)", c.id, pages.len());
    pages
}

fn build_albums(
    site: &SiteConfig,
    c: &ContainerConfig,
    folder: &str,
    key: &str,
    lister: &dyn FolderLister,
) -> Fragment {
    let options = LoadOptions {
        cover_mode: c.cover_mode(),
        transform: ImageTransform::new(&site.site.transform_base),
    };
    let albums = match list_albums(lister, folder, key, &options, &mut rand::thread_rng()) {
        Ok(albums) => albums,
        Err(e) => {
            error!("Failed to load albums from Google Drive: {}", e);
            return Fragment::loading(c);
        }
    };
    for slug in duplicate_slugs(&albums) {
        warn!("[{}] several albums share the slug {:?}; the first one wins", c.id, slug);
    }
    let browser = AlbumBrowser::new(albums, "");
    Fragment {
        path: PathBuf::from(format!("{}.html", c.id)),
        html: container(c.kind.css_class(), &c.id, &browser.render()),
        loaded: true,
    }
}

/// Render one container. Containers missing their required markers produce
/// nothing, the same as a page element without a data source.
pub fn build_container(
    site: &SiteConfig,
    c: &ContainerConfig,
    lister: &dyn FolderLister,
) -> Vec<Fragment> {
    if !is_plain_segment(&c.id) {
        warn!("container id {:?} is not a plain file name; skipped", c.id);
        return vec![];
    }
    match c.kind {
        ContainerKind::Albums => match (c.attr("drive-folder"), c.attr("drive-key")) {
            (Some(folder), Some(key)) => vec![build_albums(site, c, folder, key, lister)],
            _ => {
                warn!("[{}] albums container needs drive_folder and drive_key; skipped", c.id);
                vec![]
            }
        },
        kind => {
            let source = match c.attr("source") {
                Some(s) => s,
                None => {
                    warn!("[{}] no data source; skipped", c.id);
                    return vec![];
                }
            };
            match kind {
                ContainerKind::CardList => vec![build_card_list(site, c, source)],
                ContainerKind::WritingList => vec![build_writing_list(site, c, source)],
                _ => build_writing_pages(site, c, source),
            }
        }
    }
}

pub fn build_site(site: &SiteConfig, lister: &dyn FolderLister) -> Vec<Fragment> {
    site.containers
        .iter()
        .flat_map(|c| build_container(site, c, lister))
        .collect()
}

/// Write fragments under `out_dir`, creating directories as needed. A
/// fragment path that could land outside `out_dir` is an error.
pub fn write_fragments(out_dir: &Path, fragments: &[Fragment]) -> Result<usize, String> {
    for fragment in fragments {
        if !fragment
            .path
            .components()
            .all(|part| matches!(part, Component::Normal(_)))
        {
            return Err(format!(
                "Refusing to write {} outside {}",
                fragment.path.display(),
                out_dir.display()
            ));
        }
        let path = out_dir.join(&fragment.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create {}: {}", parent.display(), e))?;
        }
        std::fs::write(&path, &fragment.html)
            .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
    }
    Ok(fragments.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segment() {
        assert!(is_plain_segment("my-post"));
        assert!(is_plain_segment("notes.v2"));
        assert!(!is_plain_segment(""));
        assert!(!is_plain_segment(".."));
        assert!(!is_plain_segment("/tmp/x"));
        assert!(!is_plain_segment("../../escaped"));
        assert!(!is_plain_segment("a\\b"));
        assert!(!is_plain_segment("C:x"));
    }

    #[test]
    fn test_write_refuses_paths_outside_out_dir() {
        let out = std::env::temp_dir().join(format!("folio-write-guard-{}", std::process::id()));
        for path in ["../escaped.html", "/tmp/folio-abs.html", "a/../../b.html"] {
            let fragment = Fragment {
                path: PathBuf::from(path),
                html: String::new(),
                loaded: true,
            };
            let err = write_fragments(&out, &[fragment]).unwrap_err();
            assert!(err.starts_with("Refusing to write"), "{}", err);
        }
        assert!(!out.exists());
    }
}
