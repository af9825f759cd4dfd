use rand::Rng;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::models::album::Album;
use crate::models::writing::leading_int;

use super::drive::{list_folder, DriveError, DriveFile, FolderLister};

pub const DEFAULT_TRANSFORM_BASE: &str = "https://res.cloudinary.com/djwqx137d/image/fetch";
pub const DRIVE_IMAGE_BASE: &str = "https://lh3.googleusercontent.com/d";
pub const FULL_PROFILE: &str = "w_1200,c_limit,f_auto,q_auto";
pub const COVER_PROFILE: &str = "w_400,c_limit,f_auto,q_auto";

/// How to pick an album cover when the folder has no `cover.*` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverMode {
    #[default]
    First,
    Last,
    Random,
    /// 1-based position in the sorted image list.
    Index(i64),
}

impl CoverMode {
    /// `"last"`, `"random"`, a number, or anything else for the first image.
    /// A leading integer wins over the keywords ("3rd" is index 3).
    pub fn parse(raw: &str) -> Self {
        if let Some(n) = leading_int(raw) {
            return CoverMode::Index(n);
        }
        match raw.trim() {
            "last" => CoverMode::Last,
            "random" => CoverMode::Random,
            _ => CoverMode::First,
        }
    }
}

/// Builds image-CDN fetch URLs around Drive file ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTransform {
    base: String,
}

impl Default for ImageTransform {
    fn default() -> Self {
        ImageTransform::new(DEFAULT_TRANSFORM_BASE)
    }
}

impl ImageTransform {
    pub fn new(base: &str) -> Self {
        ImageTransform {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, profile: &str, file_id: &str) -> String {
        format!("{}/{}/{}/{}", self.base, profile, DRIVE_IMAGE_BASE, file_id)
    }

    pub fn photo_url(&self, file_id: &str) -> String {
        self.url(FULL_PROFILE, file_id)
    }

    pub fn cover_url(&self, file_id: &str) -> String {
        self.url(COVER_PROFILE, file_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub cover_mode: CoverMode,
    pub transform: ImageTransform,
}

fn cover_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^cover\b").expect("static regex"))
}

/// `cover.jpg`, `Cover-2.png` and `cover` count; `covered.jpg` does not.
pub fn is_cover_override(name: &str) -> bool {
    cover_name_re().is_match(name)
}

/// Case-insensitive name order, falling back to exact order for ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn sort_by_name(files: &mut [DriveFile]) {
    files.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Choose the cover among `images` (already in display order). An override
/// file named `cover…` always wins; otherwise `mode` decides. `None` only for
/// an empty slice.
pub fn select_cover<'a, R: Rng>(
    images: &'a [DriveFile],
    mode: &CoverMode,
    rng: &mut R,
) -> Option<&'a DriveFile> {
    if images.is_empty() {
        return None;
    }
    if let Some(file) = images.iter().find(|f| is_cover_override(&f.name)) {
        return Some(file);
    }
    let last = images.len() - 1;
    let idx = match mode {
        CoverMode::First => 0,
        CoverMode::Last => last,
        CoverMode::Random => rng.gen_range(0..images.len()),
        CoverMode::Index(n) if *n >= 1 => ((*n - 1) as usize).min(last),
        CoverMode::Index(_) => 0,
    };
    images.get(idx)
}

/// Walk `root_folder_id`: each subfolder with at least one image becomes an
/// album, in name order. Folders are listed one at a time; the first failure
/// aborts the whole walk and nothing partial is returned.
pub fn list_albums<L, R>(
    lister: &L,
    root_folder_id: &str,
    api_key: &str,
    options: &LoadOptions,
    rng: &mut R,
) -> Result<Vec<Album>, DriveError>
where
    L: FolderLister + ?Sized,
    R: Rng,
{
    let mut folders: Vec<DriveFile> = list_folder(lister, root_folder_id, api_key)?
        .into_iter()
        .filter(DriveFile::is_folder)
        .collect();
    sort_by_name(&mut folders);

    let mut albums = Vec::new();
    for folder in &folders {
        let mut images: Vec<DriveFile> = list_folder(lister, &folder.id, api_key)?
            .into_iter()
            .filter(DriveFile::is_image)
            .collect();
        if images.is_empty() {
            log::debug!("[albums] skipping folder {:?}: no images", folder.name);
            continue;
        }
        sort_by_name(&mut images);

        let cover = match select_cover(&images, &options.cover_mode, rng) {
            Some(file) => options.transform.cover_url(&file.id),
            None => continue,
        };
        let photos = images
            .iter()
            .map(|img| options.transform.photo_url(&img.id))
            .collect();

        albums.push(Album {
            title: folder.name.clone(),
            cover,
            description: String::new(),
            photos,
        });
    }

    log::info!(
        "[albums] loaded {} album(s) from {} folder(s)",
        albums.len(),
        folders.len()
    );
    Ok(albums)
}
