use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::albums::loader::{CoverMode, DEFAULT_TRANSFORM_BASE};

pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Parsed `folio.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default, rename = "container")]
    pub containers: Vec<ContainerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    /// Appended to writing page document titles.
    #[serde(default)]
    pub author: String,
    /// Base directory relative data sources resolve against.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_transform_base")]
    pub transform_base: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        SiteSection {
            author: String::new(),
            root: default_root(),
            output_dir: default_output_dir(),
            transform_base: default_transform_base(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_transform_base() -> String {
    DEFAULT_TRANSFORM_BASE.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    CardList,
    WritingList,
    WritingPage,
    Albums,
}

impl ContainerKind {
    /// Marker class of the element this container renders into.
    pub fn css_class(&self) -> &'static str {
        match self {
            ContainerKind::CardList => "card-list",
            ContainerKind::WritingList => "writing-list",
            ContainerKind::WritingPage => "writing-page",
            ContainerKind::Albums => "albums",
        }
    }
}

/// One independently initialized container on a page. The optional keys
/// mirror the `data-*` markers the page carries for it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerConfig {
    pub id: String,
    pub kind: ContainerKind,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub drive_folder: Option<String>,
    #[serde(default)]
    pub drive_key: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    /// Any other marker attributes, passed through untouched.
    #[serde(default)]
    pub attrs: HashMap<String, String>,
}

impl ContainerConfig {
    /// Attribute lookup by marker name (`source`, `drive-folder`, ...),
    /// treating empty values as unset.
    pub fn attr(&self, key: &str) -> Option<&str> {
        let typed = match key {
            "source" => self.source.as_deref(),
            "drive-folder" | "drive_folder" => self.drive_folder.as_deref(),
            "drive-key" | "drive_key" => self.drive_key.as_deref(),
            "cover" => self.cover.as_deref(),
            _ => None,
        };
        typed
            .or_else(|| self.attrs.get(key).map(String::as_str))
            .filter(|v| !v.is_empty())
    }

    pub fn attr_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attr(key).unwrap_or(default)
    }

    pub fn cover_mode(&self) -> CoverMode {
        CoverMode::parse(self.attr_or("cover", "first"))
    }
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("Invalid site config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        let mut config = Self::from_toml(&raw)?;
        // Relative roots are relative to the config file, not the cwd.
        if config.site.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.site.root = dir.join(&config.site.root);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[site]
author = "Jane Doe"
output_dir = "public/fragments"

[[container]]
id = "projects"
kind = "card-list"
source = "data/projects.json"

[[container]]
id = "photos"
kind = "albums"
drive_folder = "root123"
drive_key = "key456"
cover = "3"

[[container]]
id = "essays"
kind = "writing-list"
source = ""
attrs = { theme = "dark" }
"#;

    #[test]
    fn test_parse_sample() {
        let cfg = SiteConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(cfg.site.author, "Jane Doe");
        assert_eq!(cfg.site.output_dir, PathBuf::from("public/fragments"));
        assert_eq!(cfg.site.transform_base, DEFAULT_TRANSFORM_BASE);
        assert_eq!(cfg.containers.len(), 3);
        assert_eq!(cfg.containers[0].kind, ContainerKind::CardList);
        assert_eq!(cfg.containers[0].attr("source"), Some("data/projects.json"));
        assert_eq!(cfg.containers[1].attr("drive-folder"), Some("root123"));
        assert_eq!(cfg.containers[1].cover_mode(), CoverMode::Index(3));
    }

    #[test]
    fn test_empty_attr_is_unset() {
        let cfg = SiteConfig::from_toml(SAMPLE).unwrap();
        let essays = &cfg.containers[2];
        assert_eq!(essays.attr("source"), None);
        assert_eq!(essays.attr("theme"), Some("dark"));
        assert_eq!(essays.attr_or("missing", "fallback"), "fallback");
        assert_eq!(essays.cover_mode(), CoverMode::First);
    }

    #[test]
    fn test_defaults() {
        let cfg = SiteConfig::from_toml("").unwrap();
        assert!(cfg.containers.is_empty());
        assert_eq!(cfg.site.output_dir, PathBuf::from("dist"));
        assert_eq!(cfg.site.root, PathBuf::from("."));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = SiteConfig::from_toml("[[container]]\nid = \"x\"\nkind = \"carousel\"\n").unwrap_err();
        assert!(err.starts_with("Invalid site config"));
    }
}
