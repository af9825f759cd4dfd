//! Photo albums sourced from a Google Drive folder tree.
//!
//! `drive` speaks to the folder-listing API, `loader` turns listings into
//! [`Album`](crate::models::album::Album)s, and `browser` is the grid /
//! single-album state machine that presents them.

pub mod browser;
pub mod drive;
pub mod loader;

pub use browser::{fragment_to_state, AlbumBrowser, BrowserState, Effect};
pub use drive::{DriveClient, DriveError, DriveFile, FolderLister};
pub use loader::{list_albums, CoverMode, ImageTransform, LoadOptions};
