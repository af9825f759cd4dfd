//! Components of a static portfolio site: card and writing renderers, their
//! filter controllers, the Drive-backed album loader and browser, the shared
//! lightbox and the nav toggle. Everything event-driven is a plain owned value
//! whose handlers return markup or explicit side effects.

pub mod albums;
pub mod config;
pub mod filters;
pub mod lightbox;
pub mod models;
pub mod nav;
pub mod render;
pub mod site;
pub mod sources;
