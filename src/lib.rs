//! `credits` — a curated list of third-party assets and the HTML attribution
//! block a host UI shows for them.
//!
//! - [`catalog`] — licence mapping and resource list, built in or read from TOML.
//! - [`translate`] — the [`Translator`](translate::Translator) seam for
//!   human-facing strings.
//! - [`report`] — HTML and terminal renderers.

pub mod catalog;
pub mod error;
pub mod models;
pub mod report;
pub mod translate;

pub use catalog::{load_catalog, Catalog};
pub use error::CatalogError;
pub use report::html::{format_link, AttributionFormatter};
