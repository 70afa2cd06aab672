//! Renderers for the credits catalog.
//!
//! - [`html`] — the attribution block embedded by the host UI, plus the
//!   `format_link` helper it is assembled from.
//! - [`terminal`] — coloured table of the resolved entries for the CLI.

pub mod html;
pub mod terminal;
