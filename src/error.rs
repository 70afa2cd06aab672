use thiserror::Error;

/// Authoring errors in a credits catalog.
///
/// These indicate a mistake in the curated tables, not a runtime condition,
/// so callers are expected to surface them rather than recover.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A resource references a licence id that is not in the mapping.
    #[error("resource #{index} ({resource}) references unknown licence `{licence_id}`")]
    UnknownLicence {
        index: usize,
        resource: String,
        licence_id: String,
    },
}
