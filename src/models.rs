use serde::{Deserialize, Serialize};

/// Display metadata for a licence, keyed by its identifier in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenceRecord {
    pub name: String,
    pub url: String,
}

impl LicenceRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl std::fmt::Display for LicenceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One attributable asset.
///
/// `licence_id` must name a key of the catalog's licence mapping. An empty
/// `additional_info` means the entry has no notes line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub description: String,
    pub name: String,
    pub url: String,
    pub author: String,
    pub author_url: String,
    #[serde(rename = "licence")]
    pub licence_id: String,
    #[serde(default)]
    pub additional_info: String,
}

impl ResourceEntry {
    pub fn has_additional_info(&self) -> bool {
        !self.additional_info.is_empty()
    }
}

/// A resource entry joined with the licence it references.
///
/// Only produced after the licence id has been checked against the mapping,
/// so holding one is proof the reference resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribution {
    #[serde(flatten)]
    pub entry: ResourceEntry,
    #[serde(rename = "licence_record")]
    pub licence: LicenceRecord,
}
