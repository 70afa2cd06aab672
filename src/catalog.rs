use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::models::{Attribution, LicenceRecord, ResourceEntry};

/// Root catalog structure, deserialized from `.credits/catalog.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Rendering options.
    #[serde(default)]
    pub render: RenderConfig,
    /// Licence display metadata keyed by identifier (e.g. `"CC0"`, `"OFL"`).
    #[serde(default)]
    pub licences: BTreeMap<String, LicenceRecord>,
    /// Credited assets in display order.
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
}

/// Controls how the HTML block is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Escape `& < > "` in interpolated fields. Defaults to `true`.
    #[serde(default = "default_escape_markup")]
    pub escape_markup: bool,
}

fn default_escape_markup() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            escape_markup: default_escape_markup(),
        }
    }
}

impl Default for Catalog {
    /// Built-in credits list used when no catalog file is found.
    fn default() -> Self {
        let mut licences = BTreeMap::new();
        licences.insert(
            "CC0".to_string(),
            LicenceRecord::new("CC0", "https://creativecommons.org/publicdomain/zero/1.0"),
        );
        licences.insert(
            "CC-BY-SA-3.0".to_string(),
            LicenceRecord::new(
                "CC BY-SA 3.0",
                "https://creativecommons.org/licenses/by-sa/3.0/",
            ),
        );
        licences.insert(
            "CC-BY-NC-ND-3.0".to_string(),
            LicenceRecord::new(
                "CC BY-NC-ND 3.0",
                "https://creativecommons.org/licenses/by-nc-nd/3.0/",
            ),
        );
        licences.insert(
            "OFL".to_string(),
            LicenceRecord::new("OFL", "http://scripts.sil.org/OFL"),
        );

        let resources = vec![
            ResourceEntry {
                description: "Background".to_string(),
                name: "Rice paper 2".to_string(),
                url: "http://subtlepatterns.com/rice-paper-2/".to_string(),
                author: "Atle Mo".to_string(),
                author_url: "http://atle.co/".to_string(),
                licence_id: "CC-BY-SA-3.0".to_string(),
                additional_info: String::new(),
            },
            ResourceEntry {
                description: "Decorative".to_string(),
                name: "Ivy".to_string(),
                url: "https://pixabay.com/pl/ivy-wirowa%C4%87-upadek-design-okr%C4%85g-303546/"
                    .to_string(),
                author: "Clker-Free-Vector-Images".to_string(),
                author_url: "https://pixabay.com/pl/users/Clker-Free-Vector-Images-3736/"
                    .to_string(),
                licence_id: "CC0".to_string(),
                additional_info: "Colors changed".to_string(),
            },
            ResourceEntry {
                description: "Icons".to_string(),
                name: "Devine".to_string(),
                url: "http://findicons.com/pack/1579/devine/1".to_string(),
                author: "ipapun".to_string(),
                author_url: "http://ipapun.deviantart.com/".to_string(),
                licence_id: "CC-BY-NC-ND-3.0".to_string(),
                additional_info: String::new(),
            },
            ResourceEntry {
                description: "Font".to_string(),
                name: "Josefin Sans".to_string(),
                url: "http://www.1001freefonts.com/josefin_sans.font".to_string(),
                author: "Santiago Orozco".to_string(),
                author_url:
                    "http://www.1001freefonts.com/designer-santiago-orozco-fontlisting.php"
                        .to_string(),
                licence_id: "OFL".to_string(),
                additional_info: String::new(),
            },
        ];

        Catalog {
            render: RenderConfig::default(),
            licences,
            resources,
        }
    }
}

impl Catalog {
    /// Look up a licence by identifier.
    pub fn licence(&self, id: &str) -> Option<&LicenceRecord> {
        self.licences.get(id)
    }

    /// Join every resource with its licence, in display order.
    ///
    /// Fails on the first resource whose licence id is missing from the mapping.
    pub fn resolve(&self) -> Result<Vec<Attribution>, CatalogError> {
        self.resources
            .iter()
            .enumerate()
            .map(|(index, entry)| match self.licence(&entry.licence_id) {
                Some(licence) => Ok(Attribution {
                    entry: entry.clone(),
                    licence: licence.clone(),
                }),
                None => {
                    warn!(
                        index,
                        resource = %entry.name,
                        licence = %entry.licence_id,
                        "dangling licence reference"
                    );
                    Err(CatalogError::UnknownLicence {
                        index,
                        resource: entry.name.clone(),
                        licence_id: entry.licence_id.clone(),
                    })
                }
            })
            .collect()
    }

    /// Integrity check: every referenced licence id exists in the mapping.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.resolve().map(|_| ())
    }
}

/// Load the credits catalog, searching in order:
///
/// 1. `catalog_override` — path passed via `--catalog`
/// 2. `<project_path>/.credits/catalog.toml`
/// 3. `~/.config/credits/catalog.toml`
/// 4. Built-in [`Catalog::default`]
pub fn load_catalog(project_path: &Path, catalog_override: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = catalog_override {
        return read_catalog(path);
    }

    let project_catalog = project_path.join(".credits").join("catalog.toml");
    if project_catalog.exists() {
        return read_catalog(&project_catalog);
    }

    if let Some(home) = dirs::home_dir() {
        let home_catalog = home.join(".config").join("credits").join("catalog.toml");
        if home_catalog.exists() {
            return read_catalog(&home_catalog);
        }
    }

    debug!("no catalog file found, using built-in credits");
    Ok(Catalog::default())
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    debug!(path = %path.display(), "reading catalog");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog: Catalog = toml::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    debug!(
        licences = catalog.licences.len(),
        resources = catalog.resources.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[render]
escape_markup = false

[licences.OFL]
name = "OFL"
url = "http://scripts.sil.org/OFL"

[[resources]]
description = "Font"
name = "Josefin Sans"
url = "http://x"
author = "Santiago Orozco"
author_url = "http://y"
licence = "OFL"
"#;

    #[test]
    fn test_default_catalog_is_consistent() {
        let catalog = Catalog::default();
        assert_eq!(catalog.licences.len(), 4);
        assert_eq!(catalog.resources.len(), 4);
        for entry in &catalog.resources {
            assert!(
                catalog.licence(&entry.licence_id).is_some(),
                "missing licence {}",
                entry.licence_id
            );
        }
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<_> = Catalog::default()
            .resources
            .into_iter()
            .map(|r| r.description)
            .collect();
        assert_eq!(names, ["Background", "Decorative", "Icons", "Font"]);
    }

    #[test]
    fn test_parse_catalog_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", SAMPLE).unwrap();

        let catalog = load_catalog(Path::new("/nonexistent"), Some(f.path())).unwrap();
        assert!(!catalog.render.escape_markup);
        assert_eq!(catalog.resources.len(), 1);
        assert_eq!(catalog.resources[0].licence_id, "OFL");
        assert!(!catalog.resources[0].has_additional_info());
        assert_eq!(
            catalog.licence("OFL").map(|l| l.url.as_str()),
            Some("http://scripts.sil.org/OFL")
        );
    }

    #[test]
    fn test_render_defaults_when_omitted() {
        let catalog: Catalog = toml::from_str("").unwrap();
        assert!(catalog.render.escape_markup);
        assert!(catalog.resources.is_empty());
    }

    #[test]
    fn test_project_catalog_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".credits")).unwrap();
        std::fs::write(dir.path().join(".credits").join("catalog.toml"), SAMPLE).unwrap();

        let catalog = load_catalog(dir.path(), None).unwrap();
        assert_eq!(catalog.resources.len(), 1);
        assert_eq!(catalog.resources[0].name, "Josefin Sans");
    }

    #[test]
    fn test_override_wins_over_project_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".credits")).unwrap();
        std::fs::write(dir.path().join(".credits").join("catalog.toml"), SAMPLE).unwrap();

        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[licences]").unwrap();

        let catalog = load_catalog(dir.path(), Some(f.path())).unwrap();
        assert!(catalog.resources.is_empty());
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "[[resources]]\nname = 3\n").unwrap();
        assert!(load_catalog(Path::new("."), Some(f.path())).is_err());
    }

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog: Catalog = toml::from_str(include_str!("../demos/catalog.toml")).unwrap();
        assert_eq!(catalog.resources.len(), 2);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_dangling_licence_is_reported() {
        let mut catalog = Catalog::default();
        catalog.resources[2].licence_id = "WTFPL".to_string();

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownLicence {
                index: 2,
                resource: "Devine".to_string(),
                licence_id: "WTFPL".to_string(),
            })
        );
    }
}
