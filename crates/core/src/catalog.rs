//! The mural catalog
//!
//! Loaded once, never mutated. Every query takes the catalog (or its record
//! slice) by shared reference.

use crate::config::Config;
use crate::error::{Error, Result, ResultExt};
use crate::record::MuralRecord;
use muralmap_geo::Coordinate;
use std::path::Path;

/// Bundled dataset
const BUILTIN_CATALOG: &str = include_str!("../data/murals.json");

/// Ordered, read-only collection of murals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<MuralRecord>,
}

impl Catalog {
    /// The dataset shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("While parsing the bundled catalog")
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<MuralRecord> = serde_json::from_str(json)?;
        let catalog = Self { records };
        tracing::info!(
            murals = catalog.len(),
            positioned = catalog.iter().filter(|r| r.coordinate().is_some()).count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path).with_context("While loading the mural catalog"));
        }
        if path.is_dir() {
            return Err(Error::catalog(format!("{} is a directory, not a catalog file", path.display()))
                .with_suggestion("Point --catalog or general.catalog_path at a JSON file"));
        }

        tracing::debug!(path = %path.display(), "Reading catalog");
        let content = std::fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Failed to read catalog {}", path.display()))?;

        Self::from_json(&content).context(format!("Failed to parse catalog {}", path.display()))
    }

    pub fn from_records(records: Vec<MuralRecord>) -> Self {
        Self { records }
    }

    /// The configured catalog file, or the bundled dataset
    pub fn load(config: &Config) -> Result<Self> {
        match config.catalog_path() {
            Some(path) => Self::from_path(&path),
            None => Self::builtin(),
        }
    }

    pub fn records(&self) -> &[MuralRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MuralRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MuralRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position to centre the map on when a mural is selected.
    pub fn focus(&self, index: usize) -> Option<Coordinate> {
        self.get(index)?.coordinate()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MuralRecord;
    type IntoIter = std::slice::Iter<'a, MuralRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.get(0).unwrap().name, "Colonel Zubeen Da");
        assert!(catalog.iter().all(|r| r.coordinate().is_some()));
    }

    #[test]
    fn test_builtin_explicit_cities() {
        let catalog = Catalog::builtin().unwrap();
        let stadium = catalog.iter().find(|r| r.name == "Jorhat stadium Murals").unwrap();
        assert_eq!(stadium.city.as_deref(), Some("jorhat"));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = Catalog::from_json(r#"[{"name": "b"}, {"name": "a"}, {"name": "c"}]"#).unwrap();
        let names: Vec<_> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogParseError);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Only", "lat": 26.1, "lng": 91.7}]"#).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.focus(0), Some(Coordinate::new(26.1, 91.7)));
    }

    #[test]
    fn test_from_missing_path() {
        let err = Catalog::from_path(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_directory_is_not_a_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Catalog::from_path(dir.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_load_uses_configured_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Configured"}]"#).unwrap();

        let mut config = Config::defaults();
        config.schema.general.catalog_path = Some(file.path().display().to_string());
        let catalog = Catalog::load(&config).unwrap();
        assert_eq!(catalog.get(0).unwrap().name, "Configured");

        assert_eq!(Catalog::load(&Config::defaults()).unwrap().len(), 30);
    }

    #[test]
    fn test_focus_invalid() {
        let catalog = Catalog::from_records(vec![MuralRecord::new("x").with_position("", "")]);
        assert!(catalog.focus(0).is_none());
        assert!(catalog.focus(5).is_none());
    }
}
