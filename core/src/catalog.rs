use crate::error::CatalogError;
use crate::CatalogResult;
use crate::types::Project;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

// Embedded sample catalog for a zero-config start
const BUILTIN_CATALOG_JSON: &str = include_str!("../catalog_data.json");

/// The fixed, ordered collection of portfolio projects.
///
/// A catalog is validated once at construction and never mutated afterwards;
/// filtering always produces a new sequence that borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if project.services.is_empty() {
                return Err(CatalogError::NoServices(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    /// The sample projects shipped with the binary.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        Self::new(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        Self::new(serde_yaml::from_str(content)?)
    }

    /// Loads a catalog document, picking the parser from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!(
            "Loaded {} projects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn require(&self, id: &str) -> CatalogResult<&Project> {
        self.get(id)
            .ok_or_else(|| CatalogError::ProjectNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct project years, newest first. Feeds the year dropdown.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.projects.iter().map(|project| project.year).collect();
        years.into_iter().rev().collect()
    }
}
