use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Project {0} lists no services")]
    NoServices(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Invalid year filter: {0}. Expected \"all\" or a year")]
    InvalidYear(String),
}
