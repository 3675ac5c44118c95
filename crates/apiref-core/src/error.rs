use thiserror::Error;

/// Failures while reading a reference document. The menu itself has no
/// error states; everything past parsing degrades to rendering nothing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}
