use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.apiref.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApirefConfig {
    pub input: String,
    pub output: String,
    pub selection: SelectionConfig,
    pub render: RenderConfig,
}

impl Default for ApirefConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "docs".to_string(),
            selection: SelectionConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Which menu node starts out selected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Index of the initially active section.
    pub active_section: usize,
    /// Name of the initially selected resource.
    pub resource: Option<String>,
    /// operationId of the initially selected operation.
    pub operation: Option<String>,
}

/// Output shape options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Wrap the menu fragment in a complete HTML page.
    pub standalone: bool,
    /// Page title for standalone output.
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "API Reference".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apiref.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApirefConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ApirefConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apiref configuration — https://github.com/apiref/apiref
input: openapi.yaml
output: docs

selection:
  active_section: 0     # index of the initially expanded section
  # resource: Orders    # initially selected resource (tag name)
  # operation: Orders.List   # initially selected operationId

render:
  standalone: false     # true = full HTML page, false = bare fragment
  title: API Reference  # <title> of standalone output
"#
}
