pub mod spec;

use crate::error::ParseError;
use spec::ReferenceSpec;

/// Parse a reference document from YAML.
pub fn from_yaml(input: &str) -> Result<ReferenceSpec, ParseError> {
    let spec: ReferenceSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse a reference document from JSON.
pub fn from_json(input: &str) -> Result<ReferenceSpec, ParseError> {
    let spec: ReferenceSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

fn validate_version(spec: &ReferenceSpec) -> Result<(), ParseError> {
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}
