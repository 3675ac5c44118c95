use serde::{Deserialize, Serialize};

/// A named grouping of resources in the reference menu. Identity is `x-id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(rename = "x-id")]
    pub x_id: String,

    pub name: String,
}

/// A named API entity belonging to exactly one section. Identity is `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResource {
    #[serde(rename = "x-section-id")]
    pub x_section_id: String,

    pub name: String,
}

/// A single API action, identified by `operationId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiOperation {
    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub summary: String,

    /// The owning resource (back-reference, not ownership).
    pub resource: ApiResource,
}

/// The menu's view of an API document: ordered sections and resources.
///
/// Owned by the caller and read-only to the menu. Section and resource keys
/// are never validated for uniqueness; lookups resolve by first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub sections: Vec<ApiSection>,

    #[serde(default)]
    pub resources: Vec<ApiResource>,
}

impl ApiDocument {
    /// Index of the first section whose `x-id` matches. With duplicated ids
    /// the first occurrence wins.
    pub fn section_index(&self, x_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.x_id == x_id)
    }

    /// Resources belonging to the section with the given id, in document
    /// order. An id matching no resource yields an empty iterator.
    pub fn resources_in<'a>(
        &'a self,
        section_id: &'a str,
    ) -> impl Iterator<Item = &'a ApiResource> + 'a {
        self.resources
            .iter()
            .filter(move |r| r.x_section_id == section_id)
    }
}
