use serde::{Deserialize, Serialize};

use crate::config::SelectionConfig;

use super::document::{ApiDocument, ApiOperation, ApiResource};
use super::index::OperationIndex;

/// Externally-owned selection state: which section is expanded and which
/// resource or operation the enclosing page currently shows.
///
/// The menu never mutates this; it only reads it and asks the owner to move
/// it by emitting [`MenuEvent`](super::MenuEvent)s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Index of the active section. An out-of-range value activates nothing.
    pub active_index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_resource: Option<ApiResource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_operation: Option<ApiOperation>,
}

impl Selection {
    /// Whether the resource with this name is the selected one.
    ///
    /// A selected resource wins outright; only when no resource is selected
    /// does the selected operation's owning resource count.
    pub fn resource_is_active(&self, name: &str) -> bool {
        if let Some(ref resource) = self.selected_resource {
            return resource.name == name;
        }
        if let Some(ref operation) = self.selected_operation {
            return operation.resource.name == name;
        }
        false
    }

    /// Resolve a configured selection against a derived document. Names and
    /// ids that match nothing select nothing.
    pub fn resolve(
        config: &SelectionConfig,
        document: &ApiDocument,
        index: &OperationIndex,
    ) -> Self {
        let selected_resource = config
            .resource
            .as_deref()
            .and_then(|name| document.resources.iter().find(|r| r.name == name))
            .cloned();

        let selected_operation = config
            .operation
            .as_deref()
            .and_then(|id| index.find_operation(id))
            .cloned();

        Self {
            active_index: config.active_section,
            selected_resource,
            selected_operation,
        }
    }
}
