use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::document::ApiOperation;

/// Ordered mapping from resource name to that resource's operations.
///
/// Built once during derivation and read-only afterwards. An absent entry
/// means the resource has no operations; lookups never fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationIndex {
    #[serde(flatten)]
    by_resource: IndexMap<String, Vec<ApiOperation>>,
}

impl OperationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat operation list by resource name, preserving encounter
    /// order both across resources and within each resource's list.
    pub fn from_operations(operations: Vec<ApiOperation>) -> Self {
        let mut by_resource: IndexMap<String, Vec<ApiOperation>> = IndexMap::new();
        for op in operations {
            by_resource
                .entry(op.resource.name.clone())
                .or_default()
                .push(op);
        }
        Self { by_resource }
    }

    /// Operations of the given resource; empty when none were indexed.
    pub fn operations_for(&self, resource_name: &str) -> &[ApiOperation] {
        self.by_resource
            .get(resource_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First operation with the given `operationId`, across all resources.
    pub fn find_operation(&self, operation_id: &str) -> Option<&ApiOperation> {
        self.by_resource
            .values()
            .flatten()
            .find(|op| op.operation_id == operation_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ApiOperation>)> {
        self.by_resource.iter()
    }

    /// Number of resources with at least one operation.
    pub fn len(&self) -> usize {
        self.by_resource.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_resource.is_empty()
    }

    /// Total operation count across all resources.
    pub fn total_operations(&self) -> usize {
        self.by_resource.values().map(Vec::len).sum()
    }
}
