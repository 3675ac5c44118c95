//! Derivation of the menu view-model from a parsed reference document.

use crate::menu::{ApiDocument, ApiOperation, ApiResource, ApiSection, OperationIndex};
use crate::parse::spec::{Operation, ReferenceSpec};

/// Derive the menu view-model: the ordered document plus the per-resource
/// operation index.
pub fn derive_menu(spec: &ReferenceSpec) -> (ApiDocument, OperationIndex) {
    let sections = spec
        .sections
        .iter()
        .map(|s| ApiSection {
            x_id: s.x_id.clone(),
            name: s.name.clone(),
        })
        .collect();

    // A tag without x-section-id still becomes a resource; its empty section
    // id matches no section, so it never renders.
    let resources: Vec<ApiResource> = spec
        .tags
        .iter()
        .map(|t| ApiResource {
            x_section_id: t.x_section_id.clone().unwrap_or_default(),
            name: t.name.clone(),
        })
        .collect();

    let document = ApiDocument {
        sections,
        resources,
    };

    let mut operations = Vec::new();
    for (route, item) in &spec.paths {
        for op in item.operations() {
            collect_operation(route, op, &document.resources, &mut operations);
        }
    }

    (document, OperationIndex::from_operations(operations))
}

/// Index one operation under every tag that names a known resource, with the
/// back-reference set to the resource it lands under.
fn collect_operation(
    route: &str,
    op: &Operation,
    resources: &[ApiResource],
    out: &mut Vec<ApiOperation>,
) {
    let Some(operation_id) = op.operation_id.clone() else {
        log::warn!("skipping operation at {route}: no operationId to link to");
        return;
    };

    let summary = op.summary.clone().unwrap_or_else(|| operation_id.clone());

    for tag in &op.tags {
        match resources.iter().find(|r| r.name == *tag) {
            Some(resource) => out.push(ApiOperation {
                operation_id: operation_id.clone(),
                summary: summary.clone(),
                resource: resource.clone(),
            }),
            None => log::warn!("operation {operation_id}: tag {tag} matches no resource"),
        }
    }
}
