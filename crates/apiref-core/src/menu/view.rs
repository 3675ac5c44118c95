use serde::Serialize;

use super::document::{ApiDocument, ApiOperation, ApiResource};
use super::index::OperationIndex;
use super::selection::Selection;
use super::state::MenuState;

/// The fully resolved menu tree for one render; what a renderer turns into
/// markup. A pure function of document, index, selection and disclosure
/// state — see [`view`].
#[derive(Debug, Clone, Serialize)]
pub struct MenuView {
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub name: String,
    /// Disclosure flag; drives only the chevron glyph.
    pub open: bool,
    /// Whether this section's children are visible (selection-owned).
    pub active: bool,
    /// Populated only while the section is active.
    pub resources: Vec<ResourceView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceView {
    pub name: String,
    pub open: bool,
    pub active: bool,
    /// Populated only while the resource is active.
    pub operations: Vec<OperationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationView {
    pub operation_id: String,
    /// Display label: the summary with `.` separators shown as spaces.
    pub label: String,
    /// Same-page anchor target for deep linking.
    pub href: String,
}

/// Build the menu tree: one entry per section in document order. An empty
/// document yields an empty view.
pub fn view(
    document: &ApiDocument,
    index: &OperationIndex,
    selection: &Selection,
    state: &MenuState,
) -> MenuView {
    let sections = document
        .sections
        .iter()
        .enumerate()
        .map(|(position, section)| {
            // First matching x-id wins, so a duplicated id makes the later
            // section report (and follow) the earlier one's index.
            let section_index = document.section_index(&section.x_id).unwrap_or(position);
            let active = section_index == selection.active_index;

            let resources = if active {
                document
                    .resources
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.x_section_id == section.x_id)
                    .map(|(rpos, r)| resource_view(r, rpos, index, selection, state))
                    .collect()
            } else {
                Vec::new()
            };

            SectionView {
                name: section.name.clone(),
                open: state.section_is_open(position),
                active,
                resources,
            }
        })
        .collect();

    MenuView { sections }
}

fn resource_view(
    resource: &ApiResource,
    position: usize,
    index: &OperationIndex,
    selection: &Selection,
    state: &MenuState,
) -> ResourceView {
    let active = selection.resource_is_active(&resource.name);

    let operations = if active {
        index
            .operations_for(&resource.name)
            .iter()
            .map(operation_view)
            .collect()
    } else {
        Vec::new()
    };

    ResourceView {
        name: resource.name.clone(),
        open: state.resource_is_open(position),
        active,
        operations,
    }
}

fn operation_view(operation: &ApiOperation) -> OperationView {
    OperationView {
        operation_id: operation.operation_id.clone(),
        label: operation_label(&operation.summary),
        href: format!("#{}", operation.operation_id),
    }
}

/// Summaries use `.` as a word separator; display them with spaces instead.
pub fn operation_label(summary: &str) -> String {
    summary.replace('.', " ")
}
