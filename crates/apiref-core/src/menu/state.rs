use super::document::{ApiDocument, ApiOperation};
use super::selection::Selection;

/// A selection notification emitted by a click handler for the enclosing
/// page. Fire-and-forget: the menu consumes no reply.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// A section header was clicked; carries that section's index.
    SectionChange(usize),
    /// A resource header was clicked; carries that resource's name.
    ResourceChange(String),
    /// An operation entry was clicked.
    OperationChange(ApiOperation),
}

/// Per-node disclosure state: one `open` flag per section and per resource,
/// in document order.
///
/// `open` decides only the chevron glyph. Whether a node's children are
/// visible is owned by [`Selection`]; a click flips `open` and emits the
/// event that lets the owner move the selection, which is the only way
/// visibility actually changes.
#[derive(Debug, Clone)]
pub struct MenuState {
    section_open: Vec<bool>,
    resource_open: Vec<bool>,
}

impl MenuState {
    /// Build disclosure state for a document, seeding every node's `open`
    /// flag from whether that node is currently active.
    pub fn new(document: &ApiDocument, selection: &Selection) -> Self {
        let section_open = document
            .sections
            .iter()
            .map(|s| document.section_index(&s.x_id) == Some(selection.active_index))
            .collect();

        let resource_open = document
            .resources
            .iter()
            .map(|r| selection.resource_is_active(&r.name))
            .collect();

        Self {
            section_open,
            resource_open,
        }
    }

    pub fn section_is_open(&self, position: usize) -> bool {
        self.section_open.get(position).copied().unwrap_or(false)
    }

    pub fn resource_is_open(&self, position: usize) -> bool {
        self.resource_open.get(position).copied().unwrap_or(false)
    }

    /// Click the header of the section at `position` (document order).
    ///
    /// Flips the disclosure flag and always reports the section as the newly
    /// chosen one, also when the click collapses it. The reported index is
    /// that of the first section with a matching `x-id`.
    pub fn click_section(&mut self, document: &ApiDocument, position: usize) -> MenuEvent {
        if let Some(open) = self.section_open.get_mut(position) {
            *open = !*open;
        }

        let index = document
            .sections
            .get(position)
            .and_then(|s| document.section_index(&s.x_id))
            .unwrap_or(position);
        MenuEvent::SectionChange(index)
    }

    /// Click the header of the resource at `position` (document order).
    /// Flips the disclosure flag and always reports the resource's name.
    pub fn click_resource(&mut self, document: &ApiDocument, position: usize) -> MenuEvent {
        if let Some(open) = self.resource_open.get_mut(position) {
            *open = !*open;
        }

        let name = document
            .resources
            .get(position)
            .map(|r| r.name.clone())
            .unwrap_or_default();
        MenuEvent::ResourceChange(name)
    }

    /// Click an operation entry. Operations carry no disclosure state; the
    /// event simply reports the clicked operation.
    pub fn click_operation(&self, operation: &ApiOperation) -> MenuEvent {
        MenuEvent::OperationChange(operation.clone())
    }
}
