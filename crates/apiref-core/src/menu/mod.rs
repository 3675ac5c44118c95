pub mod document;
pub mod index;
pub mod selection;
pub mod state;
pub mod view;

pub use document::{ApiDocument, ApiOperation, ApiResource, ApiSection};
pub use index::OperationIndex;
pub use selection::Selection;
pub use state::{MenuEvent, MenuState};
pub use view::{MenuView, OperationView, ResourceView, SectionView, view};
