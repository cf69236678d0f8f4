//! Document domain entities.

pub mod model;
pub mod patch;

pub use model::{Document, DocumentSummary, NewDocument};
pub use patch::DocumentPatch;
