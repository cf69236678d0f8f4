//! Page composition for the catch-all application route.
//!
//! Every navigation rebuilds the full view state from the session and the
//! path, with nothing carried over from the previous page.

pub mod composer;
pub mod path;
pub mod view;

pub use composer::PageComposer;
pub use path::PagePath;
pub use view::{PageOutcome, ViewModel};
