//! Request extractors.

pub mod call;
pub mod credentials;

pub use call::{ApiCall, CallBody, CallTarget, DocumentTarget, FolderTarget, NoBody, NoTarget, Validated};
pub use credentials::{MaybeIdentity, credentials_from_headers};
