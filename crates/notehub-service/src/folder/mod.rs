//! Folder use cases.

pub mod service;

pub use service::FolderService;
