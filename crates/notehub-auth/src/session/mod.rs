//! Session resolution.

pub mod resolver;

pub use resolver::{Credentials, SessionResolver};
