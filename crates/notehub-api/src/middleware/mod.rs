//! Tower middleware wrapped around the router.

pub mod cors;
pub mod logging;
pub mod timeout;
