//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while API handling and session rules stay
//! in dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod authz;
pub(crate) mod core_data;
pub(crate) mod door;
pub(crate) mod membership;
pub(crate) mod session;
