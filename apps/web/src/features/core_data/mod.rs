//! Data-access feature: typed wrappers for the account, circle and company
//! endpoints that route resolvers and admin controllers call.

pub(crate) mod client;
pub(crate) mod types;
