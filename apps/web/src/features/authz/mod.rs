//! Authorization feature: login, logout and account registration against the
//! p2k16 service endpoints. The backend owns credentials and sessions; the
//! client only keeps the returned account in memory.

pub(crate) mod client;
pub(crate) mod types;
