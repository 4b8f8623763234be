//! Admin feature: controllers behind the account and company administration
//! views. Each action sends one request and the caller replaces its state with
//! the returned representation.

pub(crate) mod accounts;
pub(crate) mod companies;

/// Circle whose members see the administration pages.
pub const ADMIN_CIRCLE: &str = "admin";
