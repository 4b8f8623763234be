//! Session feature: the explicitly passed session object (current account and
//! pending error messages) and, in the browser, the Leptos context that owns it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod context;
pub(crate) mod errors;
pub(crate) mod state;
