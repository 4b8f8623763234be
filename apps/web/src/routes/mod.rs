//! Routing: the declarative route table, the navigation guard, data resolution
//! and, in the browser, the pages those routes render.

pub(crate) mod guard;
pub(crate) mod resolve;
pub(crate) mod table;

#[cfg(target_arch = "wasm32")]
mod admin;
#[cfg(target_arch = "wasm32")]
mod front_page;
#[cfg(target_arch = "wasm32")]
mod membership;
#[cfg(target_arch = "wasm32")]
mod outlet;
#[cfg(target_arch = "wasm32")]
mod unauthenticated;

#[cfg(target_arch = "wasm32")]
pub(crate) use outlet::AppRoutes;
