//! Layout components shared across routes.

mod app_shell;
mod error_messages;

pub(crate) use app_shell::AppShell;
pub(crate) use error_messages::ErrorMessages;
