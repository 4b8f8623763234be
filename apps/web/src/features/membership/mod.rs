//! Membership feature: the fixed tier list, the change-membership dialog and
//! the Stripe checkout hand-off.

pub(crate) mod dialog;
pub(crate) mod types;

use crate::{
    app_lib::{ApiClient, AppError, ErrorSink, Transport},
    features::core_data::{client, types::Account},
};
use serde_json::Value;

/// Message shown when the member asks to cancel; cancellation happens offline.
pub const CANCEL_NOT_IMPLEMENTED: &str = "Not implemented.";

/// Forwards a checkout token for the logged-in account.
pub async fn checkout<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    account: Option<&Account>,
    token: Value,
) -> Result<(), AppError> {
    let account = account.ok_or_else(|| {
        AppError::Validation("You must be logged in to check out.".to_string())
    })?;
    client::set_stripe_token(api, account.id, token).await
}
