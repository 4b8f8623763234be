//! Door feature: asks the backend to unlock one of the configured doors.

use crate::app_lib::{ApiClient, AppError, ErrorSink, Transport};
use serde::Serialize;

#[derive(Serialize)]
struct OpenDoorRequest<'a> {
    door: &'a str,
}

/// Sends the open command for `door`.
pub async fn open_door<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    door: &str,
) -> Result<(), AppError> {
    let door = door.trim();
    if door.is_empty() {
        return Err(AppError::Validation("Door name is required.".to_string()));
    }
    log::info!("opening door {door}");
    api.post_json_discard("/service/door/open", &OpenDoorRequest { door })
        .await
}
