//! Client wrappers for the p2k16 data endpoints. Every mutation returns the
//! server's updated representation so views can replace their state with it.
//! Authorization is enforced by the backend.

use crate::{
    app_lib::{ApiClient, AppError, ErrorSink, Transport},
    features::core_data::types::{
        Account, Circle, Company, EmployeeRequest, MembershipRequest, StripeTokenRequest,
    },
};
use serde_json::Value;

pub async fn list_accounts<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
) -> Result<Vec<Account>, AppError> {
    api.get_json("/data/account").await
}

pub async fn get_account<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    account_id: i64,
) -> Result<Account, AppError> {
    api.get_json(&format!("/data/account/{account_id}")).await
}

pub async fn list_circles<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
) -> Result<Vec<Circle>, AppError> {
    api.get_json("/data/circle").await
}

/// Adds the account to a circle and returns the updated account.
pub async fn create_membership<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    account_id: i64,
    circle_id: i64,
) -> Result<Account, AppError> {
    let path = format!("/data/account/{account_id}/cmd/create-membership");
    api.post_json(&path, &MembershipRequest { circle_id }).await
}

/// Removes the account from a circle and returns the updated account.
pub async fn remove_membership<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    account_id: i64,
    circle_id: i64,
) -> Result<Account, AppError> {
    let path = format!("/data/account/{account_id}/cmd/remove-membership");
    api.post_json(&path, &MembershipRequest { circle_id }).await
}

/// Hands a Stripe checkout token to the backend, which owns the payment flow.
pub async fn set_stripe_token<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    account_id: i64,
    token: Value,
) -> Result<(), AppError> {
    let path = format!("/data/account/{account_id}/cmd/set-stripe-token");
    api.post_json_discard(&path, &StripeTokenRequest { token })
        .await
}

pub async fn list_companies<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
) -> Result<Vec<Company>, AppError> {
    api.get_json("/data/company").await
}

pub async fn get_company<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    company_id: i64,
) -> Result<Company, AppError> {
    api.get_json(&format!("/data/company/{company_id}")).await
}

/// Creates a company; the response carries the assigned id.
pub async fn add_company<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    company: &Company,
) -> Result<Company, AppError> {
    api.post_json("/data/company", company).await
}

pub async fn update_company<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    company: &Company,
) -> Result<Company, AppError> {
    api.put_json("/data/company", company).await
}

pub async fn add_employee<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    company_id: i64,
    account_id: i64,
) -> Result<Company, AppError> {
    let path = format!("/data/company/{company_id}/cmd/add-employee");
    api.post_json(&path, &EmployeeRequest { account_id }).await
}

pub async fn remove_employee<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    company_id: i64,
    account_id: i64,
) -> Result<Company, AppError> {
    let path = format!("/data/company/{company_id}/cmd/remove-employee");
    api.post_json(&path, &EmployeeRequest { account_id }).await
}

#[cfg(test)]
mod tests {
    use super::{create_membership, set_stripe_token, update_company};
    use crate::app_lib::test_support::{account, circle, company, json_response, test_api};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn membership_commands_post_the_circle_id() {
        let (api, transport, _) = test_api();
        let updated = account(3, "kari", vec![circle(2, "door-access")]);
        transport.respond(json_response(200, &json!(updated)));

        let result = block_on(create_membership(&api, 3, 2)).expect("membership created");

        assert_eq!(result, updated);
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/data/account/3/cmd/create-membership");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"circle_id":2}"#));
    }

    #[test]
    fn company_updates_use_put() {
        let (api, transport, _) = test_api();
        let existing = company(Some(4), "Bitraf AS", &[]);
        transport.respond(json_response(200, &json!(existing)));

        block_on(update_company(&api, &existing)).expect("company updated");

        assert_eq!(transport.calls(), vec!["PUT /data/company".to_string()]);
    }

    #[test]
    fn stripe_tokens_are_forwarded_verbatim() {
        let (api, transport, _) = test_api();
        transport.respond(json_response(200, &json!({})));

        block_on(set_stripe_token(&api, 3, json!({"id": "tok_123", "email": "kari@bitraf.no"})))
            .expect("token accepted");

        let sent = transport.requests();
        assert_eq!(sent[0].path, "/data/account/3/cmd/set-stripe-token");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap_or_default()).expect("json body");
        assert_eq!(body["token"]["id"], "tok_123");
    }
}
