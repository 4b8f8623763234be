//! Client wrappers for the authorization endpoints. Successful login and
//! logout update the session passed in through the API client, so every view
//! observing the session reacts at once.

use crate::{
    app_lib::{ApiClient, AppError, Transport},
    features::{
        authz::types::{LoginForm, SignupForm},
        core_data::types::Account,
        session::state::SessionStore,
    },
};
use serde_json::json;

/// Landing path after a successful login or logout.
pub const HOME_PATH: &str = "/";

/// Logs in and stores the returned account on the session.
pub async fn log_in<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    form: &LoginForm,
) -> Result<Account, AppError> {
    let account: Account = api.post_json("/service/authz/log-in", form).await?;
    api.session().set_logged_in(Some(account.clone()));
    Ok(account)
}

/// Ends the server session and clears the local one.
pub async fn log_out<T: Transport, S: SessionStore>(api: &ApiClient<T, S>) -> Result<(), AppError> {
    api.post_json_discard("/service/authz/log-out", &json!({}))
        .await?;
    api.session().set_logged_in(None);
    Ok(())
}

/// Registers a new account. The account is not logged in afterwards.
pub async fn register_account<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    form: &SignupForm,
) -> Result<(), AppError> {
    api.post_json_discard("/service/register-account", form)
        .await
}

#[cfg(test)]
mod tests {
    use super::{log_in, log_out, register_account};
    use crate::{
        app_lib::{
            AppError,
            test_support::{account, circle, error_envelope, json_response, test_api},
        },
        features::authz::types::{LoginForm, SignupForm},
    };
    use futures::executor::block_on;
    use serde_json::json;

    fn form() -> LoginForm {
        LoginForm {
            username: "kari".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn login_then_logout_round_trips_the_session() {
        let (api, transport, session) = test_api();
        let kari = account(3, "kari", vec![circle(1, "admin")]);
        transport.respond(json_response(200, &json!(kari)));
        transport.respond(json_response(200, &json!({})));

        block_on(log_in(&api, &form())).expect("login succeeds");
        assert!(session.borrow().is_logged_in());
        assert_eq!(session.borrow().current_account(), Some(&kari));
        assert!(session.borrow().has_role("admin"));

        block_on(log_out(&api)).expect("logout succeeds");
        assert!(!session.borrow().is_logged_in());
        assert_eq!(session.borrow().current_account(), None);
        assert_eq!(
            transport.calls(),
            vec![
                "POST /service/authz/log-in".to_string(),
                "POST /service/authz/log-out".to_string()
            ]
        );
    }

    #[test]
    fn rejected_login_reports_and_keeps_the_session_empty() {
        let (api, transport, session) = test_api();
        transport.respond(error_envelope(400, json!("Bad username or password.")));

        let result = block_on(log_in(&api, &form()));

        assert_eq!(result, Err(AppError::Reported));
        let session = session.borrow();
        assert!(!session.is_logged_in());
        assert_eq!(
            session.errors().entries()[0].message,
            "Bad username or password."
        );
    }

    #[test]
    fn failed_logout_keeps_the_account() {
        let (api, transport, session) = test_api();
        session
            .borrow_mut()
            .set_logged_in(Some(account(3, "kari", vec![])));
        transport.fail(AppError::Timeout("slow".to_string()));

        assert!(block_on(log_out(&api)).is_err());
        assert!(session.borrow().is_logged_in());
    }

    #[test]
    fn registration_does_not_log_in() {
        let (api, transport, session) = test_api();
        transport.respond(json_response(200, &json!({"id": 9, "username": "ola"})));
        let signup = SignupForm {
            username: "ola".to_string(),
            email: "ola@bitraf.no".to_string(),
            password: "hunter22".to_string(),
            ..SignupForm::default()
        };

        block_on(register_account(&api, &signup)).expect("registered");

        assert!(!session.borrow().is_logged_in());
        assert_eq!(
            transport.calls(),
            vec!["POST /service/register-account".to_string()]
        );
    }
}
