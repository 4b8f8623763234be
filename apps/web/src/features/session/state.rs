//! Session state: the logged-in account and pending error messages. The
//! account is the only source of truth for "logged in"; guards and role checks
//! derive from it.

use crate::{
    app_lib::{
        ErrorSink,
        interceptor::{ErrorLevel, ErrorMessages},
    },
    features::{core_data::types::Account, session::errors::ErrorList},
};
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    account: Option<Account>,
    errors: ErrorList,
}

impl Session {
    /// Replaces the current account; `None` logs out.
    pub fn set_logged_in(&mut self, account: Option<Account>) {
        match &account {
            Some(account) => log::info!("logged in as {}", account.username),
            None if self.account.is_some() => log::info!("logged out"),
            None => {}
        }
        self.account = account;
    }

    pub fn log_out(&mut self) {
        self.set_logged_in(None);
    }

    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// True when the current account belongs to a circle named `circle_name`.
    pub fn has_role(&self, circle_name: &str) -> bool {
        self.account.as_ref().is_some_and(|account| {
            account
                .circles
                .iter()
                .any(|circle| circle.name == circle_name)
        })
    }

    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    pub fn add_errors(&mut self, level: ErrorLevel, messages: &ErrorMessages) {
        self.errors.extend(level, messages);
    }

    /// Appends a locally raised message.
    pub fn add_error(&mut self, message: &str) {
        self.errors.push(ErrorLevel::Danger, message);
    }

    pub fn dismiss_error(&mut self, index: usize) {
        self.errors.dismiss(index);
    }
}

/// Handle through which API calls mutate the session.
pub trait SessionStore: ErrorSink {
    fn set_logged_in(&self, account: Option<Account>);
}

impl ErrorSink for RefCell<Session> {
    fn add_errors(&self, level: ErrorLevel, messages: &ErrorMessages) {
        self.borrow_mut().add_errors(level, messages);
    }
}

impl SessionStore for RefCell<Session> {
    fn set_logged_in(&self, account: Option<Account>) {
        self.borrow_mut().set_logged_in(account);
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for Rc<S> {
    fn add_errors(&self, level: ErrorLevel, messages: &ErrorMessages) {
        (**self).add_errors(level, messages);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn set_logged_in(&self, account: Option<Account>) {
        (**self).set_logged_in(account);
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::app_lib::test_support::{account, circle};

    #[test]
    fn starts_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.current_account(), None);
        assert!(!session.has_role("admin"));
    }

    #[test]
    fn login_and_logout_toggle_the_account() {
        let mut session = Session::default();
        let kari = account(3, "kari", vec![]);

        session.set_logged_in(Some(kari.clone()));
        assert!(session.is_logged_in());
        assert_eq!(session.current_account(), Some(&kari));

        session.log_out();
        assert!(!session.is_logged_in());
        assert_eq!(session.current_account(), None);
    }

    #[test]
    fn has_role_matches_circle_names_exactly() {
        let mut session = Session::default();
        session.set_logged_in(Some(account(
            1,
            "trygvis",
            vec![circle(1, "admin"), circle(2, "door-access")],
        )));

        assert!(session.has_role("admin"));
        assert!(session.has_role("door-access"));
        assert!(!session.has_role("Admin"));
        assert!(!session.has_role("admins"));
    }

    #[test]
    fn errors_survive_logout() {
        let mut session = Session::default();
        session.add_error("  Door is offline ");
        session.set_logged_in(Some(account(3, "kari", vec![])));
        session.log_out();

        assert_eq!(session.errors().entries()[0].message, "Door is offline");
        session.dismiss_error(0);
        assert!(session.errors().is_empty());
    }
}
