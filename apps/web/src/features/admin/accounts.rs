//! Account administration: toggling circle memberships.

use crate::{
    app_lib::{ApiClient, AppError, ErrorSink, Transport},
    features::core_data::{
        client,
        types::{Account, Circle},
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct AccountDetail {
    pub account: Account,
    pub circles: Vec<Circle>,
}

impl AccountDetail {
    pub fn new(account: Account, circles: Vec<Circle>) -> Self {
        Self { account, circles }
    }

    /// Whether the account is a member of `circle` (matched by id).
    pub fn in_circle(&self, circle: &Circle) -> bool {
        self.account
            .circles
            .iter()
            .any(|member_of| member_of.id == circle.id)
    }

    /// The change a click on `circle` asks for: create when the account is not
    /// a member yet. Derived from the server's account, not the checkbox.
    pub fn requested_membership(&self, circle: &Circle) -> bool {
        !self.in_circle(circle)
    }

    /// Adds (`create`) or removes the membership and returns the server's
    /// account. Apply it with [`AccountDetail::apply`].
    pub async fn membership<T: Transport, S: ErrorSink>(
        &self,
        api: &ApiClient<T, S>,
        circle: &Circle,
        create: bool,
    ) -> Result<Account, AppError> {
        if create {
            client::create_membership(api, self.account.id, circle.id).await
        } else {
            client::remove_membership(api, self.account.id, circle.id).await
        }
    }

    pub fn apply(&mut self, account: Account) {
        self.account = account;
    }
}
