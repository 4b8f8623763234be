//! Entity representations returned by the p2k16 data API and the request
//! bodies of its mutation commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named permission group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An account together with the circles it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub circles: Vec<Circle>,
}

impl Account {
    /// Full name when known, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// The account summary embedded in other entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
impl From<&Account> for AccountRef {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            name: account.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEmployee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub account: AccountRef,
}

/// A company; `id` is absent until the server has created it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub employees: Vec<CompanyEmployee>,
}

impl Company {
    /// Whether the account is already listed as an employee (matched by username).
    pub fn employs(&self, username: &str) -> bool {
        self.employees
            .iter()
            .any(|employee| employee.account.username == username)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipRequest {
    pub circle_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployeeRequest {
    pub account_id: i64,
}

/// Token produced by the Stripe checkout widget, forwarded verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StripeTokenRequest {
    pub token: Value,
}
