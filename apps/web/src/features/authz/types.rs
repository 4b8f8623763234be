//! Login and signup forms. They carry passwords, so they must never be logged.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Trims the username and checks that both fields are present.
    pub fn validated(self) -> Result<Self, AppError> {
        let username = self.username.trim().to_string();
        if username.is_empty() || self.password.trim().is_empty() {
            return Err(AppError::Validation(
                "Username and password are required.".to_string(),
            ));
        }
        Ok(Self {
            username,
            password: self.password,
        })
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl SignupForm {
    /// Trims text fields and checks the required ones.
    pub fn validated(self) -> Result<Self, AppError> {
        let form = Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            phone: self
                .phone
                .map(|phone| phone.trim().to_string())
                .filter(|phone| !phone.is_empty()),
            password: self.password,
        };

        if form.username.is_empty() || form.email.is_empty() || form.password.trim().is_empty() {
            return Err(AppError::Validation(
                "Username, email and password are required.".to_string(),
            ));
        }
        if !form.email.contains('@') {
            return Err(AppError::Validation(
                "Email address looks invalid.".to_string(),
            ));
        }
        Ok(form)
    }
}
