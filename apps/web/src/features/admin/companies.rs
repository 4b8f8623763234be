//! Company administration: create/update and employee management.

use crate::{
    app_lib::{ApiClient, AppError, ErrorSink, Transport},
    features::core_data::{
        client,
        types::{Account, Company},
    },
};

pub const NEW_COMPANY_TITLE: &str = "New company";

/// Detail path of a company.
pub fn company_detail_path(id: i64) -> String {
    format!("/admin/company/{id}")
}

/// What the view does after a successful save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new company was created; open its detail page.
    Navigate(String),
    /// An existing company was updated; show the returned state.
    Refreshed(Company),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyDetail {
    pub accounts: Vec<Account>,
    company: Company,
    /// Id the page was opened with; employee commands target it.
    loaded_id: Option<i64>,
    title: String,
    dirty: bool,
}

impl CompanyDetail {
    pub fn new(accounts: Vec<Account>, company: Company) -> Self {
        let mut detail = Self {
            accounts,
            loaded_id: company.id,
            company: Company::default(),
            title: String::new(),
            dirty: false,
        };
        detail.set_company(company);
        detail
    }

    fn set_company(&mut self, company: Company) {
        self.title = match company.id {
            Some(_) => company.name.clone(),
            None => NEW_COMPANY_TITLE.to_string(),
        };
        self.company = company;
        self.dirty = false;
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_new(&self) -> bool {
        self.company.id.is_none()
    }

    /// True when the form has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_name(&mut self, name: String) {
        if self.company.name != name {
            self.company.name = name;
            self.dirty = true;
        }
    }

    /// Creates the company when it has no id, otherwise updates it.
    pub async fn save<T: Transport, S: ErrorSink>(
        &self,
        api: &ApiClient<T, S>,
    ) -> Result<SaveOutcome, AppError> {
        match self.company.id {
            Some(_) => {
                let updated = client::update_company(api, &self.company).await?;
                Ok(SaveOutcome::Refreshed(updated))
            }
            None => {
                let created = client::add_company(api, &self.company).await?;
                let id = created.id.ok_or_else(|| {
                    AppError::Parse("Created company is missing its id.".to_string())
                })?;
                Ok(SaveOutcome::Navigate(company_detail_path(id)))
            }
        }
    }

    /// Applies a save outcome and returns the path to navigate to, if any.
    pub fn apply(&mut self, outcome: SaveOutcome) -> Option<String> {
        match outcome {
            SaveOutcome::Navigate(path) => Some(path),
            SaveOutcome::Refreshed(company) => {
                self.set_company(company);
                None
            }
        }
    }

    /// Replaces the company with the server's representation after an
    /// employee change.
    pub fn refresh(&mut self, company: Company) {
        self.set_company(company);
    }

    /// True when `account` is not yet an employee.
    pub fn existing_employee_filter(&self, account: &Account) -> bool {
        !self.company.employs(&account.username)
    }

    /// Accounts that can still be added, narrowed by a case-insensitive
    /// username or name match.
    pub fn candidates(&self, query: &str) -> Vec<&Account> {
        let query = query.trim().to_lowercase();
        self.accounts
            .iter()
            .filter(|account| self.existing_employee_filter(account))
            .filter(|account| {
                query.is_empty()
                    || account.username.to_lowercase().contains(&query)
                    || account
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
            })
            .collect()
    }

    pub async fn add_employee<T: Transport, S: ErrorSink>(
        &self,
        api: &ApiClient<T, S>,
        account_id: i64,
    ) -> Result<Company, AppError> {
        client::add_employee(api, self.require_id()?, account_id).await
    }

    pub async fn remove_employee<T: Transport, S: ErrorSink>(
        &self,
        api: &ApiClient<T, S>,
        account_id: i64,
    ) -> Result<Company, AppError> {
        client::remove_employee(api, self.require_id()?, account_id).await
    }

    fn require_id(&self) -> Result<i64, AppError> {
        self.loaded_id.ok_or_else(|| {
            AppError::Validation("Save the company before managing employees.".to_string())
        })
    }
}
