//! Resolve-before-render: fetches everything a matched route declares in its
//! `requires` list so views are constructed from complete data.

use super::table::{DataKey, RouteMatch};
use crate::{
    app_lib::{ApiClient, AppError, ErrorSink, Transport},
    features::{
        admin::{accounts::AccountDetail, companies::CompanyDetail},
        core_data::{
            client,
            types::{Account, Circle, Company},
        },
    },
};

/// Data fetched for one navigation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedData {
    pub accounts: Option<Vec<Account>>,
    pub account: Option<Account>,
    pub circles: Option<Vec<Circle>>,
    pub companies: Option<Vec<Company>>,
    pub company: Option<Company>,
}

impl ResolvedData {
    pub fn account_list(self) -> Result<Vec<Account>, AppError> {
        require(self.accounts, "account list")
    }

    pub fn company_list(self) -> Result<Vec<Company>, AppError> {
        require(self.companies, "company list")
    }

    pub fn account_detail(self) -> Result<AccountDetail, AppError> {
        Ok(AccountDetail::new(
            require(self.account, "account")?,
            require(self.circles, "circle list")?,
        ))
    }

    pub fn company_detail(self) -> Result<CompanyDetail, AppError> {
        Ok(CompanyDetail::new(
            require(self.accounts, "account list")?,
            require(self.company, "company")?,
        ))
    }
}

fn require<T>(value: Option<T>, what: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Config(format!("The {what} was not loaded.")))
}

/// Parses a numeric path parameter.
fn id_param(route: &RouteMatch, name: &str) -> Result<i64, AppError> {
    route
        .param(name)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| AppError::Validation(format!("Invalid {name} in the address.")))
}

/// Fetches every dependency of `route`, in declaration order. The first
/// failure aborts resolution.
pub async fn resolve_data<T: Transport, S: ErrorSink>(
    api: &ApiClient<T, S>,
    route: &RouteMatch,
) -> Result<ResolvedData, AppError> {
    let mut data = ResolvedData::default();

    for key in route.spec.requires {
        match key {
            DataKey::AccountList => data.accounts = Some(client::list_accounts(api).await?),
            DataKey::Account => {
                let id = id_param(route, "account_id")?;
                data.account = Some(client::get_account(api, id).await?);
            }
            DataKey::CircleList => data.circles = Some(client::list_circles(api).await?),
            DataKey::CompanyList => data.companies = Some(client::list_companies(api).await?),
            DataKey::Company => {
                let id = id_param(route, "company_id")?;
                data.company = Some(client::get_company(api, id).await?);
            }
            DataKey::NewCompany => data.company = Some(Company::default()),
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::resolve_data;
    use crate::{
        app_lib::{
            AppError,
            test_support::{account, circle, company, json_response, test_api},
        },
        routes::table::match_path,
    };
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn account_detail_resolves_account_and_circles() {
        let (api, transport, _) = test_api();
        transport.respond(json_response(200, &json!(account(42, "kari", vec![]))));
        transport.respond(json_response(200, &json!([circle(1, "admin")])));
        let route = match_path("/admin/account/42").expect("matches");

        let data = block_on(resolve_data(&api, &route)).expect("resolved");

        assert_eq!(
            transport.calls(),
            vec!["GET /data/account/42".to_string(), "GET /data/circle".to_string()]
        );
        let detail = data.account_detail().expect("complete");
        assert_eq!(detail.account.username, "kari");
        assert_eq!(detail.circles.len(), 1);
    }

    #[test]
    fn new_company_needs_only_the_account_list() {
        let (api, transport, _) = test_api();
        transport.respond(json_response(200, &json!([account(3, "kari", vec![])])));
        let route = match_path("/admin/company/new").expect("matches");

        let data = block_on(resolve_data(&api, &route)).expect("resolved");

        assert_eq!(transport.calls(), vec!["GET /data/account".to_string()]);
        let detail = data.company_detail().expect("complete");
        assert!(detail.is_new());
        assert_eq!(detail.accounts.len(), 1);
    }

    #[test]
    fn existing_company_is_fetched_by_id() {
        let (api, transport, _) = test_api();
        transport.respond(json_response(200, &json!([])));
        transport.respond(json_response(200, &json!(company(Some(7), "Bitraf AS", &[]))));
        let route = match_path("/admin/company/7").expect("matches");

        let data = block_on(resolve_data(&api, &route)).expect("resolved");

        assert_eq!(transport.calls()[1], "GET /data/company/7");
        assert_eq!(data.company_detail().expect("complete").title(), "Bitraf AS");
    }

    #[test]
    fn invalid_ids_fail_without_requests() {
        let (api, transport, _) = test_api();
        let route = match_path("/admin/account/abc").expect("matches");

        let result = block_on(resolve_data(&api, &route));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn views_without_dependencies_resolve_immediately() {
        let (api, transport, _) = test_api();
        let route = match_path("/membership").expect("matches");

        let data = block_on(resolve_data(&api, &route)).expect("resolved");

        assert!(transport.requests().is_empty());
        assert!(data.account_list().is_err());
    }
}
