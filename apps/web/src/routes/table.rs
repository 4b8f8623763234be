//! Declarative route table: every path the app serves, the view it renders and
//! the data that must be resolved before that view is built. The first
//! matching entry wins; unknown paths fall back to [`FALLBACK_PATH`].

/// Where unknown paths are sent.
pub const FALLBACK_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    Unauthenticated,
    FrontPage,
    Membership,
    Admin,
    AdminAccountList,
    AdminAccountDetail,
    AdminCompanyList,
    AdminCompanyDetail,
}

/// Data a view needs before it can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataKey {
    AccountList,
    /// The account named by `:account_id`.
    Account,
    CircleList,
    CompanyList,
    /// The company named by `:company_id`.
    Company,
    /// An empty company for the create form.
    NewCompany,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub pattern: &'static str,
    pub view: ViewId,
    pub requires: &'static [DataKey],
}

pub static ROUTES: &[RouteSpec] = &[
    RouteSpec {
        pattern: "/public/unauthenticated",
        view: ViewId::Unauthenticated,
        requires: &[],
    },
    RouteSpec {
        pattern: "/",
        view: ViewId::FrontPage,
        requires: &[],
    },
    RouteSpec {
        pattern: "/membership",
        view: ViewId::Membership,
        requires: &[],
    },
    RouteSpec {
        pattern: "/admin",
        view: ViewId::Admin,
        requires: &[],
    },
    RouteSpec {
        pattern: "/admin/account",
        view: ViewId::AdminAccountList,
        requires: &[DataKey::AccountList],
    },
    RouteSpec {
        pattern: "/admin/account/:account_id",
        view: ViewId::AdminAccountDetail,
        requires: &[DataKey::Account, DataKey::CircleList],
    },
    RouteSpec {
        pattern: "/admin/company",
        view: ViewId::AdminCompanyList,
        requires: &[DataKey::CompanyList],
    },
    RouteSpec {
        pattern: "/admin/company/new",
        view: ViewId::AdminCompanyDetail,
        requires: &[DataKey::AccountList, DataKey::NewCompany],
    },
    RouteSpec {
        pattern: "/admin/company/:company_id",
        view: ViewId::AdminCompanyDetail,
        requires: &[DataKey::AccountList, DataKey::Company],
    },
];

/// A table entry matched against a concrete path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub spec: &'static RouteSpec,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn view(&self) -> ViewId {
        self.spec.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Finds the first route matching `path`. Query strings, fragments and a
/// trailing slash are ignored.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

    ROUTES.iter().find_map(|spec| match_spec(spec, &segments))
}

fn match_spec(spec: &'static RouteSpec, segments: &[&str]) -> Option<RouteMatch> {
    let pattern: Vec<&'static str> = spec
        .pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    if pattern.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.iter().copied().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, (*actual).to_string())),
            None if expected == *actual => {}
            None => return None,
        }
    }

    Some(RouteMatch { spec, params })
}

#[cfg(test)]
mod tests {
    use super::{DataKey, ROUTES, ViewId, match_path};

    #[test]
    fn static_paths_match_their_views() {
        let cases = [
            ("/", ViewId::FrontPage),
            ("/public/unauthenticated", ViewId::Unauthenticated),
            ("/membership", ViewId::Membership),
            ("/admin", ViewId::Admin),
            ("/admin/account/", ViewId::AdminAccountList),
            ("/admin/company?sort=name", ViewId::AdminCompanyList),
        ];
        for (path, view) in cases {
            assert_eq!(match_path(path).map(|route| route.view()), Some(view), "{path}");
        }
    }

    #[test]
    fn params_are_captured() {
        let route = match_path("/admin/account/42").expect("matches");
        assert_eq!(route.view(), ViewId::AdminAccountDetail);
        assert_eq!(route.param("account_id"), Some("42"));
        assert_eq!(route.param("company_id"), None);
        assert_eq!(route.spec.requires, &[DataKey::Account, DataKey::CircleList]);
    }

    #[test]
    fn new_company_wins_over_the_id_pattern() {
        let route = match_path("/admin/company/new").expect("matches");
        assert_eq!(route.spec.requires, &[DataKey::AccountList, DataKey::NewCompany]);
        assert!(route.params.is_empty());

        let route = match_path("/admin/company/7").expect("matches");
        assert_eq!(route.spec.requires, &[DataKey::AccountList, DataKey::Company]);
        assert_eq!(route.param("company_id"), Some("7"));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(match_path("/nope"), None);
        assert_eq!(match_path("/admin/account/1/extra"), None);
        assert_eq!(match_path("/public/other"), None);
    }

    #[test]
    fn patterns_are_unique() {
        for (index, route) in ROUTES.iter().enumerate() {
            assert!(
                ROUTES[index + 1..].iter().all(|other| other.pattern != route.pattern),
                "duplicate pattern {}",
                route.pattern
            );
        }
    }
}
