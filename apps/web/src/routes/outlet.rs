//! Single router entry that serves every path from the route table. Each
//! navigation is checked by the guard, its data is resolved, and only then is
//! the page built from the resolved data.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Spinner},
    features::session::context::{use_api, use_session},
    routes::{
        admin::{
            AdminAccountDetailPage, AdminAccountListPage, AdminCompanyDetailPage,
            AdminCompanyListPage, AdminPage,
        },
        front_page::FrontPage,
        guard::{Navigation, check, next_navigation},
        membership::MembershipPage,
        resolve::{ResolvedData, resolve_data},
        table::{RouteMatch, ViewId, match_path},
        unauthenticated::UnauthenticatedPage,
    },
};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    components::{Route, Routes},
    hooks::{use_location, use_navigate},
    path,
};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <RouteOutlet /> }>
            <Route path=path!("/*any") view=RouteOutlet />
        </Routes>
    }
}

#[component]
fn RouteOutlet() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let current = location.pathname.get();
        if let Some(target) = next_navigation(&current, session.is_logged_in.get()) {
            if target != current {
                log::debug!("redirecting {current} to {target}");
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    view! {
        {move || {
            let current = location.pathname.get();
            let allowed = check(&current, session.is_logged_in.get()) == Navigation::Proceed;
            match match_path(&current) {
                Some(route) if allowed => view! { <ResolvedView route=route /> }.into_any(),
                _ => view! { <Spinner /> }.into_any(),
            }
        }}
    }
}

/// Resolves the route's data dependencies, then renders its view.
#[component]
fn ResolvedView(route: RouteMatch) -> impl IntoView {
    let api = use_api();
    let view_id = route.view();
    let data = LocalResource::new(move || {
        let api = api.clone();
        let route = route.clone();
        async move { resolve_data(&api, &route).await }
    });

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match data.get() {
                Some(Ok(resolved)) => render_view(view_id, resolved),
                Some(Err(err)) => match err.unreported() {
                    Some(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                        .into_any(),
                    None => ().into_any(),
                },
                None => view! { <Spinner /> }.into_any(),
            }}
        </Suspense>
    }
}

fn render_view(view_id: ViewId, data: ResolvedData) -> AnyView {
    let rendered: Result<AnyView, AppError> = match view_id {
        ViewId::Unauthenticated => Ok(view! { <UnauthenticatedPage /> }.into_any()),
        ViewId::FrontPage => Ok(view! { <FrontPage /> }.into_any()),
        ViewId::Membership => Ok(view! { <MembershipPage /> }.into_any()),
        ViewId::Admin => Ok(view! { <AdminPage /> }.into_any()),
        ViewId::AdminAccountList => data
            .account_list()
            .map(|accounts| view! { <AdminAccountListPage accounts=accounts /> }.into_any()),
        ViewId::AdminAccountDetail => data
            .account_detail()
            .map(|detail| view! { <AdminAccountDetailPage detail=detail /> }.into_any()),
        ViewId::AdminCompanyList => data
            .company_list()
            .map(|companies| view! { <AdminCompanyListPage companies=companies /> }.into_any()),
        ViewId::AdminCompanyDetail => data
            .company_detail()
            .map(|detail| view! { <AdminCompanyDetailPage detail=detail /> }.into_any()),
    };

    rendered.unwrap_or_else(|err| {
        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
    })
}
