//! Front page: greets the member and offers the door buttons.

use crate::{
    app_lib::config::AppConfig,
    components::{Alert, AlertKind, Button},
    features::{
        door,
        session::context::{use_api, use_session},
    },
};
use leptos::prelude::*;

#[component]
pub fn FrontPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let doors = AppConfig::load().doors;
    let greeting = move || {
        session
            .current_account()
            .map(|account| format!("Welcome, {}", account.display_name()))
            .unwrap_or_default()
    };

    let open_action = Action::new_local(move |door_name: &String| {
        let api = api.clone();
        let door_name = door_name.clone();
        async move {
            door::open_door(&api, &door_name).await?;
            Ok::<_, crate::app_lib::AppError>(door_name)
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = open_action.value().get() {
            session.report(err);
        }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{greeting}</h1>
            <div class="flex flex-wrap gap-3">
                {doors
                    .into_iter()
                    .map(|door_name| {
                        let label = format!("Open {door_name}");
                        view! {
                            <Button
                                disabled=open_action.pending()
                                on_click=move |_| {
                                    open_action.dispatch(door_name.clone());
                                }
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match open_action.value().get() {
                Some(Ok(door_name)) => Some(view! {
                    <Alert kind=AlertKind::Success message=format!("{door_name} is open.") />
                }),
                _ => None,
            }}
        </div>
    }
}
