//! Account detail: circle memberships toggled one request at a time.

use super::HEADING;
use crate::features::{
    admin::accounts::AccountDetail,
    core_data::types::Circle,
    session::context::{use_api, use_session},
};
use leptos::prelude::*;

#[component]
pub fn AdminAccountDetailPage(detail: AccountDetail) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let circles = detail.circles.clone();
    let detail = RwSignal::new(detail);

    let membership_action = Action::new_local(move |(circle, create): &(Circle, bool)| {
        let api = api.clone();
        let circle = circle.clone();
        let create = *create;
        let current = detail.get_untracked();
        async move { current.membership(&api, &circle, create).await }
    });

    Effect::new(move |_| {
        match membership_action.value().get() {
            Some(Ok(account)) => detail.update(|detail| detail.apply(account)),
            Some(Err(err)) => session.report(err),
            None => {}
        }
    });

    let heading = move || {
        detail.with(|detail| {
            format!(
                "{} ({})",
                detail.account.display_name(),
                detail.account.username
            )
        })
    };

    view! {
        <div class="space-y-4">
            <h1 class=HEADING>{heading}</h1>
            <p class="text-sm text-gray-600 dark:text-gray-300">
                {move || detail.with(|detail| detail.account.email.clone().unwrap_or_default())}
            </p>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Circles"</h2>
            <ul class="space-y-2">
                {circles
                    .into_iter()
                    .map(|circle| {
                        let label = circle.name.clone();
                        let checked_circle = circle.clone();
                        view! {
                            <li>
                                <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            detail.with(|detail| detail.in_circle(&checked_circle))
                                        }
                                        disabled=move || membership_action.pending().get()
                                        on:click=move |event| {
                                            // The box only moves once the server answers.
                                            event.prevent_default();
                                            let create = detail.with_untracked(|detail| {
                                                detail.requested_membership(&circle)
                                            });
                                            membership_action.dispatch((circle.clone(), create));
                                        }
                                    />
                                    {label}
                                </label>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
