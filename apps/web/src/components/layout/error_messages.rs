//! Dismissible list of the session's pending error messages.

use crate::{
    app_lib::interceptor::ErrorLevel,
    components::ui::{Alert, AlertKind},
    features::session::context::use_session,
};
use leptos::prelude::*;

#[component]
pub fn ErrorMessages() -> impl IntoView {
    let session = use_session();
    let has_errors = move || !session.session.with(|state| state.errors().is_empty());

    view! {
        <Show when=has_errors>
            <div class="space-y-2 mb-4">
                {move || {
                    session
                        .session
                        .with(|state| state.errors().entries().to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let kind = match entry.level {
                                ErrorLevel::Warning => AlertKind::Warning,
                                ErrorLevel::Danger => AlertKind::Error,
                            };
                            view! {
                                <div class="flex items-start gap-2">
                                    <div class="flex-1">
                                        <Alert kind=kind message=entry.message />
                                    </div>
                                    <button
                                        type="button"
                                        class="px-2 py-1 text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                                        aria-label="Dismiss"
                                        on:click=move |_| session.dismiss_error(index)
                                    >
                                        <span class="material-symbols-outlined text-base">"close"</span>
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
