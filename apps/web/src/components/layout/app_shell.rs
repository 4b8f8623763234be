//! Shared layout wrapper with the header, pending error messages and the
//! content container. The header shows the logged-in account and its sign-out
//! action; the admin link only appears for members of the admin circle.
//! Navigation remains client-side; the API enforces access control.

use crate::{
    app_lib::build_info::git_commit_hash,
    features::{
        admin::ADMIN_CIRCLE,
        authz::client::{self, HOME_PATH},
        session::context::{use_api, use_session},
    },
};
use super::ErrorMessages;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let session = use_session();
    let is_logged_in = session.is_logged_in;
    let is_admin = Signal::derive(move || session.has_role(ADMIN_CIRCLE));
    let account_label = Signal::derive(move || {
        session
            .current_account()
            .map(|account| account.display_name().to_string())
            .unwrap_or_default()
    });

    let api = use_api();
    let navigate = use_navigate();
    let logout_action = Action::new_local(move |_: &()| {
        let api = api.clone();
        async move { client::log_out(&api).await }
    });

    Effect::new(move |_| {
        if let Some(result) = logout_action.value().get() {
            match result {
                Ok(()) => navigate(HOME_PATH, Default::default()),
                Err(err) => session.report(err),
            }
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="font-semibold whitespace-nowrap dark:text-white">"p2k16"</span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <Show when=move || is_logged_in.get()>
                            <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:items-center md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                                <li>
                                    <A href="/" {..} class=NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                        "Home"
                                    </A>
                                </li>
                                <li>
                                    <A href="/membership" {..} class=NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                        "Membership"
                                    </A>
                                </li>
                                <Show when=move || is_admin.get()>
                                    <li>
                                        <A href="/admin" {..} class=NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                            "Admin"
                                        </A>
                                    </li>
                                </Show>
                                <li class="text-sm text-gray-500 dark:text-gray-400">
                                    {move || account_label.get()}
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        disabled=move || logout_action.pending().get()
                                        on:click=move |_| {
                                            logout_action.dispatch(());
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </ul>
                        </Show>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    <ErrorMessages />
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                "p2k16 " {git_commit_hash()}
            </footer>
        </div>
    }
}
