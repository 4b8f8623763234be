//! Public landing page for visitors without a session: login and account
//! registration side by side. Envelope errors from the API show up in the
//! shell's error list; local validation errors are shown inline.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        authz::{
            client::{self, HOME_PATH},
            types::{LoginForm, SignupForm},
        },
        session::context::use_api,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn UnauthenticatedPage() -> impl IntoView {
    view! {
        <div class="grid gap-10 md:grid-cols-2">
            <LoginPanel />
            <SignupPanel />
        </div>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |form: &LoginForm| {
        let api = api.clone();
        let form = form.clone();
        async move { client::log_in(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => navigate(HOME_PATH, Default::default()),
                Err(err) => set_error.set(err.unreported()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        match form.validated() {
            Ok(form) => {
                login_action.dispatch(form);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">"Log in"</h1>
            <div>
                <label class=LABEL for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    class=INPUT
                    autocomplete="username"
                    required
                    on:input=move |event| set_username.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=LABEL for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    class=INPUT
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=login_action.pending()>
                "Log in"
            </Button>
            {move || login_action.pending().get().then_some(view! { <Spinner small=true /> })}
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}

#[component]
fn SignupPanel() -> impl IntoView {
    let api = use_api();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (registered, set_registered) = signal(false);

    let signup_action = Action::new_local(move |form: &SignupForm| {
        let api = api.clone();
        let form = form.clone();
        async move { client::register_account(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => set_registered.set(true),
                Err(err) => set_error.set(err.unreported()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_registered.set(false);

        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            name: name.get_untracked(),
            phone: Some(phone.get_untracked()),
            password: password.get_untracked(),
        };
        match form.validated() {
            Ok(form) => {
                signup_action.dispatch(form);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">"Sign up"</h1>
            <div>
                <label class=LABEL for="signup-username">"Username"</label>
                <input
                    id="signup-username"
                    type="text"
                    class=INPUT
                    autocomplete="username"
                    required
                    on:input=move |event| set_username.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=LABEL for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    class=INPUT
                    autocomplete="email"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=LABEL for="signup-name">"Full name"</label>
                <input
                    id="signup-name"
                    type="text"
                    class=INPUT
                    autocomplete="name"
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=LABEL for="signup-phone">"Phone"</label>
                <input
                    id="signup-phone"
                    type="tel"
                    class=INPUT
                    autocomplete="tel"
                    on:input=move |event| set_phone.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=LABEL for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=signup_action.pending()>
                "Create account"
            </Button>
            {move || signup_action.pending().get().then_some(view! { <Spinner small=true /> })}
            {move || {
                registered
                    .get()
                    .then_some(view! {
                        <Alert
                            kind=AlertKind::Success
                            message="Account created. You can log in now.".to_string()
                        />
                    })
            }}
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}
