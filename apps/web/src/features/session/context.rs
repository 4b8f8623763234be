//! Session context for the browser app. The provider seeds the session from
//! the account the server embeds in the page (`window.p2k16.account`) and
//! exposes the session and the API client bound to it through Leptos context.

use crate::{
    app_lib::{
        ApiClient, AppError, ErrorSink,
        api::GlooTransport,
        config::AppConfig,
        interceptor::{ErrorLevel, ErrorMessages},
    },
    features::{
        core_data::types::Account,
        session::state::{Session, SessionStore},
    },
};
use js_sys::{JSON, Reflect};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// API client used by every view.
pub type WebApi = ApiClient<GlooTransport, SessionContext>;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub is_logged_in: Signal<bool>,
}

impl SessionContext {
    fn new(session: RwSignal<Session>) -> Self {
        let is_logged_in = Signal::derive(move || session.with(Session::is_logged_in));
        Self {
            session,
            is_logged_in,
        }
    }

    /// Current account, tracked.
    pub fn current_account(&self) -> Option<Account> {
        self.session
            .with(|session| session.current_account().cloned())
    }

    /// Role check, tracked.
    pub fn has_role(&self, circle_name: &str) -> bool {
        self.session.with(|session| session.has_role(circle_name))
    }

    pub fn add_error(&self, message: &str) {
        self.session.update(|session| session.add_error(message));
    }

    /// Shows a failure in the error list unless the interceptor already did.
    pub fn report(&self, err: AppError) {
        if let Some(err) = err.unreported() {
            self.add_error(&err.to_string());
        }
    }

    pub fn dismiss_error(&self, index: usize) {
        self.session.update(|session| session.dismiss_error(index));
    }
}

impl ErrorSink for SessionContext {
    fn add_errors(&self, level: ErrorLevel, messages: &ErrorMessages) {
        self.session
            .update(|session| session.add_errors(level, messages));
    }
}

impl SessionStore for SessionContext {
    fn set_logged_in(&self, account: Option<Account>) {
        self.session
            .update(|session| session.set_logged_in(account));
    }
}

/// Provides the session and API contexts.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let mut initial = Session::default();
    initial.set_logged_in(bootstrap_account());
    let session = SessionContext::new(RwSignal::new(initial));
    provide_context(session);
    provide_context(WebApi::new(GlooTransport::new(&AppConfig::load()), session));

    view! { {children()} }
}

/// Returns the session context or a fallback empty one.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(RwSignal::new(Session::default())))
}

/// Returns the API client bound to the current session.
pub fn use_api() -> WebApi {
    use_context::<WebApi>()
        .unwrap_or_else(|| WebApi::new(GlooTransport::new(&AppConfig::load()), use_session()))
}

/// Takes the account the server rendered into the page, if any. The global is
/// removed afterwards so later reads cannot resurrect a stale session.
fn bootstrap_account() -> Option<Account> {
    let window = web_sys::window()?;
    let key = JsValue::from_str("p2k16");
    let embedded = Reflect::get(&window, &key).ok()?;
    if embedded.is_null() || embedded.is_undefined() {
        return None;
    }
    let _ = Reflect::delete_property(&window, &key);

    let account = Reflect::get(&embedded, &JsValue::from_str("account")).ok()?;
    if account.is_null() || account.is_undefined() {
        return None;
    }
    let encoded = JSON::stringify(&account).ok()?.as_string()?;
    match serde_json::from_str(&encoded) {
        Ok(account) => Some(account),
        Err(err) => {
            log::warn!("ignoring malformed embedded account: {err}");
            None
        }
    }
}
