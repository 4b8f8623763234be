//! Membership page: lists the tiers, runs the change-membership dialog and
//! accepts checkout tokens from the payment widget.
//!
//! The payment widget is loaded by the hosting page and hands its token to
//! `window.p2k16StripeToken(token)`, which this page installs while mounted.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        membership::{
            self, CANCEL_NOT_IMPLEMENTED,
            dialog::MembershipDialog,
            types::{MembershipTier, tiers},
        },
        session::context::{use_api, use_session},
    },
};
use js_sys::{JSON, Reflect};
use leptos::{ev::MouseEvent, prelude::*};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

const TOKEN_CALLBACK: &str = "p2k16StripeToken";

#[component]
pub fn MembershipPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let dialog = RwSignal::new(MembershipDialog::new(tiers()));
    let (chosen, set_chosen) = signal::<Option<MembershipTier>>(None);

    let checkout_action = Action::new_local(move |token: &Value| {
        let api = api.clone();
        let token = token.clone();
        let account = session.session.with_untracked(|s| s.current_account().cloned());
        async move { membership::checkout(&api, account.as_ref(), token).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = checkout_action.value().get() {
            session.report(err);
        }
    });

    install_token_callback(checkout_action);

    let on_cancel_membership = move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(CANCEL_NOT_IMPLEMENTED);
        }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Membership"</h1>
            <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                {tiers()
                    .iter()
                    .map(|tier| {
                        view! {
                            <li class="flex justify-between py-3 text-sm text-gray-900 dark:text-white">
                                <span>{tier.name}</span>
                                <span>{format!("{} kr", tier.price)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-3">
                <Button on_click=move |_| dialog.update(MembershipDialog::open)>
                    "Change membership"
                </Button>
                <Button on_click=on_cancel_membership>"Cancel membership"</Button>
            </div>
            {move || {
                chosen
                    .get()
                    .map(|tier| {
                        view! {
                            <Alert
                                kind=AlertKind::Info
                                message=format!(
                                    "Selected {}. Complete the payment to activate it.",
                                    tier.name,
                                )
                            />
                        }
                    })
            }}
            {move || checkout_action.pending().get().then_some(view! { <Spinner /> })}
            {move || match checkout_action.value().get() {
                Some(Ok(())) => Some(view! {
                    <Alert kind=AlertKind::Success message="Payment details saved.".to_string() />
                }),
                _ => None,
            }}
            <Show when=move || dialog.with(MembershipDialog::is_open)>
                <ChangeMembershipDialog dialog=dialog on_confirm=set_chosen />
            </Show>
        </div>
    }
}

#[component]
fn ChangeMembershipDialog(
    dialog: RwSignal<MembershipDialog>,
    on_confirm: WriteSignal<Option<MembershipTier>>,
) -> impl IntoView {
    let items = dialog.with_untracked(|dialog| dialog.items().to_vec());

    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50">
            <div class="w-full max-w-md space-y-4 rounded-lg bg-white p-6 shadow dark:bg-gray-800">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    "Change membership"
                </h2>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, tier)| {
                        view! {
                            <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                                <input
                                    type="radio"
                                    name="membership-tier"
                                    prop:checked=move || {
                                        dialog.with(|dialog| dialog.selected_index() == index)
                                    }
                                    on:change=move |_| dialog.update(|dialog| dialog.select(index))
                                />
                                {tier.name}
                            </label>
                        }
                    })
                    .collect_view()}
                <div class="flex justify-end gap-3">
                    <Button on_click=move |_| dialog.update(MembershipDialog::cancel)>"Cancel"</Button>
                    <Button on_click=move |_| {
                        if let Some(tier) = dialog.try_update(MembershipDialog::confirm).flatten() {
                            on_confirm.set(Some(tier));
                        }
                    }>"OK"</Button>
                </div>
            </div>
        </div>
    }
}

/// Installs the global checkout callback for as long as the page is mounted.
fn install_token_callback(checkout_action: Action<Value, Result<(), AppError>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::<dyn Fn(JsValue)>::new(move |token: JsValue| {
        match decode_token(&token) {
            Some(token) => {
                checkout_action.dispatch(token);
            }
            None => log::warn!("ignoring checkout token that is not JSON"),
        }
    });
    if Reflect::set(
        &window,
        &JsValue::from_str(TOKEN_CALLBACK),
        callback.as_ref().unchecked_ref(),
    )
    .is_err()
    {
        log::warn!("failed to install {TOKEN_CALLBACK}");
        return;
    }

    // Owned by the page; dropped together with it.
    let _callback = StoredValue::new_local(callback);
    on_cleanup(|| {
        if let Some(window) = web_sys::window() {
            let _ = Reflect::delete_property(&window, &JsValue::from_str(TOKEN_CALLBACK));
        }
    });
}

fn decode_token(token: &JsValue) -> Option<Value> {
    let encoded = JSON::stringify(token).ok()?.as_string()?;
    serde_json::from_str(&encoded).ok()
}
