//! Company detail: name editing, create/update and employee management.

use super::{HEADING, TABLE, TABLE_HEAD, TABLE_ROW};
use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        admin::companies::{CompanyDetail, SaveOutcome},
        core_data::types::Company,
        session::context::{use_api, use_session},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

#[derive(Clone, Copy)]
enum EmployeeChange {
    Add,
    Remove,
}

#[component]
pub fn AdminCompanyDetailPage(detail: CompanyDetail) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();
    let detail = RwSignal::new(detail);
    let (query, set_query) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_api = api.clone();
    let save_action = Action::new_local(move |_: &()| {
        let api = save_api.clone();
        let current = detail.get_untracked();
        async move { current.save(&api).await }
    });

    let employee_action = Action::new_local(move |(change, account_id): &(EmployeeChange, i64)| {
        let api = api.clone();
        let (change, account_id) = (*change, *account_id);
        let current = detail.get_untracked();
        async move {
            match change {
                EmployeeChange::Add => current.add_employee(&api, account_id).await,
                EmployeeChange::Remove => current.remove_employee(&api, account_id).await,
            }
        }
    });

    Effect::new(move |_| {
        match save_action.value().get() {
            Some(Ok(outcome)) => {
                if let Some(path) = apply_outcome(detail, outcome) {
                    navigate(&path, Default::default());
                }
            }
            Some(Err(err)) => set_error.set(err.unreported()),
            None => {}
        }
    });

    Effect::new(move |_| {
        match employee_action.value().get() {
            Some(Ok(company)) => detail.update(|detail| detail.refresh(company)),
            Some(Err(err)) => session.report(err),
            None => {}
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        save_action.dispatch(());
    };

    let busy = Signal::derive(move || {
        save_action.pending().get() || employee_action.pending().get()
    });

    view! {
        <div class="space-y-6">
            <h1 class=HEADING>{move || detail.with(|detail| detail.title().to_string())}</h1>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="company-name"
                    >
                        "Name"
                    </label>
                    <input
                        id="company-name"
                        type="text"
                        class=INPUT
                        required
                        prop:value=move || detail.with(|detail| detail.company().name.clone())
                        on:input=move |event| {
                            let name = event_target_value(&event);
                            detail.update(|detail| detail.set_name(name));
                        }
                    />
                </div>
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || busy.get() || !detail.with(CompanyDetail::is_dirty))
                >
                    "Save"
                </Button>
                {move || save_action.pending().get().then_some(view! { <Spinner small=true /> })}
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>
            <Show when=move || !detail.with(CompanyDetail::is_new)>
                <Employees detail=detail query=query set_query=set_query busy=busy employee_action=employee_action />
            </Show>
        </div>
    }
}

/// Applies a save result; a created company leaves the page through navigation.
fn apply_outcome(detail: RwSignal<CompanyDetail>, outcome: SaveOutcome) -> Option<String> {
    detail.try_update(|detail| detail.apply(outcome)).flatten()
}

#[component]
fn Employees(
    detail: RwSignal<CompanyDetail>,
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    busy: Signal<bool>,
    employee_action: Action<(EmployeeChange, i64), Result<Company, AppError>>,
) -> impl IntoView {
    let employees = move || detail.with(|detail| detail.company().employees.clone());
    let candidates = move || {
        let query = query.get();
        detail.with(|detail| {
            detail
                .candidates(&query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Employees"</h2>
            <table class=TABLE>
                <thead class=TABLE_HEAD>
                    <tr>
                        <th class="px-6 py-3">"Username"</th>
                        <th class="px-6 py-3">"Name"</th>
                        <th class="px-6 py-3"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=employees
                        key=|employee| employee.account.id
                        children=move |employee| {
                            let account_id = employee.account.id;
                            view! {
                                <tr class=TABLE_ROW>
                                    <td class="px-6 py-4">{employee.account.username}</td>
                                    <td class="px-6 py-4">{employee.account.name.unwrap_or_default()}</td>
                                    <td class="px-6 py-4 text-right">
                                        <Button
                                            disabled=busy
                                            on_click=move |_| {
                                                employee_action.dispatch((EmployeeChange::Remove, account_id));
                                            }
                                        >
                                            "Remove"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="space-y-2">
                <label
                    class="block text-sm font-medium text-gray-900 dark:text-white"
                    for="employee-query"
                >
                    "Add employee"
                </label>
                <input
                    id="employee-query"
                    type="search"
                    class=INPUT
                    placeholder="Search by username or name"
                    prop:value=move || query.get()
                    on:input=move |event| set_query.set(event_target_value(&event))
                />
                <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=candidates
                        key=|account| account.id
                        children=move |account| {
                            let account_id = account.id;
                            let label = format!("{} ({})", account.display_name(), account.username);
                            view! {
                                <li class="flex items-center justify-between py-2 text-sm text-gray-900 dark:text-white">
                                    <span>{label}</span>
                                    <Button
                                        disabled=busy
                                        on_click=move |_| {
                                            set_query.set(String::new());
                                            employee_action.dispatch((EmployeeChange::Add, account_id));
                                        }
                                    >
                                        "Add"
                                    </Button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
