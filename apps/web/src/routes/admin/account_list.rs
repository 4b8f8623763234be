use super::{HEADING, LINK, TABLE, TABLE_HEAD, TABLE_ROW};
use crate::features::core_data::types::Account;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminAccountListPage(accounts: Vec<Account>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class=HEADING>"Accounts"</h1>
            <table class=TABLE>
                <thead class=TABLE_HEAD>
                    <tr>
                        <th class="px-6 py-3">"Username"</th>
                        <th class="px-6 py-3">"Name"</th>
                        <th class="px-6 py-3">"Email"</th>
                    </tr>
                </thead>
                <tbody>
                    {accounts
                        .into_iter()
                        .map(|account| {
                            let href = format!("/admin/account/{}", account.id);
                            view! {
                                <tr class=TABLE_ROW>
                                    <td class="px-6 py-4">
                                        <A href=href {..} class=LINK>{account.username}</A>
                                    </td>
                                    <td class="px-6 py-4">{account.name.unwrap_or_default()}</td>
                                    <td class="px-6 py-4">{account.email.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
