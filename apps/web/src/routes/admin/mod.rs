//! Admin pages. The route guard only requires a session; the API enforces the
//! admin circle on every call it serves here.

mod account_detail;
mod account_list;
mod company_detail;
mod company_list;

pub(crate) use account_detail::AdminAccountDetailPage;
pub(crate) use account_list::AdminAccountListPage;
pub(crate) use company_detail::AdminCompanyDetailPage;
pub(crate) use company_list::AdminCompanyListPage;

use leptos::prelude::*;
use leptos_router::components::A;

const LINK: &str = "font-medium text-blue-600 hover:underline dark:text-blue-500";
const HEADING: &str = "text-2xl font-semibold text-gray-900 dark:text-white";
const TABLE: &str = "w-full text-left text-sm text-gray-500 rtl:text-right dark:text-gray-400";
const TABLE_HEAD: &str = "bg-gray-50 text-xs uppercase text-gray-700 dark:bg-gray-700 dark:text-gray-400";
const TABLE_ROW: &str = "border-b bg-white dark:border-gray-700 dark:bg-gray-800";

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class=HEADING>"Admin"</h1>
            <ul class="list-inside list-disc space-y-2">
                <li>
                    <A href="/admin/account" {..} class=LINK>"Accounts"</A>
                </li>
                <li>
                    <A href="/admin/company" {..} class=LINK>"Companies"</A>
                </li>
            </ul>
        </div>
    }
}
