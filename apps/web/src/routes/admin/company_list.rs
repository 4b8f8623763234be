use super::{HEADING, LINK, TABLE, TABLE_HEAD, TABLE_ROW};
use crate::features::{admin::companies::company_detail_path, core_data::types::Company};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminCompanyListPage(companies: Vec<Company>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class=HEADING>"Companies"</h1>
                <A href="/admin/company/new" {..} class=LINK>"New company"</A>
            </div>
            <table class=TABLE>
                <thead class=TABLE_HEAD>
                    <tr>
                        <th class="px-6 py-3">"Name"</th>
                        <th class="px-6 py-3">"Employees"</th>
                    </tr>
                </thead>
                <tbody>
                    {companies
                        .into_iter()
                        .map(|company| {
                            let employees = company.employees.len();
                            let name = match company.id {
                                Some(id) => view! {
                                    <A href=company_detail_path(id) {..} class=LINK>{company.name}</A>
                                }
                                    .into_any(),
                                None => company.name.into_any(),
                            };
                            view! {
                                <tr class=TABLE_ROW>
                                    <td class="px-6 py-4">{name}</td>
                                    <td class="px-6 py-4">{employees}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
