//! Record viewer: controls, status line, summary, and table.

use leptos::prelude::*;

use crate::components::category_select::CategorySelect;
use crate::controller::Dashboard;
use crate::state::selection::SelectorEndpoint;

/// Category + file selectors and the load button.
#[component]
pub fn RecordControls() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    let file_select = Memo::new(move |_| dashboard.file_select());
    let selected_file = move || dashboard.selection.with(|s| s.file.clone().unwrap_or_default());

    view! {
        <div class="controls">
            <CategorySelect endpoint=SelectorEndpoint::Primary/>
            <select
                class="file-select"
                prop:value=selected_file
                disabled=move || file_select.with(|f| f.disabled)
                on:change=move |ev| dashboard.select_file(event_target_value(&ev))
            >
                {move || {
                    file_select
                        .get()
                        .options
                        .into_iter()
                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                class="btn btn--primary"
                disabled=move || !file_select.with(|f| f.load_enabled)
                on:click=move |_| dashboard.load_records()
            >
                "Load"
            </button>
        </div>
    }
}

#[component]
pub fn StatusLine() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();
    view! { <div class="status">{move || dashboard.records.with(|r| r.status.clone())}</div> }
}

#[component]
pub fn SummaryView() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    view! {
        <div class="summary">
            {move || {
                dashboard
                    .records
                    .with(|r| r.summary.as_ref().map(|s| s.lines()))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <p>
                                <strong>{label}</strong>
                                " "
                                {value}
                            </p>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
pub fn RecordTableView() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    view! {
        <div class="data-display">
            {move || {
                dashboard
                    .records
                    .with(|r| r.table.clone())
                    .map(|table| {
                        view! {
                            <div style="overflow-x:auto;">
                                <table>
                                    <thead>
                                        <tr>
                                            {table
                                                .columns
                                                .into_iter()
                                                .map(|c| view! { <th>{c}</th> })
                                                .collect::<Vec<_>>()}
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {table
                                            .rows
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        {row
                                                            .into_iter()
                                                            .map(|cell| view! { <td>{cell}</td> })
                                                            .collect::<Vec<_>>()}
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
