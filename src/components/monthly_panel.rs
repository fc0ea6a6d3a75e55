//! Monthly trend panel: mirrored category selector, region selector, bar chart.

use leptos::prelude::*;

use crate::components::category_select::CategorySelect;
use crate::components::chart_canvas::ChartCanvas;
use crate::controller::Dashboard;
use crate::state::selection::{SelectorEndpoint, TOTAL_REGION_VALUE};

#[component]
pub fn MonthlyPanel() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    let chart = Memo::new(move |_| dashboard.monthly_chart());
    let regions = move || dashboard.monthly.with(|m| m.vocabulary.regions().to_vec());
    let selected_region = move || dashboard.selection.with(|s| s.region.value().to_owned());

    view! {
        <div class="trend-controls">
            <CategorySelect endpoint=SelectorEndpoint::Secondary/>
            <select
                class="region-select"
                prop:value=selected_region
                on:change=move |ev| dashboard.select_region(&event_target_value(&ev))
            >
                <option value=TOTAL_REGION_VALUE>{TOTAL_REGION_VALUE}</option>
                {move || {
                    regions()
                        .into_iter()
                        .map(|r| view! { <option value=r.clone()>{r.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
        <ChartCanvas config=chart class="trend-chart trend-chart--monthly"/>
    }
}
