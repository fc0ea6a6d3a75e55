//! Observed trend panel: one line per tracked target month.

use leptos::prelude::*;

use crate::components::chart_canvas::ChartCanvas;
use crate::controller::Dashboard;

#[component]
pub fn ObservedPanel() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();
    let chart = Memo::new(move |_| dashboard.observed_chart());

    view! { <ChartCanvas config=chart class="trend-chart trend-chart--observed"/> }
}
