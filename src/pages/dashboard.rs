//! Single-page dashboard: tab bar plus the three view panels.

use leptos::prelude::*;

use crate::components::monthly_panel::MonthlyPanel;
use crate::components::observed_panel::ObservedPanel;
use crate::components::record_viewer::{RecordControls, RecordTableView, StatusLine, SummaryView};
use crate::components::tab_bar::TabBar;
use crate::controller::Dashboard;
use crate::state::tabs::Tab;

/// Only the active panel is displayed; hidden panels keep their DOM and charts.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();
    let display = move |tab: Tab| {
        move || {
            if dashboard.selection.with(|s| s.tabs.is_active(tab)) {
                "block"
            } else {
                "none"
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Real Estate Transactions"</h1>
            </header>

            <TabBar/>

            <section id=Tab::Records.panel_id() class="tab-panel" style:display=display(Tab::Records)>
                <RecordControls/>
                <StatusLine/>
                <SummaryView/>
                <RecordTableView/>
            </section>

            <section id=Tab::MonthlyTrend.panel_id() class="tab-panel" style:display=display(Tab::MonthlyTrend)>
                <MonthlyPanel/>
            </section>

            <section id=Tab::ObservedTrend.panel_id() class="tab-panel" style:display=display(Tab::ObservedTrend)>
                <ObservedPanel/>
            </section>
        </div>
    }
}
