//! Tab buttons for the three view panels.

use leptos::prelude::*;

use crate::controller::Dashboard;
use crate::state::tabs::Tab;

#[component]
pub fn TabBar() -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-btn"
                            class:active=move || dashboard.selection.with(|s| s.tabs.is_active(tab))
                            on:click=move |_| dashboard.activate_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
