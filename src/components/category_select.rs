//! Category selector bound to one sync endpoint.

use leptos::prelude::*;

use crate::controller::Dashboard;
use crate::net::types::Category;
use crate::state::selection::SelectorEndpoint;

/// Both endpoints display the same category; a change goes through the
/// dashboard so the other endpoint follows exactly once.
#[component]
pub fn CategorySelect(endpoint: SelectorEndpoint) -> impl IntoView {
    let dashboard = expect_context::<Dashboard>();

    let current = move || dashboard.selection.with(|s| s.projection(endpoint)).as_str();
    let on_change = move |ev: leptos::ev::Event| {
        if let Some(category) = Category::parse(&event_target_value(&ev)) {
            dashboard.change_category(endpoint, category);
        }
    };

    view! {
        <select class="category-select" prop:value=current on:change=on_change>
            {Category::ALL
                .into_iter()
                .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
