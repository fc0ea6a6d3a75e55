//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::DashboardConfig;
use crate::controller::Dashboard;
use crate::pages::dashboard::DashboardPage;

/// Root application component.
///
/// Builds the dashboard controller from the page query, provides it as
/// context, and kicks off the one-time manifest load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "csr")]
    let config = DashboardConfig::from_location();
    #[cfg(not(feature = "csr"))]
    let config = DashboardConfig::default();

    let dashboard = Dashboard::new(config);
    provide_context(dashboard);
    dashboard.load_manifest();

    view! {
        <Title text="Real Estate Trends"/>
        <DashboardPage/>
    }
}
