use crate::layout::global_context::{ClientRegion, DashboardStore};
use crate::pages::run_panel::RunState;
use crate::routes::routes::AppRoutes;
use contracts::shell::ShellConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: ShellConfig) -> impl IntoView {
    // Provide the DashboardStore to the whole app via context.
    provide_context(DashboardStore::new(&config));
    provide_context(ClientRegion::new());
    provide_context(RunState::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
