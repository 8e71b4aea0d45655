use crate::layout::global_context::DashboardStore;
use crate::layout::tabs::{TabPage, TabStrip};
use crate::layout::Shell;
use crate::pages::run_panel::{RunPanel, RunStrategy};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");

    // Initialize router integration. This runs once when the component is created.
    store.init_router_integration();

    let views = store.views();
    let on_select = Callback::new(move |index: usize| store.set_active_tab(index));

    view! {
        <Shell
            center=move || {
                let views = views.clone();
                view! {
                    <TabStrip views=views.clone() on_select=on_select />
                    <div class="tabs__content">
                        {views
                            .into_iter()
                            .enumerate()
                            .map(|(index, view)| view! { <TabPage view=view index=index /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
            right=|| view! { <RunStrategy /> <RunPanel /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
