use crate::layout::global_context::DashboardStore;
use crate::shared::icons::tab_icon;
use contracts::shell::View;
use leptos::prelude::*;

/// Tab strip. Clicking a tab calls `on_select` with its index;
/// the strip itself never changes the active tab.
#[component]
pub fn TabStrip(views: Vec<View>, on_select: Callback<usize>) -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");
    let active = store.active_tab();

    view! {
        <div class="main__tabs tabs__strip" role="tablist">
            {views
                .into_iter()
                .enumerate()
                .map(|(index, view)| {
                    let id = move || view.element_id(store.is_chart_disabled());
                    let is_active = Memo::new(move |_| active.get() == index);
                    view! {
                        <button
                            id=id
                            class="tabs__tab"
                            class:tabs__tab--active=is_active
                            class:tabs__tab--disabled=move || id().ends_with("--disabled")
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| on_select.run(index)
                        >
                            {tab_icon(view)}
                            <span class="tabs__label">{view.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
