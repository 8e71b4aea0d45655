//! TabPage component - обёртка для панели вкладки
//!
//! Отвечает за:
//! - Скрытие неактивной панели через CSS class (панель остаётся смонтированной)
//! - Lazy-монтирование для тяжёлых панелей (chart, tutorials): монтируются
//!   только пока вкладка активна и размонтируются при уходе с неё

use super::registry::{is_lazy, render_panel};
use crate::layout::global_context::DashboardStore;
use crate::shared::chunk_loader::ChunkLoader;
use contracts::shell::View;
use leptos::prelude::*;

#[component]
pub fn TabPage(view: View, index: usize) -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");
    let active = store.active_tab();
    let is_active = Memo::new(move |_| active.get() == index);

    let content = if is_lazy(view) {
        view! {
            <Show when=move || is_active.get()>
                <LazyPanel view=view />
            </Show>
        }
        .into_any()
    } else {
        render_panel(view, store)
    };

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active.get()
            data-tab=view.slug()
        >
            {content}
        </div>
    }
}

/// Defers the panel by one animation frame so the tab switch paints first.
#[component]
fn LazyPanel(view: View) -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");
    let ready = RwSignal::new(false);
    request_animation_frame(move || {
        let _ = ready.try_set(true);
    });

    log::debug!("panel '{}' mounted", view.slug());
    on_cleanup(move || {
        log::debug!("panel '{}' unmounted", view.slug());
    });

    let message = match view {
        View::Chart => "Please wait, loading chart...",
        _ => "Please wait, loading tutorials...",
    };

    view! {
        <Show
            when=move || ready.get()
            fallback=move || view! { <ChunkLoader message=message /> }
        >
            {move || render_panel(view, store)}
        </Show>
    }
}
