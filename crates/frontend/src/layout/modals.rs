//! Оверлеи поверх дашборда: chart modal и trading-view modal.
//!
//! Видимость хранится в `DashboardStore`; пока любой из них открыт,
//! вкладка Charts показывается как disabled.

use crate::layout::global_context::DashboardStore;
use crate::pages::chart::{Chart, MODAL_CONTAINER_ID};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn ModalOverlay(open: RwSignal<bool>, title: &'static str, children: ChildrenFn) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button class="button button--icon modal__close" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ChartModal() -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");

    view! {
        <ModalOverlay open=store.is_chart_modal_visible title="Chart">
            <Chart container_id=MODAL_CONTAINER_ID show_digits_stats=true />
        </ModalOverlay>
    }
}

#[component]
pub fn TradingViewModal() -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");

    view! {
        <ModalOverlay open=store.is_trading_view_modal_visible title="TradingView">
            <div class="trading-view-modal__container" data-widget="tradingview"></div>
        </ModalOverlay>
    }
}
