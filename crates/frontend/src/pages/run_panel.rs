//! Run strategy bar и run panel.
//!
//! Запуск стратегии выполняется вне оболочки; здесь только переключатель
//! состояния и кнопки, открывающие chart / trading-view модалки.

use crate::layout::global_context::DashboardStore;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct RunState {
    pub is_running: RwSignal<bool>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            is_running: RwSignal::new(false),
        }
    }

    pub fn toggle(&self) {
        self.is_running.update(|running| *running = !*running);
        log::info!("bot running: {}", self.is_running.get_untracked());
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn RunStrategy() -> impl IntoView {
    let run = use_context::<RunState>().expect("RunState context not found");
    let is_running = move || run.is_running.get();

    view! {
        <div class="run-strategy">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| run.toggle()
            >
                {move || if is_running() { icon("stop") } else { icon("play") }}
                {move || if is_running() { " Stop" } else { " Run" }}
            </Button>
        </div>
    }
}

#[component]
pub fn RunPanel() -> impl IntoView {
    let run = use_context::<RunState>().expect("RunState context not found");
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");

    view! {
        <aside class="run-panel">
            <div class="run-panel__status">
                {move || if run.is_running.get() { "Bot is running" } else { "Bot is not running" }}
            </div>
            <div class="run-panel__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| store.is_chart_modal_visible.set(true)
                >
                    {icon("trending-up")}
                    " Chart"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| store.is_trading_view_modal_visible.set(true)
                >
                    {icon("external-link")}
                    " TradingView"
                </Button>
            </div>
        </aside>
    }
}
