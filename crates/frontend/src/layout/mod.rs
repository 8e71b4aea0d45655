pub mod global_context;
pub mod header;
pub mod modals;
pub mod tabs;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |   Tabs + panels (center)   | run strategy |
/// +------------------------------------------+
/// |        modals (chart, trading view)       |
/// ```
#[component]
pub fn Shell<C, R>(center: C, right: R) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="main">
                <div class="main__container">
                    {center()}
                </div>
            </div>

            <div class="main__run-strategy-wrapper">
                {right()}
            </div>

            <modals::ChartModal />
            <modals::TradingViewModal />
        </div>
    }
}
