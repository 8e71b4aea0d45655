use leptos::prelude::*;

/// Container of the chart tab panel.
pub const TAB_CONTAINER_ID: &str = "chart-container";
/// Container of the chart modal; both may be mounted at once.
pub const MODAL_CONTAINER_ID: &str = "chart-modal-container";

/// Host element for the chart widget. Rendering itself is done by the
/// charting library attached to `container_id`.
#[component]
pub fn Chart(
    container_id: &'static str,
    #[prop(default = false)] show_digits_stats: bool,
) -> impl IntoView {
    view! {
        <div class="chart" class:chart--with-digits=show_digits_stats>
            <div id=container_id class="chart__container"></div>
            <Show when=move || show_digits_stats>
                <div class="chart__digits-stats"></div>
            </Show>
        </div>
    }
}
