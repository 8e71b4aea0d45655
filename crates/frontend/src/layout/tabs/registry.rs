//! Panel registry - единственный источник правды для маппинга View → панель.

use crate::layout::global_context::DashboardStore;
use crate::pages::analysis_tool::AnalysisTool;
use crate::pages::bot_builder::BotBuilder;
use crate::pages::chart::{Chart, TAB_CONTAINER_ID};
use crate::pages::dashboard::Dashboard;
use crate::pages::free_bots::FreeBots;
use crate::pages::tutorials::Tutorials;
use contracts::shell::View;
use leptos::prelude::*;

/// Panels mounted only while their tab is active.
pub fn is_lazy(view: View) -> bool {
    matches!(view, View::Chart | View::Tutorial)
}

/// Рендерит панель вкладки.
///
/// `store` нужен панелям, которые сами переключают вкладки (dashboard, tutorials).
pub fn render_panel(view: View, store: DashboardStore) -> AnyView {
    let on_navigate = Callback::new(move |target: View| store.select_view(target));

    match view {
        View::Dashboard => view! { <Dashboard on_navigate=on_navigate /> }.into_any(),
        View::BotBuilder => view! { <BotBuilder /> }.into_any(),
        View::Chart => {
            view! { <Chart container_id=TAB_CONTAINER_ID show_digits_stats=false /> }.into_any()
        }
        View::Tutorial => view! { <Tutorials on_navigate=on_navigate /> }.into_any(),
        View::AnalysisTool => {
            view! { <AnalysisTool url=store.analysis_tool_url() /> }.into_any()
        }
        View::FreeBots => view! { <FreeBots /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_chart_and_tutorials_are_lazy() {
        let lazy: Vec<_> = View::all().into_iter().filter(|v| is_lazy(*v)).collect();
        assert_eq!(lazy, vec![View::Chart, View::Tutorial]);
    }
}
