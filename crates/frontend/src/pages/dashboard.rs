use crate::layout::global_context::DashboardStore;
use crate::shared::icons::tab_icon;
use contracts::shell::View;
use leptos::prelude::*;
use thaw::*;

struct QuickAction {
    target: View,
    title: &'static str,
    description: &'static str,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        target: View::BotBuilder,
        title: "Bot Builder",
        description: "Assemble a strategy from blocks.",
    },
    QuickAction {
        target: View::Chart,
        title: "Charts",
        description: "Watch the market before you start a bot.",
    },
    QuickAction {
        target: View::Tutorial,
        title: "Tutorials",
        description: "Guides and FAQ for your first bot.",
    },
    QuickAction {
        target: View::FreeBots,
        title: "Free Bots",
        description: "Ready-made strategies to load and run.",
    },
];

#[component]
pub fn Dashboard(on_navigate: Callback<View>) -> impl IntoView {
    let store = use_context::<DashboardStore>().expect("DashboardStore context not found");

    view! {
        <div class="dashboard">
            <h2 class="dashboard__title">"Load or build your bot"</h2>
            <div class="dashboard__cards">
                {QUICK_ACTIONS
                    .iter()
                    .filter(|action| store.index_of(action.target).is_some())
                    .map(|action| {
                        let target = action.target;
                        view! {
                            <div class="dashboard__card">
                                <div class="dashboard__card-icon">{tab_icon(target)}</div>
                                <div class="dashboard__card-title">{action.title}</div>
                                <div class="dashboard__card-description">{action.description}</div>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| on_navigate.run(target)
                                >
                                    "Open"
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
