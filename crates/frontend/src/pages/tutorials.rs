use contracts::shell::View;
use leptos::prelude::*;
use thaw::*;

const GUIDES: &[(&str, &str)] = &[
    ("Getting started", "Learn how the bot builder workspace is organised."),
    ("Your first strategy", "Build and run a simple rise/fall bot."),
    ("Reading the chart", "Use the chart tab to pick an entry point."),
];

#[component]
pub fn Tutorials(on_navigate: Callback<View>) -> impl IntoView {
    view! {
        <div class="tutorials">
            {GUIDES
                .iter()
                .map(|(title, summary)| view! {
                    <div class="tutorials__card">
                        <h3>{*title}</h3>
                        <p>{*summary}</p>
                    </div>
                })
                .collect_view()}
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_navigate.run(View::BotBuilder)
            >
                "Try it in Bot Builder"
            </Button>
        </div>
    }
}
