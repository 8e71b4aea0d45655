use leptos::prelude::*;

const FREE_BOTS: &[(&str, &str)] = &[
    ("Bot Strategy 1", "A high-frequency trading bot."),
    ("Bot Strategy 2", "A trend-following bot."),
    ("Bot Strategy 3", "A volatility-based trading bot."),
    ("Bot Strategy 4", "A reversal pattern bot."),
    ("Bot Strategy 5", "A support and resistance bot."),
];

#[component]
pub fn FreeBots() -> impl IntoView {
    view! {
        <div class="free-bots-wrapper">
            <h2>"Free Bots"</h2>
            <p>"Browse and download free bot files here."</p>
            <ul>
                {FREE_BOTS
                    .iter()
                    .map(|(name, description)| view! {
                        <li><a href="#free_bots">{*name}</a>" - "{*description}</li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
