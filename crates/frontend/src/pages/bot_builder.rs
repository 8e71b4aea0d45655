use leptos::prelude::*;

/// Host element for the block workspace; the editor attaches itself here.
#[component]
pub fn BotBuilder() -> impl IntoView {
    view! {
        <div class="bot-builder">
            <div id="scratch_div" class="bot-builder__workspace"></div>
        </div>
    }
}
