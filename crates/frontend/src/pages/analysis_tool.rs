use leptos::prelude::*;

/// Embeds the configured analysis page in a sandboxed frame. The URL is passed through as is.
#[component]
pub fn AnalysisTool(url: String) -> impl IntoView {
    view! {
        <div class="analysis-tool-wrapper">
            <iframe
                src=url
                title="Analysis Tool"
                width="100%"
                height="100%"
                sandbox="allow-scripts allow-same-origin allow-forms allow-popups"
                class="analysis-tool-wrapper__frame"
            ></iframe>
        </div>
    }
}
