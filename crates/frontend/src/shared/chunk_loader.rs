use leptos::prelude::*;
use thaw::*;

/// Loader shown while a lazily mounted panel prepares its content.
#[component]
pub fn ChunkLoader(message: &'static str) -> impl IntoView {
    view! {
        <div class="chunk-loader">
            <Space gap=SpaceGap::Small>
                <Spinner />
                <span class="chunk-loader__message">{message}</span>
            </Space>
        </div>
    }
}
