use crate::layout::global_context::ClientRegion;
use crate::shared::external_icon::ExternalIcon;
use crate::shared::icons;
use contracts::header::{visible_platforms, LinkEntry};
use leptos::prelude::*;

/// Dropdown with the external platforms available in the client's region.
#[component]
pub fn PlatformSwitcher() -> impl IntoView {
    let region = use_context::<ClientRegion>().expect("ClientRegion context not found");
    let (is_open, set_is_open) = signal(false);

    let platforms = move || visible_platforms(region.is_eu.get()).collect::<Vec<_>>();
    let current = move || platforms().into_iter().next();

    view! {
        <div
            class="platform-switcher"
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="platform-switcher__button"
                class:platform-switcher__button--active=move || is_open.get()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {move || current().map(|entry| {
                    let icon = entry.button_icon;
                    view! { <ExternalIcon url=icon.url.to_string() alt=icon.alt size=icon.size /> }
                })}
                <span
                    class="platform-switcher__chevron"
                    class:platform-switcher__chevron--open=move || is_open.get()
                >
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div
                class="platform-switcher__panel"
                class:platform-switcher__panel--open=move || is_open.get()
            >
                <For
                    each=platforms
                    key=|entry| entry.href
                    children=move |entry: &'static LinkEntry| {
                        view! { <PlatformCard entry=entry /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn PlatformCard(entry: &'static LinkEntry) -> impl IntoView {
    let icon = entry.icon;
    view! {
        <a class="platform-switcher__card" href=entry.href>
            <div class="platform-switcher__card-icon">
                <ExternalIcon url=icon.url.to_string() alt=icon.alt size=icon.size />
            </div>
            <div class="platform-switcher__card-text">
                <span class="platform-switcher__card-title">{entry.label}</span>
                <span class="platform-switcher__card-description">{entry.description}</span>
            </div>
        </a>
    }
}
