use crate::layout::header::platform_switcher::PlatformSwitcher;
use crate::shared::external_icon::ExternalIcon;
use contracts::header::{LinkKind, MenuItem, MENU_ITEMS, TRADERS_HUB_LINK};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <PlatformSwitcher />
                <MenuLink item=TRADERS_HUB_LINK />
            </div>
            <nav class="header__menu">
                {MENU_ITEMS
                    .iter()
                    .map(|item| view! { <MenuLink item=*item /> })
                    .collect_view()}
            </nav>
        </header>
    }
}

/// Outbound header link. Menu items declared as buttons open the link
/// in a new window instead of navigating the shell away.
#[component]
fn MenuLink(item: MenuItem) -> impl IntoView {
    let icon = item.icon;
    let content = view! {
        <ExternalIcon url=icon.url.to_string() alt=icon.alt size=icon.size />
        <span class="header__menu-label">{item.label}</span>
    };

    match item.kind {
        LinkKind::Anchor => view! {
            <a class="header__menu-item" href=item.href aria-label=icon.alt>
                {content}
            </a>
        }
        .into_any(),
        LinkKind::Button => view! {
            <button
                class="header__menu-item"
                aria-label=icon.alt
                on:click=move |_| {
                    if let Some(w) = web_sys::window() {
                        let _ = w.open_with_url_and_target(item.href, "_blank");
                    }
                }
            >
                {content}
            </button>
        }
        .into_any(),
    }
}
