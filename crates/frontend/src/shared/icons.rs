use contracts::shell::View;
use leptos::prelude::*;

/// Glyph shown next to each tab label.
pub fn tab_icon(view: View) -> AnyView {
    match view {
        View::Dashboard => view! {
            <svg width="16" height="16" aria-hidden="true">
                <circle cx="8" cy="8" r="6" fill="currentColor"/>
            </svg>
        }.into_any(),
        View::BotBuilder | View::AnalysisTool => view! {
            <svg width="16" height="16" aria-hidden="true">
                <rect width="12" height="12" x="2" y="2" fill="currentColor"/>
            </svg>
        }.into_any(),
        View::Chart => view! {
            <svg width="16" height="16" aria-hidden="true">
                <path d="M2 14 L8 2 L14 14 Z" fill="currentColor"/>
            </svg>
        }.into_any(),
        View::Tutorial => view! {
            <svg width="16" height="16" aria-hidden="true">
                <line x1="2" y1="8" x2="14" y2="8" stroke="currentColor" stroke-width="2"/>
            </svg>
        }.into_any(),
        View::FreeBots => view! {
            <svg width="16" height="16" aria-hidden="true">
                <polygon points="2,2 14,2 8,14" fill="currentColor"/>
            </svg>
        }.into_any(),
    }
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "chevron-down" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="6 9 12 15 18 9"/>
            </svg>
        }.into_any(),
        "play" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polygon points="5 3 19 12 5 21 5 3"/>
            </svg>
        }.into_any(),
        "stop" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <rect x="5" y="5" width="14" height="14" rx="1"/>
            </svg>
        }.into_any(),
        "external-link" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
                <polyline points="15 3 21 3 21 9"/>
                <line x1="10" y1="14" x2="21" y2="3"/>
            </svg>
        }.into_any(),
        "trending-up" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="23 6 13.5 15.5 8.5 10.5 1 18"/>
                <polyline points="17 6 23 6 23 12"/>
            </svg>
        }.into_any(),
        _ => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 8v4l3 3"/>
            </svg>
        }.into_any(),
    }
}
