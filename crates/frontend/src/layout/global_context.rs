use contracts::shell::{NavigationState, ShellConfig, TabRouter, Transition, View};
use leptos::prelude::*;
use web_sys::window;

/// Shared dashboard state: the active tab and the two overlays that
/// disable the chart tab.
///
/// `active_tab` is written only through `init_router_integration`
/// (location fragment) and `set_active_tab` (user click).
#[derive(Clone, Copy)]
pub struct DashboardStore {
    active_tab: RwSignal<usize>,
    pub is_chart_modal_visible: RwSignal<bool>,
    pub is_trading_view_modal_visible: RwSignal<bool>,
    router: StoredValue<TabRouter>,
    navigation: StoredValue<NavigationState>,
    analysis_tool_url: StoredValue<String>,
}

impl DashboardStore {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            active_tab: RwSignal::new(0),
            is_chart_modal_visible: RwSignal::new(false),
            is_trading_view_modal_visible: RwSignal::new(false),
            router: StoredValue::new(TabRouter::new(config.views.clone())),
            navigation: StoredValue::new(NavigationState::default()),
            analysis_tool_url: StoredValue::new(config.analysis_tool_url.clone()),
        }
    }

    pub fn active_tab(&self) -> ReadSignal<usize> {
        self.active_tab.read_only()
    }

    pub fn views(&self) -> Vec<View> {
        self.router.with_value(|router| router.views().to_vec())
    }

    pub fn index_of(&self, view: View) -> Option<usize> {
        self.router.with_value(|router| router.index_of(view))
    }

    pub fn analysis_tool_url(&self) -> String {
        self.analysis_tool_url.get_value()
    }

    /// Either overlay covers the chart, so its tab is shown disabled.
    pub fn is_chart_disabled(&self) -> bool {
        self.is_chart_modal_visible.get() || self.is_trading_view_modal_visible.get()
    }

    /// Resolve the current location fragment and keep following it
    /// (back/forward, edited address bar) until the owner is cleaned up.
    pub fn init_router_integration(&self) {
        self.sync_from_location();

        let this = *self;
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            this.sync_from_location();
        });
        on_cleanup(move || handle.remove());
    }

    /// User picked a tab: commit and push `#<slug>` as a new history entry.
    pub fn set_active_tab(&self, index: usize) {
        let router = self.router.get_value();
        let mut state = self.navigation.get_value();
        let transition = state.on_user_select(&router, index);
        self.navigation.set_value(state);

        log::debug!("tab selected: {} -> {}", index, transition.fragment);
        self.commit(&transition);
        write_fragment(&transition, HistoryMode::Push);
    }

    /// Select a tab by view. Views missing from the configured set are ignored.
    pub fn select_view(&self, view: View) {
        match self.index_of(view) {
            Some(index) => self.set_active_tab(index),
            None => log::debug!("view '{}' is not configured", view.slug()),
        }
    }

    fn sync_from_location(&self) {
        let fragment = current_fragment();
        let router = self.router.get_value();
        let mut state = self.navigation.get_value();
        let transition = state.on_fragment_change(&router, &fragment);
        self.navigation.set_value(state);

        if transition.changed {
            log::debug!("fragment '{}' -> tab {}", fragment, transition.index);
        }
        self.commit(&transition);
        write_fragment(&transition, HistoryMode::Replace);
    }

    fn commit(&self, transition: &Transition) {
        if self.active_tab.get_untracked() != transition.index {
            self.active_tab.set(transition.index);
        }
    }
}

/// Region flag consumed by the header's platform filter.
#[derive(Clone, Copy)]
pub struct ClientRegion {
    pub is_eu: RwSignal<bool>,
}

impl ClientRegion {
    pub fn new() -> Self {
        Self {
            is_eu: RwSignal::new(false),
        }
    }
}

impl Default for ClientRegion {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
enum HistoryMode {
    Push,
    Replace,
}

fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn write_fragment(transition: &Transition, mode: HistoryMode) {
    // Only touch history if the fragment actually differs
    if !transition.needs_rewrite(&current_fragment()) {
        return;
    }
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let url = Some(transition.fragment.as_str());
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", url),
        HistoryMode::Replace => {
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", url)
        }
    };
    if let Err(e) = result {
        log::warn!("failed to write fragment {}: {:?}", transition.fragment, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_overlay_disables_chart_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let store = DashboardStore::new(&ShellConfig::default());
            let active = store.active_tab();
            assert!(!store.is_chart_disabled());

            store.is_trading_view_modal_visible.set(true);
            assert!(store.is_chart_disabled());
            assert_eq!(active.get_untracked(), 0);

            store.is_chart_modal_visible.set(true);
            store.is_trading_view_modal_visible.set(false);
            assert!(store.is_chart_disabled());
            assert_eq!(active.get_untracked(), 0);

            store.is_chart_modal_visible.set(false);
            assert!(!store.is_chart_disabled());
            assert_eq!(active.get_untracked(), 0);
        });
    }

    #[test]
    fn test_store_follows_configured_views() {
        let owner = Owner::new();
        owner.with(|| {
            let config = ShellConfig {
                views: vec![View::Dashboard, View::Chart, View::AnalysisTool],
                analysis_tool_url: "https://example.com/analysis".into(),
            };
            let store = DashboardStore::new(&config);

            assert_eq!(store.views(), config.views);
            assert_eq!(store.index_of(View::AnalysisTool), Some(2));
            assert_eq!(store.index_of(View::FreeBots), None);
            assert_eq!(store.analysis_tool_url(), "https://example.com/analysis");
        });
    }
}
