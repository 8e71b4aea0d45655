//! Tab router - синхронизация активной вкладки и URL-фрагмента (`#chart`).
//!
//! `TabRouter` только вычисляет: индекс по фрагменту и канонический фрагмент по индексу.
//! `NavigationState` хранит активный индекс и меняется ровно двумя переходами:
//! `on_fragment_change` (mount, back/forward, deep link) и `on_user_select` (клик по вкладке).

use super::view::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRouter {
    views: Vec<View>,
}

impl TabRouter {
    /// An empty enumeration falls back to the full default set, so the
    /// router always has a first view to fall back to.
    pub fn new(views: Vec<View>) -> Self {
        if views.is_empty() {
            return Self {
                views: View::all().to_vec(),
            };
        }
        Self { views }
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn view_at(&self, index: usize) -> Option<View> {
        self.views.get(index).copied()
    }

    pub fn index_of(&self, view: View) -> Option<usize> {
        self.views.iter().position(|v| *v == view)
    }

    /// Out-of-range indices map to the first view.
    pub fn clamp(&self, index: usize) -> usize {
        if index < self.views.len() {
            index
        } else {
            0
        }
    }

    /// Resolve the view index for a location fragment such as `#chart`.
    ///
    /// The slug is the text between the first and the second `#`.
    /// A missing, empty or unknown slug keeps `current`.
    pub fn resolve_index_from_fragment(&self, fragment: &str, current: usize) -> usize {
        let current = self.clamp(current);
        let slug = match fragment.split('#').nth(1) {
            Some(slug) if !slug.is_empty() => slug,
            _ => return current,
        };
        self.views
            .iter()
            .position(|view| view.slug() == slug)
            .unwrap_or(current)
    }

    /// `#<slug>` for the index, the first view's slug when out of range.
    pub fn canonical_fragment(&self, index: usize) -> String {
        let view = self.views[self.clamp(index)];
        format!("#{}", view.slug())
    }
}

/// Result of a router transition: the committed index and the fragment
/// the location must carry afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub fragment: String,
    /// Whether the active index moved.
    pub changed: bool,
}

impl Transition {
    pub fn needs_rewrite(&self, current_fragment: &str) -> bool {
        self.fragment != current_fragment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_index: usize,
}

impl NavigationState {
    /// Initial state: the fragment present at mount, resolved against the first view.
    pub fn mount(router: &TabRouter, fragment: &str) -> (Self, Transition) {
        let mut state = Self::default();
        let transition = state.on_fragment_change(router, fragment);
        (state, transition)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn on_fragment_change(&mut self, router: &TabRouter, fragment: &str) -> Transition {
        let index = router.resolve_index_from_fragment(fragment, self.active_index);
        self.commit(router, index)
    }

    pub fn on_user_select(&mut self, router: &TabRouter, index: usize) -> Transition {
        self.commit(router, router.clamp(index))
    }

    fn commit(&mut self, router: &TabRouter, index: usize) -> Transition {
        let changed = self.active_index != index;
        self.active_index = index;
        Transition {
            index,
            fragment: router.canonical_fragment(index),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> TabRouter {
        TabRouter::new(View::all().to_vec())
    }

    #[test]
    fn test_known_slugs_resolve_to_position() {
        let router = router();
        for (i, view) in View::all().iter().enumerate() {
            for current in [0, 3, 5] {
                let fragment = format!("#{}", view.slug());
                assert_eq!(router.resolve_index_from_fragment(&fragment, current), i);
            }
        }
    }

    #[test]
    fn test_unknown_fragment_keeps_current() {
        let router = router();
        for fragment in ["#nonexistent", "", "#", "chart", "#Chart", "##chart"] {
            for current in 0..router.len() {
                assert_eq!(
                    router.resolve_index_from_fragment(fragment, current),
                    current,
                    "fragment {:?}",
                    fragment
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_current_clamps_to_default() {
        let router = router();
        assert_eq!(router.resolve_index_from_fragment("#bogus", 42), 0);
        assert_eq!(router.canonical_fragment(42), "#dashboard");
        assert_eq!(router.resolve_index_from_fragment("#tutorial#extra", 42), 3);
    }

    #[test]
    fn test_slug_missing_from_configured_set() {
        let router = TabRouter::new(vec![View::Dashboard, View::BotBuilder, View::Chart]);
        assert_eq!(router.resolve_index_from_fragment("#free_bots", 1), 1);
        assert_eq!(router.canonical_fragment(5), "#dashboard");
    }

    #[test]
    fn test_empty_enumeration_uses_defaults() {
        let router = TabRouter::new(vec![]);
        assert_eq!(router.len(), 6);
        assert_eq!(router.canonical_fragment(0), "#dashboard");
    }

    #[test]
    fn test_fragment_change_is_idempotent() {
        let router = router();
        let mut state = NavigationState::default();

        let first = state.on_fragment_change(&router, "#analysis_tool");
        assert!(first.changed);
        assert_eq!(first.index, 4);
        assert!(!first.needs_rewrite("#analysis_tool"));

        let before = state;
        let second = state.on_fragment_change(&router, "#analysis_tool");
        assert!(!second.changed);
        assert_eq!(state, before);
        assert_eq!(second.fragment, first.fragment);
    }

    #[test]
    fn test_user_select_round_trip() {
        let router = router();
        let mut state = NavigationState::default();
        for (i, view) in View::all().iter().enumerate() {
            let transition = state.on_user_select(&router, i);
            assert_eq!(transition.fragment, format!("#{}", view.slug()));
            assert_eq!(state.active_index(), i);
            assert_eq!(router.resolve_index_from_fragment(&transition.fragment, 0), i);
        }
        let transition = state.on_user_select(&router, 99);
        assert_eq!(transition.index, 0);
        assert_eq!(transition.fragment, "#dashboard");
    }

    #[test]
    fn test_mount_with_chart() {
        let (state, transition) = NavigationState::mount(&router(), "#chart");
        assert_eq!(state.active_index(), 2);
        assert_eq!(transition.fragment, "#chart");
        assert!(!transition.needs_rewrite("#chart"));
    }

    #[test]
    fn test_mount_with_unknown_fragment_rewrites_to_default() {
        let (state, transition) = NavigationState::mount(&router(), "#nonexistent");
        assert_eq!(state.active_index(), 0);
        assert!(!transition.changed);
        assert!(transition.needs_rewrite("#nonexistent"));
        assert_eq!(transition.fragment, "#dashboard");
    }

    #[test]
    fn test_mount_without_fragment() {
        let (state, transition) = NavigationState::mount(&router(), "");
        assert_eq!(state.active_index(), 0);
        assert_eq!(transition.fragment, "#dashboard");
    }

    #[test]
    fn test_select_tutorial_from_chart() {
        let router = router();
        let (mut state, _) = NavigationState::mount(&router, "#chart");
        let tutorial = router.index_of(View::Tutorial).unwrap();
        let transition = state.on_user_select(&router, tutorial);
        assert!(transition.changed);
        assert_eq!(transition.fragment, "#tutorial");
        assert_eq!(router.view_at(state.active_index()), Some(View::Tutorial));
    }

    #[test]
    fn test_unknown_fragment_after_navigation_keeps_view() {
        let router = router();
        let (mut state, _) = NavigationState::mount(&router, "#chart");
        let transition = state.on_fragment_change(&router, "#nonexistent");
        assert_eq!(transition.index, 2);
        assert_eq!(transition.fragment, "#chart");
    }
}
