use serde::{Deserialize, Serialize};

/// One named tab of the bot shell.
///
/// The serialized form is the slug used in the URL fragment (`#chart`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    BotBuilder,
    Chart,
    Tutorial,
    AnalysisTool,
    FreeBots,
}

impl View {
    /// Slug used in the URL fragment.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::BotBuilder => "bot_builder",
            View::Chart => "chart",
            View::Tutorial => "tutorial",
            View::AnalysisTool => "analysis_tool",
            View::FreeBots => "free_bots",
        }
    }

    /// Returns the display name for the tab strip.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::BotBuilder => "Bot Builder",
            View::Chart => "Charts",
            View::Tutorial => "Tutorials",
            View::AnalysisTool => "Analysis Tool",
            View::FreeBots => "Free Bots",
        }
    }

    /// DOM id of the tab. Only the chart tab has a disabled variant,
    /// used while a chart or trading-view modal covers the page.
    pub fn element_id(&self, disabled: bool) -> &'static str {
        match self {
            View::Dashboard => "id-dbot-dashboard",
            View::BotBuilder => "id-bot-builder",
            View::Chart if disabled => "id-charts--disabled",
            View::Chart => "id-charts",
            View::Tutorial => "id-tutorials",
            View::AnalysisTool => "id-analysis-tool",
            View::FreeBots => "id-free-bots",
        }
    }

    /// Parse a slug. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|view| view.slug() == slug)
    }

    /// All views in their canonical order.
    pub fn all() -> [View; 6] {
        [
            View::Dashboard,
            View::BotBuilder,
            View::Chart,
            View::Tutorial,
            View::AnalysisTool,
            View::FreeBots,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_parse() {
        for view in View::all() {
            assert_eq!(View::from_slug(view.slug()), Some(view));
        }
        assert_eq!(View::from_slug("Chart"), None);
        assert_eq!(View::from_slug(""), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&View::BotBuilder).unwrap();
        assert_eq!(json, "\"bot_builder\"");
        let view: View = serde_json::from_str("\"analysis_tool\"").unwrap();
        assert_eq!(view, View::AnalysisTool);
    }

    #[test]
    fn test_chart_disabled_id() {
        assert_eq!(View::Chart.element_id(false), "id-charts");
        assert_eq!(View::Chart.element_id(true), "id-charts--disabled");
        assert_eq!(View::Tutorial.element_id(true), "id-tutorials");
    }
}
