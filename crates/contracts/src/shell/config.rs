//! Конфигурация оболочки: какие вкладки показывать и что встраивать в Analysis Tool.

use super::view::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ANALYSIS_TOOL_URL: &str = "https://your-analysis-tool-url.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Tab enumeration; position in this list is the view index.
    pub views: Vec<View>,
    /// Page embedded into the Analysis Tool tab.
    pub analysis_tool_url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellConfigError {
    #[error("shell must have at least one view")]
    NoViews,
    #[error("view '{0}' is listed more than once")]
    DuplicateView(&'static str),
    #[error("analysis_tool_url is empty")]
    EmptyAnalysisUrl,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            views: View::all().to_vec(),
            analysis_tool_url: DEFAULT_ANALYSIS_TOOL_URL.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<(), ShellConfigError> {
        if self.views.is_empty() {
            return Err(ShellConfigError::NoViews);
        }
        for (i, view) in self.views.iter().enumerate() {
            if self.views[..i].contains(view) {
                return Err(ShellConfigError::DuplicateView(view.slug()));
            }
        }
        if self.analysis_tool_url.trim().is_empty() {
            return Err(ShellConfigError::EmptyAnalysisUrl);
        }
        Ok(())
    }

    pub fn has_view(&self, view: View) -> bool {
        self.views.contains(&view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ShellConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.views.len(), 6);
        assert!(config.has_view(View::FreeBots));
    }

    #[test]
    fn test_variant_without_free_bots() {
        let config: ShellConfig = serde_json::from_str(
            r#"{
                "views": ["dashboard", "bot_builder", "chart", "tutorial", "analysis_tool"],
                "analysis_tool_url": "https://example.com/analysis"
            }"#,
        )
        .unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.has_view(View::FreeBots));
    }

    #[test]
    fn test_validation_errors() {
        let empty = ShellConfig {
            views: vec![],
            ..ShellConfig::default()
        };
        assert_eq!(empty.validate(), Err(ShellConfigError::NoViews));

        let duplicated = ShellConfig {
            views: vec![View::Dashboard, View::Chart, View::Chart],
            ..ShellConfig::default()
        };
        assert_eq!(
            duplicated.validate(),
            Err(ShellConfigError::DuplicateView("chart"))
        );

        let no_url = ShellConfig {
            analysis_tool_url: "  ".to_string(),
            ..ShellConfig::default()
        };
        assert_eq!(no_url.validate(), Err(ShellConfigError::EmptyAnalysisUrl));
    }

    #[test]
    fn test_unknown_slug_rejected_by_serde() {
        let parsed: Result<ShellConfig, _> = serde_json::from_str(
            r#"{"views": ["dashboard", "settings"], "analysis_tool_url": "x"}"#,
        );
        assert!(parsed.is_err());
    }
}
