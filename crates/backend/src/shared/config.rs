use contracts::shell::ShellConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend bundle
    pub static_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[shell]
views = ["dashboard", "bot_builder", "chart", "tutorial", "analysis_tool", "free_bots"]
analysis_tool_url = "https://your-analysis-tool-url.com"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Parse and validate. An invalid shell section is an error, not a silent fallback.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.shell.validate()?;
    Ok(config)
}

/// Resolve the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory
    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shell::View;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.shell, ShellConfig::default());
    }

    #[test]
    fn test_shell_section_is_optional() {
        let config = parse_config("[server]\nport = 8080\nstatic_dir = \"/srv/dist\"\n").unwrap();
        assert_eq!(config.shell, ShellConfig::default());
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/dist"));
    }

    #[test]
    fn test_variant_without_free_bots() {
        let config = parse_config(
            r#"
[server]
port = 3000
static_dir = "dist"

[shell]
views = ["dashboard", "bot_builder", "chart", "tutorial", "analysis_tool"]
analysis_tool_url = "https://example.com/analysis"
"#,
        )
        .unwrap();
        assert!(!config.shell.has_view(View::FreeBots));
        assert_eq!(config.shell.analysis_tool_url, "https://example.com/analysis");
    }

    #[test]
    fn test_invalid_shell_rejected() {
        let duplicated = r#"
[server]
port = 3000
static_dir = "dist"

[shell]
views = ["chart", "chart"]
analysis_tool_url = "https://example.com"
"#;
        assert!(parse_config(duplicated).is_err());

        let unknown = r#"
[server]
port = 3000
static_dir = "dist"

[shell]
views = ["dashboard", "settings"]
analysis_tool_url = "https://example.com"
"#;
        assert!(parse_config(unknown).is_err());
    }
}
