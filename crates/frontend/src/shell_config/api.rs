use crate::shared::api_utils::api_url;
use contracts::shell::ShellConfig;
use gloo_net::http::Request;

/// Получить конфигурацию оболочки (набор вкладок, URL Analysis Tool)
pub async fn fetch_shell_config() -> Result<ShellConfig, String> {
    let url = api_url("/api/shell/config");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ShellConfig = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
