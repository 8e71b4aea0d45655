//! API utilities for frontend-backend communication

/// Origin the bundle was loaded from.
///
/// The backend serves both the bundle and `/api/*`, so the API lives on the
/// page's own origin whatever port `[server] port` is set to.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    join_origin(&api_base(), path)
}

fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_configured_port() {
        assert_eq!(
            join_origin("http://localhost:8080", "/api/shell/config"),
            "http://localhost:8080/api/shell/config"
        );
    }

    #[test]
    fn test_empty_origin_gives_relative_path() {
        assert_eq!(join_origin("", "/api/shell/config"), "/api/shell/config");
        assert_eq!(
            join_origin("https://bots.example.com/", "api/shell/config"),
            "https://bots.example.com/api/shell/config"
        );
    }
}
