//! Build-time Configuration
//!
//! Values are baked in by Trunk / cargo from the environment:
//! `SHECAN_API_URL` and `SHECAN_ALLOWED_DEV_ORIGINS` (comma separated).

const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash
    pub api_base_url: String,
    /// Extra origins allowed to load the dev build
    pub allowed_dev_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("SHECAN_API_URL"), option_env!("SHECAN_ALLOWED_DEV_ORIGINS"))
    }

    pub fn from_values(api_url: Option<&str>, dev_origins: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let allowed_dev_origins = dev_origins
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            api_base_url,
            allowed_dev_origins,
        }
    }

    /// Absolute URL for an API path such as `/api/courses`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }

    /// Uploaded files come back as `/uploads/...`; absolute URLs pass through.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
            path.to_string()
        } else {
            self.endpoint(path)
        }
    }

    pub fn is_allowed_dev_origin(&self, origin: &str) -> bool {
        let origin = origin.trim_end_matches('/');
        self.allowed_dev_origins.iter().any(|allowed| allowed == origin)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert!(config.allowed_dev_origins.is_empty());
        assert_eq!(config.endpoint("/api/courses"), "http://localhost:5000/api/courses");
    }

    #[test]
    fn test_trailing_slash_and_origins() {
        let config = AppConfig::from_values(
            Some("https://api.shecan.rw/"),
            Some("http://192.168.43.229:3000, http://localhost:8080/ ,"),
        );
        assert_eq!(config.endpoint("api/auth/login"), "https://api.shecan.rw/api/auth/login");
        assert_eq!(config.allowed_dev_origins.len(), 2);
        assert!(config.is_allowed_dev_origin("http://localhost:8080"));
        assert!(config.is_allowed_dev_origin("http://192.168.43.229:3000/"));
        assert!(!config.is_allowed_dev_origin("http://evil.example"));
    }

    #[test]
    fn test_asset_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.asset_url("/uploads/avatars/1.png"),
            "http://localhost:5000/uploads/avatars/1.png"
        );
        assert_eq!(config.asset_url("https://cdn.example/x.png"), "https://cdn.example/x.png");
    }

    #[test]
    fn test_blank_url_uses_default() {
        assert_eq!(AppConfig::from_values(Some("  "), None).api_base_url, DEFAULT_API_URL);
    }
}
