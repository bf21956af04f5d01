use std::env;

pub const BASE_URL_VAR: &str = "FORUM_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self { base_url: base_url.to_string() }
    }

    /// Reads the backend address from `FORUM_BASE_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        Self::from_var(env::var(BASE_URL_VAR).ok())
    }

    fn from_var(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                log::debug!("{BASE_URL_VAR} not set, using {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(ClientConfig::new("http://forum.test/").base_url(), "http://forum.test");
        assert_eq!(ClientConfig::new("http://forum.test").base_url(), "http://forum.test");
        assert_eq!(ClientConfig::new("http://forum.test//").base_url(), "http://forum.test");
    }

    #[test]
    fn unset_or_blank_variable_uses_default() {
        assert_eq!(ClientConfig::from_var(None).base_url(), DEFAULT_BASE_URL);
        assert_eq!(ClientConfig::from_var(Some("   ".to_string())).base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn set_variable_is_trimmed() {
        assert_eq!(ClientConfig::from_var(Some(" http://x/ ".to_string())).base_url(), "http://x");
    }

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
