//! Runtime configuration, read from the environment (and `.env` via dotenvy).

use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_SCHOLAR_BASE_URL: &str = "https://scholar.google.es/citations";
pub const DEFAULT_SCHOLAR_USER_ID: &str = "ULBrgQcAAAAJ";
pub const DEFAULT_SCHOLAR_LANGUAGE: &str = "es";
pub const DEFAULT_PROFILE_DATA: &str = "data/profile.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Where the "visit my profile" fallback link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarProfile {
    base_url: Url,
    user_id: String,
    language: String,
}

impl ScholarProfile {
    pub fn new(base_url: &str, user_id: impl Into<String>) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|source| Error::InvalidProfileUrl {
            url: base_url.to_string(),
            source,
        })?;
        // A bare host would gain a `/` when the query is appended.
        if parsed.cannot_be_a_base() || parsed.path() == "/" {
            return Err(Error::Config {
                message: format!("Scholar base URL '{}' must include the profile path", base_url),
            });
        }
        Ok(Self {
            base_url: parsed,
            user_id: user_id.into(),
            language: DEFAULT_SCHOLAR_LANGUAGE.to_string(),
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Reads `SCHOLAR_BASE_URL`, `SCHOLAR_USER_ID` and `SCHOLAR_LANG`.
    pub fn from_env() -> Result<Self> {
        let base_url = env_or("SCHOLAR_BASE_URL", DEFAULT_SCHOLAR_BASE_URL);
        let user_id = env_or("SCHOLAR_USER_ID", DEFAULT_SCHOLAR_USER_ID);
        if user_id.trim().is_empty() {
            return Err(Error::Config {
                message: String::from("SCHOLAR_USER_ID must not be empty"),
            });
        }
        let language = env_or("SCHOLAR_LANG", DEFAULT_SCHOLAR_LANGUAGE);
        Ok(Self::new(&base_url, user_id)?.with_language(language))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// `<base>?user=<id>&hl=<language>`, with the values form-encoded.
    pub fn profile_url(&self) -> String {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("user", &self.user_id)
            .append_pair("hl", &self.language);
        url.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub profile_data: PathBuf,
    pub scholar: ScholarProfile,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            profile_data: PathBuf::from(env_or("PROFILE_DATA", DEFAULT_PROFILE_DATA)),
            scholar: ScholarProfile::from_env()?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["SCHOLAR_BASE_URL", "SCHOLAR_USER_ID", "SCHOLAR_LANG", "PROFILE_DATA", "BIND_ADDR"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_profile_url() {
        let scholar = ScholarProfile::new("https://scholar.google.es/citations", "abc123").unwrap();
        assert_eq!(
            scholar.profile_url(),
            "https://scholar.google.es/citations?user=abc123&hl=es"
        );
    }

    #[test]
    fn test_profile_url_language() {
        let scholar = ScholarProfile::new("https://scholar.google.com/citations", "abc123")
            .unwrap()
            .with_language("en");
        assert_eq!(
            scholar.profile_url(),
            "https://scholar.google.com/citations?user=abc123&hl=en"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ScholarProfile::new("not a url", "abc123").unwrap_err();
        assert!(matches!(err, Error::InvalidProfileUrl { .. }));
    }

    #[test]
    fn test_base_url_without_path() {
        for base in ["https://scholar.google.es", "https://scholar.google.es/"] {
            let err = ScholarProfile::new(base, "abc123").unwrap_err();
            assert!(matches!(err, Error::Config { .. }), "{base} accepted");
        }
    }

    #[test]
    fn test_profile_url_encodes_values() {
        let scholar = ScholarProfile::new("https://scholar.google.es/citations", "a b+c").unwrap();
        assert_eq!(
            scholar.profile_url(),
            "https://scholar.google.es/citations?user=a+b%2Bc&hl=es"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.profile_data, PathBuf::from(DEFAULT_PROFILE_DATA));
        assert_eq!(
            config.scholar.profile_url(),
            "https://scholar.google.es/citations?user=ULBrgQcAAAAJ&hl=es"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("SCHOLAR_USER_ID", "xyz");
        env::set_var("SCHOLAR_LANG", "en");
        env::set_var("BIND_ADDR", "127.0.0.1:8080");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.scholar.user_id(), "xyz");
        assert_eq!(config.scholar.language(), "en");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_user() {
        clear_env();
        env::set_var("SCHOLAR_USER_ID", "  ");
        assert!(matches!(AppConfig::from_env(), Err(Error::Config { .. })));
        clear_env();
    }
}
