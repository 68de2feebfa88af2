use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_APP_NAME: &str = "Shorter.url";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub cookie_secure: bool,
    session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            cookie_secure: false,
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            app_name: lookup("APP_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.app_name),
            cookie_secure: lookup("COOKIE_SECURE")
                .is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes")),
            session_key: lookup("SESSION_KEY"),
        }
    }

    /// Session encryption key. Sessions only survive restarts when
    /// `SESSION_KEY` holds at least 64 bytes.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+); generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set; generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.app_name, "Shorter.url");
        assert!(!config.cookie_secure);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("APP_NAME", "Short"),
            ("COOKIE_SECURE", "true"),
        ]);
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.app_name, "Short");
        assert!(config.cookie_secure);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = config_from(&[("APP_NAME", "  "), ("COOKIE_SECURE", "no")]);
        assert_eq!(config.app_name, "Shorter.url");
        assert!(!config.cookie_secure);
    }

    #[test]
    fn long_session_key_is_stable() {
        let secret = "k".repeat(64);
        let config = config_from(&[("SESSION_KEY", secret.as_str())]);
        assert_eq!(config.session_key().master(), config.session_key().master());
    }
}
