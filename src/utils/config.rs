use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.nationalevacaturebank.nl";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub log_level: String,
    pub server_name: String,
    pub server_version: String,
}

impl Config {
    /// Load configuration from environment variables (with `.env` support).
    ///
    /// Every key has a default; unset, empty or unparseable values fall back
    /// silently rather than failing startup.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            base_url: get_env("NVB_BASE_URL", DEFAULT_BASE_URL),
            timeout: Duration::from_secs(get_env_u64("NVB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            log_level: get_env("LOG_LEVEL", "info"),
            server_name: get_env("SERVER_NAME", "Nationale Vacaturebank"),
            server_version: get_env("SERVER_VERSION", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_on_missing_and_empty() {
        env::remove_var("NVB_TEST_MISSING");
        assert_eq!(get_env("NVB_TEST_MISSING", "fallback"), "fallback");

        env::set_var("NVB_TEST_EMPTY", "");
        assert_eq!(get_env("NVB_TEST_EMPTY", "fallback"), "fallback");
        env::remove_var("NVB_TEST_EMPTY");
    }

    #[test]
    fn get_env_u64_falls_back_on_garbage() {
        env::set_var("NVB_TEST_GARBAGE", "not-a-number");
        assert_eq!(get_env_u64("NVB_TEST_GARBAGE", 30), 30);
        env::remove_var("NVB_TEST_GARBAGE");

        env::set_var("NVB_TEST_SECS", "15");
        assert_eq!(get_env_u64("NVB_TEST_SECS", 30), 15);
        env::remove_var("NVB_TEST_SECS");
    }
}
