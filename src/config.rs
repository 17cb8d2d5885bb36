use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar-pro";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env()
});

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. Absence is reported per request, not at startup.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub pad_placeholders: bool,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            api_key: get_env_opt("PERPLEXITY_API_KEY"),
            api_url: get_env_or_default("PERPLEXITY_API_URL", DEFAULT_API_URL),
            model: get_env_or_default("PERPLEXITY_MODEL", DEFAULT_MODEL),
            bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:3000"),
            static_dir: get_env_or_default("STATIC_DIR", "static"),
            pad_placeholders: parse_flag(&get_env_or_default("PAD_PLACEHOLDERS", "true")),
        }
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: "static".to_string(),
            pad_placeholders: true,
        }
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
