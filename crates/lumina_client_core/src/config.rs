use std::env;

pub const DEFAULT_DEV_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PROD_API_URL: &str = "/api";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Client configuration, resolved once at build or start time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub admin_password: String,
    pub enable_admin: bool,
    pub gemini_api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url().to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            enable_admin: true,
            gemini_api_key: None,
        }
    }
}

fn default_api_url() -> &'static str {
    if cfg!(all(target_arch = "wasm32", not(debug_assertions))) {
        DEFAULT_PROD_API_URL
    } else {
        DEFAULT_DEV_API_URL
    }
}

impl ClientConfig {
    /// Runtime environment (native). Call `dotenv::dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Compile-time environment, for the browser build where there is no process env.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "LUMINA_API_URL" => option_env!("LUMINA_API_URL"),
                "LUMINA_ADMIN_PASSWORD" => option_env!("LUMINA_ADMIN_PASSWORD"),
                "LUMINA_ENABLE_ADMIN" => option_env!("LUMINA_ENABLE_ADMIN"),
                "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
                "API_KEY" => option_env!("API_KEY"),
                _ => None,
            }
            .map(String::from)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_empty("LUMINA_API_URL").unwrap_or(defaults.api_url),
            admin_password: lookup("LUMINA_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            enable_admin: lookup("LUMINA_ENABLE_ADMIN").map_or(true, |v| v.trim() != "false"),
            gemini_api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
        }
    }

    /// API base with a trailing `/api` (or `/api/`) removed. Empty for a relative `/api` base.
    pub fn api_origin(&self) -> String {
        api_origin(&self.api_url)
    }
}

pub fn api_origin(api_url: &str) -> String {
    api_url
        .strip_suffix("/api/")
        .or_else(|| api_url.strip_suffix("/api"))
        .unwrap_or(api_url)
        .to_string()
}
