use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Build from the environment. The base URL is selected at deploy time:
    /// production uses `API_PROD_URL`, everything else `API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenv().ok();

        let production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let api_base_url = if production {
            env::var("API_PROD_URL").expect("API_PROD_URL must be set")
        } else {
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000/api".to_string())
        };

        Self::new(api_base_url)
    }

    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url: String = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }
}
