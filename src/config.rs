use std::env;

pub struct Config {
    pub port: u16,
    /// URL opened as the initial active tab, if any.
    pub start_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            start_url: env::var("START_URL").ok().filter(|u| !u.is_empty()),
        }
    }
}
