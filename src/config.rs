use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Endpoint receiving lead submissions. Empty means leads are
    /// logged but not forwarded.
    pub lead_endpoint: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            lead_endpoint: env::var("LEAD_ENDPOINT").unwrap_or_default(),
        }
    }
}
