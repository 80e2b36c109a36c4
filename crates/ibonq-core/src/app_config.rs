use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Environment {
    /// Whether log output may use ANSI colour codes. Off in production.
    #[must_use]
    pub fn log_ansi(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

/// The outbound form contract of the retail inquiry endpoint.
///
/// Kept as plain strings here; `ibonq-scraper` validates the URL when it
/// builds its endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub url: String,
    pub target_field_name: String,
    pub keyword_field_name: String,
    /// Target-field value sent when listing cities.
    pub city_target: String,
    /// Target-field value sent when listing stores for a city.
    pub store_target: String,
    /// `id` of the `<select>` whose options are the city list.
    pub city_select_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub upstream: UpstreamConfig,
    pub user_agent: String,
    /// `None` leaves the HTTP client on its transport default.
    pub request_timeout_secs: Option<u64>,
}
