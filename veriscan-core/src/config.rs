use std::time::Duration;

use url::Url;

pub struct CoreConfig {
    pub api: ApiConfig,
    pub history: HistoryConfig,
}

pub struct ApiConfig {
    pub base_url: Url,
    /// Base of the unauthenticated mirror serving public preview links.
    pub public_base_url: Url,
    pub request_timeout: Option<Duration>,
}

pub struct HistoryConfig {
    pub default_page_size: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: Url::parse("https://registrar.example.edu/api").unwrap(),
                public_base_url: Url::parse("https://registrar.example.edu").unwrap(),
                request_timeout: Some(Duration::from_secs(30)),
            },
            history: HistoryConfig {
                default_page_size: 20,
            },
        }
    }
}
