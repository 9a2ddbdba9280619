// HTTP client utilities
use crate::domain::error::FtError;
use crate::infrastructure::config::Config;
use reqwest::Client;
use std::time::Duration;

/// Create the process-wide HTTP client from config (timeout, optional proxy)
pub fn create_client(config: &Config) -> Result<Client, FtError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.timeout_secs.max(1)))
        .user_agent(concat!("floattrans/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
