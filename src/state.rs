use crate::application::control::Controls;
use crate::application::dispatch::{Dispatcher, Translators};
use crate::domain::error::FtError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::baidu::BaiduTranslator;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::youdao::YoudaoTranslator;
use crate::infrastructure::settings::SettingsStore;
use crate::interfaces::events::ShellNotifier;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsStore>,
    pub config: Arc<Config>,
    pub http_client: Client,
}

impl AppState {
    pub async fn new(settings_path: PathBuf, config: Config) -> Result<Self, FtError> {
        let http_client = create_client(&config)?;
        let settings = SettingsStore::open(settings_path).await?;

        Ok(Self {
            settings: Arc::new(settings),
            config: Arc::new(config),
            http_client,
        })
    }

    pub fn translators(&self) -> Translators {
        Translators {
            baidu: Arc::new(BaiduTranslator::new(self.http_client.clone())),
            youdao: Arc::new(YoudaoTranslator::new(self.http_client.clone())),
        }
    }

    pub fn dispatcher(&self, notifier: ShellNotifier) -> Dispatcher {
        Dispatcher::new(
            self.settings.clone(),
            self.translators(),
            self.config.language.clone(),
            notifier,
        )
    }

    pub fn controls(&self, notifier: ShellNotifier) -> Controls {
        Controls::new(self.settings.clone(), notifier)
    }
}
