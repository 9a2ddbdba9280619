use crate::domain::model::{LanguagePair, Provider, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::settings::SettingsStore;
use crate::interfaces::events::ShellNotifier;
use std::sync::Arc;
use tracing::{info, warn};

/// One adapter per provider, picked by the settings' `Provider` value
#[derive(Clone)]
pub struct Translators {
    pub baidu: Arc<dyn Translator>,
    pub youdao: Arc<dyn Translator>,
}

impl Translators {
    pub fn for_provider(&self, provider: Provider) -> &dyn Translator {
        match provider {
            Provider::Baidu => self.baidu.as_ref(),
            Provider::Youdao => self.youdao.as_ref(),
        }
    }
}

pub struct Dispatcher {
    settings: Arc<SettingsStore>,
    translators: Translators,
    languages: LanguagePair,
    notifier: ShellNotifier,
}

impl Dispatcher {
    pub fn new(
        settings: Arc<SettingsStore>,
        translators: Translators,
        languages: LanguagePair,
        notifier: ShellNotifier,
    ) -> Self {
        Self {
            settings,
            translators,
            languages,
            notifier,
        }
    }

    /// Translate with the active provider and notify the shell.
    ///
    /// At most one attempt; failures are logged and produce no notification.
    pub async fn dispatch(&self, text: &str) -> Option<TranslationResult> {
        let settings = self.settings.snapshot().await;
        let provider = settings.active;
        let credentials = settings.credentials(provider);

        if !credentials.is_configured() {
            warn!("{} is not configured, asking the shell for credentials", provider);
            self.notifier.configuration_required(provider);
            return None;
        }

        let request = TranslationRequest::new(text, &self.languages);
        let translator = self.translators.for_provider(provider);

        match translator.translate(&request, credentials).await {
            Ok(translated) => {
                info!(
                    "{} translated {} chars",
                    translator.provider(),
                    text.chars().count()
                );
                self.notifier
                    .translation_ready(translated.clone(), text.to_string());
                Some(TranslationResult {
                    original: text.to_string(),
                    translated,
                    provider,
                })
            }
            Err(e) => {
                warn!("Translation via {} failed: {}", provider, e);
                None
            }
        }
    }
}
