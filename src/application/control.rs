// Operations the presentation shell calls into
use crate::domain::error::FtError;
use crate::domain::model::Provider;
use crate::infrastructure::settings::{Settings, SettingsStore, SwitchOutcome};
use crate::interfaces::events::{ShellEvent, ShellNotifier};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct Controls {
    settings: Arc<SettingsStore>,
    notifier: ShellNotifier,
}

impl Controls {
    pub fn new(settings: Arc<SettingsStore>, notifier: ShellNotifier) -> Self {
        Self { settings, notifier }
    }

    pub async fn current_provider(&self) -> Provider {
        self.settings.active_provider().await
    }

    pub async fn settings(&self) -> Settings {
        self.settings.snapshot().await
    }

    /// Switch the active provider. An unconfigured target routes into the
    /// configuration flow and leaves the document alone.
    pub async fn switch_active_provider(&self, provider: Provider) -> Result<SwitchOutcome, FtError> {
        let outcome = self.settings.switch_active(provider).await?;
        match outcome {
            SwitchOutcome::Switched => self.notifier.notify(ShellEvent::ProviderSwitched(provider)),
            SwitchOutcome::ConfigurationRequired(p) => self.notifier.configuration_required(p),
            SwitchOutcome::AlreadyActive => {}
        }
        Ok(outcome)
    }

    pub async fn save_credentials(
        &self,
        provider: Provider,
        id: &str,
        secret: &str,
    ) -> Result<(), FtError> {
        self.settings.save_credentials(provider, id, secret).await?;
        self.notifier.notify(ShellEvent::CredentialsSaved(provider));
        Ok(())
    }

    /// Re-read settings from disk, then run the same check as at startup
    pub async fn reload_settings(&self) -> Result<(), FtError> {
        self.settings.reload().await?;
        self.startup_check().await;
        Ok(())
    }

    /// Ask for credentials if the active provider has none
    pub async fn startup_check(&self) -> bool {
        let active = self.settings.active_provider().await;
        let configured = self.settings.credentials(active).await.is_configured();
        if !configured {
            warn!("Active provider {} has no credentials", active);
            self.notifier.configuration_required(active);
        }
        configured
    }
}
