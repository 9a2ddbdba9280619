// One-way notifications from the core to the presentation shell
use crate::domain::model::Provider;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    TranslationReady { translated: String, original: String },
    /// The provider has no credentials; the shell should ask for them
    ConfigurationRequired(Provider),
    ProviderSwitched(Provider),
    CredentialsSaved(Provider),
}

/// Sending half handed to the core components
#[derive(Debug, Clone)]
pub struct ShellNotifier {
    tx: mpsc::UnboundedSender<ShellEvent>,
}

impl ShellNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ShellEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn notify(&self, event: ShellEvent) {
        if self.tx.send(event).is_err() {
            debug!("Shell is gone, dropping notification");
        }
    }

    pub fn translation_ready(&self, translated: String, original: String) {
        self.notify(ShellEvent::TranslationReady {
            translated,
            original,
        });
    }

    pub fn configuration_required(&self, provider: Provider) {
        self.notify(ShellEvent::ConfigurationRequired(provider));
    }
}
