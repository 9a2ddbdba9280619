use crate::domain::error::FtError;
use crate::domain::model::{Credentials, Provider, TranslationRequest};
use async_trait::async_trait;

/// Trait for translation services
///
/// Every provider shares this signature; the dispatcher picks the
/// implementation from the settings document's active provider.
#[async_trait]
pub trait Translator: Send + Sync {
    fn provider(&self) -> Provider;

    /// Translate a request, returning the first translation the vendor reports
    async fn translate(
        &self,
        request: &TranslationRequest,
        credentials: &Credentials,
    ) -> Result<String, FtError>;
}

/// Trait for clipboard access
///
/// Empty or non-text clipboards read as an empty string.
pub trait ClipboardSource: Send {
    fn read_text(&mut self) -> String;
}
