// Provider settings document (config.json)
use crate::domain::error::FtError;
use crate::domain::model::{Credentials, Provider};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// On-disk layout:
///
/// ```json
/// {
///   "src": "BaiduAPI",
///   "BaiduAPI":  { "apppid": "", "apikey": "" },
///   "YoudaoAPI": { "apppid": "", "apikey": "" }
/// }
/// ```
///
/// Both provider sections are always present; a document missing one reads
/// it back as empty credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(rename = "src", default)]
    pub active: Provider,
    #[serde(rename = "BaiduAPI", default)]
    pub baidu: Credentials,
    #[serde(rename = "YoudaoAPI", default)]
    pub youdao: Credentials,
}

impl Settings {
    pub fn credentials(&self, provider: Provider) -> &Credentials {
        match provider {
            Provider::Baidu => &self.baidu,
            Provider::Youdao => &self.youdao,
        }
    }

    fn credentials_mut(&mut self, provider: Provider) -> &mut Credentials {
        match provider {
            Provider::Baidu => &mut self.baidu,
            Provider::Youdao => &mut self.youdao,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    AlreadyActive,
    /// Target has no credentials; `src` was left untouched
    ConfigurationRequired(Provider),
}

/// Single owner of the settings document.
///
/// Every read and write goes through the lock, and writes land via a
/// temporary file plus rename. When a write fails the in-memory copy is
/// left as it was.
pub struct SettingsStore {
    path: PathBuf,
    current: RwLock<Settings>,
}

impl SettingsStore {
    /// Open the document, creating it with defaults on first run
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, FtError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        if !tokio::fs::try_exists(&path).await? {
            info!("Creating default settings at {}", path.display());
            write_document(&path, &Settings::default()).await?;
        }

        // Unreadable document: start from defaults, the file stays as is
        // until the next successful save
        let settings = match read_document(&path).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Settings::default()
            }
        };
        debug!("Loaded settings, active provider {}", settings.active);

        Ok(Self {
            path,
            current: RwLock::new(settings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn snapshot(&self) -> Settings {
        self.current.read().await.clone()
    }

    pub async fn active_provider(&self) -> Provider {
        self.current.read().await.active
    }

    pub async fn credentials(&self, provider: Provider) -> Credentials {
        self.current.read().await.credentials(provider).clone()
    }

    pub async fn switch_active(&self, provider: Provider) -> Result<SwitchOutcome, FtError> {
        let mut current = self.current.write().await;

        if !current.credentials(provider).is_configured() {
            debug!("Refusing to switch to unconfigured {}", provider);
            return Ok(SwitchOutcome::ConfigurationRequired(provider));
        }
        if current.active == provider {
            return Ok(SwitchOutcome::AlreadyActive);
        }

        let mut next = current.clone();
        next.active = provider;
        write_document(&self.path, &next).await?;
        *current = next;

        info!("Active provider switched to {}", provider);
        Ok(SwitchOutcome::Switched)
    }

    /// Store a credential pair; blank values are rejected without touching the file
    pub async fn save_credentials(
        &self,
        provider: Provider,
        id: &str,
        secret: &str,
    ) -> Result<(), FtError> {
        let id = id.trim();
        let secret = secret.trim();
        if id.is_empty() || secret.is_empty() {
            return Err(FtError::Validation(
                "AppID and API Key must not be empty".to_string(),
            ));
        }

        let mut current = self.current.write().await;
        let mut next = current.clone();
        *next.credentials_mut(provider) = Credentials::new(id, secret);
        write_document(&self.path, &next).await?;
        *current = next;

        info!("Saved credentials for {}", provider);
        Ok(())
    }

    /// Re-read the document from disk. On failure the previous state is kept.
    pub async fn reload(&self) -> Result<Settings, FtError> {
        let mut current = self.current.write().await;
        match read_document(&self.path).await {
            Ok(settings) => {
                *current = settings.clone();
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to reload settings from {}: {}", self.path.display(), e);
                Err(e)
            }
        }
    }
}

async fn read_document(path: &Path) -> Result<Settings, FtError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn write_document(path: &Path, settings: &Settings) -> Result<(), FtError> {
    let content = serde_json::to_string_pretty(settings)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
