use crate::domain::model::Provider;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "ft")]
#[command(about = "Press Ctrl+C three times to translate the clipboard.")]
#[command(version)]
pub struct Cli {
    /// Switch the active translation provider
    #[arg(long = "use", value_name = "PROVIDER")]
    pub use_provider: Option<ProviderArg>,

    /// Store credentials for a provider (needs --app-id and --app-key)
    #[arg(long, value_name = "PROVIDER", requires_all = ["app_id", "app_key"])]
    pub configure: Option<ProviderArg>,

    /// AppID / appKey issued by the provider
    #[arg(long)]
    pub app_id: Option<String>,

    /// API key / app secret issued by the provider
    #[arg(long)]
    pub app_key: Option<String>,

    /// Output one-shot translations as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Translate this text once instead of listening for the hotkey
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Baidu,
    Youdao,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Baidu => Provider::Baidu,
            ProviderArg::Youdao => Provider::Youdao,
        }
    }
}
