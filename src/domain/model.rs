use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// 翻译通道
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Provider {
    #[default]
    #[serde(rename = "BaiduAPI")]
    Baidu,
    #[serde(rename = "YoudaoAPI")]
    Youdao,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Baidu, Provider::Youdao];

    /// Name used as the key in the settings document
    pub fn wire_name(self) -> &'static str {
        match self {
            Provider::Baidu => "BaiduAPI",
            Provider::Youdao => "YoudaoAPI",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Baidu => "百度API",
            Provider::Youdao => "有道API",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baiduapi" | "baidu" => Ok(Provider::Baidu),
            "youdaoapi" | "youdao" => Ok(Provider::Youdao),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

// 认证信息 (appid / key)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "apppid", default)]
    pub id: String,
    #[serde(rename = "apikey", default)]
    pub secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    Unconfigured,
    Configured,
}

impl Credentials {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.id.is_empty() && !self.secret.is_empty()
    }

    pub fn state(&self) -> CredentialState {
        if self.is_configured() {
            CredentialState::Configured
        } else {
            CredentialState::Unconfigured
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagePair {
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
        }
    }
}

fn default_from() -> String {
    "en".to_string()
}
fn default_to() -> String {
    "zh".to_string()
}

// 单次翻译请求，用完即弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub from: String,
    pub to: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, languages: &LanguagePair) -> Self {
        Self {
            text: text.into(),
            from: languages.from.clone(),
            to: languages.to.clone(),
        }
    }
}

// 翻译结果 (原文, 译文)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub provider: Provider,
}
