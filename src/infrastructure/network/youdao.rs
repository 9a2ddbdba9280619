use crate::domain::error::FtError;
use crate::domain::model::{Credentials, Provider, TranslationRequest};
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use uuid::Uuid;

pub const YOUDAO_ENDPOINT: &str = "https://openapi.youdao.com/api";

// Youdao API Response structures
#[derive(Deserialize, Debug)]
struct YoudaoResponse {
    #[serde(rename = "translation")]
    translations: Option<Vec<String>>,
    #[serde(rename = "errorCode")]
    error_code: String,
}

/// Youdao text translation (v3 signature)
pub struct YoudaoTranslator {
    client: Client,
    endpoint: String,
}

impl YoudaoTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, YOUDAO_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Translator for YoudaoTranslator {
    fn provider(&self) -> Provider {
        Provider::Youdao
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
        credentials: &Credentials,
    ) -> Result<String, FtError> {
        if !credentials.is_configured() {
            return Err(FtError::NotConfigured(Provider::Youdao));
        }

        let salt = Uuid::new_v4().to_string();
        let curtime = SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_secs()
            .to_string();
        let sign = sign_v3(
            &credentials.id,
            &request.text,
            &salt,
            &curtime,
            &credentials.secret,
        );

        let params = [
            ("q", request.text.as_str()),
            ("from", request.from.as_str()),
            ("to", request.to.as_str()),
            ("vocabId", ""),
            ("appKey", credentials.id.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
            ("signType", "v3"),
            ("curtime", curtime.as_str()),
        ];

        debug!("Youdao request: {} chars, curtime {}", request.text.chars().count(), curtime);
        let body = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await?
            .text()
            .await?;

        parse_response(&body)
    }
}

/// Text fed into the v3 signature: the query itself when it is at most 20
/// characters, otherwise first 10 + length + last 10 (counted in chars).
pub fn truncate_input(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    let len = chars.len();
    if len <= 20 {
        return query.to_string();
    }

    let head: String = chars[..10].iter().collect();
    let tail: String = chars[len - 10..].iter().collect();
    format!("{}{}{}", head, len, tail)
}

/// sign = sha256(appKey + input(q) + salt + curtime + appSecret)
pub fn sign_v3(app_key: &str, query: &str, salt: &str, curtime: &str, app_secret: &str) -> String {
    let raw_sign = format!(
        "{}{}{}{}{}",
        app_key,
        truncate_input(query),
        salt,
        curtime,
        app_secret
    );
    let mut hasher = Sha256::new();
    hasher.update(raw_sign);
    hex::encode(hasher.finalize())
}

fn parse_response(body: &str) -> Result<String, FtError> {
    let response: YoudaoResponse = serde_json::from_str(body)?;

    if response.error_code != "0" {
        return Err(FtError::Api(format!(
            "Youdao API Error {}: {}",
            response.error_code,
            error_message(&response.error_code)
        )));
    }

    response
        .translations
        .and_then(|t| t.into_iter().next())
        .ok_or_else(|| FtError::Api("Youdao response has no translation".to_string()))
}

fn error_message(code: &str) -> &'static str {
    match code {
        "101" => "Missing required parameter",
        "102" => "Unsupported language type",
        "103" => "Text too long",
        "104" => "Unsupported API type",
        "105" => "Unsupported signature type",
        "106" => "Unsupported response type",
        "107" => "Unsupported transmission encryption type",
        "108" => "Invalid appKey or signature error (check api_key)",
        "109" => "Invalid batchLog format",
        "110" => "No related service",
        "111" => "Developer account is abnormal",
        "201" => "Decryption failed, check api_key",
        "202" => "Missing signature",
        "203" => "Signature verification failed",
        "301" => "Dictionary query failed",
        "302" => "Translation query failed",
        "303" => "Server-side exception",
        "401" => "Account balance insufficient",
        "411" => "Access frequency limited",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LanguagePair;
    use crate::infrastructure::network::testing::{field, form_fields, serve_once, serve_silence};
    use std::time::Duration;

    #[test]
    fn short_input_is_used_verbatim() {
        assert_eq!(truncate_input("hello"), "hello");
        assert_eq!(truncate_input("12345678901234567890"), "12345678901234567890");
    }

    #[test]
    fn long_input_is_truncated() {
        assert_eq!(
            truncate_input("The quick brown fox jumps over the lazy dog"),
            "The quick 43e lazy dog"
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let query = "这是一个非常长的中文句子需要被截断处理一下才行";
        let truncated = truncate_input(query);
        assert!(truncated.starts_with("这是一个非常长的中文"));
        assert!(truncated.contains(&query.chars().count().to_string()));
    }

    #[test]
    fn sign_v3_known_values() {
        assert_eq!(
            sign_v3("app", "hello", "salt-1", "1700000000", "secret"),
            "649c720380cfcc6f3ddf44a1c017f07f331f8c64793bf3be6910aeb3c38c3ef5"
        );
        assert_eq!(
            sign_v3(
                "app",
                "The quick brown fox jumps over the lazy dog",
                "salt-1",
                "1700000000",
                "secret"
            ),
            "1a37e7a4c8a048cc6216bfe7ae3ed3ffe80054ab33924bbce4d84d056feda5d0"
        );
    }

    #[test]
    fn error_code_is_reported() {
        match parse_response(r#"{"errorCode":"108"}"#) {
            Err(FtError::Api(msg)) => assert!(msg.contains("108") && msg.contains("appKey")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn posts_v3_form_and_reads_first_translation() {
        let (url, server) =
            serve_once(200, r#"{"errorCode":"0","translation":["你好","哈喽"]}"#).await;
        let translator = YoudaoTranslator::with_endpoint(Client::new(), url);
        let request = TranslationRequest::new("Hello", &LanguagePair::default());

        let translated = translator
            .translate(&request, &Credentials::new("app", "secret"))
            .await
            .unwrap();
        assert_eq!(translated, "你好");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api"));
        let fields = form_fields(&raw);
        assert_eq!(field(&fields, "appKey"), Some("app"));
        assert_eq!(field(&fields, "signType"), Some("v3"));
        let salt = field(&fields, "salt").unwrap();
        let curtime = field(&fields, "curtime").unwrap();
        assert_eq!(
            field(&fields, "sign"),
            Some(sign_v3("app", "Hello", salt, curtime, "secret").as_str())
        );
    }

    #[tokio::test]
    async fn query_text_survives_form_encoding() {
        let (url, server) = serve_once(200, r#"{"errorCode":"0","translation":["ok"]}"#).await;
        let translator = YoudaoTranslator::with_endpoint(Client::new(), url);
        let text = "C++ & Rust = 你好 world?";
        let request = TranslationRequest::new(text, &LanguagePair::default());

        translator
            .translate(&request, &Credentials::new("app", "secret"))
            .await
            .unwrap();

        let fields = form_fields(&server.await.unwrap());
        assert_eq!(field(&fields, "q"), Some(text));
        assert_eq!(field(&fields, "vocabId"), Some(""));
    }

    #[tokio::test]
    async fn timeout_is_an_error() {
        let (url, _server) = serve_silence().await;
        let client = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let translator = YoudaoTranslator::with_endpoint(client, url);
        let request = TranslationRequest::new("Hello", &LanguagePair::default());

        let err = translator
            .translate(&request, &Credentials::new("app", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, FtError::Http(_)));
    }
}
