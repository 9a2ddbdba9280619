use crate::domain::error::FtError;
use crate::domain::model::{Credentials, Provider, TranslationRequest};
use crate::domain::traits::Translator;
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const BAIDU_ENDPOINT: &str = "http://api.fanyi.baidu.com/api/trans/vip/translate";

// Baidu API Response structures
#[derive(Deserialize, Debug)]
struct BaiduResponse {
    trans_result: Option<Vec<TransResult>>,
    error_code: Option<serde_json::Value>,
    error_msg: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TransResult {
    dst: String,
}

/// Baidu general text translation (appid + md5 sign)
pub struct BaiduTranslator {
    client: Client,
    endpoint: String,
}

impl BaiduTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, BAIDU_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Translator for BaiduTranslator {
    fn provider(&self) -> Provider {
        Provider::Baidu
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
        credentials: &Credentials,
    ) -> Result<String, FtError> {
        if !credentials.is_configured() {
            return Err(FtError::NotConfigured(Provider::Baidu));
        }

        let salt = rand::thread_rng().gen_range(32768..65536u32).to_string();
        let sign = sign(&credentials.id, &request.text, &salt, &credentials.secret);

        let params = [
            ("appid", credentials.id.as_str()),
            ("q", request.text.as_str()),
            ("from", request.from.as_str()),
            ("to", request.to.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];

        debug!("Baidu request: {} chars, salt {}", request.text.chars().count(), salt);
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

/// sign = md5(appid + q + salt + key), lower-case hex.
/// Legacy vendor scheme; the endpoint accepts nothing else.
pub fn sign(id: &str, text: &str, salt: &str, secret: &str) -> String {
    let digest = md5::compute(format!("{}{}{}{}", id, text, salt, secret));
    format!("{:x}", digest)
}

fn parse_response(body: &str) -> Result<String, FtError> {
    let response: BaiduResponse = serde_json::from_str(body)?;

    if let Some(code) = response.error_code {
        let code = match code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        // 52000 is the vendor's "success" code
        if code != "52000" {
            return Err(FtError::Api(format!(
                "Baidu API Error {}: {}",
                code,
                response.error_msg.as_deref().unwrap_or("Unknown error")
            )));
        }
    }

    response
        .trans_result
        .and_then(|results| results.into_iter().next())
        .map(|first| first.dst)
        .ok_or_else(|| FtError::Api("Baidu response has no trans_result".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LanguagePair;
    use crate::infrastructure::network::testing::{field, form_fields, serve_once};

    #[test]
    fn sign_matches_vendor_example() {
        assert_eq!(
            sign("2015063000000001", "apple", "1435660288", "12345678"),
            "f89f9594663708c1605f3d736d01d2d4"
        );
    }

    #[test]
    fn sign_is_deterministic_and_input_sensitive() {
        let base = sign("X", "hello", "40000", "Y");
        assert_eq!(base, "a776917e2ffa627725c6643beefed2f2");
        assert_eq!(base, sign("X", "hello", "40000", "Y"));
        assert_ne!(base, sign("X", "hello!", "40000", "Y"));
        assert_ne!(base, sign("X", "hello", "40001", "Y"));
    }

    #[test]
    fn parses_first_translation() {
        let body = r#"{"from":"en","to":"zh","trans_result":[{"src":"Hello","dst":"你好"},{"src":"x","dst":"y"}]}"#;
        assert_eq!(parse_response(body).unwrap(), "你好");
    }

    #[test]
    fn vendor_error_becomes_api_error() {
        let body = r#"{"error_code":"54001","error_msg":"Invalid Sign"}"#;
        match parse_response(body) {
            Err(FtError::Api(msg)) => assert!(msg.contains("54001")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_result_list_is_an_error() {
        assert!(parse_response(r#"{"trans_result":[]}"#).is_err());
        assert!(parse_response("<html>").is_err());
    }

    #[tokio::test]
    async fn posts_signed_form_and_reads_dst() {
        let (url, server) = serve_once(200, r#"{"trans_result":[{"src":"Hello","dst":"你好"}]}"#).await;
        let translator = BaiduTranslator::with_endpoint(Client::new(), url);
        let request = TranslationRequest::new("Hello", &LanguagePair::default());

        let translated = translator
            .translate(&request, &Credentials::new("X", "Y"))
            .await
            .unwrap();
        assert_eq!(translated, "你好");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api"));
        let fields = form_fields(&raw);
        assert_eq!(field(&fields, "appid"), Some("X"));
        assert_eq!(field(&fields, "q"), Some("Hello"));
        assert_eq!(field(&fields, "from"), Some("en"));
        assert_eq!(field(&fields, "to"), Some("zh"));

        let salt = field(&fields, "salt").unwrap();
        let salt_value: u32 = salt.parse().unwrap();
        assert!((32768..65536).contains(&salt_value));
        assert_eq!(field(&fields, "sign"), Some(sign("X", "Hello", salt, "Y").as_str()));
    }

    #[tokio::test]
    async fn missing_credentials_skip_the_call() {
        let translator = BaiduTranslator::with_endpoint(Client::new(), "http://127.0.0.1:9/");
        let request = TranslationRequest::new("Hello", &LanguagePair::default());
        let err = translator
            .translate(&request, &Credentials::new("X", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, FtError::NotConfigured(Provider::Baidu)));
    }
}
