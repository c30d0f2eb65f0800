use crate::config::DumplingConfig;
use crate::credential::{CREDENTIAL_TEST_PATH, CREDENTIAL_TEST_VIDEO_URL, DumplingAiCredential};
use crate::error::{ApiErrorBody, DumplingClientError};

use log::debug;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use url::Url;

/// Authenticated client for the Dumpling AI REST API.
#[derive(Clone)]
pub struct DumplingClient {
    base_url: Url,
    client: Client,
}

impl DumplingClient {
    /// Build a client from config. The credential's `Authorization` header is
    /// attached to every request.
    pub fn new(
        config: &DumplingConfig,
        credential: &DumplingAiCredential,
    ) -> Result<Self, DumplingClientError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let (auth_name, auth_value) = credential.authorization_header()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(auth_name, auth_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an operation path such as `/search`.
    pub fn endpoint(&self, path: &str) -> Result<Url, DumplingClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// POST a JSON body and return the parsed response.
    ///
    /// A success body that is not JSON comes back as a JSON string; an empty
    /// success body as an empty object.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, DumplingClientError> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if !status.is_success() => {
                debug!("POST {} failed with HTTP {}, body unreadable: {}", path, status.as_u16(), e);
                return Err(DumplingClientError::api(status.as_u16(), ApiErrorBody::Empty));
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() {
            debug!("POST {} failed with HTTP {}", path, status.as_u16());
            return Err(DumplingClientError::api(
                status.as_u16(),
                ApiErrorBody::from_text(text),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Send the credential test request. Succeeds when the key is accepted.
    pub async fn test_credential(&self) -> Result<(), DumplingClientError> {
        let body = json!({ "videoUrl": CREDENTIAL_TEST_VIDEO_URL });
        self.post(CREDENTIAL_TEST_PATH, &body).await?;
        Ok(())
    }
}

/// `Url::join` replaces the last path segment unless the base ends with `/`.
fn normalize_base_url(base_url: &str) -> Result<Url, DumplingClientError> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
