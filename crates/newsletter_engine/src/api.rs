use newsletter_logging::nl_debug;
use reqwest::multipart::Form;
use serde::Deserialize;

use crate::config::UNDEFINED;
use crate::{ApiConfig, ApiError, FailureKind};

/// Outbound calls to the newsletter backend.
#[async_trait::async_trait]
pub trait NewsletterApi: Send + Sync {
    /// POST `/token` with the configured admin credentials.
    async fn issue_token(&self) -> Result<String, ApiError>;

    /// POST `/generate-newsletter`; returns the backend task identifier.
    async fn generate_newsletter(&self, token: &str, topics: &[String]) -> Result<String, ApiError>;

    /// GET `/tasks/{task_id}`; returns the raw `status` value.
    async fn task_status(&self, task_id: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    task_id: String,
}

#[derive(Debug, Deserialize)]
struct TaskStatusResponse {
    #[serde(default)]
    status: String,
}

/// Encodes a credential as a JSON string scalar, quotes included.
///
/// The backend expects the quoted form. An unset value is sent as the bare
/// word `undefined`.
pub fn encode_credential(value: Option<&str>) -> String {
    match value {
        Some(value) => serde_json::Value::from(value).to_string(),
        None => UNDEFINED.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        // No timeouts: requests wait for the backend as long as it takes.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let endpoint = self.config.endpoint(path);
        reqwest::Url::parse(&endpoint)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{endpoint}: {err}")))
    }
}

#[async_trait::async_trait]
impl NewsletterApi for ReqwestApi {
    async fn issue_token(&self) -> Result<String, ApiError> {
        let form = Form::new()
            .text("username", encode_credential(self.config.username.as_deref()))
            .text("password", encode_credential(self.config.password.as_deref()));

        let response = self
            .client
            .post(self.url("token")?)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: TokenResponse = decode(ensure_success(response)?).await?;

        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::new(
                FailureKind::MissingToken,
                "token response carried no token",
            )),
        }
    }

    async fn generate_newsletter(&self, token: &str, topics: &[String]) -> Result<String, ApiError> {
        let topics_json = serde_json::Value::from(topics.to_vec()).to_string();
        let form = Form::new().text("topics", topics_json);

        let response = self
            .client
            .post(self.url("generate-newsletter")?)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: GenerateResponse = decode(ensure_success(response)?).await?;
        nl_debug!("Generation accepted, task_id={}", body.task_id);
        Ok(body.task_id)
    }

    async fn task_status(&self, task_id: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("tasks/{task_id}"))?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: TaskStatusResponse = decode(ensure_success(response)?).await?;
        Ok(body.status)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("{} returned {}", response.url(), status),
        ))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::encode_credential;

    #[test]
    fn credentials_are_json_string_encoded() {
        assert_eq!(encode_credential(Some("admin")), "\"admin\"");
        assert_eq!(encode_credential(Some("a\"b")), "\"a\\\"b\"");
    }

    #[test]
    fn missing_credential_becomes_undefined() {
        assert_eq!(encode_credential(None), "undefined");
    }
}
