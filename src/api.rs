use crate::errors::ClientError;
use crate::models::{AnalyticsSnapshot, CompletionRecord, CompletionRequest, Habit, NewHabit};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Thin client over the habit API. One attempt per call, no retries, no timeout
/// beyond the transport default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn list_habits(&self) -> Result<Vec<Habit>, ClientError> {
        let response = self.http.get(self.url("/habits/")).send().await?;
        json(response).await
    }

    pub async fn create_habit(&self, habit: &NewHabit) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/habits/"))
            .json(habit)
            .send()
            .await?;
        ensure_success(response).await.map(drop)
    }

    pub async fn delete_habit(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/habits/{id}")))
            .send()
            .await?;
        ensure_success(response).await.map(drop)
    }

    pub async fn record_completion(&self, completion: &CompletionRequest) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/habits/complete/"))
            .json(completion)
            .send()
            .await?;
        ensure_success(response).await.map(drop)
    }

    pub async fn analytics(&self) -> Result<AnalyticsSnapshot, ClientError> {
        let response = self.http.get(self.url("/analytics/")).send().await?;
        json(response).await
    }

    pub async fn completion_history(&self, habit_id: i64) -> Result<Vec<CompletionRecord>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/habits/{habit_id}/completions/")))
            .send()
            .await?;
        json(response).await
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        ensure_success(response).await.map(drop)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    debug!(url = %response.url(), status = status.as_u16(), "api response");
    if status.is_success() {
        return Ok(response);
    }
    // A body that cannot be read is reported as empty rather than masking the status.
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode(err.to_string()))
}
