use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{AppError, CaseDataContent, CaseDetails, CaseEvent, CaseId, StartEventResponse};

use super::CaseDataService;
use crate::config::CcdSettings;
use crate::error_convert::ReqwestErrorExt;

/// `CaseDataService` backed by the platform's data store REST API.
#[derive(Debug, Clone)]
pub struct CoreCaseDataClient {
    http: reqwest::Client,
    settings: CcdSettings,
}

impl CoreCaseDataClient {
    pub fn new(settings: CcdSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.settings.user_token)
            .header("ServiceAuthorization", &self.settings.service_token)
            .header("experimental", "true")
    }
}

/// Decode a successful response body or turn an error status into an AppError.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = format!("Case data service error ({})", status);
        return Err(match status.as_u16() {
            401 => AppError::unauthorized(message),
            403 => AppError::forbidden(message),
            404 => AppError::not_found(message),
            _ => AppError::upstream(message),
        }
        .with_cause(body));
    }
    response.json::<T>().await.map_err(ReqwestErrorExt::into_app_error)
}

#[async_trait]
impl CaseDataService for CoreCaseDataClient {
    #[tracing::instrument(skip(self))]
    async fn start_update(
        &self,
        case_id: CaseId,
        event: CaseEvent,
    ) -> Result<StartEventResponse, AppError> {
        let url = self.url(&format!("/cases/{}/event-triggers/{}", case_id, event.as_str()));
        let response = self
            .authorized(self.http.get(url))
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        let started: StartEventResponse = read_json(response).await?;

        tracing::debug!(%case_id, event = %event, "Case event started");
        Ok(started)
    }

    #[tracing::instrument(skip(self, content), fields(event = %content.event.id))]
    async fn submit_update(
        &self,
        case_id: CaseId,
        content: CaseDataContent,
    ) -> Result<CaseDetails, AppError> {
        let response = self
            .authorized(self.http.post(self.url(&format!("/cases/{}/events", case_id))))
            .json(&content)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        let committed: CaseDetails = read_json(response).await?;

        tracing::info!(%case_id, state = ?committed.state, "Case event submitted");
        Ok(committed)
    }
}
