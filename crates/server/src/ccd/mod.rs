//! Access to the case-data platform.

pub mod client;
pub mod converter;

use async_trait::async_trait;
use shared_types::{AppError, CaseDataContent, CaseDetails, CaseEvent, CaseId, StartEventResponse};

pub use client::CoreCaseDataClient;
pub use converter::CaseDetailsConverter;

/// Two-step case updates (start an event, then submit it).
///
/// Errors from the platform are returned as `AppError` and are never
/// retried here.
#[async_trait]
pub trait CaseDataService: Send + Sync {
    async fn start_update(
        &self,
        case_id: CaseId,
        event: CaseEvent,
    ) -> Result<StartEventResponse, AppError>;

    async fn submit_update(
        &self,
        case_id: CaseId,
        content: CaseDataContent,
    ) -> Result<CaseDetails, AppError>;
}
