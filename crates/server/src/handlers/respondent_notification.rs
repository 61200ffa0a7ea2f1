use async_trait::async_trait;
use std::sync::Arc;

use shared_types::{AppError, CallbackResponse, CallbackType, CaseEvent};

use super::{CallbackHandler, CallbackParams};
use crate::notification::NotificationSender;

const EVENTS: &[CaseEvent] = &[CaseEvent::StartRespondentNotificationProcessMakeDecision];

/// Notifies the respondents once a judge has decided an application.
///
/// A failed notification fails the callback, so the workflow step is
/// marked failed instead of appearing to succeed.
pub struct RespondentNotificationHandler {
    sender: Arc<dyn NotificationSender>,
}

impl RespondentNotificationHandler {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl CallbackHandler for RespondentNotificationHandler {
    fn handled_events(&self) -> &'static [CaseEvent] {
        EVENTS
    }

    async fn handle(&self, params: &CallbackParams<'_>) -> Result<CallbackResponse, AppError> {
        if params.callback_type != CallbackType::AboutToSubmit {
            return Ok(CallbackResponse::empty());
        }

        self.sender
            .send_respondent_notification(&params.case_data)
            .await
            .map_err(|cause| {
                tracing::error!(
                    error = %cause,
                    case_id = %params.request.case_details.id,
                    "Respondent notification failed"
                );
                AppError::notification_failure(cause)
            })?;

        Ok(CallbackResponse::with_data(params.raw_data()))
    }
}
