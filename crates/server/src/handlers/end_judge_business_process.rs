use async_trait::async_trait;
use std::sync::Arc;

use shared_types::{AppError, CallbackResponse, CallbackType, CaseEvent};

use super::{CallbackHandler, CallbackParams};
use crate::parent_case::ParentCaseUpdateHelper;

const EVENTS: &[CaseEvent] = &[CaseEvent::EndJudgeBusinessProcessGaspec];

/// Pushes the application's state to its parent case when the judge's
/// business process ends.
pub struct EndJudgeBusinessProcessHandler {
    parent_helper: Arc<ParentCaseUpdateHelper>,
}

impl EndJudgeBusinessProcessHandler {
    pub fn new(parent_helper: Arc<ParentCaseUpdateHelper>) -> Self {
        Self { parent_helper }
    }
}

#[async_trait]
impl CallbackHandler for EndJudgeBusinessProcessHandler {
    fn handled_events(&self) -> &'static [CaseEvent] {
        EVENTS
    }

    async fn handle(&self, params: &CallbackParams<'_>) -> Result<CallbackResponse, AppError> {
        if params.callback_type != CallbackType::AboutToSubmit {
            return Ok(CallbackResponse::empty());
        }

        let state = params
            .request
            .case_details
            .state
            .as_deref()
            .ok_or_else(|| AppError::bad_request("Application has no state to propagate"))?;

        self.parent_helper
            .update_parent_application_visibility_with_new_state(&params.case_data, state)
            .await?;

        Ok(CallbackResponse::with_data(params.raw_data()))
    }
}
