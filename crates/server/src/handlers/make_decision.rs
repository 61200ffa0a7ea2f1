use async_trait::async_trait;

use shared_types::{AppError, CallbackResponse, CallbackType, CaseEvent};

use super::{CallbackHandler, CallbackParams};
use crate::judicial_decision;

const EVENTS: &[CaseEvent] = &[CaseEvent::MakeDecision];

/// Validates the judge's decision page before it can be submitted.
#[derive(Debug, Default)]
pub struct MakeDecisionHandler;

impl MakeDecisionHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CallbackHandler for MakeDecisionHandler {
    fn handled_events(&self) -> &'static [CaseEvent] {
        EVENTS
    }

    async fn handle(&self, params: &CallbackParams<'_>) -> Result<CallbackResponse, AppError> {
        match params.callback_type {
            CallbackType::Mid => {
                let errors =
                    judicial_decision::validate_decision(&params.case_data, judicial_decision::today());
                Ok(CallbackResponse::with_errors(params.raw_data(), errors))
            }
            CallbackType::AboutToSubmit => Ok(CallbackResponse::with_data(params.raw_data())),
            CallbackType::AboutToStart | CallbackType::Submitted => Ok(CallbackResponse::empty()),
        }
    }
}
