//! Callback handlers and the table that routes events to them.

pub mod end_judge_business_process;
pub mod make_decision;
pub mod respondent_notification;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use shared_types::{
    AppError, CallbackRequest, CallbackResponse, CallbackType, CaseData, CaseEvent, CASE_EVENTS,
};

use crate::ccd::{CaseDataService, CaseDetailsConverter};
use crate::notification::NotificationSender;
use crate::parent_case::ParentCaseUpdateHelper;

pub use end_judge_business_process::EndJudgeBusinessProcessHandler;
pub use make_decision::MakeDecisionHandler;
pub use respondent_notification::RespondentNotificationHandler;

/// Everything a handler gets for one callback.
#[derive(Debug)]
pub struct CallbackParams<'a> {
    pub callback_type: CallbackType,
    pub request: &'a CallbackRequest,
    /// `request.case_details` converted to `CaseData`.
    pub case_data: CaseData,
}

impl CallbackParams<'_> {
    /// The case data exactly as the platform sent it.
    pub fn raw_data(&self) -> serde_json::Map<String, serde_json::Value> {
        self.request.case_details.case_data.clone()
    }
}

#[async_trait]
pub trait CallbackHandler: Send + Sync {
    /// Events this handler accepts. Fixed for the life of the handler.
    fn handled_events(&self) -> &'static [CaseEvent];

    async fn handle(&self, params: &CallbackParams<'_>) -> Result<CallbackResponse, AppError>;
}

/// Immutable event → handler table consulted for every callback.
pub struct HandlerRegistry {
    handlers: HashMap<CaseEvent, Arc<dyn CallbackHandler>>,
    converter: CaseDetailsConverter,
}

impl HandlerRegistry {
    pub fn new(converter: CaseDetailsConverter) -> Self {
        Self {
            handlers: HashMap::new(),
            converter,
        }
    }

    /// Add a handler for all of its events. An event may have only one handler.
    pub fn register(&mut self, handler: Arc<dyn CallbackHandler>) -> Result<(), String> {
        for event in handler.handled_events() {
            if self.handlers.contains_key(event) {
                return Err(format!("Event {} already has a callback handler", event));
            }
        }
        for event in handler.handled_events() {
            self.handlers.insert(*event, Arc::clone(&handler));
        }
        Ok(())
    }

    /// The handler registered for `event_id`, if the id names a known event.
    pub fn handler_for(&self, event_id: &str) -> Option<&Arc<dyn CallbackHandler>> {
        CaseEvent::from_str_opt(event_id).and_then(|event| self.handlers.get(&event))
    }

    /// Registered events in declaration order.
    pub fn events(&self) -> Vec<CaseEvent> {
        CASE_EVENTS
            .iter()
            .copied()
            .filter(|e| self.handlers.contains_key(e))
            .collect()
    }

    /// Route a callback to the handler registered for its event.
    #[tracing::instrument(skip(self, request), fields(event = %request.event_id, case_id = %request.case_details.id))]
    pub async fn dispatch(
        &self,
        callback_type: CallbackType,
        request: &CallbackRequest,
    ) -> Result<CallbackResponse, AppError> {
        let handler = self.handler_for(&request.event_id).ok_or_else(|| {
            AppError::not_found(format!(
                "No callback handler registered for event {}",
                request.event_id
            ))
        })?;

        let case_data = self.converter.to_case_data(&request.case_details)?;
        let params = CallbackParams {
            callback_type,
            request,
            case_data,
        };

        let response = handler.handle(&params).await;
        match &response {
            Ok(r) if !r.errors.is_empty() => {
                tracing::info!(errors = r.errors.len(), "Callback returned validation errors")
            }
            Ok(_) => tracing::debug!("Callback handled"),
            Err(e) => tracing::error!(error = %e, "Callback failed"),
        }
        response
    }
}

/// Registry with every handler this service provides.
pub fn default_registry(
    case_data_service: Arc<dyn CaseDataService>,
    notification_sender: Arc<dyn NotificationSender>,
) -> Result<HandlerRegistry, String> {
    let converter = CaseDetailsConverter::new();
    let parent_helper = Arc::new(ParentCaseUpdateHelper::new(case_data_service, converter));

    let mut registry = HandlerRegistry::new(converter);
    registry.register(Arc::new(RespondentNotificationHandler::new(notification_sender)))?;
    registry.register(Arc::new(MakeDecisionHandler::new()))?;
    registry.register(Arc::new(EndJudgeBusinessProcessHandler::new(parent_helper)))?;
    Ok(registry)
}
