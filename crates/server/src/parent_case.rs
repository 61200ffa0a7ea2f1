//! Keeps the parent case's view of a child general application current.

use std::sync::Arc;

use shared_types::{AppError, CaseData, CaseDataContent, CaseEvent, CaseId, Element, EventDescriptor};

use crate::ccd::{CaseDataService, CaseDetailsConverter};

/// Event used on the parent case for every state change of a child.
pub const PARENT_UPDATE_EVENT: CaseEvent = CaseEvent::UpdateCaseWithGaState;

pub struct ParentCaseUpdateHelper {
    case_data_service: Arc<dyn CaseDataService>,
    converter: CaseDetailsConverter,
}

impl ParentCaseUpdateHelper {
    pub fn new(case_data_service: Arc<dyn CaseDataService>, converter: CaseDetailsConverter) -> Self {
        Self {
            case_data_service,
            converter,
        }
    }

    /// Record `new_state` against the child application on its parent case.
    ///
    /// One `start_update` and one `submit_update` per call. Errors from
    /// either are returned unchanged; a started event that is never
    /// submitted is left for the platform to expire.
    #[tracing::instrument(skip(self, child), fields(child = ?child.ccd_case_reference))]
    pub async fn update_parent_application_visibility_with_new_state(
        &self,
        child: &CaseData,
        new_state: &str,
    ) -> Result<(), AppError> {
        let child_id = child
            .ccd_case_reference
            .ok_or_else(|| AppError::bad_request("Application has no case reference"))?;
        let parent_id = child
            .parent_case_id()
            .ok_or_else(|| AppError::bad_request("Application is not linked to a parent case"))?;

        let started = self
            .case_data_service
            .start_update(parent_id, PARENT_UPDATE_EVENT)
            .await?;

        let mut parent = self.converter.to_case_data(&started.case_details)?;
        apply_application_state(&mut parent, child_id, new_state, child.is_uncloaked());

        let content = CaseDataContent {
            event_token: started.token,
            event: EventDescriptor::from(PARENT_UPDATE_EVENT),
            data: self.converter.to_data_map(&parent)?,
            ignore_warning: false,
        };

        if let Err(e) = self.case_data_service.submit_update(parent_id, content).await {
            tracing::error!(error = %e, %parent_id, "Parent update started but not submitted");
            return Err(e);
        }

        tracing::info!(%parent_id, %child_id, new_state, "Parent case updated with application state");
        Ok(())
    }
}

/// Set the state on every summary of `child_id` held by the parent. An
/// uncloaked application is also made visible to respondent solicitors.
pub fn apply_application_state(
    parent: &mut CaseData,
    child_id: CaseId,
    new_state: &str,
    uncloaked: bool,
) {
    for entry in parent
        .general_applications_details
        .iter_mut()
        .chain(parent.ga_details_respondent_sol.iter_mut())
        .filter(|e| e.value.links_to(child_id))
    {
        entry.value.case_state = Some(new_state.to_string());
    }

    let visible_to_respondent = parent
        .ga_details_respondent_sol
        .iter()
        .any(|e| e.value.links_to(child_id));

    if uncloaked && !visible_to_respondent {
        let summary = parent
            .general_applications_details
            .iter()
            .find(|e| e.value.links_to(child_id))
            .map(|e| e.value.clone());
        if let Some(summary) = summary {
            parent.ga_details_respondent_sol.push(Element::new(summary));
        }
    }
}
