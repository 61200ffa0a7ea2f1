use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Case events: identifiers the case-data platform sends with each callback
// ---------------------------------------------------------------------------

/// An event identifier known to this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseEvent {
    /// Judge has made a decision; the respondents must be told.
    StartRespondentNotificationProcessMakeDecision,
    /// Parent case event used to record a child application's new state.
    UpdateCaseWithGaState,
    /// Judge makes a decision on a general application.
    MakeDecision,
    /// Closes the judge's business process on the application.
    EndJudgeBusinessProcessGaspec,
}

/// Every event, in declaration order.
pub const CASE_EVENTS: &[CaseEvent] = &[
    CaseEvent::StartRespondentNotificationProcessMakeDecision,
    CaseEvent::UpdateCaseWithGaState,
    CaseEvent::MakeDecision,
    CaseEvent::EndJudgeBusinessProcessGaspec,
];

impl CaseEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseEvent::StartRespondentNotificationProcessMakeDecision => {
                "START_RESPONDENT_NOTIFICATION_PROCESS_MAKE_DECISION"
            }
            CaseEvent::UpdateCaseWithGaState => "UPDATE_CASE_WITH_GA_STATE",
            CaseEvent::MakeDecision => "MAKE_DECISION",
            CaseEvent::EndJudgeBusinessProcessGaspec => "END_JUDGE_BUSINESS_PROCESS_GASPEC",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        CASE_EVENTS.iter().copied().find(|e| e.as_str() == s)
    }

    /// Summary recorded on the platform's event history.
    pub fn summary(&self) -> &'static str {
        match self {
            CaseEvent::StartRespondentNotificationProcessMakeDecision => {
                "Notify respondents of judicial decision"
            }
            CaseEvent::UpdateCaseWithGaState => "Update general application state",
            CaseEvent::MakeDecision => "Make decision",
            CaseEvent::EndJudgeBusinessProcessGaspec => "End judge business process",
        }
    }
}

impl fmt::Display for CaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Callback stages
// ---------------------------------------------------------------------------

/// The lifecycle stage at which the platform calls back into this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum CallbackType {
    AboutToStart,
    Mid,
    AboutToSubmit,
    Submitted,
}

impl CallbackType {
    /// URL path segment, e.g. `about-to-submit`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackType::AboutToStart => "about-to-start",
            CallbackType::Mid => "mid",
            CallbackType::AboutToSubmit => "about-to-submit",
            CallbackType::Submitted => "submitted",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "about-to-start" => Some(CallbackType::AboutToStart),
            "mid" => Some(CallbackType::Mid),
            "about-to-submit" => Some(CallbackType::AboutToSubmit),
            "submitted" => Some(CallbackType::Submitted),
            _ => None,
        }
    }
}
