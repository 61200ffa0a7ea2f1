use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::case_data::CaseDetails;

/// Body the case-data platform posts to a callback URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CallbackRequest {
    /// Kept as text so that events this service does not know can be
    /// reported back instead of failing deserialization.
    pub event_id: String,
    pub case_details: CaseDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_details_before: Option<CaseDetails>,
}

/// Reply to a callback. `errors` block the user's submission; `data`
/// replaces the case data when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CallbackResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_body: Option<String>,
}

impl CallbackResponse {
    /// Nothing to change, nothing to report.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_data(data: Map<String, Value>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn with_errors(data: Map<String, Value>, errors: Vec<String>) -> Self {
        Self {
            data: Some(data),
            errors,
            ..Self::default()
        }
    }
}
