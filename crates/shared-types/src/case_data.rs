use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::case_event::CaseEvent;
use crate::judicial_decision::{JudicialDecision, RequestMoreInfo, WrittenRepresentationsDecision};

// ── Identifiers ─────────────────────────────────────────────────────

/// Numeric case reference on the case-data platform.
///
/// The platform writes references both as JSON numbers and as 16-digit
/// strings; both forms are accepted. Always serialized as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CaseIdRepr", into = "i64")]
pub struct CaseId(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum CaseIdRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<CaseIdRepr> for CaseId {
    type Error = String;

    fn try_from(repr: CaseIdRepr) -> Result<Self, Self::Error> {
        match repr {
            CaseIdRepr::Number(n) if n > 0 => Ok(CaseId(n)),
            CaseIdRepr::Number(n) => Err(format!("Invalid case reference: {}", n)),
            CaseIdRepr::Text(s) => s.parse(),
        }
    }
}

impl From<CaseId> for i64 {
    fn from(id: CaseId) -> Self {
        id.0
    }
}

impl FromStr for CaseId {
    type Err = String;

    /// Accepts `1644495739087775` and grouped forms such as
    /// `1644-4957-3908-7775`. Separators must sit between digit groups.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid case reference: {}", s);

        let mut digits = String::with_capacity(s.len());
        for group in s.trim().split(['-', ' ']) {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.push_str(group);
        }

        match digits.parse::<i64>() {
            Ok(n) if n > 0 => Ok(CaseId(n)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── CCD primitives ──────────────────────────────────────────────────

/// The platform sends an empty collection as `null` as often as it omits it.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    pub fn is_yes(self) -> bool {
        self == YesOrNo::Yes
    }
}

/// One entry of a CCD collection field. New entries carry no id; the
/// platform assigns one on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: T,
}

impl<T> Element<T> {
    pub fn new(value: T) -> Self {
        Self { id: None, value }
    }
}

/// Link from one case to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseLink {
    #[serde(rename = "CaseReference", default, skip_serializing_if = "Option::is_none")]
    pub case_reference: Option<String>,
}

impl CaseLink {
    pub fn case_id(&self) -> Option<CaseId> {
        self.case_reference.as_deref().and_then(|r| r.parse().ok())
    }
}

// ── General application parts ───────────────────────────────────────

/// Whether the applicant chose to tell the other party about the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformOtherParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_with_notice: Option<YesOrNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_without_notice: Option<String>,
}

/// A respondent's legal representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation_identifier: Option<String>,
}

/// Summary of a child application held on the parent case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralApplicationsDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_application_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_link: Option<CaseLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_claimant_is_applicant: Option<YesOrNo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeneralApplicationsDetails {
    pub fn links_to(&self, case_id: CaseId) -> bool {
        self.case_link.as_ref().and_then(CaseLink::case_id) == Some(case_id)
    }
}

// ── Case record ─────────────────────────────────────────────────────

/// A case as seen by this service: the fields it reads or writes are typed,
/// everything else is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccd_case_reference: Option<CaseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccd_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_app_parent_case_link: Option<CaseLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_is_uncloaked_once: Option<YesOrNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_app_inform_other_party: Option<InformOtherParty>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub general_app_respondent_solicitors: Vec<Element<SolicitorDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_decision: Option<JudicialDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_decision_make_order_for_written_representations:
        Option<WrittenRepresentationsDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_decision_request_more_info: Option<RequestMoreInfo>,
    /// Parent side: every application filed on this case.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub general_applications_details: Vec<Element<GeneralApplicationsDetails>>,
    /// Parent side: applications the respondent solicitors may see.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ga_details_respondent_sol: Vec<Element<GeneralApplicationsDetails>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Typed fields that arrived as an explicit `null`. The platform treats
    /// `null` as "clear" and a missing key as "unchanged", so these are
    /// written back as `null` when still unset.
    #[serde(skip)]
    pub null_fields: BTreeSet<String>,
}

impl CaseData {
    pub fn parent_case_id(&self) -> Option<CaseId> {
        self.general_app_parent_case_link
            .as_ref()
            .and_then(CaseLink::case_id)
    }

    pub fn is_uncloaked(&self) -> bool {
        self.application_is_uncloaked_once.is_some_and(YesOrNo::is_yes)
    }

    pub fn is_with_notice(&self) -> bool {
        self.general_app_inform_other_party
            .as_ref()
            .and_then(|p| p.is_with_notice)
            .is_some_and(YesOrNo::is_yes)
    }

    /// Respondents may be contacted once the application is with notice
    /// or has been uncloaked.
    pub fn respondents_may_be_notified(&self) -> bool {
        self.is_with_notice() || self.is_uncloaked()
    }

    pub fn respondent_solicitor_emails(&self) -> Vec<&str> {
        self.general_app_respondent_solicitors
            .iter()
            .filter_map(|e| e.value.email.as_deref())
            .filter(|email| !email.trim().is_empty())
            .collect()
    }
}

// ── Platform payloads ───────────────────────────────────────────────

/// A case snapshot as the platform returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseDetails {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: CaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, alias = "data")]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub case_data: Map<String, Value>,
}

/// Result of starting an event: the token that authorises the submit and
/// the case as it stood when the event began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartEventResponse {
    pub token: String,
    pub case_details: CaseDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub id: CaseEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CaseEvent> for EventDescriptor {
    fn from(event: CaseEvent) -> Self {
        Self {
            id: event,
            summary: Some(event.summary().to_string()),
            description: None,
        }
    }
}

/// Body submitted to complete a started event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDataContent {
    pub event_token: String,
    pub event: EventDescriptor,
    pub data: Map<String, Value>,
    #[serde(default)]
    pub ignore_warning: bool,
}
