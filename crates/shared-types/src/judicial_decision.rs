use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Judge decision option ───────────────────────────────────────────

/// The kind of decision a judge makes on a general application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JudgeDecisionOption {
    MakeAnOrder,
    RequestMoreInfo,
    ListForAHearing,
    MakeOrderForWrittenRepresentations,
}

/// The judge's chosen decision, as stored on the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudicialDecision {
    pub decision: JudgeDecisionOption,
}

// ── Written representations ─────────────────────────────────────────

/// Whether parties make written representations one after the other or
/// at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrittenOption {
    SequentialRepresentations,
    ConcurrentRepresentations,
}

/// An order for written representations. Exactly one deadline exists and
/// it belongs to the selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WrittenRepresentationsFields", into = "WrittenRepresentationsFields")]
pub enum WrittenRepresentationsDecision {
    SequentialRepresentations { by: Option<NaiveDate> },
    ConcurrentRepresentations { by: Option<NaiveDate> },
}

impl WrittenRepresentationsDecision {
    /// The deadline for the selected option, if the judge entered one.
    pub fn by(&self) -> Option<NaiveDate> {
        match *self {
            Self::SequentialRepresentations { by } | Self::ConcurrentRepresentations { by } => by,
        }
    }
}

/// Flat CCD shape: one option field plus a date field per option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WrittenRepresentationsFields {
    written_option: WrittenOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    written_sequential_representations_by: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    written_concurrent_representations_by: Option<NaiveDate>,
}

impl From<WrittenRepresentationsFields> for WrittenRepresentationsDecision {
    fn from(f: WrittenRepresentationsFields) -> Self {
        // The date belonging to the other option is never read.
        match f.written_option {
            WrittenOption::SequentialRepresentations => Self::SequentialRepresentations {
                by: f.written_sequential_representations_by,
            },
            WrittenOption::ConcurrentRepresentations => Self::ConcurrentRepresentations {
                by: f.written_concurrent_representations_by,
            },
        }
    }
}

impl From<WrittenRepresentationsDecision> for WrittenRepresentationsFields {
    fn from(d: WrittenRepresentationsDecision) -> Self {
        match d {
            WrittenRepresentationsDecision::SequentialRepresentations { by } => Self {
                written_option: WrittenOption::SequentialRepresentations,
                written_sequential_representations_by: by,
                written_concurrent_representations_by: None,
            },
            WrittenRepresentationsDecision::ConcurrentRepresentations { by } => Self {
                written_option: WrittenOption::ConcurrentRepresentations,
                written_sequential_representations_by: None,
                written_concurrent_representations_by: by,
            },
        }
    }
}

// ── Request more information ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestMoreInfoOption {
    RequestMoreInformation,
    SendAppToOtherParty,
}

/// Judge asks the applicant for more information by a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMoreInfo {
    pub request_more_info_option: RequestMoreInfoOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_request_more_info_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_request_more_info_by_date: Option<NaiveDate>,
}
