//! Date rules applied while a judge composes a decision.
//!
//! Findings are returned as messages for the judge's form, never as errors.

use chrono::{Local, NaiveDate};
use shared_types::{
    CaseData, JudgeDecisionOption, RequestMoreInfo, RequestMoreInfoOption,
    WrittenRepresentationsDecision,
};

pub const WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST: &str =
    "The written representations date cannot be in the past.";

pub const REQUESTED_MORE_INFO_BY_DATE_REQUIRED: &str =
    "The date, by which the applicant must respond, is required.";

pub const REQUESTED_MORE_INFO_BY_DATE_IN_PAST: &str =
    "The date, by which the applicant must respond, cannot be in past.";

/// Today's calendar date in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check the deadline of a written representations order against `today`.
///
/// Only the date of the selected option is looked at. A deadline equal to
/// `today` is fine; a missing one is not this check's concern.
pub fn validate_written_representations_dates(
    decision: &WrittenRepresentationsDecision,
    today: NaiveDate,
) -> Vec<String> {
    if is_in_past(decision.by(), today) {
        vec![WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST.to_string()]
    } else {
        Vec::new()
    }
}

/// Check the response-by date when the judge asks the applicant for more
/// information. Sending the application to the other party needs no date.
pub fn validate_request_more_info_date(info: &RequestMoreInfo, today: NaiveDate) -> Vec<String> {
    if info.request_more_info_option != RequestMoreInfoOption::RequestMoreInformation {
        return Vec::new();
    }

    match info.judge_request_more_info_by_date {
        None => vec![REQUESTED_MORE_INFO_BY_DATE_REQUIRED.to_string()],
        Some(date) if date < today => vec![REQUESTED_MORE_INFO_BY_DATE_IN_PAST.to_string()],
        Some(_) => Vec::new(),
    }
}

/// Run the rules that apply to the decision the judge picked.
pub fn validate_decision(case_data: &CaseData, today: NaiveDate) -> Vec<String> {
    let Some(decision) = case_data.judicial_decision.as_ref().map(|d| d.decision) else {
        return Vec::new();
    };

    match decision {
        JudgeDecisionOption::MakeOrderForWrittenRepresentations => case_data
            .judicial_decision_make_order_for_written_representations
            .as_ref()
            .map(|d| validate_written_representations_dates(d, today))
            .unwrap_or_default(),
        JudgeDecisionOption::RequestMoreInfo => case_data
            .judicial_decision_request_more_info
            .as_ref()
            .map(|info| validate_request_more_info_date(info, today))
            .unwrap_or_default(),
        JudgeDecisionOption::MakeAnOrder | JudgeDecisionOption::ListForAHearing => Vec::new(),
    }
}

fn is_in_past(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d < today)
}
