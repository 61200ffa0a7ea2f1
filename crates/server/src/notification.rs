//! Respondent notifications after a judicial decision.

use async_trait::async_trait;
use shared_types::{CaseData, JudgeDecisionOption};

use crate::mailgun;

/// Delivers the "decision made" notice to the respondents of an application.
///
/// Returns the sender's own error text on failure; callers decide how
/// failures surface.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_respondent_notification(&self, case_data: &CaseData) -> Result<(), String>;
}

/// Sends the notice to every respondent solicitor by email through Mailgun.
#[derive(Debug, Clone, Copy, Default)]
pub struct MailgunRespondentNotifier;

impl MailgunRespondentNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for MailgunRespondentNotifier {
    #[tracing::instrument(skip_all, fields(case_id = ?case_data.ccd_case_reference))]
    async fn send_respondent_notification(&self, case_data: &CaseData) -> Result<(), String> {
        if !crate::config::feature_flags().mailgun {
            tracing::debug!("Respondent notification skipped, mailgun disabled");
            return Ok(());
        }

        if !case_data.respondents_may_be_notified() {
            tracing::debug!("Respondent notification skipped, application is without notice");
            return Ok(());
        }

        let recipients = case_data.respondent_solicitor_emails();
        if recipients.is_empty() {
            tracing::warn!("No respondent solicitor email addresses on the application");
            return Ok(());
        }

        let case_reference = case_data
            .ccd_case_reference
            .map(|id| id.to_string())
            .unwrap_or_default();
        let decision = decision_label(case_data);
        let app_name = mailgun::app_name();
        let subject = format!("[{}] Decision made on application {}", app_name, case_reference);
        let html = mailgun::templates::judicial_decision_html(&case_reference, decision, &app_name);

        for to in &recipients {
            // First failure aborts the whole notification.
            mailgun::send_email(to, &subject, &html).await?;
        }

        tracing::info!(recipients = recipients.len(), "Respondent notification sent");
        Ok(())
    }
}

/// Human-readable name of the judge's decision for the email body.
fn decision_label(case_data: &CaseData) -> &'static str {
    match case_data.judicial_decision.as_ref().map(|d| d.decision) {
        Some(JudgeDecisionOption::MakeAnOrder) => "Make an order",
        Some(JudgeDecisionOption::RequestMoreInfo) => "Request more information",
        Some(JudgeDecisionOption::ListForAHearing) => "List for a hearing",
        Some(JudgeDecisionOption::MakeOrderForWrittenRepresentations) => {
            "Make an order for written representations"
        }
        None => "Decision recorded",
    }
}
