// --- Environment helpers ---

fn mailgun_api_key() -> Result<String, String> {
    std::env::var("MAILGUN_API_KEY").map_err(|_| "MAILGUN_API_KEY is not configured".to_string())
}

fn mailgun_domain() -> Result<String, String> {
    std::env::var("MAILGUN_DOMAIN").map_err(|_| "MAILGUN_DOMAIN is not configured".to_string())
}

fn mailgun_from() -> Result<String, String> {
    match std::env::var("MAILGUN_FROM") {
        Ok(v) => Ok(v),
        Err(_) => Ok(format!("{} <noreply@{}>", app_name(), mailgun_domain()?)),
    }
}

pub(crate) fn app_name() -> String {
    std::env::var("APP_NAME").unwrap_or_else(|_| "General Applications".to_string())
}

// --- Core email sending ---

#[tracing::instrument(skip(html_body))]
pub async fn send_email(to: &str, subject: &str, html_body: &str) -> Result<(), String> {
    let domain = mailgun_domain()?;
    let url = format!("https://api.mailgun.net/v3/{}/messages", domain);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .basic_auth("api", Some(mailgun_api_key()?))
        .form(&[
            ("from", mailgun_from()?),
            ("to", to.to_string()),
            ("subject", subject.to_string()),
            ("html", html_body.to_string()),
        ])
        .send()
        .await
        .map_err(|e| format!("Mailgun request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Mailgun API error ({}): {}", status, body));
    }

    tracing::info!(to = to, subject = subject, "Email sent successfully");
    Ok(())
}

// --- Email templates ---

pub(crate) mod templates {
    /// Tell a respondent solicitor that the judge has decided an application.
    pub fn judicial_decision_html(case_reference: &str, decision: &str, app_name: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: Arial, sans-serif; color: #0b0c0c; padding: 20px;">
  <div style="max-width: 600px; margin: 0 auto; border-top: 10px solid #1d70b8; padding: 30px;">
    <h1>A judge has made a decision on an application</h1>
    <p>Application reference: <strong>{case_reference}</strong></p>
    <p>Decision: {decision}</p>
    <p>Sign in to view the order and any directions you must follow.</p>
    <p style="color: #505a5f; font-size: 12px;">This is an automated message from {app_name}. Do not reply.</p>
  </div>
</body>
</html>"#
        )
    }
}
