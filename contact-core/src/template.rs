//! HTML notification sent to the site owner

use chrono::{DateTime, TimeZone};

use crate::ContactSubmission;

/// Details about the request that carried a submission.
#[derive(Debug, Clone)]
pub struct SubmissionContext<Tz: TimeZone> {
    /// When the relay accepted the submission
    pub submitted_at: DateTime<Tz>,
    /// Address of the submitting peer, if known
    pub remote_addr: Option<String>,
}

/// Subject line for a notification
pub fn subject_for(name: &str) -> String {
    format!("New Contact Form Submission from {}", name)
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then turn line breaks into `<br />` while keeping the newline.
fn escape_multiline(s: &str) -> String {
    let escaped = escape_html(s);
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("<br />\r\n");
            }
            '\r' | '\n' => {
                out.push_str("<br />");
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render the HTML body of a notification.
///
/// Every user-supplied value is escaped before it is embedded.
pub fn render_notification<Tz>(submission: &ContactSubmission, context: &SubmissionContext<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let submitted = context.submitted_at.format("%B %-d, %Y at %-I:%M %p");
    let remote_addr = context.remote_addr.as_deref().unwrap_or("unknown");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>New Contact Form Submission</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #ec4899, #8b5cf6); color: white; padding: 20px; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9f9f9; padding: 20px; border-radius: 0 0 10px 10px; }}
        .field {{ margin-bottom: 15px; }}
        .label {{ font-weight: bold; color: #6a42eb; }}
        .value {{ background: white; padding: 10px; border-radius: 5px; border-left: 4px solid #6a42eb; }}
        .footer {{ margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h2>New Contact Form Submission</h2>
            <p>Someone has submitted a message through your portfolio website</p>
        </div>
        <div class="content">
            <div class="field">
                <div class="label">Name:</div>
                <div class="value">{name}</div>
            </div>
            <div class="field">
                <div class="label">Email:</div>
                <div class="value">{email}</div>
            </div>
            <div class="field">
                <div class="label">Message:</div>
                <div class="value">{message}</div>
            </div>
            <div class="footer">
                <p><strong>Submitted:</strong> {submitted}</p>
                <p><strong>IP Address:</strong> {remote_addr}</p>
                <p>This message was sent from your portfolio contact form.</p>
            </div>
        </div>
    </div>
</body>
</html>
"#,
        name = escape_html(submission.name()),
        email = escape_html(submission.email()),
        message = escape_multiline(submission.message()),
        submitted = submitted,
        remote_addr = escape_html(remote_addr),
    )
}
