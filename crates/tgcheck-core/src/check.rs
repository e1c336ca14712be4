//! The notifier check: validate, build payload, dispatch once, report.
//!
//! `Start -> Validate -> {MissingConfig | BuildPayload -> Dispatch -> {Delivered | Rejected | TransportFault}}`
//!
//! There is no retry edge. Only the missing-config branch exits non-zero.

use std::io::Write;

use crate::{
    config::{ConfigPresence, NotifierConfig},
    errors::Error,
    messaging::{
        port::MessageTransport,
        types::{endpoint_url, SendMessageRequest, TransportFault},
    },
    Result,
};

pub const EXIT_OK: u8 = 0;
pub const EXIT_MISSING_CONFIG: u8 = 1;

/// Result of a single dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// HTTP 200.
    Delivered { body: String },
    /// Any other status; the raw body is kept for the report.
    Rejected { status: u16, body: String },
    TransportFault(TransportFault),
}

impl CheckOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Delivered { body } => vec![
                "✅ Message sent successfully!".to_string(),
                format!("Response: {}", echo_body(body)),
            ],
            Self::Rejected { status, body } => vec![
                format!("❌ API error: {status}"),
                format!("Details: {body}"),
            ],
            Self::TransportFault(fault) => vec![format!("❌ Connection error: {fault}")],
        }
    }

    pub fn report(&self, out: &mut impl Write) -> Result<()> {
        for line in self.render() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// How a full run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckReport {
    MissingConfig { missing: Vec<&'static str> },
    Dispatched(CheckOutcome),
}

impl CheckReport {
    /// Rejections and transport faults are reported but still exit 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingConfig { .. } => EXIT_MISSING_CONFIG,
            Self::Dispatched(_) => EXIT_OK,
        }
    }
}

/// Send the test message once and classify the result.
pub async fn dispatch(transport: &dyn MessageTransport, cfg: &NotifierConfig) -> CheckOutcome {
    let url = endpoint_url(&cfg.api_base, &cfg.bot_token);
    let body = SendMessageRequest::test_message(&cfg.chat_id);

    tracing::debug!(chat_id = %cfg.chat_id, api_base = %cfg.api_base, "dispatching test message");

    match transport.post_json(&url, &body).await {
        Ok(resp) if resp.status == 200 => CheckOutcome::Delivered { body: resp.body },
        Ok(resp) => {
            tracing::debug!(status = resp.status, "sendMessage rejected");
            CheckOutcome::Rejected {
                status: resp.status,
                body: resp.body,
            }
        }
        Err(fault) => {
            let description = redact_token(&fault.description, cfg.bot_token.expose());
            tracing::debug!("sendMessage did not complete: {description}");
            CheckOutcome::TransportFault(TransportFault::new(description))
        }
    }
}

/// Run the whole check, writing the human-readable report to `out`.
///
/// `lookup` is the injected configuration provider (see
/// [`crate::config::env_lookup`]). `connect` builds the transport and is only
/// called once the configuration is valid. `Err` means writing to `out` or
/// building the transport failed.
pub async fn run_check<T: MessageTransport>(
    lookup: impl Fn(&str) -> Option<String>,
    connect: impl FnOnce() -> Result<T>,
    out: &mut impl Write,
) -> Result<CheckReport> {
    writeln!(out, "🧪 Testing Telegram configuration...")?;
    for line in ConfigPresence::from_lookup(&lookup).render() {
        writeln!(out, "{line}")?;
    }

    let cfg = match NotifierConfig::from_lookup(&lookup) {
        Ok(cfg) => cfg,
        Err(Error::MissingConfig { missing }) => {
            writeln!(out, "\n❌ Missing configuration: {}", missing.join(", "))?;
            return Ok(CheckReport::MissingConfig { missing });
        }
        Err(e) => return Err(e),
    };

    let transport = connect()?;

    writeln!(out, "\n📤 Sending test message...")?;
    let outcome = dispatch(&transport, &cfg).await;
    outcome.report(out)?;

    Ok(CheckReport::Dispatched(outcome))
}

/// Strip the bot token from text that may embed the request URL.
pub fn redact_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, "<redacted>")
        .replace(&token.replace(':', "%3A"), "<redacted>")
}

fn echo_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| body.to_string())
}
