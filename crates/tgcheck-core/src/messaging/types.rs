use serde::Serialize;

use crate::domain::{BotToken, ChatTarget};

/// Fixed text sent by the check. Contains `<b>` markup, hence `ParseMode::Html`.
pub const TEST_MESSAGE: &str =
    "🧪 <b>TEST MESSAGE</b>\n\nTelegram notifications are configured and ready to send! ✅";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
}

/// JSON body of a Bot API `sendMessage` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: ParseMode,
}

impl SendMessageRequest {
    pub fn test_message(chat_id: &ChatTarget) -> Self {
        Self {
            chat_id: chat_id.as_str().to_string(),
            text: TEST_MESSAGE.to_string(),
            parse_mode: ParseMode::Html,
        }
    }
}

/// `<api_base>/bot<token>/sendMessage`
pub fn endpoint_url(api_base: &str, token: &BotToken) -> String {
    format!("{api_base}/bot{}/sendMessage", token.expose())
}

/// A completed HTTP exchange, whatever the status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The exchange did not complete (timeout, refused, DNS, TLS, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct TransportFault {
    pub description: String,
}

impl TransportFault {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_shape_matches_bot_api() {
        let req = SendMessageRequest::test_message(&ChatTarget("999".to_string()));
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["chat_id"], "999");
        assert_eq!(v["parse_mode"], "HTML");
        assert_eq!(v["text"], TEST_MESSAGE);
        assert_eq!(v.as_object().unwrap().len(), 3);
    }

    #[test]
    fn chat_id_is_not_transformed() {
        for raw in ["-1001234567890", "@my_channel", "0042"] {
            let req = SendMessageRequest::test_message(&ChatTarget(raw.to_string()));
            assert_eq!(req.chat_id, raw);
        }
    }

    #[test]
    fn endpoint_is_templated_with_token() {
        let url = endpoint_url("https://api.telegram.org", &BotToken::new("123:ABC"));
        assert_eq!(url, "https://api.telegram.org/bot123:ABC/sendMessage");
    }
}
