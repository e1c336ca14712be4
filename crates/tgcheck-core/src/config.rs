use std::env;

use crate::{
    domain::{BotToken, ChatTarget},
    errors::Error,
    Result,
};

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const API_URL_VAR: &str = "TELEGRAM_API_URL";

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Validated configuration for a single check run.
#[derive(Clone, Debug)]
pub struct NotifierConfig {
    pub bot_token: BotToken,
    pub chat_id: ChatTarget,
    /// Bot API base URL without trailing slash.
    pub api_base: String,
}

impl NotifierConfig {
    /// Build the config from an injected variable lookup.
    ///
    /// Both required values are trimmed; blank counts as missing. Every
    /// missing name is reported, not just the first.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup(BOT_TOKEN_VAR).and_then(non_empty);
        let chat_id = lookup(CHAT_ID_VAR).and_then(non_empty);

        let (bot_token, chat_id) = match (bot_token, chat_id) {
            (Some(t), Some(c)) => (t, c),
            (t, c) => {
                let mut missing = Vec::new();
                if t.is_none() {
                    missing.push(BOT_TOKEN_VAR);
                }
                if c.is_none() {
                    missing.push(CHAT_ID_VAR);
                }
                return Err(Error::MissingConfig { missing });
            }
        };

        let api_base = lookup(API_URL_VAR)
            .and_then(non_empty)
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            bot_token: BotToken::new(bot_token),
            chat_id: ChatTarget(chat_id),
            api_base,
        })
    }
}

/// Which required variables are present, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigPresence {
    pub bot_token: bool,
    pub chat_id: bool,
}

impl ConfigPresence {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bot_token: lookup(BOT_TOKEN_VAR).and_then(non_empty).is_some(),
            chat_id: lookup(CHAT_ID_VAR).and_then(non_empty).is_some(),
        }
    }

    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Bot token: {}", status_label(self.bot_token)),
            format!("Chat ID: {}", status_label(self.chat_id)),
        ]
    }
}

fn status_label(present: bool) -> &'static str {
    if present {
        "✅ set"
    } else {
        "❌ missing"
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// Existing variables are not overridden. A missing file is normal; a
/// malformed one is logged and skipped.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable env file: {e}"),
    }
}

/// Process-environment lookup, suitable for [`NotifierConfig::from_lookup`].
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn trims_required_values() {
        let cfg = NotifierConfig::from_lookup(lookup_from(&[
            (BOT_TOKEN_VAR, "  123:ABC \n"),
            (CHAT_ID_VAR, "\t999 "),
        ]))
        .unwrap();
        assert_eq!(cfg.bot_token.expose(), "123:ABC");
        assert_eq!(cfg.chat_id.as_str(), "999");
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn whitespace_token_is_missing() {
        let err = NotifierConfig::from_lookup(lookup_from(&[
            (BOT_TOKEN_VAR, "   "),
            (CHAT_ID_VAR, "999"),
        ]))
        .unwrap_err();
        match err {
            Error::MissingConfig { missing } => assert_eq!(missing, vec![BOT_TOKEN_VAR]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_every_missing_value() {
        let err = NotifierConfig::from_lookup(lookup_from(&[])).unwrap_err();
        match err {
            Error::MissingConfig { missing } => {
                assert_eq!(missing, vec![BOT_TOKEN_VAR, CHAT_ID_VAR])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn api_base_override_strips_trailing_slash() {
        let cfg = NotifierConfig::from_lookup(lookup_from(&[
            (BOT_TOKEN_VAR, "t"),
            (CHAT_ID_VAR, "@alerts"),
            (API_URL_VAR, "http://127.0.0.1:8081/"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base, "http://127.0.0.1:8081");
        assert_eq!(cfg.chat_id.as_str(), "@alerts");
    }

    #[test]
    fn config_debug_hides_token() {
        let cfg = NotifierConfig::from_lookup(lookup_from(&[
            (BOT_TOKEN_VAR, "123:SECRET"),
            (CHAT_ID_VAR, "1"),
        ]))
        .unwrap();
        assert!(!format!("{cfg:?}").contains("SECRET"));
    }

    #[test]
    fn presence_lines() {
        let p = ConfigPresence::from_lookup(lookup_from(&[(CHAT_ID_VAR, "1")]));
        assert_eq!(
            p,
            ConfigPresence {
                bot_token: false,
                chat_id: true
            }
        );
        let lines = p.render();
        assert!(lines[0].contains("❌"));
        assert!(lines[1].contains("✅"));
    }
}
