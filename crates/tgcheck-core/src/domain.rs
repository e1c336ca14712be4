use std::fmt;

/// Telegram bot token (`<bot id>:<secret>`).
///
/// `Debug` is redacted; use [`BotToken::expose`] where the raw value is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Destination chat: a numeric id (`-100…`) or a public `@channel` username.
///
/// Kept as text and passed to the API verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatTarget(pub String);

impl ChatTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_debug_is_redacted() {
        let t = BotToken::new("123:ABC");
        let dbg = format!("{t:?}");
        assert!(!dbg.contains("123:ABC"));
        assert_eq!(t.expose(), "123:ABC");
    }
}
