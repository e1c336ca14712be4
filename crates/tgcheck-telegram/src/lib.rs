//! Telegram Bot API adapter (plain HTTP).
//!
//! Implements the `tgcheck-core` [`MessageTransport`] port with `reqwest`.
//! Status handling is left to the core, so any completed exchange is returned
//! as-is.

use std::time::Duration;

use async_trait::async_trait;

use tgcheck_core::{
    errors::Error,
    messaging::{
        port::MessageTransport,
        types::{RawResponse, SendMessageRequest, TransportFault},
    },
    Result,
};

/// Upper bound on the whole exchange (connect, send, read body).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("http client build error: {e}")))?;
        Ok(Self { http })
    }

    fn fault(e: reqwest::Error) -> TransportFault {
        let kind = if e.is_timeout() {
            "request timed out"
        } else if e.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };

        // The url carries the bot token.
        let e = e.without_url();

        // reqwest's Display stops at the outer error, while hyper's already
        // folds in its own causes; append only what is not yet shown.
        let mut description = format!("{kind}: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                description.push_str(&format!(": {text}"));
            }
            source = std::error::Error::source(cause);
        }

        TransportFault::new(description)
    }
}

#[async_trait]
impl MessageTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &SendMessageRequest,
    ) -> std::result::Result<RawResponse, TransportFault> {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Self::fault)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(Self::fault)?;

        Ok(RawResponse { status, body })
    }
}
