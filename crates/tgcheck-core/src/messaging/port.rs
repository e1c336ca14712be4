use async_trait::async_trait;

use crate::messaging::types::{RawResponse, SendMessageRequest, TransportFault};

/// Outbound transport port.
///
/// Implementations perform exactly one POST per call and never retry. Any
/// completed exchange is `Ok`, including non-2xx statuses; only a failure to
/// complete the exchange is a [`TransportFault`].
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &SendMessageRequest,
    ) -> std::result::Result<RawResponse, TransportFault>;
}

#[async_trait]
impl<T: MessageTransport + ?Sized> MessageTransport for &T {
    async fn post_json(
        &self,
        url: &str,
        body: &SendMessageRequest,
    ) -> std::result::Result<RawResponse, TransportFault> {
        (**self).post_json(url, body).await
    }
}
