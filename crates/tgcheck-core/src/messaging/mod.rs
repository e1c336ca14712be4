//! Bot API message payload and the outbound transport port.

pub mod port;
pub mod types;
