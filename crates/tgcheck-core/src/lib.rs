//! Core of the Telegram notifier check.
//!
//! Framework-agnostic: configuration comes through an injected lookup and the
//! HTTP call goes through [`messaging::port::MessageTransport`], implemented in
//! the `tgcheck-telegram` adapter crate.

pub mod check;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;

pub use errors::{Error, Result};
