//! Status reporting to an external sink.
//!
//! Resolution itself never reports; the orchestrating caller narrates progress
//! through a [`StatusReporter`]. Reporting is fire-and-forget: a sink that
//! cannot deliver a message must swallow the failure.

use log::{debug, log, Level};
use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use tokio::sync::mpsc::UnboundedSender;

/// Kind of a status message, as understood by the client UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StatusKind {
    /// Informational step
    Status,
    /// Long-running step in progress
    Progress,
    /// Terminal failure
    Failure,
    /// Terminal success
    Done,
    /// A URL the user can follow
    Link,
    /// Label identifying the run
    AppLabel,
}

/// One status notification, serialized as `{"action": .., "message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub action: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn new(action: StatusKind, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
        }
    }
}

/// Sink for short human-readable status strings.
///
/// Implementations must not fail or block the caller.
pub trait StatusReporter {
    fn report(&self, kind: StatusKind, message: &str);
}

impl<R: StatusReporter + ?Sized> StatusReporter for &R {
    fn report(&self, kind: StatusKind, message: &str) {
        (**self).report(kind, message)
    }
}

/// Reports through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    /// Failures are warnings; everything else is informational.
    pub fn level(kind: StatusKind) -> Level {
        match kind {
            StatusKind::Failure => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl StatusReporter for LogReporter {
    fn report(&self, kind: StatusKind, message: &str) {
        log!(Self::level(kind), "[{kind}] {message}");
    }
}

/// Pushes messages into an unbounded channel.
///
/// Messages sent after the receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    sender: UnboundedSender<StatusMessage>,
}

impl ChannelReporter {
    pub fn new(sender: UnboundedSender<StatusMessage>) -> Self {
        Self { sender }
    }
}

impl StatusReporter for ChannelReporter {
    fn report(&self, kind: StatusKind, message: &str) {
        if self.sender.send(StatusMessage::new(kind, message)).is_err() {
            debug!("Status receiver closed, dropping [{kind}] {message}");
        }
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl StatusReporter for NoopReporter {
    fn report(&self, _kind: StatusKind, _message: &str) {}
}
