// ABOUTME: Submit outcome types - the write result plus any release error.
// ABOUTME: A failed release is surfaced separately and never masks the write.

/// Terminal result of the write itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row was accepted by the store.
    Success,

    /// No connection could be established; nothing was written.
    ConnectionFailure { reason: String },

    /// The insert was rejected by the store.
    WriteFailure { reason: String },
}

impl WriteOutcome {
    /// Returns true if the row was written.
    pub fn wrote(&self) -> bool {
        matches!(self, WriteOutcome::Success)
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOutcome::Success => write!(f, "saved"),
            WriteOutcome::ConnectionFailure { reason } => {
                write!(f, "connection failed: {}", reason)
            }
            WriteOutcome::WriteFailure { reason } => {
                write!(f, "write rejected: {}", reason)
            }
        }
    }
}

/// Everything one `submit` call reports back to its caller.
///
/// The write outcome and the release result travel on separate channels:
/// a connection that could not be closed after a successful insert still
/// reports `Success`, with the close problem in `release_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// What happened to the write.
    pub outcome: WriteOutcome,

    /// Error from releasing the connection, if the release failed.
    pub release_error: Option<String>,
}

impl SubmitReceipt {
    /// Receipt for a connection that could not be established.
    pub fn connection_failure(reason: impl Into<String>) -> Self {
        Self {
            outcome: WriteOutcome::ConnectionFailure {
                reason: reason.into(),
            },
            release_error: None,
        }
    }

    /// Receipt for a completed acquire-write-release sequence.
    pub fn completed(outcome: WriteOutcome, release_error: Option<String>) -> Self {
        Self {
            outcome,
            release_error,
        }
    }

    /// Returns true if the row was written.
    pub fn wrote(&self) -> bool {
        self.outcome.wrote()
    }

    /// Returns true if the row was written and the connection released cleanly.
    pub fn is_clean(&self) -> bool {
        self.wrote() && self.release_error.is_none()
    }
}

impl std::fmt::Display for SubmitReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.release_error {
            Some(release) => write!(f, "{} (release failed: {})", self.outcome, release),
            None => write!(f, "{}", self.outcome),
        }
    }
}
