// ABOUTME: Defines the error types for the bookgate library using thiserror.
// ABOUTME: Store backends share one cause-shaped error enum.

/// Errors from backing-store operations.
///
/// The variants describe the cause of a failure. Whether it counts as a
/// connection, write, or release failure is determined by which store
/// operation returned it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("backend error: {0}")]
    Backend(#[source] anyhow::Error),
}
