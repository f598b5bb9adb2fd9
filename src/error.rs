use thiserror::Error;

/// Snip's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Snip's crate-wide error type.
///
/// Internals lean on `anyhow` for context chains; at module boundaries those
/// chains are flattened into one of these variants so callers get the small,
/// stable taxonomy below instead of an opaque `anyhow::Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller asked for an impossible combination of inputs, e.g. both a
    /// local file and a URL, or neither. Raised before any I/O happens.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The downloader failed: network error, bad status, no audio stream, or
    /// a missing `yt-dlp` binary. Never retried.
    #[error("download failed: {0}")]
    Download(String),

    /// Decoding, encoding, or the external `ffmpeg` transcoder failed.
    #[error("codec failure: {0}")]
    Codec(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    pub(crate) fn download(err: anyhow::Error) -> Self {
        Self::Download(format!("{err:#}"))
    }

    pub(crate) fn codec(err: anyhow::Error) -> Self {
        Self::Codec(format!("{err:#}"))
    }
}
