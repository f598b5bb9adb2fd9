//! `snip` — cut a time range out of an audio file.
//!
//! The pipeline is deliberately small and linear:
//! - [`timespec`] turns strings like `1h15m30s` into millisecond offsets
//! - [`fetch`] materializes remote URLs as local files (direct HTTP or yt-dlp)
//! - [`decode`] loads a file into an in-memory [`clip::Clip`]
//! - [`clip`] slices by millisecond offset
//! - [`export`] writes the result, transcoding through ffmpeg when the
//!   target isn't WAV
//!
//! Most consumers only need [`pipeline::process`] with a
//! [`pipeline::TrimRequest`]. Everything runs synchronously in the calling
//! thread; one request, one output file.
//!
//! External prerequisites: `ffmpeg` on `PATH` for any non-WAV output or tempo
//! change, and `yt-dlp` for URLs that aren't direct links to audio files.

// High-level API (most consumers should start here).
pub mod pipeline;

// Time-specification parsing.
pub mod timespec;

// The in-memory audio representation and slicing.
pub mod clip;

// Decoding, encoding, and external transcoder orchestration.
pub mod decode;
pub mod export;
pub mod transcode;

// Remote media acquisition.
pub mod fetch;

// Crate-wide error type.
pub mod error;

// Logging configuration for the CLI.
#[cfg(feature = "logging")]
pub mod logging;
