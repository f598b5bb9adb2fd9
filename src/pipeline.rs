//! The high-level trim pipeline: fetch (maybe) → decode → slice → export.
//!
//! One [`TrimRequest`] is one run. Everything is synchronous and sequential;
//! the only side effect on success is the output file, plus scratch files in
//! temp directories that are removed when their scopes drop.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::decode;
use crate::error::{Error, Result};
use crate::export;
use crate::fetch;

/// Where the audio comes from. Exactly one of the two, by construction.
#[derive(Debug, Clone)]
pub enum Source {
    LocalFile(PathBuf),
    RemoteUrl(String),
}

impl Source {
    /// Build a `Source` from the two mutually exclusive CLI options.
    ///
    /// Both or neither being present is [`Error::InvalidArguments`], raised
    /// here, before any I/O.
    pub fn from_args(input_file: Option<PathBuf>, url: Option<String>) -> Result<Self> {
        match (input_file, url) {
            (Some(path), None) => Ok(Self::LocalFile(path)),
            (None, Some(url)) => Ok(Self::RemoteUrl(url)),
            (Some(_), Some(_)) => Err(Error::invalid_arguments(
                "pass either an input file or a URL, not both",
            )),
            (None, None) => Err(Error::invalid_arguments(
                "pass an input file or a URL",
            )),
        }
    }
}

/// One full trim operation: a source, an output path, an optional time range
/// in milliseconds, and a tempo multiplier for downloaded sources.
#[derive(Debug, Clone)]
pub struct TrimRequest {
    pub source: Source,

    /// Output file; its extension selects the container format.
    pub output: PathBuf,

    /// Cut from this offset; `None` means the start of the audio.
    pub start_ms: Option<u64>,

    /// Cut up to this offset; `None` means the end of the audio.
    pub end_ms: Option<u64>,

    /// Tempo multiplier applied while downloading. 1.0 leaves it unchanged,
    /// and it has no effect on local files.
    pub speed: f64,
}

/// Run a trim request to completion, writing exactly one file on success.
///
/// Remote sources are fetched into a scratch directory named after the output
/// file (so extensions line up for yt-dlp and ffmpeg), never into the output
/// path itself; the scratch directory outlives the decode and is removed on
/// every exit path.
pub fn process(request: &TrimRequest) -> Result<()> {
    if !(request.speed > 0.0) {
        return Err(Error::invalid_arguments(format!(
            "speed must be positive, got {}",
            request.speed
        )));
    }

    let _staging;
    let input: PathBuf = match &request.source {
        Source::LocalFile(path) => path.clone(),
        Source::RemoteUrl(url) => {
            let staging = tempfile::tempdir()?;
            let fetched = staging.path().join(scratch_file_name(&request.output));
            fetch::download(url, &fetched, request.speed)?;
            _staging = staging;
            fetched
        }
    };

    info!(
        input = %input.display(),
        output = %request.output.display(),
        start_ms = request.start_ms,
        end_ms = request.end_ms,
        "trimming"
    );

    let clip = decode::load(&input)?;
    let cut = clip.slice(request.start_ms, request.end_ms);
    export::export(&cut, &request.output)
}

/// Name for the fetched scratch file. Reusing the output's file name keeps
/// the extension consistent across the download and export steps.
fn scratch_file_name(output: &Path) -> PathBuf {
    output
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("download.mp3"))
}
