//! Materialize remote media as a local file.
//!
//! Two paths:
//! - URLs whose path component names an audio file are fetched with a plain
//!   blocking HTTP GET, streamed to `<dest>.part`, fsynced, and renamed into
//!   place so `dest` never holds a partial download.
//! - Everything else is handed to `yt-dlp`, which knows how to pick the best
//!   audio-only stream for a page and extract it into the format implied by
//!   `dest`'s extension.
//!
//! There is deliberately no retry, timeout, or cancellation here: a failed
//! download propagates as [`Error::Download`] and aborts the run.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::info;

use crate::error::{self, Error};
use crate::transcode;

/// Extensions we trust to be directly fetchable audio files.
const DIRECT_AUDIO_EXTENSIONS: &[&str] =
    &["aac", "flac", "m4a", "mp3", "oga", "ogg", "opus", "wav", "wma"];

/// Download `url` into `dest`, applying a tempo change when `speed != 1.0`.
///
/// The tempo pass never touches `dest` until the download itself has
/// succeeded: the raw fetch lands in a scratch directory that is cleaned up
/// when it drops, on success and failure alike.
pub fn download(url: &str, dest: &Path, speed: f64) -> error::Result<()> {
    if speed == 1.0 {
        return materialize(url, dest).map_err(Error::download);
    }

    let staging = tempfile::tempdir()?;
    let fetched = staging.path().join(
        dest.file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("download.mp3")),
    );

    materialize(url, &fetched).map_err(Error::download)?;
    transcode::apply_tempo(&fetched, dest, speed)
}

fn materialize(url: &str, dest: &Path) -> Result<()> {
    if direct_audio_url(url) {
        http_download(url, dest)
    } else {
        ytdlp_download(url, dest)
    }
}

/// Whether `url`'s path component names an audio file we can GET directly.
fn direct_audio_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);

    match segment.rsplit_once('.') {
        Some((_, ext)) => DIRECT_AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Fetch a direct link over HTTP:
/// - stream to `dest.part`
/// - fsync + rename to the final path
/// - remove the part file if anything goes wrong
fn http_download(url: &str, dest: &Path) -> Result<()> {
    info!(url, "downloading");

    let client = Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    let mut resp = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("download failed (bad status): {url}"))?;

    let tmp_path = PathBuf::from(format!("{}.part", dest.display()));

    let result = (|| -> Result<()> {
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("failed to create temp file: {}", tmp_path.display()))?;

        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = resp.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
        }

        file.sync_all()?;

        fs::rename(&tmp_path, dest)
            .with_context(|| format!("failed to move into place: {}", dest.display()))?;

        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

/// Ask yt-dlp for the best audio-only stream, extracted into the format
/// implied by `dest`'s extension.
fn ytdlp_download(url: &str, dest: &Path) -> Result<()> {
    info!(url, "downloading via yt-dlp");

    let audio_format = dest.extension().and_then(|e| e.to_str()).unwrap_or("mp3");

    let mut cmd = Command::new("yt-dlp");
    cmd.arg("--format")
        .arg("bestaudio")
        .arg("--extract-audio")
        .arg("--audio-format")
        .arg(audio_format)
        .arg("--output")
        .arg(dest)
        .arg(url);

    transcode::run(cmd, "yt-dlp")
}
