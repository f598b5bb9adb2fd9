//! End-to-end trims over real files: generate a silent WAV fixture, run the
//! pipeline against it, and decode the output to check its duration.
//!
//! WAV-to-WAV keeps these tests self-contained; nothing here shells out to
//! ffmpeg or touches the network.

use std::path::{Path, PathBuf};

use snip::clip::Clip;
use snip::decode;
use snip::error::Error;
use snip::export;
use snip::pipeline::{self, Source, TrimRequest};
use snip::timespec::parse_time;

/// Export a silent mono 44.1 kHz WAV of the given duration into `dir`.
fn write_silent_wav(dir: &Path, duration_ms: u64) -> anyhow::Result<PathBuf> {
    let clip = Clip::silent(duration_ms, 44_100);
    let path = dir.join("input.wav");
    export::export(&clip, &path)?;
    Ok(path)
}

#[test]
fn trims_the_requested_range_out_of_a_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_silent_wav(dir.path(), 10_000)?;
    let output = dir.path().join("output.wav");

    let request = TrimRequest {
        source: Source::LocalFile(input),
        output: output.clone(),
        start_ms: parse_time(Some("2s")),
        end_ms: parse_time(Some("4s")),
        speed: 1.0,
    };
    pipeline::process(&request)?;

    let cut = decode::load(&output)?;
    assert_eq!(cut.duration_ms(), 2_000);
    assert_eq!(cut.sample_rate(), 44_100);
    assert_eq!(cut.channels(), 1);
    Ok(())
}

#[test]
fn unbounded_trim_reproduces_the_full_duration() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_silent_wav(dir.path(), 10_000)?;
    let output = dir.path().join("output.wav");

    let request = TrimRequest {
        source: Source::LocalFile(input),
        output: output.clone(),
        start_ms: None,
        end_ms: None,
        speed: 1.0,
    };
    pipeline::process(&request)?;

    assert_eq!(decode::load(&output)?.duration_ms(), 10_000);
    Ok(())
}

#[test]
fn inverted_range_produces_an_empty_output() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_silent_wav(dir.path(), 10_000)?;
    let output = dir.path().join("output.wav");

    let request = TrimRequest {
        source: Source::LocalFile(input),
        output: output.clone(),
        start_ms: parse_time(Some("4s")),
        end_ms: parse_time(Some("2s")),
        speed: 1.0,
    };
    pipeline::process(&request)?;

    // The file exists and is readable WAV, it just has no frames.
    let reader = hound::WavReader::open(&output)?;
    assert_eq!(reader.len(), 0);
    Ok(())
}

#[test]
fn ambiguous_source_fails_before_writing_anything() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("output.wav");

    let err = Source::from_args(
        Some(PathBuf::from("in.mp3")),
        Some("https://example.com/a.mp3".to_string()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));

    let err = Source::from_args(None, None).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn long_time_specs_parse_exactly() {
    assert_eq!(parse_time(Some("1h15m30s")), Some(4_530_000));
}
