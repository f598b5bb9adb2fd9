//! Decode a media file into a [`Clip`] using Symphonia.
//!
//! This module isolates codec-level concerns so the pipeline can stay a
//! straight line:
//! - probe the container and pick a reasonable default audio track
//! - decode packets into interleaved `f32` PCM
//! - handle Symphonia's error model predictably
//!
//! Error handling policy:
//! - `DecodeError` → skip the bad frame and keep going (common with some codecs)
//! - `IoError`     → treat as end-of-stream
//! - other errors  → fatal, bubbled up with context

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::clip::Clip;
use crate::error::{self, Error};

/// Load an audio file into memory in full.
///
/// Track selection policy: the first track that looks decodable
/// (codec != NULL) and has a known sample rate.
pub fn load(path: &Path) -> error::Result<Clip> {
    load_impl(path).map_err(Error::codec)
}

fn load_impl(path: &Path) -> Result<Clip> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mss_opts = MediaSourceStreamOptions {
        // Symphonia expects a power-of-two buffer > 32KiB for good probing behavior.
        buffer_len: 256 * 1024,
    };
    let mss = MediaSourceStream::new(Box::new(file), mss_opts);

    // The extension improves probe accuracy for ambiguous containers.
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to probe {}", path.display()))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL && t.codec_params.sample_rate.is_some())
        .cloned()
        .ok_or_else(|| anyhow!("no audio track found in {}", path.display()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| anyhow!(e))
        .context("failed to create decoder for audio track")?;

    let mut samples = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut layout: Option<(usize, u32)> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            // Treat IO errors as end-of-stream.
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("failed reading packet"),
        };

        if packet.track_id() != track.id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            // Recoverable: corrupted frame, but decoding can continue.
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("decoder failure"),
        };

        let spec = *decoded.spec();
        let channels = spec.channels.count();
        if channels == 0 {
            bail!("decoded audio had zero channels");
        }
        layout.get_or_insert((channels, spec.rate));

        let buf = sample_buf.get_or_insert_with(|| {
            SampleBuffer::<f32>::new(decoded.capacity() as u64, spec)
        });
        buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buf.samples());
    }

    let (channels, sample_rate) =
        layout.ok_or_else(|| anyhow!("no decodable audio in {}", path.display()))?;

    debug!(
        path = %path.display(),
        channels,
        sample_rate,
        frames = samples.len() / channels,
        "decoded input"
    );

    Ok(Clip::new(samples, channels, sample_rate))
}
