//! Export a [`Clip`] to disk, choosing the container from the output path's
//! extension.
//!
//! WAV output is written directly with hound. Any other extension goes
//! through a scratch WAV inside a temp directory and a single ffmpeg
//! transcode into the target container; the scratch directory is removed on
//! every exit path when it drops.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::clip::Clip;
use crate::error::{self, Error};
use crate::transcode;

/// Write `clip` to `path` in the format implied by its extension.
pub fn export(clip: &Clip, path: &Path) -> error::Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| {
            Error::codec(anyhow!(
                "cannot infer an output format: {} has no extension",
                path.display()
            ))
        })?;

    debug!(path = %path.display(), format = %ext, "exporting");

    if ext == "wav" {
        return write_wav(clip, path).map_err(Error::codec);
    }

    let staging = tempfile::tempdir()?;
    let wav_path = staging.path().join("export.wav");
    write_wav(clip, &wav_path).map_err(Error::codec)?;
    transcode::transcode(&wav_path, path)
}

/// Write a 32-bit float WAV. The float format round-trips decoded samples
/// without a quantization decision.
fn write_wav(clip: &Clip, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: clip.channels() as u16,
        sample_rate: clip.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for &sample in clip.samples() {
        writer.write_sample(sample)?;
    }

    writer.finalize().context("failed to finalize WAV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensionless_output_is_rejected() {
        let clip = Clip::silent(100, 8_000);
        let err = export(&clip, Path::new("result")).unwrap_err();
        assert!(matches!(err, Error::Codec(_)));
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn wav_export_preserves_layout() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.wav");

        let clip = Clip::silent(1_000, 8_000);
        export(&clip, &path)?;

        let reader = hound::WavReader::open(&path)?;
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8_000);
        assert_eq!(spec.sample_format, SampleFormat::Float);
        assert_eq!(reader.len(), 8_000);
        Ok(())
    }
}
