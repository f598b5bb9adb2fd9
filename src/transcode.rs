//! Structured invocation of the external `ffmpeg` transcoder.
//!
//! Arguments are always passed as discrete argv entries, never through a
//! shell, and intermediate files are owned by the caller's temp-dir scope.
//! ffmpeg itself is an environment prerequisite: we report a clear error when
//! it is missing from `PATH` rather than trying to configure it.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::error::{self, Error};

/// Re-encode `input` into the container/codec implied by `output`'s extension.
pub fn transcode(input: &Path, output: &Path) -> error::Result<()> {
    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-y").arg("-i").arg(input).arg(output);
    run(cmd, "ffmpeg").map_err(Error::codec)
}

/// Re-encode `input` into `output` with its tempo scaled by `speed`.
///
/// `speed` must be positive; 1.0 leaves playback speed unchanged. Callers
/// validate the range before getting here.
pub fn apply_tempo(input: &Path, output: &Path, speed: f64) -> error::Result<()> {
    debug_assert!(speed > 0.0);

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-y")
        .arg("-i")
        .arg(input)
        .arg("-filter:a")
        .arg(atempo_filter(speed))
        .arg(output);
    run(cmd, "ffmpeg").map_err(Error::codec)
}

/// Build an `atempo` filter expression for `speed`.
///
/// ffmpeg only accepts atempo factors in [0.5, 2.0] per stage, so factors
/// outside that range are decomposed into a chain of in-range stages.
fn atempo_filter(speed: f64) -> String {
    let mut stages = Vec::new();
    let mut remaining = speed;

    while remaining > 2.0 {
        stages.push("atempo=2".to_string());
        remaining /= 2.0;
    }
    while remaining < 0.5 {
        stages.push("atempo=0.5".to_string());
        remaining /= 0.5;
    }
    stages.push(format!("atempo={remaining}"));

    stages.join(",")
}

/// Run an external tool to completion, capturing stderr for diagnostics.
pub(crate) fn run(mut cmd: Command, tool: &str) -> Result<()> {
    debug!(?cmd, "running external tool");

    let output = cmd
        .output()
        .with_context(|| format!("failed to launch {tool}; is it installed and on your PATH?"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{tool} exited with {}: {}", output.status, stderr.trim());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_speed_is_a_single_stage() {
        assert_eq!(atempo_filter(1.5), "atempo=1.5");
        assert_eq!(atempo_filter(0.5), "atempo=0.5");
        assert_eq!(atempo_filter(2.0), "atempo=2");
    }

    #[test]
    fn fast_speeds_chain_doubling_stages() {
        assert_eq!(atempo_filter(4.0), "atempo=2,atempo=2");
        assert_eq!(atempo_filter(3.0), "atempo=2,atempo=1.5");
    }

    #[test]
    fn slow_speeds_chain_halving_stages() {
        assert_eq!(atempo_filter(0.25), "atempo=0.5,atempo=0.5");
    }

    #[test]
    fn missing_tool_mentions_path() {
        let err = run(Command::new("snip-no-such-tool"), "snip-no-such-tool").unwrap_err();
        assert!(err.to_string().contains("PATH"));
    }
}
