use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

use snip::pipeline::{self, Source, TrimRequest};
use snip::timespec::parse_time;

fn main() -> Result<()> {
    snip::logging::init();
    let args = get_args()?;

    let source = Source::from_args(args.input_file, args.url)?;
    let request = TrimRequest {
        source,
        output: args.output_file,
        start_ms: parse_time(args.start_time.as_deref()),
        end_ms: parse_time(args.end_time.as_deref()),
        speed: args.speed,
    };

    pipeline::process(&request)?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(about = "Cut a time range out of an audio file, from disk or a URL")]
struct Args {
    /// Local input file. Mutually exclusive with --url.
    #[arg(short = 'i', long = "input-file")]
    input_file: Option<PathBuf>,

    /// Remote media URL to download the audio from. Mutually exclusive with
    /// --input-file.
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// Output file; the container format is inferred from its extension.
    #[arg(short = 'o', long = "output-file", default_value = "result.mp3")]
    output_file: PathBuf,

    /// Where to start cutting, e.g. "90s" or "1h15m30s". Defaults to the
    /// start of the audio.
    #[arg(short = 's', long = "start-time")]
    start_time: Option<String>,

    /// Where to stop cutting, same format as --start-time. Defaults to the
    /// end of the audio.
    #[arg(short = 'e', long = "end-time")]
    end_time: Option<String>,

    /// Tempo multiplier applied when downloading from a URL (1.0 = unchanged).
    #[arg(long = "speed", alias = "sp", default_value_t = 1.0)]
    speed: f64,
}

fn get_args() -> Result<Args> {
    Ok(Args::parse())
}
