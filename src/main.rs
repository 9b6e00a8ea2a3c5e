//! PRT-7 decoder binary.
//!
//! Connects to a frame link (or reads stdin), runs one decode session and
//! prints the assembled message — or, with `--json`, the machine-readable
//! session report — as a single stdout line. Diagnostics go to stderr.

use clap::Parser;

use prt7_decoder::control::{build_report_message, write_stdout_line};
use prt7_decoder::error::Result;
use prt7_decoder::session::{Decoder, DEFAULT_MAX_FRAMES};
use prt7_decoder::transport::{stdin_source, LinkStream};

/// Decode a PRT-7 frame stream into its hidden message.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the bridge socket/pipe; reads stdin when omitted.
    link: Option<String>,

    /// Safety cap on processed frames per session.
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: usize,

    /// Print the JSON session report instead of the bare message.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut decoder = Decoder::builder().max_frames(args.max_frames).build();

    let summary = match &args.link {
        Some(path) => decoder.run(LinkStream::connect(path).await?).await?,
        None => decoder.run(stdin_source()).await?,
    };

    if args.json {
        write_stdout_line(&build_report_message(&summary))?;
    } else {
        write_stdout_line(&summary.message)?;
    }

    Ok(())
}
