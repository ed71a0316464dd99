use std::io;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "agentpipe", version)]
#[command(about = "Rewrite coding-agent NDJSON event streams into readable terminal output")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    agentpipe::transcode::run(stdin.lock(), stdout.lock())
}
