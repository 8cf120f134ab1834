//! sage-tts — HTTP inference wrapper around a pretrained voice.

use anyhow::Result;
use clap::Parser;

use sage_tts_cli::commands;

/// Serve a pretrained text-to-speech voice behind a managed hosting
/// platform's invocation contract.
#[derive(Parser)]
#[command(
    name = "sage-tts",
    author,
    version,
    about = "HTTP inference wrapper around a pretrained voice",
    long_about = "Exposes a pretrained Piper voice behind the GET /ping and\n\
                  POST /invocations routes a managed ML-hosting platform\n\
                  expects. Synthesis itself lives in the imported model\n\
                  library; this binary only loads it once and shuttles bytes."
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the HTTP inference server
    ///
    /// Loads the voice once, then exposes GET /ping and POST /invocations
    /// on the configured address.
    Serve(commands::serve::ServeArgs),

    /// Synthesize a single utterance to a WAV file
    Generate(commands::generate::GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Serve(cmd_args) => commands::serve::run(cmd_args).await,
        Commands::Generate(cmd_args) => commands::generate::run(cmd_args).await,
    }
}
