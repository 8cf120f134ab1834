use anyhow::Result;
use clap::Parser;

use sage_tts::engine::defaults;

use crate::logging::{init_logging, LogFormat};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (the hosting platform routes traffic to 8080)
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Hub repository holding the voice assets
    #[arg(long, default_value = defaults::MODEL_REPO)]
    pub model_repo: String,

    /// Voice to serve
    #[arg(long, default_value = defaults::VOICE)]
    pub voice: String,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(&args.log_level, format);

    crate::server::start_server(args).await
}
