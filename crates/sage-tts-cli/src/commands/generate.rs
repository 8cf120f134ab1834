//! Offline synthesis to a WAV file.
//!
//! Exercises the same engine the server uses, without the HTTP layer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use sage_tts::audio;
use sage_tts::engine::{defaults, EngineConfig, SpeechEngine};
use sage_tts::PiperEngine;

/// Default text used when none is given.
pub const DEFAULT_TEXT: &str = "Hello! This voice is served from a pretrained model.";

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Text to synthesize
    #[arg(short, long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Output audio file path
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,

    /// Hub repository holding the voice assets
    #[arg(long, default_value = defaults::MODEL_REPO)]
    pub model_repo: String,

    /// Voice to load
    #[arg(long, default_value = defaults::VOICE)]
    pub voice: String,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let config = EngineConfig {
        repo_id: args.model_repo.clone(),
        voice: args.voice.clone(),
    };

    if !args.quiet {
        println!("{} Loading voice {}...", "▶".cyan(), config.voice.yellow());
    }

    let engine = PiperEngine::load(&config)
        .await
        .context("failed to load speech engine")?;
    let voice = engine.voice().clone();

    if !args.quiet {
        println!(
            "  {} Engine ready ({}Hz)",
            "✓".green(),
            engine.sample_rate()
        );
        println!(
            "{} Generating: \"{}\"",
            "▶".cyan(),
            truncate_text(&args.text, 60).italic()
        );
    }

    let clip = engine.synthesize(&args.text, &voice.speaker, &voice.language)?;
    audio::write_wav(&args.output, &clip)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if !args.quiet {
        println!();
        println!(
            "  {} {}",
            "✓".green().bold(),
            "Audio generated successfully!".green().bold()
        );
        println!(
            "    Duration: {:.2}s ({} samples @ {}Hz)",
            clip.duration_ms() / 1000.0,
            clip.num_samples(),
            clip.sample_rate
        );
        println!("    Output:   {}", args.output.display().cyan());
    }

    Ok(())
}

/// Truncate text for display
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        format!("{}...", &text[..max_len - 3])
    }
}
