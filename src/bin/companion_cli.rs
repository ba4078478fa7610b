use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{info, warn};

use companion_affect::modules::chat::typing_frames;
use companion_affect::modules::emotion::EmotionClassifier;
use companion_affect::{ChatError, CompanionConfig, ConversationSession};

#[derive(Parser)]
#[command(name = "companion-cli", about = "Emotion inference for chat companions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single piece of text
    Classify {
        text: String,

        /// Also print the raw per-emotion scores
        #[arg(long)]
        scores: bool,
    },
    /// Read messages from stdin and show how the character reacts
    Chat {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Never answer, even when `features.auto_response` is on
        #[arg(long)]
        no_reply: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Classify { text, scores } => classify(&text, scores),
        Command::Chat { config, no_reply } => chat(config, no_reply),
    }
}

fn classify(text: &str, with_scores: bool) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = EmotionClassifier::new();
    let analysis = classifier.classify(text);

    let mut output = serde_json::json!({
        "primaryEmotion": analysis.primary_emotion,
        "confidence": analysis.confidence,
        "intensity": analysis.intensity,
        "intensityLabel": analysis.intensity_label(),
        "shouldAnimate": analysis.should_animate(),
    });

    if with_scores {
        let scores: serde_json::Map<String, serde_json::Value> = classifier
            .scores(text)
            .iter()
            .map(|(label, score)| (label.to_string(), serde_json::json!(score)))
            .collect();
        output["scores"] = serde_json::Value::Object(scores);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn chat(config_path: Option<PathBuf>, no_reply: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            CompanionConfig::load(&path)?
        }
        None => CompanionConfig::default(),
    };

    let mut session = ConversationSession::new(config);
    if let Some(welcome) = session.welcome(Utc::now())? {
        println!("{}: {}", session.config.character.name, welcome.text);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;

        let outcome = match session.receive_user_message(&line, Utc::now()) {
            Ok(outcome) => outcome,
            Err(ChatError::EmptyMessage) => continue,
            Err(e) => {
                warn!("Dropping message: {}", e);
                continue;
            }
        };

        let character = session.character(Utc::now());
        match outcome.analysis {
            Some(analysis) => writeln!(
                stdout,
                "[{} {} | confidence {:.2} | {}]",
                character.emotion,
                analysis.intensity_label(),
                analysis.confidence,
                if outcome.animated { character.current_animation.as_str() } else { "no reaction" }
            )?,
            None => writeln!(stdout, "[emotion detection disabled]")?,
        }

        if no_reply {
            continue;
        }

        if let Some(reply) = session.auto_reply(Utc::now())? {
            let prefix = format!("{}: ", session.config.character.name);
            type_out(&mut stdout, &prefix, &reply.message.text, session.config.chat.typing_delay())?;
        }
    }

    session.close()?;
    Ok(())
}

fn type_out(out: &mut impl Write, prefix: &str, text: &str, delay: Duration) -> io::Result<()> {
    for frame in typing_frames(text) {
        write!(out, "\r{}{}", prefix, frame)?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(out)
}
