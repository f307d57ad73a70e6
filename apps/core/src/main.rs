// Heart Health Assistant - console host
// Reads questions from stdin and answers with the configured responder.

use anyhow::Context;
use heartcare_core::brain::ResponseBank;
use heartcare_core::chat::ChatSession;
use heartcare_core::config::AppConfig;
use heartcare_core::risk::assess_form;
use heartcare_core::telemetry;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

const QUIT_COMMAND: &str = "/quit";
const RISK_COMMAND: &str = "/risk";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    telemetry::init_tracing(config.log_format)?;

    let bank = match &config.responses_path {
        Some(path) => ResponseBank::from_json_file(path)
            .with_context(|| format!("failed to load response bank {}", path.display()))?,
        None => ResponseBank::builtin(),
    };

    info!(responder = ?config.responder, "Starting assistant");
    let mut session = ChatSession::new(config.build_responder(bank), config.reply_delay());
    let mut risk_source = config.entropy_source();

    for message in session.messages() {
        println!("bot [{}]: {}", message.display_time(), message.content);
    }
    println!();
    println!("Suggested questions:");
    for question in session.suggested_questions() {
        println!("  - {}", question);
    }
    println!("({})", session.emergency_notice());
    println!(
        "Type {} <patient form JSON> for a simulated risk assessment, {} to leave.",
        RISK_COMMAND, QUIT_COMMAND
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }
        if let Some(form) = line.trim().strip_prefix(RISK_COMMAND) {
            match assess_form(form, risk_source.as_mut()) {
                Ok(prediction) => println!("{}", prediction.report()),
                Err(e) => {
                    warn!("Risk form rejected: {}", e);
                    println!("Could not assess the form: {}", e);
                }
            }
            continue;
        }

        if let Some(reply) = session.send(&line).await {
            println!("bot [{}]: {}", reply.display_time(), reply.content);
        }
    }

    info!(turns = session.user_turns(), "Conversation finished");

    if let Some(path) = &config.transcript_path {
        let transcript = session.transcript_json()?;
        if let Err(e) = std::fs::write(path, transcript) {
            error!("Failed to write transcript to {}: {}", path.display(), e);
            return Err(e.into());
        }
        info!(path = %path.display(), "Transcript written");
    }

    Ok(())
}
