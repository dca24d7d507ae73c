use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use edgesage::agents::{Catalog, ChatSession, Selection};
use edgesage::models::{EdgeSageConfig, RiskLevel};
use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "edgesage",
    about = "Rule-based advisor personas for meme coins and casino games"
)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the personas on the landing catalog
    Agents,
    /// Chat with a persona interactively (type /quit to leave)
    Chat {
        /// Persona id, e.g. "memes" or "casino"
        id: String,
        #[command(flatten)]
        session: SessionArgs,
        /// Write the conversation as JSON to this path on exit
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Ask a persona a single question and print the reply
    Ask {
        id: String,
        text: String,
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Bankroll in dollars (overrides config)
    #[arg(long)]
    bankroll: Option<Decimal>,

    /// Risk tier: low, medium or high (overrides config)
    #[arg(long)]
    risk: Option<RiskLevel>,

    /// Seed the phrasing selector for reproducible replies
    #[arg(long)]
    seed: Option<u64>,
}

impl SessionArgs {
    /// Layer the flags over the loaded config, then check the result.
    fn apply(&self, config: &mut EdgeSageConfig) -> Result<()> {
        if let Some(bankroll) = self.bankroll {
            config.session.default_bankroll = bankroll;
        }
        if let Some(risk) = self.risk {
            config.session.default_risk_level = risk;
        }
        config.session.validate().context("Invalid session settings")?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config: EdgeSageConfig = match &cli.config {
        Some(path) => {
            let config_str = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {path}"))?;
            toml::from_str(&config_str).with_context(|| "Failed to parse config")?
        }
        None => EdgeSageConfig::default(),
    };

    let catalog = edgesage::build_catalog(&config);

    match cli.command {
        Command::Agents => list_agents(&catalog),
        Command::Chat {
            id,
            session,
            transcript,
        } => {
            session.apply(&mut config)?;
            let registry = edgesage::build_registry(edgesage::build_selector(session.seed))?;
            let Some(chat) = resolve(&catalog, &registry, &config, &id)? else {
                return Ok(());
            };
            let stdin = BufReader::new(tokio::io::stdin());
            run_chat(chat, stdin, transcript.as_deref()).await?;
        }
        Command::Ask { id, text, session } => {
            session.apply(&mut config)?;
            config.session.reply_delay_ms = 0;
            let registry = edgesage::build_registry(edgesage::build_selector(session.seed))?;
            let Some(mut chat) = resolve(&catalog, &registry, &config, &id)? else {
                return Ok(());
            };
            match chat.submit_now(&text)? {
                Some(reply) => println!("{}", reply.content),
                None => println!("Nothing to answer: the question was empty."),
            }
        }
    }

    Ok(())
}

fn list_agents(catalog: &Catalog) {
    for card in catalog.cards() {
        let status = if card.is_enabled() { "ready" } else { "soon" };
        println!(
            "{:<8} {:<16} {:<6} {}",
            card.id, card.name, status, card.description
        );
    }
}

/// Landing selection followed by registry resolution. Prints the reason and
/// returns None when no chat can be opened.
fn resolve(
    catalog: &Catalog,
    registry: &edgesage::agents::AgentRegistry,
    config: &EdgeSageConfig,
    id: &str,
) -> Result<Option<ChatSession>> {
    if catalog.select(id) == Selection::Disabled {
        let name = catalog.get(id).map(|c| c.name.as_str()).unwrap_or(id);
        println!("{name} is coming soon.");
        return Ok(None);
    }
    let session = edgesage::open_session(registry, config, id)?;
    if session.is_none() {
        println!("{}", edgesage::NOT_FOUND);
    }
    Ok(session)
}

/// Interactive loop. The transcript, when requested, is written however the
/// loop ends.
async fn run_chat<R>(mut chat: ChatSession, input: R, transcript: Option<&str>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let outcome = converse(&mut chat, input).await;

    if let Some(path) = transcript {
        let json = chat.transcript_json()?;
        std::fs::write(path, json).with_context(|| format!("Failed to write transcript: {path}"))?;
        tracing::info!(path = %path, messages = chat.len(), "Transcript written");
    }

    outcome
}

async fn converse<R>(chat: &mut ChatSession, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    for message in chat.messages() {
        println!("{}\n", message.content);
    }

    let mut lines = input.lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            return Ok(());
        };
        if line.trim() == "/quit" {
            return Ok(());
        }
        if let Some(reply) = chat.submit(&line).await? {
            println!("\n{}\n", reply.content);
        }
    }
}
