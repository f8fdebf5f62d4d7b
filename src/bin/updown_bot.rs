//! Up/down sweep bot: each elevator shuttles between the bottom and top
//! floors, stopping where an inside button or a same-direction hall request
//! matches its floor.
//!
//! Running with no arguments starts a sandbox run of `tiny_random` on the
//! hosted simulator.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dianti_bots::harness::config::{load_config, load_default_config, BotConfig};
use dianti_bots::harness::driver::drive;
use dianti_bots::harness::policy::UpDownPolicy;
use dianti_bots::harness::session::SimulationSession;

const DEFAULT_BOT_NAME: &str = "updown-rust-bot";

#[derive(Parser)]
#[command(name = "updown_bot", about = "Up/down sweep bot for the Dianti elevator simulator")]
struct Cli {
    /// Simulator endpoint URL
    #[arg(long, env = "DIANTI_ENDPOINT")]
    endpoint: Option<String>,

    /// Building to simulate (tiny_random, medium_random, big_random,
    /// big_clustered, 85_sky_tower)
    #[arg(long, env = "DIANTI_BUILDING")]
    building: Option<String>,

    /// Bot name shown on the scoreboard
    #[arg(long, env = "DIANTI_BOT_NAME")]
    bot_name: Option<String>,

    /// Email used for the scoreboard avatar
    #[arg(long, env = "DIANTI_EMAIL")]
    email: Option<String>,

    /// Event whose scoreboard this run belongs to
    #[arg(long, env = "DIANTI_EVENT")]
    event: Option<String>,

    /// Run scored instead of in the sandbox
    #[arg(long, env = "DIANTI_LIVE")]
    live: bool,

    /// HTTP request timeout in seconds
    #[arg(long, env = "DIANTI_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Path to dianti.toml (default: auto-discover)
    #[arg(long, env = "DIANTI_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path).map_err(anyhow::Error::msg)?,
            None => load_default_config(BotConfig::for_bot(DEFAULT_BOT_NAME)),
        };

        if let Some(v) = self.endpoint {
            config.endpoint = v;
        }
        if let Some(v) = self.building {
            config.building_name = v;
        }
        if let Some(v) = self.bot_name {
            config.bot = v;
        }
        if let Some(v) = self.email {
            config.email = v;
        }
        if let Some(v) = self.event {
            config.event = v;
        }
        if self.live {
            config.sandbox = false;
        }
        if let Some(v) = self.timeout_secs {
            config.timeout_secs = v;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Cli::parse().into_config()?;
    tracing::info!(
        bot = %config.bot,
        building = %config.building_name,
        sandbox = config.sandbox,
        endpoint = %config.endpoint,
        "starting up/down bot"
    );

    let (mut session, initial) = SimulationSession::start(&config).await?;
    let mut policy = UpDownPolicy::new();
    let report = drive(&mut session, &mut policy, initial).await?;

    match report.score {
        Some(score) => println!("Score: {}", score),
        None => println!("Score: unavailable"),
    }
    println!(
        "Replay URL: {}",
        report.replay_url.as_deref().unwrap_or("unavailable")
    );
    Ok(())
}
