//! ark-netcheck: bootstrap an Ark network and inspect it.
//!
//! ```text
//! ark-netcheck --network main settings
//! ark-netcheck --peer 167.114.29.49:4002 height
//! ark-netcheck --config client.toml broadcast signed-tx.json
//! ```

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Instrument;
use ark_net::{
    ArkClient, BroadcastOutcome, ClientConfig, NetworkBootstrapApi, NetworkVariant, PeerAddress,
};
use ark_telemetry::{
    component_span, init_telemetry, log_event, log_network_event, log_peer_event, TelemetryConfig,
};

use crate::report::{render_outcomes, OutcomeLine, SettingsReport};

/// Bootstrap an Ark network and inspect the negotiated settings
#[derive(Parser, Debug)]
#[command(name = "ark-netcheck")]
#[command(about = "Bootstrap an Ark network and inspect the negotiated settings")]
struct Args {
    /// Network variant to bootstrap (main, dev); defaults to the config file's
    #[arg(short, long)]
    network: Option<NetworkVariant>,

    /// Bootstrap from this peer (host:port) instead of the seed list
    #[arg(short, long)]
    peer: Option<PeerAddress>,

    /// TOML client configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of broadcast submissions
    #[arg(long)]
    max_broadcast_peers: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the negotiated network settings (default)
    Settings,
    /// Print the active peer's chain height
    Height,
    /// Broadcast a signed transaction read from a JSON file
    Broadcast {
        /// File holding one transaction as JSON
        file: PathBuf,
    },
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(variant) = args.network {
        config.network.variant = variant;
    }
    if let Some(max) = args.max_broadcast_peers {
        config = config.with_max_broadcast_peers(max);
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn log_outcome(outcome: &BroadcastOutcome) {
    match &outcome.result {
        Ok(response) => log_peer_event!(
            info,
            "netcheck",
            "[ark-net] transaction accepted",
            outcome.peer,
            attempt = outcome.attempt,
            ids = response.transaction_ids.len()
        ),
        Err(err) => log_peer_event!(
            warn,
            "netcheck",
            "[ark-net] transaction not accepted",
            outcome.peer,
            attempt = outcome.attempt,
            error = %err
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::for_service("ark-netcheck");
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    let _telemetry = init_telemetry(telemetry).context("Failed to initialize logging")?;

    let config = load_config(&args)?;
    let client = ArkClient::connect_http(config).context("Failed to create client")?;

    let span = component_span!("bootstrap", component = "netcheck", explicit = args.peer.is_some());
    let bootstrap = async {
        match &args.peer {
            Some(peer) => client.start_network_at(peer.clone()).await,
            None => client.start().await,
        }
    }
    .instrument(span)
    .await;
    bootstrap.context("Bootstrap failed")?;

    let network = client.context().current()?;
    let network_name = network
        .variant()
        .map(|variant| variant.name())
        .unwrap_or("explicit");
    log_network_event!(
        info,
        "netcheck",
        "[ark-net] bootstrap complete",
        network_name,
        peer = %network.active_peer().address(),
        known_peers = network.known_peers().len()
    );

    match args.command.unwrap_or(Command::Settings) {
        Command::Settings => {
            let report = SettingsReport::from_network(&network);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Command::Height => {
            let height = client.get_height(None).await.context("Height query failed")?;
            if args.json {
                println!("{}", serde_json::json!({ "height": height.height, "id": height.id }));
            } else {
                println!("{}", height.height);
            }
            log_event!(debug, "netcheck", "[ark-net] height printed", height = height.height);
        }
        Command::Broadcast { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let transaction: serde_json::Value =
                serde_json::from_str(&raw).context("Transaction file is not valid JSON")?;

            let outcomes = client.broadcast(&transaction).await.context("Broadcast failed")?;
            outcomes.iter().for_each(log_outcome);
            let lines: Vec<OutcomeLine> = outcomes.iter().map(OutcomeLine::from).collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                print!("{}", render_outcomes(&lines));
            }
        }
    }

    Ok(())
}
