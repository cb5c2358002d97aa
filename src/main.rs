//! homesync: Main Entry Point
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                     │
//! │                                                               │
//! │  HTTP (axum)      SystemClock   LogEventSink                  │
//! │  status · report  (Clock)       (EventSink)                   │
//! │  ChannelActuators ──▶ amplifier sender · cleaner sender       │
//! │                                                               │
//! │  ──────────────── Port Trait Boundary ──────────────────      │
//! │                                                               │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │  Reconciler (pure logic)                                │  │
//! │  │  policy · hysteresis · daily clean latch · history      │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │                                                               │
//! │  StateStore (RwLock) · ChangeSignal · actuator channels       │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Threads: one reconciler, one per actuator sender, plus the tokio
//! runtime serving HTTP. Shutdown is process termination.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homesync::adapters::actuators::ChannelActuators;
use homesync::adapters::amplifier::{LogAmplifierLink, run_amplifier_sender};
use homesync::adapters::cleaner::{LogCleanerLink, run_cleaner_sender};
use homesync::adapters::http;
use homesync::adapters::log_sink::LogEventSink;
use homesync::adapters::time::SystemClock;
use homesync::app::service::Reconciler;
use homesync::channels::{AmplifierChannel, ChangeSignal, CleanerChannel};
use homesync::config::SystemConfig;
use homesync::store::StateStore;

// ── Actuator channels ─────────────────────────────────────────

static AMPLIFIER: AmplifierChannel = AmplifierChannel::new();
static CLEANER: CleanerChannel = CleanerChannel::new();

#[derive(Parser, Debug)]
#[command(name = "homesync", version, about)]
struct Args {
    /// Listen address for the status / report endpoint.
    #[arg(long, default_value = "0.0.0.0:5555")]
    listen: SocketAddr,

    /// JSON configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds to wait for first reports before evaluating (overrides the file).
    #[arg(long)]
    startup_grace_secs: Option<u32>,

    /// Log level (env-filter syntax).
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── Configuration ─────────────────────────────────────────
    let mut config = SystemConfig::load(args.config.as_deref())?;
    if let Some(secs) = args.startup_grace_secs {
        config.startup_grace_secs = secs;
    }
    config.validate().context("invalid configuration")?;
    info!("Config: {:?}", config);

    let store = Arc::new(StateStore::new());
    let signal = Arc::new(ChangeSignal::new());

    // ── Sender threads ────────────────────────────────────────
    {
        let levels = config.source_levels;
        thread::Builder::new()
            .name("amp-sender".into())
            .spawn(move || run_amplifier_sender(&AMPLIFIER, levels, &mut LogAmplifierLink))
            .context("spawning amplifier sender")?;
    }
    thread::Builder::new()
        .name("cleaner-sender".into())
        .spawn(|| run_cleaner_sender(&CLEANER, &mut LogCleanerLink))
        .context("spawning cleaner sender")?;

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;

    // ── Reconciler ────────────────────────────────────────────
    {
        let reconciler = Reconciler::new(Arc::clone(&store), config);
        let signal = Arc::clone(&signal);
        thread::Builder::new()
            .name("reconciler".into())
            .spawn(move || {
                let mut hw = ChannelActuators::new(&AMPLIFIER, &CLEANER);
                reconciler.run(&signal, &SystemClock, &mut hw, &mut LogEventSink)
            })
            .context("spawning reconciler")?;
    }

    info!("homesync listening on {}", args.listen);
    axum::serve(listener, http::router(http::AppState::new(store, signal))).await?;
    Ok(())
}
