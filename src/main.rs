use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use groupbuy_clock::api::GroupBuyClient;
use groupbuy_clock::clock::{Clock, SystemClock};
use groupbuy_clock::config::Config;
use groupbuy_clock::events::Event;
use groupbuy_clock::feeds::CountdownTicker;
use groupbuy_clock::lifecycle::{self, DenyReason, Viewer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load("config.toml").context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.general.log_level)),
        )
        .init();

    let id: u64 = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: groupbuy-clock <groupbuy-id>"))?
        .parse()
        .context("group-buy id must be a number")?;

    let client = GroupBuyClient::new(&cfg.api)?;
    info!(id, base_url = %cfg.api.base_url, "Fetching group-buy");
    let record = client.fetch_groupbuy(id).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let viewer = Viewer {
        authenticated: cfg.viewer.authenticated,
        participant: cfg.viewer.participant,
    };

    let view = lifecycle::evaluate(&record, viewer, clock.now());
    info!(
        name = %record.display_name(),
        persisted = %record.status,
        effective = %view.status,
        "Loaded group-buy"
    );

    match view.access.reason {
        None => info!("Access: full detail"),
        Some(DenyReason::Auth) => warn!("Access: login required"),
        Some(DenyReason::NotParticipant) => warn!("Access: participants only"),
    }

    let (tx, mut rx) = mpsc::channel::<Event>(100);

    let shutdown_tx = tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(Event::Shutdown).await;
        }
    });

    let mut ticker = CountdownTicker::new(clock, cfg.general.tick(), tx);
    ticker.start(record);

    info!("Watching countdown... (Ctrl+C to quit)");
    while let Some(event) = rx.recv().await {
        if event.is_deadline_reached() {
            info!("Deadline reached");
            break;
        }
        match event {
            Event::Countdown {
                state: Some(state), ..
            } => {
                info!(
                    "{} {} ({:.1}%)",
                    state.label(),
                    state.countdown.formatted,
                    state.countdown.progress_percent
                );
            }
            Event::Countdown { status, .. } => {
                info!(%status, "No active countdown for this phase");
                break;
            }
            Event::Shutdown => {
                info!("Shutting down...");
                break;
            }
        }
    }

    ticker.stop();
    Ok(())
}
