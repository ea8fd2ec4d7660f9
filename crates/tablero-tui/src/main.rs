mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tablero_core::config::{ConfigOverrides, DashboardConfig};
use tablero_core::events::{CycleOutcome, RefreshTrigger};
use tablero_core::feed::{AgentFeedClient, HttpTransport};
use tablero_core::models::Agent;
use tablero_core::runtime::RefreshScheduler;
use tablero_core::store::Dashboard;
use tablero_core::tracing_setup;
use tracing::info;

use crate::runtime::run_app;
use ui::App;

#[derive(Parser)]
#[command(name = "tablero-tui")]
#[command(about = "Live agent status dashboard for the support floor")]
struct Cli {
    /// Path to JSON config file (feedUrl, refreshSeconds, timeoutSeconds)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Agent feed endpoint
    #[arg(long)]
    feed_url: Option<String>,

    /// Seconds between automatic refreshes
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Fetch once, print the dashboard as JSON and exit
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            feed_url: self.feed_url.clone(),
            refresh_secs: self.refresh_secs,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.once {
        tracing_setup::init_stderr_tracing()?;
    } else {
        tracing_setup::init_tracing()?;
    }

    let config = DashboardConfig::load(cli.config.as_deref(), &cli.overrides())?;
    let transport = HttpTransport::new(config.feed_url.clone(), config.request_timeout)?;
    let client = AgentFeedClient::new(transport, config.refresh_interval);

    if cli.once {
        return run_once(client, &config).await;
    }

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    info!(url = %config.feed_url, "starting dashboard");

    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
    let (scheduler, handle) = RefreshScheduler::new(client, config.refresh_interval, event_tx);
    let scheduler_task = scheduler.spawn();

    let mut app = App::new(Dashboard::new(config.refresh_interval));
    app.set_scheduler(handle.clone());

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, &mut event_rx).await;
    ui::restore_terminal()?;

    let _ = handle.shutdown();
    let _ = scheduler_task.await;

    result
}

/// Single fetch without the terminal UI. Fails when the feed could not be loaded.
async fn run_once(mut client: AgentFeedClient<HttpTransport>, config: &DashboardConfig) -> Result<()> {
    let (agents, error) = match client.fetch_agents(std::time::Instant::now()).await {
        Ok(agents) => (agents, None),
        Err(e) => (Arc::<[Agent]>::from(Vec::new()), Some(e)),
    };

    let mut dashboard = Dashboard::new(config.refresh_interval);
    dashboard.apply_outcome(CycleOutcome {
        generation: 1,
        trigger: RefreshTrigger::Startup,
        agents,
        error: error.clone(),
        from_cache: false,
        completed_at: Utc::now(),
    });

    let model = dashboard.render_model(Utc::now());
    let json = serde_json::to_string_pretty(&model).context("Failed to serialize dashboard")?;
    println!("{json}");

    match error {
        Some(e) => Err(anyhow::Error::new(e).context("Agent feed fetch failed")),
        None => Ok(()),
    }
}
