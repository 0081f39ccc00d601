use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rock_paper_scissors::config::Config;
use rock_paper_scissors::game::GameSession;
use rock_paper_scissors::game_app::GameApp;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Starting with seed {:?}", config.seed);
    let session = GameSession::new(config.seed);

    eframe::run_native(
        "Rock Paper Scissors",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(GameApp::new(session)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}
