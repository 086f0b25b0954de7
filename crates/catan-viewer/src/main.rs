//! Kopiatan board viewer: loads a game-state snapshot and renders it as SVG.

use anyhow::Context;
use catan_board::{layout_board, render_svg, GameState, RenderConfig};
use clap::Parser;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod fetch;
mod source;

use cli::Cli;
use source::Source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout may carry the SVG, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli).await
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RenderConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load render config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let source = Source::from_cli(cli)?;
    info!("Loading game state from {}", source);
    let state = source.load(cli.timeout()).await?;
    info!("{}", summary(&state));

    let output = if cli.dump_state {
        state.to_json_pretty()?
    } else {
        let scene = layout_board(&state.board, &config);
        if !scene.bounds().fits(config.width, config.height) {
            warn!(
                bounds = ?scene.bounds(),
                "Board extends past the {}x{} viewport",
                config.width,
                config.height
            );
        }
        render_svg(&scene, &config)?
    };

    write_output(cli.output.as_deref(), &output).await
}

/// One-line description of a loaded snapshot
fn summary(state: &GameState) -> String {
    let robber = match state.board.robber_coord() {
        Some(coord) => format!("({}, {})", coord.q, coord.r),
        None => "none".to_string(),
    };
    let current = state
        .current_player()
        .map(|p| p.name.as_str())
        .unwrap_or("nobody");
    format!(
        "{} tiles, {} ports, robber {}, {} players, {:?} phase, {} to play",
        state.board.tiles.len(),
        state.board.ports.len(),
        robber,
        state.players.len(),
        state.turn_phase,
        current
    )
}

async fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, contents)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(contents.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
