//! Game-state sources for the viewer.

use crate::cli::{Cli, SourceKind};
use crate::fetch::GameClient;
use anyhow::{bail, Context};
use catan_board::{sample_game, standard_game_with_rng, GameState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Sample,
    Standard { seed: Option<u64> },
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        Ok(match cli.source {
            SourceKind::Sample => Source::Sample,
            SourceKind::Standard => Source::Standard { seed: cli.seed },
            SourceKind::File => match &cli.input {
                Some(path) => Source::File(path.clone()),
                None => bail!("--source file needs --input PATH"),
            },
            SourceKind::Url => Source::Url(cli.url.clone()),
        })
    }

    pub async fn load(&self, timeout: Duration) -> anyhow::Result<GameState> {
        match self {
            Source::Sample => Ok(sample_game()),
            Source::Standard { seed: Some(seed) } => {
                Ok(standard_game_with_rng(&mut StdRng::seed_from_u64(*seed)))
            }
            Source::Standard { seed: None } => Ok(standard_game_with_rng(&mut rand::thread_rng())),
            Source::File(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                GameState::from_json(&json)
                    .with_context(|| format!("Failed to parse {}", path.display()))
            }
            Source::Url(url) => {
                let client = GameClient::new(timeout)?;
                Ok(client.fetch_game(url).await?)
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Sample => write!(f, "sample board"),
            Source::Standard { seed: Some(seed) } => write!(f, "standard board (seed {})", seed),
            Source::Standard { seed: None } => write!(f, "standard board"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}
