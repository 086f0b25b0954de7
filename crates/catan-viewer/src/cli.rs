//! Command-line options.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Where the backend serves its game-state snapshot
pub const DEFAULT_GAME_URL: &str = "http://localhost:8000/game";

#[derive(Debug, Parser)]
#[command(name = "catan-viewer")]
#[command(about = "Render a Kopiatan board snapshot as SVG")]
pub struct Cli {
    /// Where the game state comes from
    #[arg(long, value_enum, default_value_t = SourceKind::Sample)]
    pub source: SourceKind,

    /// Snapshot endpoint for `--source url`
    #[arg(long, env = "CATAN_GAME_URL", default_value = DEFAULT_GAME_URL)]
    pub url: String,

    /// Snapshot file for `--source file`
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Seed for `--source standard`
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// TOML render config
    #[arg(long, env = "CATAN_RENDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the loaded game state as JSON instead of rendering it
    #[arg(long)]
    pub dump_state: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in sample board
    Sample,
    /// Randomized standard board
    Standard,
    /// JSON snapshot on disk
    File,
    /// JSON snapshot fetched over HTTP
    Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["catan-viewer"]).unwrap();
        assert_eq!(cli.source, SourceKind::Sample);
        assert!(cli.output.is_none());
        assert!(!cli.dump_state);
        assert_eq!(cli.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_url_source() {
        let cli = Cli::try_parse_from([
            "catan-viewer",
            "--source",
            "url",
            "--url",
            "http://example.test/game",
            "-o",
            "board.svg",
        ])
        .unwrap();
        assert_eq!(cli.source, SourceKind::Url);
        assert_eq!(cli.url, "http://example.test/game");
        assert_eq!(cli.output, Some(PathBuf::from("board.svg")));
    }

    #[test]
    fn test_standard_with_seed() {
        let cli = Cli::try_parse_from(["catan-viewer", "--source", "standard", "--seed", "42"])
            .unwrap();
        assert_eq!(cli.source, SourceKind::Standard);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_unknown_source_rejected() {
        assert!(Cli::try_parse_from(["catan-viewer", "--source", "ftp"]).is_err());
    }
}
