//! Kopiatan board renderer
//!
//! This crate turns a game-state snapshot into an SVG picture of the board:
//! - Hex coordinate geometry for pointy-top tiles
//! - The serialized game-state model served by the backend
//! - Board layout into drawing primitives (tiles, number tokens, robber, ports)
//! - SVG output
//!
//! # Architecture
//!
//! Rendering is a pure function of the snapshot and a `RenderConfig`. It can be
//! compiled to:
//! - Native Rust for the `catan-viewer` command-line shell
//! - WebAssembly for drawing straight into a browser page
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates, corners, and edge midpoints
//! - [`model`]: Tiles, ports, players, and `GameState`
//! - [`pips`]: Probability dots for dice numbers
//! - [`layout`]: Board to pixel-space `Scene`
//! - [`svg`]: `Scene` to SVG text
//! - [`sample`]: Fixed sample board and randomized standard boards
//! - [`config`]: Render configuration

pub mod config;
pub mod error;
pub mod hex;
pub mod layout;
pub mod model;
pub mod pips;
pub mod sample;
pub mod svg;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use config::RenderConfig;
pub use error::{BoardError, Result};
pub use hex::{EdgeDirection, HexCoord, Point};
pub use layout::{
    layout_board, Bounds, NumberToken, Pier, PortMarker, RobberMarker, Scene, TileSprite,
};
pub use model::{
    Board, GameState, HexPosition, HexTile, Player, PlayerColor, PlayerId, Port, Resource,
    ResourceCounts, Road, TurnPhase,
};
pub use pips::pips;
pub use sample::{sample_game, standard_board_with_rng, standard_game_with_rng};
pub use svg::{render_game_svg, render_svg};
