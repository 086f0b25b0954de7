//! Game-state snapshot as served by the game backend.
//!
//! This module contains:
//! - Resource kinds and their fallback colors
//! - Tiles, ports, and the board they form
//! - Players and the overall `GameState`
//!
//! Everything here is a plain serializable record. Field names follow the
//! backend's snake_case; the camelCase spellings used by browser clients are
//! accepted on input.

use crate::error::Result;
use crate::hex::{EdgeDirection, HexCoord};
use serde::{Deserialize, Serialize};

/// Terrain kinds a tile can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
    /// Produces nothing; the robber starts here
    Desert,
}

impl Resource {
    /// All tile kinds
    pub const ALL: [Resource; 6] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Ore,
        Resource::Desert,
    ];

    /// Kinds that produce cards (everything but desert)
    pub const PRODUCING: [Resource; 5] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Ore,
    ];

    /// Lowercase name, also the asset file stem
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Sheep => "sheep",
            Resource::Wheat => "wheat",
            Resource::Ore => "ore",
            Resource::Desert => "desert",
        }
    }

    pub fn is_desert(&self) -> bool {
        matches!(self, Resource::Desert)
    }

    /// Fill drawn under the tile art, visible if the art fails to load
    pub fn fill_color(&self) -> &'static str {
        match self {
            Resource::Wood => "#2e7d32",
            Resource::Brick => "#b5532c",
            Resource::Sheep => "#8bc34a",
            Resource::Wheat => "#f2c94c",
            Resource::Ore => "#78858f",
            Resource::Desert => "#e6d3a3",
        }
    }
}

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexTile {
    pub id: u32,
    pub q: i32,
    pub r: i32,
    pub resource: Resource,
    /// Dice number that triggers production (2-12 except 7, None for desert)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
}

impl HexTile {
    pub fn new(id: u32, coord: HexCoord, resource: Resource, number: Option<u8>) -> Self {
        Self {
            id,
            q: coord.q,
            r: coord.r,
            resource,
            number,
        }
    }

    pub fn coord(&self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }
}

/// A trade port bound to one edge of a coastal tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub q: i32,
    pub r: i32,
    /// Edge of the tile the port faces (0=NE, 1=E, 2=SE, 3=SW, 4=W, 5=NW)
    pub direction: EdgeDirection,
    /// Resource traded at 2:1, or None for a generic 3:1 port
    #[serde(default)]
    pub resource: Option<Resource>,
    pub ratio: u8,
}

impl Port {
    /// Generic 3:1 port
    pub fn generic(coord: HexCoord, direction: EdgeDirection) -> Self {
        Self {
            q: coord.q,
            r: coord.r,
            direction,
            resource: None,
            ratio: 3,
        }
    }

    /// 2:1 port for a specific resource
    pub fn specific(coord: HexCoord, direction: EdgeDirection, resource: Resource) -> Self {
        Self {
            q: coord.q,
            r: coord.r,
            direction,
            resource: Some(resource),
            ratio: 2,
        }
    }

    pub fn coord(&self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }

    pub fn is_generic(&self) -> bool {
        self.resource.is_none()
    }

    /// Trade ratio as shown on the port icon, e.g. "3:1"
    pub fn label(&self) -> String {
        format!("{}:1", self.ratio)
    }
}

/// Tiles, robber, and ports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<HexTile>,
    /// Tile currently holding the robber
    #[serde(default)]
    pub robber: Option<HexTile>,
    #[serde(default)]
    pub ports: Vec<Port>,
}

impl Board {
    /// Get a tile by coordinate
    pub fn tile_at(&self, coord: HexCoord) -> Option<&HexTile> {
        self.tiles.iter().find(|t| t.coord() == coord)
    }

    pub fn robber_coord(&self) -> Option<HexCoord> {
        self.robber.as_ref().map(HexTile::coord)
    }
}

/// Player color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Orange,
    White,
}

/// Player identifier; the backend sends integers, browser fixtures use strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerId {
    Number(u32),
    Text(String),
}

/// A position referenced by player pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexPosition {
    pub q: i32,
    pub r: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub start: HexPosition,
    pub end: HexPosition,
}

/// Resource card counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCounts {
    pub brick: u32,
    pub ore: u32,
    pub sheep: u32,
    pub wheat: u32,
    pub wood: u32,
}

impl ResourceCounts {
    /// Count of a specific resource (desert always holds none)
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Brick => self.brick,
            Resource::Ore => self.ore,
            Resource::Sheep => self.sheep,
            Resource::Wheat => self.wheat,
            Resource::Wood => self.wood,
            Resource::Desert => 0,
        }
    }

    /// Total number of resource cards
    pub fn total(&self) -> u32 {
        Resource::PRODUCING.iter().map(|r| self.get(*r)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    #[serde(default)]
    pub resources: ResourceCounts,
    #[serde(default)]
    pub settlements: Vec<HexPosition>,
    #[serde(default)]
    pub cities: Vec<HexPosition>,
    #[serde(default)]
    pub roads: Vec<Road>,
    #[serde(default, alias = "victoryPoints")]
    pub victory_points: u32,
}

impl Player {
    /// A player with no pieces or cards yet
    pub fn new(id: u32, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id: PlayerId::Number(id),
            name: name.into(),
            color,
            resources: ResourceCounts::default(),
            settlements: Vec::new(),
            cities: Vec::new(),
            roads: Vec::new(),
            victory_points: 0,
        }
    }
}

/// Turn phase tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnPhase {
    #[default]
    Setup,
    Main,
    Robbing,
    Trading,
}

/// The complete snapshot consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default, alias = "currentPlayerIndex")]
    pub current_player_index: usize,
    #[serde(default, alias = "turnPhase")]
    pub turn_phase: TurnPhase,
}

impl GameState {
    pub fn new(board: Board, players: Vec<Player>) -> Self {
        Self {
            board,
            players,
            current_player_index: 0,
            turn_phase: TurnPhase::Setup,
        }
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The player whose turn it is, if the index is in range
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BACKEND_SNAPSHOT: &str = r#"{
        "board": {
            "tiles": [
                {"id": 0, "q": 0, "r": -2, "resource": "wood", "number": 5},
                {"id": 1, "q": 1, "r": -2, "resource": "desert", "number": null}
            ],
            "robber": {"id": 1, "q": 1, "r": -2, "resource": "desert", "number": null},
            "ports": [
                {"q": 0, "r": -2, "direction": 5, "resource": null, "ratio": 3},
                {"q": 1, "r": -2, "direction": 0, "resource": "ore", "ratio": 2}
            ]
        },
        "players": [
            {
                "id": 1, "name": "Alice", "color": "red",
                "resources": {"brick": 1, "ore": 0, "sheep": 2, "wheat": 0, "wood": 3},
                "settlements": [{"q": 0, "r": -2}], "cities": [], "roads": [],
                "victory_points": 1
            }
        ],
        "current_player_index": 0,
        "turn_phase": "setup"
    }"#;

    #[test]
    fn test_parse_backend_snapshot() {
        let state = GameState::from_json(BACKEND_SNAPSHOT).unwrap();

        assert_eq!(state.board.tiles.len(), 2);
        assert_eq!(state.board.tiles[0].resource, Resource::Wood);
        assert_eq!(state.board.tiles[1].number, None);
        assert_eq!(state.board.robber_coord(), Some(HexCoord::new(1, -2)));

        let ports = &state.board.ports;
        assert!(ports[0].is_generic());
        assert_eq!(ports[0].direction, EdgeDirection::NorthWest);
        assert_eq!(ports[1].resource, Some(Resource::Ore));
        assert_eq!(ports[1].label(), "2:1");

        let alice = state.current_player().unwrap();
        assert_eq!(alice.id, PlayerId::Number(1));
        assert_eq!(alice.resources.total(), 6);
        assert_eq!(alice.victory_points, 1);
        assert_eq!(state.turn_phase, TurnPhase::Setup);
    }

    #[test]
    fn test_parse_camel_case_client_fixture() {
        let json = r#"{
            "board": {"tiles": [{"id": 8, "q": -1, "r": 0, "resource": "desert"}]},
            "players": [{"id": "p1", "name": "Bob", "color": "blue", "victoryPoints": 2}],
            "currentPlayerIndex": 0,
            "turnPhase": "robbing"
        }"#;
        let state = GameState::from_json(json).unwrap();

        assert!(state.board.robber.is_none());
        assert!(state.board.ports.is_empty());
        assert_eq!(state.players[0].id, PlayerId::Text("p1".to_string()));
        assert_eq!(state.players[0].victory_points, 2);
        assert_eq!(state.turn_phase, TurnPhase::Robbing);
    }

    #[test]
    fn test_rejects_out_of_range_port_direction() {
        let json = r#"{"board": {"tiles": [], "ports": [
            {"q": 0, "r": 0, "direction": 7, "resource": null, "ratio": 3}
        ]}}"#;
        let err = GameState::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Invalid edge direction 7"));
    }

    #[test]
    fn test_rejects_unknown_resource() {
        let json = r#"{"board": {"tiles": [{"id": 0, "q": 0, "r": 0, "resource": "gold"}]}}"#;
        assert!(GameState::from_json(json).is_err());
    }

    #[test]
    fn test_current_player_out_of_range() {
        let mut state = GameState::new(
            Board::default(),
            vec![Player::new(1, "Alice", PlayerColor::Red)],
        );
        state.current_player_index = 3;
        assert!(state.current_player().is_none());
    }

    #[test]
    fn test_json_round_trip_preserves_state() {
        let state = GameState::from_json(BACKEND_SNAPSHOT).unwrap();
        let reparsed = GameState::from_json(&state.to_json_pretty().unwrap()).unwrap();
        assert_eq!(state, reparsed);
    }

    #[test]
    fn test_board_tile_lookup() {
        let board = Board {
            tiles: vec![HexTile::new(4, HexCoord::new(2, -1), Resource::Brick, Some(9))],
            robber: None,
            ports: vec![Port::generic(HexCoord::new(2, -1), EdgeDirection::East)],
        };
        assert_eq!(board.tile_at(HexCoord::new(2, -1)).map(|t| t.id), Some(4));
        assert!(board.tile_at(HexCoord::new(0, 0)).is_none());
        assert_eq!(board.ports[0].label(), "3:1");
    }
}
