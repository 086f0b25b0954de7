//! Board layout: maps tiles, the robber, and ports to pixel-space primitives.
//!
//! `layout_board` is a pure function of the board and the render config. The
//! axial origin lands on the viewport center; every other position follows
//! from pointy-top hex geometry, so the same input always yields the same
//! scene.

use crate::config::RenderConfig;
use crate::hex::{apothem, corners, edge_corners, EdgeDirection, HexCoord, Point};
use crate::model::{Board, HexTile, Port, Resource};
use crate::pips::{is_hot, pips};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Robber sits left of the number token, as a fraction of the hex size
const ROBBER_SHIFT: f64 = 0.55;

/// Resource art for one tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSprite {
    pub tile_id: u32,
    pub coord: HexCoord,
    pub resource: Resource,
    pub center: Point,
    /// Hex outline, drawn under the art
    pub corners: [Point; 6],
    pub href: String,
    /// Top-left of the image box
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Number disc with its probability dots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberToken {
    pub tile_id: u32,
    pub center: Point,
    pub number: u8,
    pub radius: f64,
    /// 6 and 8
    pub hot: bool,
    pub pips: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobberMarker {
    pub coord: HexCoord,
    pub center: Point,
    pub href: String,
    pub width: f64,
    pub height: f64,
}

/// Plank from a hex corner to the rim of a port icon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pier {
    pub start: Point,
    pub end: Point,
    pub angle_degrees: f64,
    pub length: f64,
}

impl Pier {
    /// Pier from `start` towards a port icon of `radius` centered at `target`
    pub fn towards(start: Point, target: Point, radius: f64) -> Self {
        let angle_degrees = start.angle_to(&target);
        let length = (start.distance_to(&target) - radius).max(0.0);
        Self {
            start,
            end: start.project(angle_degrees, length),
            angle_degrees,
            length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortMarker {
    pub coord: HexCoord,
    pub direction: EdgeDirection,
    pub center: Point,
    pub radius: f64,
    pub label: String,
    /// Resource icon, None for generic ports
    pub href: Option<String>,
    pub piers: [Pier; 2],
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Grow to cover a box of half-extents `dx` by `dy` around `point`
    fn include(&mut self, point: Point, dx: f64, dy: f64) {
        self.min_x = self.min_x.min(point.x - dx);
        self.min_y = self.min_y.min(point.y - dy);
        self.max_x = self.max_x.max(point.x + dx);
        self.max_y = self.max_y.max(point.y + dy);
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Whether the box lies inside a `width` x `height` viewport at the origin
    pub fn fits(&self, width: f64, height: f64) -> bool {
        self.is_empty()
            || (self.min_x >= 0.0
                && self.min_y >= 0.0
                && self.max_x <= width
                && self.max_y <= height)
    }
}

/// Everything needed to draw a board, in pixel space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub tiles: Vec<TileSprite>,
    pub tokens: Vec<NumberToken>,
    pub robber: Option<RobberMarker>,
    pub ports: Vec<PortMarker>,
}

impl Scene {
    /// Bounding box of all drawn primitives
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for tile in &self.tiles {
            for corner in &tile.corners {
                bounds.include(*corner, 0.0, 0.0);
            }
        }
        for token in &self.tokens {
            bounds.include(token.center, token.radius, token.radius);
        }
        if let Some(robber) = &self.robber {
            bounds.include(robber.center, robber.width / 2.0, robber.height / 2.0);
        }
        for port in &self.ports {
            bounds.include(port.center, port.radius, port.radius);
        }
        bounds
    }
}

/// Lays out tiles against a fixed origin and hex size
struct Layout<'a> {
    config: &'a RenderConfig,
    origin: Point,
}

impl<'a> Layout<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            origin: Point::new(config.width / 2.0, config.height / 2.0),
        }
    }

    fn center(&self, coord: HexCoord) -> Point {
        let p = coord.to_pixel(self.config.hex_size);
        self.origin.offset(p.x, p.y)
    }

    fn tile(&self, tile: &HexTile) -> TileSprite {
        let size = self.config.hex_size;
        let center = self.center(tile.coord());
        let width = 2.0 * apothem(size);
        let height = 2.0 * size;
        TileSprite {
            tile_id: tile.id,
            coord: tile.coord(),
            resource: tile.resource,
            center,
            corners: corners(center, size),
            href: self.config.tile_href(tile.resource.name()),
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    fn token(&self, tile: &HexTile) -> Option<NumberToken> {
        let number = tile.number?;
        let center = self.center(tile.coord()).offset(0.0, self.config.token_offset_y);
        let count = pips(Some(number));
        let spread = (count.saturating_sub(1)) as f64 / 2.0;
        let pips = (0..count)
            .map(|i| {
                center.offset(
                    (i as f64 - spread) * self.config.pip_spacing,
                    self.config.pip_offset_y,
                )
            })
            .collect();
        Some(NumberToken {
            tile_id: tile.id,
            center,
            number,
            radius: self.config.token_radius,
            hot: is_hot(number),
            pips,
        })
    }

    fn robber(&self, coord: HexCoord) -> RobberMarker {
        let center = self
            .center(coord)
            .offset(-ROBBER_SHIFT * self.config.hex_size, 0.0);
        RobberMarker {
            coord,
            center,
            href: self.config.robber_href(),
            width: self.config.robber_width,
            height: self.config.robber_height,
        }
    }

    fn port(&self, port: &Port) -> PortMarker {
        let size = self.config.hex_size;
        let tile_center = self.center(port.coord());
        let center = tile_center.project(
            port.direction.angle_degrees(),
            apothem(size) + self.config.port_distance,
        );
        let piers = edge_corners(tile_center, size, port.direction)
            .map(|corner| Pier::towards(corner, center, self.config.port_radius));
        PortMarker {
            coord: port.coord(),
            direction: port.direction,
            center,
            radius: self.config.port_radius,
            label: port.label(),
            href: port.resource.map(|r| self.config.port_href(r.name())),
            piers,
        }
    }
}

/// Map a board to drawing primitives.
///
/// Tiles are emitted in (r, q) order whatever the input order.
pub fn layout_board(board: &Board, config: &RenderConfig) -> Scene {
    let layout = Layout::new(config);

    let mut ordered: Vec<&HexTile> = board.tiles.iter().collect();
    ordered.sort_by_key(|t| (t.r, t.q));

    let mut seen = HashSet::new();
    for tile in &ordered {
        if !seen.insert(tile.coord()) {
            warn!(q = tile.q, r = tile.r, id = tile.id, "Duplicate tile coordinate");
        }
    }

    let tiles: Vec<TileSprite> = ordered.iter().map(|t| layout.tile(t)).collect();
    // One token per coordinate, from the last tile there
    let tokens: Vec<NumberToken> = ordered
        .iter()
        .enumerate()
        .filter(|(i, t)| {
            ordered
                .get(i + 1)
                .map_or(true, |next| next.coord() != t.coord())
        })
        .filter_map(|(_, t)| layout.token(t))
        .collect();

    let robber = board.robber_coord().map(|coord| {
        if board.tile_at(coord).is_none() {
            warn!(q = coord.q, r = coord.r, "Robber is not on a board tile");
        }
        layout.robber(coord)
    });

    let ports: Vec<PortMarker> = board
        .ports
        .iter()
        .map(|port| {
            if board.tile_at(port.coord()).is_none() {
                warn!(q = port.q, r = port.r, "Port is not attached to a board tile");
            }
            layout.port(port)
        })
        .collect();

    debug!(
        tiles = tiles.len(),
        tokens = tokens.len(),
        ports = ports.len(),
        robber = robber.is_some(),
        "Laid out board"
    );

    Scene {
        width: config.width,
        height: config.height,
        tiles,
        tokens,
        robber,
        ports,
    }
}
