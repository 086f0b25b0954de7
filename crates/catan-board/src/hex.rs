//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the geometry the renderer is built on:
//! - `HexCoord`: Identifies individual hex tiles
//! - `EdgeDirection`: Identifies one of the six sides of a tile (ports attach here)
//! - `Point`: A position in pixel space
//!
//! Tiles are pointy-top. Pixel space has `y` growing downwards, as in SVG.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point at `distance` from this one, heading `angle_degrees` (0 = east, clockwise)
    pub fn project(&self, angle_degrees: f64, distance: f64) -> Self {
        let rad = angle_degrees.to_radians();
        Self::new(self.x + distance * rad.cos(), self.y + distance * rad.sin())
    }

    pub fn midpoint(&self, other: &Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from this point to `other`, in degrees
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

/// Direction of an edge relative to a hex.
///
/// The discriminant is the edge index used in game-state snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EdgeDirection {
    /// Northeast edge (top-right)
    NorthEast = 0,
    /// East edge (right)
    East = 1,
    /// Southeast edge (bottom-right)
    SouthEast = 2,
    /// Southwest edge (bottom-left)
    SouthWest = 3,
    /// West edge (left)
    West = 4,
    /// Northwest edge (top-left)
    NorthWest = 5,
}

impl EdgeDirection {
    /// All edge directions in clockwise order starting from NorthEast
    pub const ALL: [EdgeDirection; 6] = [
        EdgeDirection::NorthEast,
        EdgeDirection::East,
        EdgeDirection::SouthEast,
        EdgeDirection::SouthWest,
        EdgeDirection::West,
        EdgeDirection::NorthWest,
    ];

    /// Look up a direction by its snapshot index (0-5)
    pub fn from_index(index: u8) -> Result<Self, BoardError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(BoardError::InvalidDirection(index))
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn opposite(&self) -> Self {
        Self::ALL[(self.index() as usize + 3) % 6]
    }

    /// Outward normal of this edge in degrees (0 = east, clockwise since y points down)
    pub fn angle_degrees(&self) -> f64 {
        60.0 * self.index() as f64 - 60.0
    }

    /// Indices of the two corners bounding this edge, in clockwise order
    pub fn corner_indices(&self) -> [usize; 2] {
        let i = self.index() as usize;
        [(i + 5) % 6, i]
    }
}

impl TryFrom<u8> for EdgeDirection {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<EdgeDirection> for u8 {
    fn from(direction: EdgeDirection) -> Self {
        direction.index()
    }
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighboring hexes in `EdgeDirection::ALL` order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        EdgeDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Get the neighbor in a specific direction
    pub fn neighbor(&self, direction: EdgeDirection) -> HexCoord {
        match direction {
            EdgeDirection::East => HexCoord::new(self.q + 1, self.r),
            EdgeDirection::NorthEast => HexCoord::new(self.q + 1, self.r - 1),
            EdgeDirection::NorthWest => HexCoord::new(self.q, self.r - 1),
            EdgeDirection::West => HexCoord::new(self.q - 1, self.r),
            EdgeDirection::SouthWest => HexCoord::new(self.q - 1, self.r + 1),
            EdgeDirection::SouthEast => HexCoord::new(self.q, self.r + 1),
        }
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Every hex within `radius` steps of the origin, row by row (r, then q)
    pub fn within_radius(radius: i32) -> Vec<HexCoord> {
        let mut coords = Vec::new();
        for r in -radius..=radius {
            let q_min = (-radius).max(-r - radius);
            let q_max = radius.min(-r + radius);
            for q in q_min..=q_max {
                coords.push(HexCoord::new(q, r));
            }
        }
        coords
    }

    /// Convert to pixel coordinates (center of hex) relative to the axial origin.
    /// Uses pointy-top orientation with the given hex size (radius)
    pub fn to_pixel(&self, hex_size: f64) -> Point {
        let x = hex_size * (SQRT_3 * self.q as f64 + SQRT_3 / 2.0 * self.r as f64);
        let y = hex_size * (3.0 / 2.0 * self.r as f64);
        Point::new(x, y)
    }
}

/// Distance from a hex center to the middle of any edge
pub fn apothem(hex_size: f64) -> f64 {
    hex_size * SQRT_3 / 2.0
}

/// The six corners of a pointy-top hex.
///
/// Corner `i` sits at `60°·i − 30°`: 0 is upper-right, 2 is the bottom, 5 is the top.
pub fn corners(center: Point, hex_size: f64) -> [Point; 6] {
    std::array::from_fn(|i| center.project(60.0 * i as f64 - 30.0, hex_size))
}

/// The two corners bounding an edge
pub fn edge_corners(center: Point, hex_size: f64, direction: EdgeDirection) -> [Point; 2] {
    let all = corners(center, hex_size);
    direction.corner_indices().map(|i| all[i])
}

/// Midpoint of an edge
pub fn edge_midpoint(center: Point, hex_size: f64, direction: EdgeDirection) -> Point {
    center.project(direction.angle_degrees(), apothem(hex_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_hex_neighbors() {
        let center = HexCoord::new(0, 0);
        let neighbors = center.neighbors();

        let unique: HashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), 6);

        for neighbor in &neighbors {
            assert_eq!(center.distance_to(neighbor), 1);
        }
    }

    #[test]
    fn test_hex_distance() {
        let a = HexCoord::new(0, 0);
        let b = HexCoord::new(2, -1);
        assert_eq!(a.distance_to(&b), 2);

        let c = HexCoord::new(-3, 3);
        assert_eq!(a.distance_to(&c), 3);
    }

    #[test]
    fn test_within_radius_two_is_standard_island() {
        let coords = HexCoord::within_radius(2);
        assert_eq!(coords.len(), 19);
        assert_eq!(coords[0], HexCoord::new(0, -2));
        assert_eq!(coords[18], HexCoord::new(0, 2));
        assert!(coords.iter().all(|c| c.distance_to(&HexCoord::default()) <= 2));
    }

    #[test]
    fn test_direction_index_round_trip() {
        for (i, dir) in EdgeDirection::ALL.iter().enumerate() {
            assert_eq!(dir.index() as usize, i);
            assert_eq!(EdgeDirection::from_index(i as u8).unwrap(), *dir);
        }
        assert!(matches!(
            EdgeDirection::from_index(6),
            Err(BoardError::InvalidDirection(6))
        ));
    }

    #[test]
    fn test_direction_json_is_integer() {
        let json = serde_json::to_string(&EdgeDirection::SouthWest).unwrap();
        assert_eq!(json, "3");
        let parsed: EdgeDirection = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, EdgeDirection::NorthWest);
        assert!(serde_json::from_str::<EdgeDirection>("9").is_err());
    }

    #[test]
    fn test_opposite_directions() {
        assert_eq!(EdgeDirection::NorthEast.opposite(), EdgeDirection::SouthWest);
        assert_eq!(EdgeDirection::East.opposite(), EdgeDirection::West);
        assert_eq!(EdgeDirection::NorthWest.opposite(), EdgeDirection::SouthEast);
    }

    #[test]
    fn test_to_pixel_fixed_values() {
        assert_close(HexCoord::new(0, 0).to_pixel(60.0), Point::new(0.0, 0.0));
        assert_close(HexCoord::new(1, 0).to_pixel(60.0), Point::new(60.0 * SQRT_3, 0.0));
        assert_close(HexCoord::new(0, 1).to_pixel(60.0), Point::new(30.0 * SQRT_3, 90.0));
        assert_close(HexCoord::new(-1, -2).to_pixel(60.0), Point::new(-120.0 * SQRT_3, -180.0));
    }

    #[test]
    fn test_corners_of_pointy_top_hex() {
        let c = corners(Point::new(0.0, 0.0), 10.0);
        assert_close(c[0], Point::new(5.0 * SQRT_3, -5.0));
        assert_close(c[2], Point::new(0.0, 10.0));
        assert_close(c[5], Point::new(0.0, -10.0));
        for corner in &c {
            assert!((corner.distance_to(&Point::default()) - 10.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_edge_midpoint_is_halfway_to_neighbor() {
        let hex = HexCoord::new(1, -1);
        let center = hex.to_pixel(60.0);
        for dir in EdgeDirection::ALL {
            let neighbor_center = hex.neighbor(dir).to_pixel(60.0);
            assert_close(edge_midpoint(center, 60.0, dir), center.midpoint(&neighbor_center));
        }
    }

    #[test]
    fn test_edge_corners_bracket_midpoint() {
        let center = Point::new(100.0, 50.0);
        for dir in EdgeDirection::ALL {
            let [a, b] = edge_corners(center, 60.0, dir);
            assert_close(a.midpoint(&b), edge_midpoint(center, 60.0, dir));
            assert!((a.distance_to(&b) - 60.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_point_angle_and_projection() {
        let origin = Point::new(0.0, 0.0);
        let target = origin.project(90.0, 4.0);
        assert_close(target, Point::new(0.0, 4.0));
        assert!((origin.angle_to(&target) - 90.0).abs() < EPSILON);
    }
}
