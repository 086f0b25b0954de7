//! Boards to render when no snapshot is supplied.
//!
//! - `sample_game`: a fixed 19-tile board, handy for previews and tests
//! - `standard_board_with_rng`: a randomized board with the standard tile, number, and
//!   port counts

use crate::hex::{edge_midpoint, EdgeDirection, HexCoord};
use crate::model::{Board, GameState, HexTile, Player, PlayerColor, Port, Resource};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Radius of the standard island (19 tiles)
const ISLAND_RADIUS: i32 = 2;

/// Dice numbers for the 18 producing tiles
const STANDARD_NUMBERS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

const MAX_NUMBER_ATTEMPTS: usize = 1000;

/// Tiles of the sample board in `HexCoord::within_radius(2)` order
const SAMPLE_TILES: [(Resource, Option<u8>); 19] = [
    (Resource::Wood, Some(5)),
    (Resource::Brick, Some(2)),
    (Resource::Sheep, Some(6)),
    (Resource::Wheat, Some(3)),
    (Resource::Ore, Some(8)),
    (Resource::Sheep, Some(4)),
    (Resource::Wood, Some(9)),
    (Resource::Wheat, Some(11)),
    (Resource::Desert, None),
    (Resource::Brick, Some(10)),
    (Resource::Sheep, Some(3)),
    (Resource::Ore, Some(8)),
    (Resource::Wood, Some(4)),
    (Resource::Wheat, Some(5)),
    (Resource::Sheep, Some(6)),
    (Resource::Brick, Some(9)),
    (Resource::Wheat, Some(10)),
    (Resource::Ore, Some(11)),
    (Resource::Wood, Some(3)),
];

/// The two players every locally generated game starts with
pub fn default_players() -> Vec<Player> {
    vec![
        Player::new(1, "Alice", PlayerColor::Red),
        Player::new(2, "Bob", PlayerColor::Blue),
    ]
}

/// The fixed sample game: 19 tiles, robber on the desert, 9 ports
pub fn sample_game() -> GameState {
    GameState::new(sample_board(), default_players())
}

pub fn sample_board() -> Board {
    let tiles: Vec<HexTile> = HexCoord::within_radius(ISLAND_RADIUS)
        .into_iter()
        .zip(SAMPLE_TILES)
        .enumerate()
        .map(|(id, (coord, (resource, number)))| HexTile::new(id as u32, coord, resource, number))
        .collect();

    let robber = tiles.iter().find(|t| t.resource.is_desert()).cloned();

    let ports = vec![
        Port::generic(HexCoord::new(0, -2), EdgeDirection::NorthWest),
        Port::specific(HexCoord::new(1, -2), EdgeDirection::NorthEast, Resource::Wheat),
        Port::specific(HexCoord::new(2, -1), EdgeDirection::East, Resource::Ore),
        Port::generic(HexCoord::new(2, 0), EdgeDirection::SouthEast),
        Port::specific(HexCoord::new(1, 1), EdgeDirection::SouthEast, Resource::Sheep),
        Port::generic(HexCoord::new(-1, 2), EdgeDirection::SouthWest),
        Port::generic(HexCoord::new(-2, 2), EdgeDirection::West),
        Port::specific(HexCoord::new(-2, 0), EdgeDirection::West, Resource::Brick),
        Port::specific(HexCoord::new(-1, -1), EdgeDirection::NorthWest, Resource::Wood),
    ];

    Board {
        tiles,
        robber,
        ports,
    }
}

/// Standard game with a provided RNG, wrapped with the default players
pub fn standard_game_with_rng<R: Rng>(rng: &mut R) -> GameState {
    GameState::new(standard_board_with_rng(rng), default_players())
}

/// Create a standard board with a provided RNG.
/// This allows for deterministic board generation when needed
pub fn standard_board_with_rng<R: Rng>(rng: &mut R) -> Board {
    let coords = HexCoord::within_radius(ISLAND_RADIUS);

    // 4 wood, 4 sheep, 4 wheat, 3 brick, 3 ore, 1 desert
    let mut resources: Vec<Resource> = [
        (Resource::Wood, 4),
        (Resource::Sheep, 4),
        (Resource::Wheat, 4),
        (Resource::Brick, 3),
        (Resource::Ore, 3),
        (Resource::Desert, 1),
    ]
    .iter()
    .flat_map(|&(resource, count)| std::iter::repeat(resource).take(count))
    .collect();
    resources.shuffle(rng);

    let producing: Vec<HexCoord> = coords
        .iter()
        .zip(&resources)
        .filter(|(_, resource)| !resource.is_desert())
        .map(|(coord, _)| *coord)
        .collect();
    let numbers = assign_numbers_avoiding_adjacent_68(&producing, rng);

    let tiles: Vec<HexTile> = coords
        .iter()
        .zip(&resources)
        .enumerate()
        .map(|(id, (coord, resource))| {
            HexTile::new(id as u32, *coord, *resource, numbers.get(coord).copied())
        })
        .collect();

    let robber = tiles.iter().find(|t| t.resource.is_desert()).cloned();
    let ports = standard_ports(&tiles, rng);

    Board {
        tiles,
        robber,
        ports,
    }
}

/// Assign dice numbers to the producing tiles, retrying until no 6 touches an 8
fn assign_numbers_avoiding_adjacent_68<R: Rng>(
    producing: &[HexCoord],
    rng: &mut R,
) -> HashMap<HexCoord, u8> {
    let mut numbers = STANDARD_NUMBERS.to_vec();
    let mut assignment = HashMap::new();

    for _ in 0..MAX_NUMBER_ATTEMPTS {
        numbers.shuffle(rng);
        assignment = producing.iter().copied().zip(numbers.iter().copied()).collect();
        if is_valid_number_placement(&assignment) {
            break;
        }
    }

    // Falls back to the last shuffle
    assignment
}

/// Check that no 6 or 8 neighbors another 6 or 8
fn is_valid_number_placement(assignment: &HashMap<HexCoord, u8>) -> bool {
    let hot = |n: u8| n == 6 || n == 8;
    assignment.iter().filter(|(_, &n)| hot(n)).all(|(coord, _)| {
        coord
            .neighbors()
            .iter()
            .all(|neighbor| !assignment.get(neighbor).is_some_and(|&n| hot(n)))
    })
}

/// Edges of land tiles that face the sea
pub fn coastal_edges(tiles: &[HexTile]) -> Vec<(HexCoord, EdgeDirection)> {
    let land: HashSet<HexCoord> = tiles.iter().map(HexTile::coord).collect();
    let mut coastal = Vec::new();
    for tile in tiles {
        for dir in EdgeDirection::ALL {
            if !land.contains(&tile.coord().neighbor(dir)) {
                coastal.push((tile.coord(), dir));
            }
        }
    }
    coastal
}

/// 4 generic (3:1) and 5 specific (2:1, one per resource) ports on spread-out coastal edges
fn standard_ports<R: Rng>(tiles: &[HexTile], rng: &mut R) -> Vec<Port> {
    let mut kinds: Vec<Option<Resource>> = vec![None; 4];
    kinds.extend(Resource::PRODUCING.iter().copied().map(Some));
    kinds.shuffle(rng);

    let edges = select_distributed_coastal_edges(&coastal_edges(tiles), kinds.len(), rng);

    edges
        .into_iter()
        .zip(kinds)
        .map(|((coord, dir), kind)| match kind {
            Some(resource) => Port::specific(coord, dir, resource),
            None => Port::generic(coord, dir),
        })
        .collect()
}

/// Select `count` coastal edges, each as far as possible from those already chosen
fn select_distributed_coastal_edges<R: Rng>(
    coastal: &[(HexCoord, EdgeDirection)],
    count: usize,
    rng: &mut R,
) -> Vec<(HexCoord, EdgeDirection)> {
    if coastal.len() <= count {
        return coastal.to_vec();
    }

    let mut available = coastal.to_vec();
    available.shuffle(rng);
    let mut selected = vec![available.remove(0)];

    while selected.len() < count && !available.is_empty() {
        let best = available
            .iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let min_dist = selected
                    .iter()
                    .map(|chosen| edge_distance(candidate, chosen))
                    .fold(f64::MAX, f64::min);
                (idx, min_dist)
            })
            .fold(None, |best: Option<(usize, f64)>, (idx, dist)| match best {
                Some((_, best_dist)) if best_dist >= dist => best,
                _ => Some((idx, dist)),
            });

        match best {
            Some((idx, _)) => selected.push(available.remove(idx)),
            None => break,
        }
    }

    selected
}

/// Distance between edge midpoints on a unit-size grid
fn edge_distance(a: &(HexCoord, EdgeDirection), b: &(HexCoord, EdgeDirection)) -> f64 {
    let pa = edge_midpoint(a.0.to_pixel(1.0), 1.0, a.1);
    let pb = edge_midpoint(b.0.to_pixel(1.0), 1.0, b.1);
    pa.distance_to(&pb)
}
