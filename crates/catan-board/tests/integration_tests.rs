//! Integration tests for the board renderer.
//!
//! These tests run complete snapshots through layout and SVG output.

use catan_board::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Snapshot in the shape the game backend serves from `GET /game`
const BACKEND_SNAPSHOT: &str = r#"{
    "board": {
        "tiles": [
            {"id": 0, "q": 0, "r": -1, "resource": "brick", "number": 6},
            {"id": 1, "q": 1, "r": -1, "resource": "ore", "number": 12},
            {"id": 2, "q": -1, "r": 0, "resource": "wood", "number": 4},
            {"id": 3, "q": 0, "r": 0, "resource": "desert", "number": null},
            {"id": 4, "q": 1, "r": 0, "resource": "sheep", "number": 9},
            {"id": 5, "q": -1, "r": 1, "resource": "wheat", "number": 3},
            {"id": 6, "q": 0, "r": 1, "resource": "wheat", "number": 8}
        ],
        "robber": {"id": 3, "q": 0, "r": 0, "resource": "desert", "number": null},
        "ports": [
            {"q": 0, "r": -1, "direction": 5, "resource": null, "ratio": 3},
            {"q": 1, "r": 0, "direction": 1, "resource": "sheep", "ratio": 2}
        ]
    },
    "players": [
        {"id": 1, "name": "Alice", "color": "red",
         "resources": {"brick": 0, "ore": 0, "sheep": 0, "wheat": 0, "wood": 0},
         "settlements": [], "cities": [], "roads": [], "victory_points": 0},
        {"id": 2, "name": "Bob", "color": "blue",
         "resources": {"brick": 0, "ore": 0, "sheep": 0, "wheat": 0, "wood": 0},
         "settlements": [], "cities": [], "roads": [], "victory_points": 0}
    ],
    "current_player_index": 1,
    "turn_phase": "main"
}"#;

#[test]
fn test_backend_snapshot_renders() {
    let state = GameState::from_json(BACKEND_SNAPSHOT).unwrap();
    assert_eq!(state.current_player().map(|p| p.name.as_str()), Some("Bob"));
    assert_eq!(state.turn_phase, TurnPhase::Main);

    let config = RenderConfig::default();
    let scene = layout_board(&state.board, &config);

    assert_eq!(scene.tiles.len(), 7);
    assert_eq!(scene.tokens.len(), 6);
    assert_eq!(scene.ports.len(), 2);
    assert_eq!(scene.robber.as_ref().map(|r| r.coord), Some(HexCoord::new(0, 0)));

    // 6 + 12 + 4 + 9 + 3 + 8 => 5 + 1 + 3 + 4 + 2 + 5
    let total_pips: usize = scene.tokens.iter().map(|t| t.pips.len()).sum();
    assert_eq!(total_pips, 20);

    let hot: Vec<u8> = scene.tokens.iter().filter(|t| t.hot).map(|t| t.number).collect();
    assert_eq!(hot, vec![6, 8]);

    let svg = render_svg(&scene, &config).unwrap();
    assert_eq!(svg.matches("<g class=\"tile\" ").count(), 7);
    assert!(svg.contains("/assets/ports/sheep.svg"));
    assert!(svg.contains("/assets/robber.svg"));
}

#[test]
fn test_rendering_is_deterministic() {
    let state = GameState::from_json(BACKEND_SNAPSHOT).unwrap();
    let config = RenderConfig::default();
    let first = render_game_svg(&state, &config).unwrap();
    let second = render_game_svg(&state, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sample_game_round_trips_through_json() {
    let game = sample_game();
    let json = game.to_json_pretty().unwrap();
    let parsed = GameState::from_json(&json).unwrap();
    assert_eq!(parsed, game);

    let config = RenderConfig::default();
    assert_eq!(
        render_game_svg(&parsed, &config).unwrap(),
        render_game_svg(&game, &config).unwrap()
    );
}

#[test]
fn test_standard_boards_fit_default_viewport() {
    let config = RenderConfig::default();
    for seed in 0..10 {
        let game = standard_game_with_rng(&mut StdRng::seed_from_u64(seed));
        let scene = layout_board(&game.board, &config);

        assert_eq!(scene.tiles.len(), 19);
        assert_eq!(scene.tokens.len(), 18);
        assert_eq!(scene.ports.len(), 9);
        assert!(scene.robber.is_some());
        assert!(
            scene.bounds().fits(config.width, config.height),
            "Seed {} overflows the viewport: {:?}",
            seed,
            scene.bounds()
        );
    }
}

#[test]
fn test_every_port_has_two_piers_reaching_its_rim() {
    let config = RenderConfig::default();
    let game = standard_game_with_rng(&mut StdRng::seed_from_u64(5));
    let scene = layout_board(&game.board, &config);

    for port in &scene.ports {
        for pier in &port.piers {
            assert!(pier.length > 0.0);
            let gap = pier.end.distance_to(&port.center);
            assert!((gap - port.radius).abs() < 1e-6, "Pier should stop at the icon rim");
        }
    }
}

#[test]
fn test_config_from_toml_scales_board() {
    let config = RenderConfig::from_toml_str(
        r#"
        width = 450.0
        height = 400.0
        hex_size = 30.0
        asset_base = "/static/art"
        "#,
    )
    .unwrap();
    let scene = layout_board(&sample_game().board, &config);

    let origin = scene.tiles.iter().find(|t| t.coord == HexCoord::new(0, 0)).unwrap();
    assert_eq!(origin.center, Point::new(225.0, 200.0));
    assert_eq!(origin.height, 60.0);
    assert_eq!(origin.href, "/static/art/hex-tiles/brick.svg");
    assert!(scene.bounds().fits(config.width, config.height));
}

#[test]
fn test_invalid_snapshot_reports_error() {
    let err = GameState::from_json(r#"{"board": {"tiles": [{"id": 0}]}}"#).unwrap_err();
    assert!(matches!(err, BoardError::Json(_)));
}
