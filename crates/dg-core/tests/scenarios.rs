//! End-to-end generation scenarios

use dg_core::dungeon::{CellState, EntityKind, Shortfall, distance};
use dg_core::{ConfigError, GameRng, GenerationConfig, GenerationError, GenerationResult, generate};

#[test]
fn test_default_world() {
    let config = GenerationConfig::default();
    for seed in 0..25 {
        let result = generate(&config, &mut GameRng::new(seed)).unwrap();

        assert!((1..=5).contains(&result.rooms.len()), "seed {seed}");
        assert!(result.is_fully_connected(), "seed {seed}\n{}", result.grid);
        assert_eq!(result.grid.width(), 50);
        assert_eq!(result.grid.height(), 50);
        assert!(distance(result.start, result.end) > 0.0);
    }
}

#[test]
fn test_single_room_needs_no_corridors() {
    let config = GenerationConfig {
        number_of_rooms: 1,
        ..Default::default()
    };
    let result = generate(&config, &mut GameRng::new(21)).unwrap();

    assert_eq!(result.rooms.len(), 1);
    assert_eq!(result.count(CellState::Floor), 0, "no corridor should be carved");
    assert!(result.is_fully_connected());
    assert!(result.rooms[0].has_floor(result.start.0, result.start.1));
    assert!(result.rooms[0].has_floor(result.end.0, result.end.1));
}

#[test]
fn test_huge_start_end_distance_terminates() {
    let config = GenerationConfig {
        min_distance_between_start_and_end: 1.0e9,
        ..Default::default()
    };
    let result = generate(&config, &mut GameRng::new(3)).unwrap();

    assert_ne!(result.start, result.end);
    assert!(
        result
            .shortfalls
            .iter()
            .any(|s| matches!(s, Shortfall::StartEndTooClose { .. }))
    );
}

#[test]
fn test_invalid_config_rejected_up_front() {
    let config = GenerationConfig {
        min_corridor_width: 4,
        max_corridor_width: 2,
        ..Default::default()
    };
    let err = generate(&config, &mut GameRng::new(0)).unwrap_err();
    assert_eq!(
        err,
        GenerationError::InvalidConfig(ConfigError::InvertedRange {
            field: "corridor_width",
            min: 4,
            max: 2,
        })
    );

    let config = GenerationConfig {
        npc_spawn_chance_per_room: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        generate(&config, &mut GameRng::new(0)),
        Err(GenerationError::InvalidConfig(ConfigError::ProbabilityOutOfRange { .. }))
    ));
}

#[test]
fn test_tiny_worlds_never_panic() {
    for size in 1..20 {
        for separation in 0..4 {
            let config = GenerationConfig {
                world_width: size,
                world_height: size,
                min_room_separation: separation,
                min_room_dimension: 3,
                max_room_dimension: 6,
                ..Default::default()
            };
            for seed in 0..5 {
                match generate(&config, &mut GameRng::new(seed)) {
                    Ok(result) => {
                        assert!(result.is_fully_connected());
                        assert_ne!(result.start, result.end);
                    }
                    Err(GenerationError::InvalidConfig(ConfigError::WorldTooSmall { .. })) => {}
                    Err(GenerationError::InsufficientSpace { walkable }) => assert!(walkable < 2),
                    Err(other) => panic!("size {size}: unexpected error {other}"),
                }
            }
        }
    }
}

#[test]
fn test_rooms_too_big_for_world_is_fatal() {
    let config = GenerationConfig {
        world_width: 12,
        world_height: 12,
        min_room_dimension: 20,
        max_room_dimension: 30,
        min_room_separation: 1,
        ..Default::default()
    };
    let err = generate(&config, &mut GameRng::new(5)).unwrap_err();
    assert_eq!(err, GenerationError::InsufficientSpace { walkable: 0 });
}

#[test]
fn test_crowded_world_reports_shortfalls() {
    let config = GenerationConfig {
        world_width: 24,
        world_height: 24,
        number_of_rooms: 12,
        min_enemies_per_world: 400,
        max_enemies_per_world: 400,
        ..Default::default()
    };
    let result = generate(&config, &mut GameRng::new(8)).unwrap();

    assert!(result.rooms.len() < 12);
    assert!(
        result
            .shortfalls
            .iter()
            .any(|s| matches!(s, Shortfall::FewerRooms { requested: 12, .. }))
    );
    assert!(result.shortfalls.iter().any(|s| matches!(
        s,
        Shortfall::EntityQuota {
            kind: EntityKind::Enemy,
            requested: 400,
            ..
        }
    )));
}

#[test]
fn test_different_seeds_differ() {
    let config = GenerationConfig::default();
    let a = generate(&config, &mut GameRng::new(1)).unwrap();
    let b = generate(&config, &mut GameRng::new(2)).unwrap();
    assert_ne!(a.grid, b.grid);
}

#[test]
fn test_result_json_round_trip() {
    let result = generate(&GenerationConfig::default(), &mut GameRng::new(77)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: GenerationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.grid, result.grid);
    assert_eq!(back.rooms, result.rooms);
    assert_eq!((back.start, back.end), (result.start, result.end));
    assert_eq!(back.shortfalls.len(), result.shortfalls.len());
}
