//! Level generation
//!
//! Runs the stages in order on a fresh grid: rooms, corridors, start and end,
//! then treasure, NPCs and enemies.

use serde::{Deserialize, Serialize};

use super::maze::connect_rooms;
use super::placement::place_start_and_end;
use super::room::{RoomBounds, mark_room, overlaps_any, synthesize_room};
use super::scatter::{scatter_enemies, scatter_npcs, scatter_treasure};
use super::shortfall::{Shortfall, Shortfalls};
use super::{CellState, EntityKind, Grid, Room};
use crate::config::GenerationConfig;
use crate::error::{GenerationError, GridError};
use crate::rng::GameRng;

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub start: (i32, i32),
    pub end: (i32, i32),
    /// Targets the run could not fully meet, in the order they happened
    pub shortfalls: Vec<Shortfall>,
}

impl GenerationResult {
    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.grid.count(state)
    }

    /// Positions of every entity of one kind, row-major
    pub fn entity_positions(&self, kind: EntityKind) -> Vec<(i32, i32)> {
        let state = kind.cell_state();
        self.grid.positions(|s| s == state)
    }

    /// Walls that border open space and so need geometry
    pub fn exposed_walls(&self) -> Vec<(i32, i32)> {
        self.grid
            .iter()
            .filter(|&(x, y, _)| self.grid.is_exposed_wall(x, y))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    pub fn is_fully_connected(&self) -> bool {
        self.grid.is_fully_connected()
    }
}

/// Draw candidate rooms until the target count or the attempt budget runs out
fn place_rooms(
    grid: &mut Grid,
    config: &GenerationConfig,
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Result<Vec<Room>, GridError> {
    let bounds = RoomBounds::from_config(config);
    let target = config.number_of_rooms as usize;
    let mut rooms: Vec<Room> = Vec::with_capacity(target.min(64));

    for _ in 0..config.max_room_attempts {
        if rooms.len() >= target {
            break;
        }
        let Some(room) = synthesize_room(&bounds, rng) else {
            continue;
        };
        if overlaps_any(&room, &rooms, bounds.margin) {
            continue;
        }
        mark_room(grid, &room)?;
        rooms.push(room);
    }

    if rooms.len() < target {
        shortfalls.record(Shortfall::FewerRooms {
            requested: config.number_of_rooms,
            generated: rooms.len(),
        });
    }

    Ok(rooms)
}

/// Generate one level
///
/// The config is validated first. The same config and the same RNG seed
/// always produce the same result.
pub fn generate(
    config: &GenerationConfig,
    rng: &mut GameRng,
) -> Result<GenerationResult, GenerationError> {
    config.validate()?;
    log::info!(
        "generating {}x{} level with {} rooms (seed {})",
        config.world_width,
        config.world_height,
        config.number_of_rooms,
        rng.seed()
    );

    let mut shortfalls = Shortfalls::new();
    let mut grid = Grid::new(config.world_width, config.world_height);

    let rooms = place_rooms(&mut grid, config, rng, &mut shortfalls)?;
    log::debug!("placed {} rooms", rooms.len());

    let corridor_width = (config.min_corridor_width, config.max_corridor_width);
    let edges = connect_rooms(&mut grid, &rooms, corridor_width, rng, &mut shortfalls);
    log::debug!("carved {} corridors", edges.len());

    let (start, end) = place_start_and_end(
        &mut grid,
        config.min_distance_between_start_and_end,
        config.min_distance_to_wall,
        rng,
        &mut shortfalls,
    )?;

    let treasure = scatter_treasure(
        &mut grid,
        (config.min_chests_per_world, config.max_chests_per_world),
        rng,
        &mut shortfalls,
    )?;
    let npcs = scatter_npcs(
        &mut grid,
        &rooms,
        config.npc_spawn_chance_per_room,
        (config.min_npc_per_room, config.max_npc_per_room),
        rng,
        &mut shortfalls,
    )?;
    let enemies = scatter_enemies(
        &mut grid,
        start,
        config.min_distance_to_enemies,
        (config.min_enemies_per_world, config.max_enemies_per_world),
        rng,
        &mut shortfalls,
    )?;

    log::info!(
        "level ready: {} rooms, {treasure} treasure, {npcs} npcs, {enemies} enemies, {} shortfalls",
        rooms.len(),
        shortfalls.as_slice().len()
    );

    Ok(GenerationResult {
        grid,
        rooms,
        start,
        end,
        shortfalls: shortfalls.into_vec(),
    })
}
