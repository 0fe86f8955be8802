//! Treasure, NPC and enemy scattering
//!
//! Each pass draws a count from its quota and places that many entities on
//! distinct open cells, sampling without replacement. A pass that runs out of
//! cells places what it can and records a shortfall.

use super::rect::distance;
use super::shortfall::{Shortfall, Shortfalls};
use super::{CellState, EntityKind, Grid, Room};
use crate::error::GridError;
use crate::rng::GameRng;

/// Place up to `count` entities drawn from `pool`
///
/// Returns how many were placed.
fn place_from(
    grid: &mut Grid,
    mut pool: Vec<(i32, i32)>,
    count: usize,
    kind: EntityKind,
    rng: &mut GameRng,
) -> Result<usize, GridError> {
    let mut placed = 0;
    while placed < count {
        let Some((x, y)) = rng.take(&mut pool) else {
            break;
        };
        grid.set(x, y, kind.cell_state())?;
        placed += 1;
    }
    Ok(placed)
}

fn check_quota(kind: EntityKind, requested: usize, placed: usize, shortfalls: &mut Shortfalls) {
    if placed < requested {
        shortfalls.record(Shortfall::EntityQuota {
            kind,
            requested,
            placed,
        });
    }
}

/// Scatter chests over every open floor cell
pub fn scatter_treasure(
    grid: &mut Grid,
    quota: (u32, u32),
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Result<usize, GridError> {
    let pool = grid.positions(|s| s.is_free_floor());
    let requested = rng.count_between(quota.0, quota.1) as usize;
    let placed = place_from(grid, pool, requested, EntityKind::Treasure, rng)?;

    check_quota(EntityKind::Treasure, requested, placed, shortfalls);
    log::debug!("placed {placed} treasure");
    Ok(placed)
}

/// Populate rooms with NPCs
///
/// Each room, in order, rolls `spawn_chance` once; a room that passes gets a
/// quota-sized group on its still-unoccupied floor cells.
pub fn scatter_npcs(
    grid: &mut Grid,
    rooms: &[Room],
    spawn_chance: f64,
    quota: (u32, u32),
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Result<usize, GridError> {
    let mut requested = 0;
    let mut placed = 0;

    for room in rooms {
        if !rng.chance(spawn_chance) {
            continue;
        }
        let count = rng.count_between(quota.0, quota.1) as usize;
        let pool: Vec<(i32, i32)> = room
            .floor_cells
            .iter()
            .copied()
            .filter(|&(x, y)| grid.get(x, y) == Ok(CellState::RoomFloor))
            .collect();

        requested += count;
        placed += place_from(grid, pool, count, EntityKind::Npc, rng)?;
    }

    check_quota(EntityKind::Npc, requested, placed, shortfalls);
    log::debug!("placed {placed} npcs");
    Ok(placed)
}

/// Scatter enemies away from the start
///
/// Only cells strictly farther than `min_distance` from `start` qualify.
pub fn scatter_enemies(
    grid: &mut Grid,
    start: (i32, i32),
    min_distance: f64,
    quota: (u32, u32),
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Result<usize, GridError> {
    let pool: Vec<(i32, i32)> = grid
        .positions(|s| s.is_free_floor())
        .into_iter()
        .filter(|&p| distance(p, start) > min_distance)
        .collect();
    let requested = rng.count_between(quota.0, quota.1) as usize;
    let placed = place_from(grid, pool, requested, EntityKind::Enemy, rng)?;

    check_quota(EntityKind::Enemy, requested, placed, shortfalls);
    log::debug!("placed {placed} enemies");
    Ok(placed)
}
