//! Start and end placement
//!
//! Start and end sit as far apart as the floor allows, preferring cells with
//! some open space around them.

use super::rect::distance;
use super::shortfall::{Shortfall, Shortfalls};
use super::{CellState, Grid};
use crate::error::GenerationError;
use crate::rng::GameRng;

/// The candidate farthest from `from`
///
/// Equal distances keep the earlier candidate. Returns `None` for an empty
/// candidate list.
pub fn farthest_from(from: (i32, i32), candidates: &[(i32, i32)]) -> Option<(i32, i32)> {
    let mut best: Option<((i32, i32), f64)> = None;
    for &p in candidates {
        let d = distance(from, p);
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((p, d));
        }
    }
    best.map(|(p, _)| p)
}

/// Open cells that keep `radius` cells of clearance from any wall
///
/// Falls back to every open cell, recording a shortfall, when fewer than two
/// qualify.
fn clear_candidates(
    grid: &Grid,
    open: Vec<(i32, i32)>,
    radius: u32,
    shortfalls: &mut Shortfalls,
) -> Vec<(i32, i32)> {
    let radius = radius.min(grid.width().max(grid.height())) as i32;
    let clear: Vec<(i32, i32)> = open
        .iter()
        .copied()
        .filter(|&(x, y)| !grid.has_wall_within(x, y, radius))
        .collect();

    if clear.len() >= 2 {
        return clear;
    }

    shortfalls.record(Shortfall::WallClearanceRelaxed {
        clear: clear.len(),
        total: open.len(),
    });
    open
}

/// Pick and mark the start and end cells
///
/// Returns `(start, end)`. Fails only when the grid has fewer than two open
/// floor cells.
pub fn place_start_and_end(
    grid: &mut Grid,
    min_distance: f64,
    wall_clearance: u32,
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Result<((i32, i32), (i32, i32)), GenerationError> {
    let open = grid.positions(|s| s.is_free_floor());
    if open.len() < 2 {
        log::error!("cannot place start and end: only {} open cells", open.len());
        return Err(GenerationError::InsufficientSpace { walkable: open.len() });
    }

    let candidates = clear_candidates(grid, open, wall_clearance, shortfalls);

    // Three sweeps from a random cell approximate the diameter of the candidate set
    let seed = candidates[rng.index(candidates.len())];
    let far = farthest_from(seed, &candidates).unwrap_or(seed);
    let start = farthest_from(far, &candidates).unwrap_or(far);
    let end = farthest_from(start, &candidates).unwrap_or(start);

    let mut best = (end, distance(start, end));
    let mut pool: Vec<(i32, i32)> = candidates.into_iter().filter(|&p| p != start).collect();

    while best.1 < min_distance {
        let Some(candidate) = rng.take(&mut pool) else {
            shortfalls.record(Shortfall::StartEndTooClose {
                distance: best.1,
                required: min_distance,
            });
            break;
        };
        let d = distance(start, candidate);
        if d >= min_distance || d > best.1 {
            best = (candidate, d);
        }
    }
    let end = best.0;

    grid.set(start.0, start.1, CellState::Start)?;
    grid.set(end.0, end.1, CellState::End)?;
    log::debug!("start {start:?}, end {end:?}, {:.2} apart", best.1);

    Ok((start, end))
}
