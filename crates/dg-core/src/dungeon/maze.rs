//! Room connection by nearest-edge growth
//!
//! Grows a spanning tree over the accepted rooms Prim-style: starting from a
//! random room, the shortest edge from the connected set to an unconnected
//! room is carved next, until every room is reached.

use super::corridor::carve_corridor;
use super::shortfall::{Shortfall, Shortfalls};
use super::{Grid, Room};
use crate::rng::GameRng;

/// A candidate connection between two rooms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge {
    /// Index of the already connected room
    pub from: usize,
    /// Index of the room this edge would reach
    pub to: usize,
    /// Distance between the two bounding-box centers
    pub distance: f64,
}

impl SpanningEdge {
    fn between(rooms: &[Room], from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            distance: rooms[from].bounding_box.center_distance(&rooms[to].bounding_box),
        }
    }
}

/// Remove and return the shortest edge
///
/// Ties go to the lowest `from`, then the lowest `to`.
fn pop_shortest(frontier: &mut Vec<SpanningEdge>) -> Option<SpanningEdge> {
    let idx = frontier
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.from.cmp(&b.from))
                .then(a.to.cmp(&b.to))
        })
        .map(|(i, _)| i)?;
    Some(frontier.swap_remove(idx))
}

/// Connect every room with corridors
///
/// Returns the carved edges in carving order. With fewer than two rooms
/// nothing is carved and no randomness is consumed.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &[Room],
    corridor_width: (u32, u32),
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) -> Vec<SpanningEdge> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut connected = vec![false; rooms.len()];
    let first = rng.index(rooms.len());
    connected[first] = true;

    let mut frontier: Vec<SpanningEdge> = (0..rooms.len())
        .filter(|&to| to != first)
        .map(|to| SpanningEdge::between(rooms, first, to))
        .collect();
    let mut remaining = rooms.len() - 1;
    let mut carved = Vec::with_capacity(remaining);

    while remaining > 0 {
        let Some(edge) = pop_shortest(&mut frontier) else {
            break;
        };

        carve_corridor(grid, rooms, edge.from, edge.to, corridor_width, rng, shortfalls);
        connected[edge.to] = true;
        remaining -= 1;
        carved.push(edge);

        frontier.retain(|e| !connected[e.to]);
        frontier.extend(
            (0..rooms.len())
                .filter(|&to| !connected[to])
                .map(|to| SpanningEdge::between(rooms, edge.to, to)),
        );
    }

    if remaining > 0 {
        shortfalls.record(Shortfall::RoomsUnreachable { unreached: remaining });
    }

    carved
}
