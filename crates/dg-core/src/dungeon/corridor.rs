//! Corridor carving between two rooms
//!
//! A corridor runs from an anchor on one room's bounding-box edge to an anchor
//! on the other's, as an L of two straight segments. Each step opens a band of
//! cells across the segment and then opens every wall next to that band, so a
//! corridor can't be sealed by one stray wall cell.

use super::shortfall::{Shortfall, Shortfalls};
use super::{CellState, Grid, Room};
use crate::rng::GameRng;

/// Segment direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Pick a corridor anchor on a room's bounding-box edge
///
/// Candidates are the room's own edge floor cells and wall cells that touch
/// the room's floor (including diagonally), so the carved corridor always
/// opens into the room. Returns `None` if no edge cell qualifies.
pub fn perimeter_anchor(grid: &Grid, room: &Room, rng: &mut GameRng) -> Option<(i32, i32)> {
    let candidates: Vec<(i32, i32)> = room
        .bounding_box
        .perimeter()
        .into_iter()
        .filter(|&(x, y)| match grid.get(x, y) {
            Ok(CellState::RoomFloor) => room.has_floor(x, y),
            Ok(CellState::Wall) => room.touches_floor(x, y),
            _ => false,
        })
        .collect();

    rng.choose(&candidates).copied()
}

/// Open a single cell if it is wall or corridor
fn open_cell(grid: &mut Grid, x: i32, y: i32) {
    grid.set_if(x, y, CellState::Floor, |s| {
        matches!(s, CellState::Wall | CellState::Floor)
    });
}

/// Open every wall among the 8 neighbours of (x, y)
fn dilate(grid: &mut Grid, x: i32, y: i32) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            grid.set_if(x + dx, y + dy, CellState::Floor, |s| s == CellState::Wall);
        }
    }
}

/// Carve a straight segment from `from` to `to` along `axis` at `fixed`
///
/// `width` cells are opened across the segment at offsets
/// `-width/2 .. width/2 + width%2`, then dilated by one cell.
pub fn carve_segment(grid: &mut Grid, from: i32, to: i32, fixed: i32, axis: Axis, width: i32) {
    let (lo, hi) = (from.min(to), from.max(to));
    let half = width / 2;

    for i in lo..=hi {
        for w in -half..half + width % 2 {
            let (x, y) = match axis {
                Axis::Horizontal => (i, fixed + w),
                Axis::Vertical => (fixed + w, i),
            };
            open_cell(grid, x, y);
            dilate(grid, x, y);
        }
    }
}

/// Carve an L-shaped path between two points
///
/// With `horizontal_first` the path turns at `(b.0, a.1)`, otherwise at
/// `(a.0, b.1)`.
pub fn carve_path(grid: &mut Grid, a: (i32, i32), b: (i32, i32), width: i32, horizontal_first: bool) {
    if horizontal_first {
        carve_segment(grid, a.0, b.0, a.1, Axis::Horizontal, width);
        carve_segment(grid, a.1, b.1, b.0, Axis::Vertical, width);
    } else {
        carve_segment(grid, a.1, b.1, a.0, Axis::Vertical, width);
        carve_segment(grid, a.0, b.0, b.1, Axis::Horizontal, width);
    }
}

/// Join two rooms with a corridor
///
/// `rooms[from]` and `rooms[to]` must be valid indices. Falls back to a
/// room's rounded bounding-box center when it has no usable edge anchor.
pub fn carve_corridor(
    grid: &mut Grid,
    rooms: &[Room],
    from: usize,
    to: usize,
    corridor_width: (u32, u32),
    rng: &mut GameRng,
    shortfalls: &mut Shortfalls,
) {
    let mut anchor = |grid: &Grid, idx: usize, rng: &mut GameRng| {
        let room = &rooms[idx];
        perimeter_anchor(grid, room, rng).unwrap_or_else(|| {
            shortfalls.record(Shortfall::NoPerimeterAnchor { room: idx });
            room.bounding_box.center_cell()
        })
    };

    let a = anchor(&*grid, from, rng);
    let b = anchor(&*grid, to, rng);

    let widest = grid.width().max(grid.height());
    let width = rng
        .count_between(corridor_width.0, corridor_width.1)
        .min(widest)
        .max(1) as i32;
    let horizontal_first = rng.one_in(2);

    log::debug!(
        "corridor {from} -> {to}: {a:?} to {b:?}, width {width}, {}",
        if horizontal_first { "horizontal first" } else { "vertical first" }
    );

    carve_path(grid, a, b, width, horizontal_first);
}
