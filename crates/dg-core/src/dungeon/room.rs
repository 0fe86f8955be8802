//! Room shapes, candidate synthesis and overlap validation
//!
//! A room is a bounding box plus the authoritative set of floor cells inside
//! it, which lets circular and L-shaped rooms share the rectangle machinery
//! used for overlap checks and corridor anchors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::rect::distance_sq;
use super::{CellState, Grid, Rect};
use crate::config::{GenerationConfig, MIN_ROOM_FOOTPRINT};
use crate::error::GridError;
use crate::rng::GameRng;

/// Room outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RoomShape {
    /// Walled rectangle; floor is the interior
    Rectangle,
    /// Disc of cells within a radius of the center
    Circle,
    /// Union of two rectangles sharing their left edge
    LShape,
}

/// An accepted room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub shape: RoomShape,
    pub bounding_box: Rect,
    pub floor_cells: BTreeSet<(i32, i32)>,
}

impl Room {
    /// Rectangle whose 1-cell edge is wall
    pub fn rectangular(bounds: Rect) -> Self {
        let floor_cells = (bounds.y + 1..bounds.bottom() - 1)
            .flat_map(|y| (bounds.x + 1..bounds.right() - 1).map(move |x| (x, y)))
            .collect();
        Self {
            shape: RoomShape::Rectangle,
            bounding_box: bounds,
            floor_cells,
        }
    }

    /// Cells within `radius` of `center`
    pub fn circular(center: (i32, i32), radius: i32) -> Self {
        let (cx, cy) = center;
        let r2 = radius as i64 * radius as i64;
        let bounding_box = Rect::new(cx - radius, cy - radius, radius * 2 + 1, radius * 2 + 1);
        let floor_cells = bounding_box
            .cells()
            .filter(|&p| distance_sq(p, center) <= r2)
            .collect();
        Self {
            shape: RoomShape::Circle,
            bounding_box,
            floor_cells,
        }
    }

    /// Union of two rectangles
    pub fn l_shaped(a: Rect, b: Rect) -> Self {
        let floor_cells = a.cells().chain(b.cells()).collect();
        Self {
            shape: RoomShape::LShape,
            bounding_box: a.union(&b),
            floor_cells,
        }
    }

    /// Check if a cell is one of this room's floor cells
    pub fn has_floor(&self, x: i32, y: i32) -> bool {
        self.floor_cells.contains(&(x, y))
    }

    /// Check if a cell is a floor cell or 8-adjacent to one
    pub fn touches_floor(&self, x: i32, y: i32) -> bool {
        (-1..=1).any(|dy| (-1..=1).any(|dx| self.has_floor(x + dx, y + dy)))
    }

    /// Bounding-box center
    pub fn center(&self) -> (f64, f64) {
        self.bounding_box.center()
    }

    /// Do the two rooms' bounding boxes, each grown by `margin`, intersect?
    ///
    /// This is a bounding-box test: non-rectangular rooms are treated as
    /// their whole box.
    pub fn overlaps(&self, other: &Room, margin: i32) -> bool {
        self.bounding_box
            .expanded(margin)
            .intersects(&other.bounding_box.expanded(margin))
    }
}

/// Check a candidate against every accepted room
pub fn overlaps_any(candidate: &Room, rooms: &[Room], margin: i32) -> bool {
    rooms.iter().any(|room| candidate.overlaps(room, margin))
}

/// World and size limits for candidate rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomBounds {
    pub world_width: i32,
    pub world_height: i32,
    pub min_dimension: i32,
    pub max_dimension: i32,
    pub margin: i32,
}

impl RoomBounds {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            world_width: clamp_i32(config.world_width),
            world_height: clamp_i32(config.world_height),
            min_dimension: clamp_i32(config.min_room_dimension),
            max_dimension: clamp_i32(config.max_room_dimension),
            margin: clamp_i32(config.min_room_separation),
        }
    }
}

fn clamp_i32(v: u32) -> i32 {
    v.min(i32::MAX as u32) as i32
}

/// Draw one candidate room of a weighted-random shape
///
/// 60% rectangles, 20% circles, 20% L-shapes. Returns `None` when the drawn
/// size does not fit the world; the caller decides whether to retry.
pub fn synthesize_room(bounds: &RoomBounds, rng: &mut GameRng) -> Option<Room> {
    let roll = rng.rn2(100);
    if roll < 60 {
        rectangular_room(bounds, rng)
    } else if roll < 80 {
        circular_room(bounds, rng)
    } else {
        l_shaped_room(bounds, rng)
    }
}

/// Random walled rectangle
pub fn rectangular_room(bounds: &RoomBounds, rng: &mut GameRng) -> Option<Room> {
    let min_side = MIN_ROOM_FOOTPRINT as i32;
    let width = rng
        .range_inclusive(bounds.min_dimension, bounds.max_dimension)?
        .max(min_side);
    let height = rng
        .range_inclusive(bounds.min_dimension, bounds.max_dimension)?
        .max(min_side);

    let x = rng.range_inclusive(bounds.margin, bounds.world_width - width - bounds.margin)?;
    let y = rng.range_inclusive(bounds.margin, bounds.world_height - height - bounds.margin)?;

    if x < 0 || y < 0 || x + width > bounds.world_width || y + height > bounds.world_height {
        return None;
    }

    Some(Room::rectangular(Rect::new(x, y, width, height)))
}

/// Random disc
pub fn circular_room(bounds: &RoomBounds, rng: &mut GameRng) -> Option<Room> {
    let radius = rng
        .range_inclusive(bounds.min_dimension / 2, bounds.max_dimension / 2)?
        .max(1);

    let reach = radius + bounds.margin;
    let cx = rng.range_inclusive(reach, bounds.world_width - reach - 1)?;
    let cy = rng.range_inclusive(reach, bounds.world_height - reach - 1)?;

    if cx - radius < 0
        || cx + radius >= bounds.world_width
        || cy - radius < 0
        || cy + radius >= bounds.world_height
    {
        return None;
    }

    Some(Room::circular((cx, cy), radius))
}

/// Random L: a tall rectangle and a wide one sharing a left edge and a bottom
pub fn l_shaped_room(bounds: &RoomBounds, rng: &mut GameRng) -> Option<Room> {
    let (min, max) = (bounds.min_dimension, bounds.max_dimension);
    let half = (max / 2).max(min);

    let width1 = rng.range_inclusive(min, half)?;
    let height1 = rng.range_inclusive(min, max)?;
    let width2 = rng.range_inclusive(min, max)?;
    let height2 = rng.range_inclusive(min, half)?;

    let x = rng.range_inclusive(bounds.margin, bounds.world_width - max - bounds.margin)?;
    let y = rng.range_inclusive(bounds.margin, bounds.world_height - max - bounds.margin)?;

    let upright = Rect::new(x, y, width1, height1);
    let foot = Rect::new(x, y + height1 - height2, width2, height2);
    let room = Room::l_shaped(upright, foot);

    let bbox = room.bounding_box;
    if bbox.x < bounds.margin
        || bbox.y < bounds.margin
        || bbox.right() >= bounds.world_width - bounds.margin
        || bbox.bottom() >= bounds.world_height - bounds.margin
    {
        return None;
    }

    Some(room)
}

/// Write a room's floor cells into the grid
///
/// The cells around the room are already wall from the grid reset.
pub fn mark_room(grid: &mut Grid, room: &Room) -> Result<(), GridError> {
    for &(x, y) in &room.floor_cells {
        grid.set(x, y, CellState::RoomFloor)?;
    }
    Ok(())
}
