//! Dungeon layout
//!
//! Grid, rooms and the generation stages that turn a config into a level.

mod cell;
mod corridor;
mod generation;
mod grid;
mod maze;
mod placement;
mod rect;
mod room;
mod scatter;
mod shortfall;

pub use cell::{CellState, EntityKind};
pub use corridor::{Axis, carve_corridor, carve_path, carve_segment, perimeter_anchor};
pub use generation::{GenerationResult, generate};
pub use grid::Grid;
pub use maze::{SpanningEdge, connect_rooms};
pub use placement::{farthest_from, place_start_and_end};
pub use rect::{Rect, distance, distance_sq};
pub use room::{
    Room, RoomBounds, RoomShape, circular_room, l_shaped_room, mark_room, overlaps_any,
    rectangular_room, synthesize_room,
};
pub use scatter::{scatter_enemies, scatter_npcs, scatter_treasure};
pub use shortfall::{Shortfall, Shortfalls};
