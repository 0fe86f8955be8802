//! Grid cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 0,
    /// Corridor-carved open space
    Floor = 1,
    /// Room interior
    RoomFloor = 2,
    Start = 3,
    End = 4,
    Treasure = 5,
    Npc = 6,
    Enemy = 7,
}

impl CellState {
    /// Open floor with nothing placed on it (corridor or room)
    pub const fn is_free_floor(&self) -> bool {
        matches!(self, CellState::Floor | CellState::RoomFloor)
    }

    /// Anything a walker can stand on
    pub const fn is_walkable(&self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// Check if this is an entity placed by the scatterer
    pub const fn is_entity(&self) -> bool {
        matches!(self, CellState::Treasure | CellState::Npc | CellState::Enemy)
    }

    /// Get the display character for this cell state
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Floor => ',',
            CellState::RoomFloor => '.',
            CellState::Start => '<',
            CellState::End => '>',
            CellState::Treasure => '$',
            CellState::Npc => '@',
            CellState::Enemy => 'M',
        }
    }
}

/// Kind of interactive entity placed on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum EntityKind {
    Treasure,
    Npc,
    Enemy,
}

impl EntityKind {
    /// Cell state that marks this entity in the grid
    pub const fn cell_state(&self) -> CellState {
        match self {
            EntityKind::Treasure => CellState::Treasure,
            EntityKind::Npc => CellState::Npc,
            EntityKind::Enemy => CellState::Enemy,
        }
    }
}
