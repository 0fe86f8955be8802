//! Generation parameters
//!
//! Every tunable of a generation run. Defaults reproduce the stock 50x50,
//! five-room level. The struct deserializes with `#[serde(default)]`, so a
//! config file only needs the fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest room footprint any shape can produce (3x3)
pub const MIN_ROOM_FOOTPRINT: u32 = 3;

/// Largest accepted world width/height
pub const MAX_WORLD_DIMENSION: u32 = 4096;

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// World width in cells
    pub world_width: u32,
    /// World height in cells
    pub world_height: u32,

    /// Number of rooms to try to place
    pub number_of_rooms: u32,
    /// Smallest room width/height
    pub min_room_dimension: u32,
    /// Largest room width/height
    pub max_room_dimension: u32,
    /// Candidate rooms drawn before giving up on the room target
    pub max_room_attempts: u32,
    /// Wall gap kept around every room's bounding box
    pub min_room_separation: u32,

    pub min_corridor_width: u32,
    pub max_corridor_width: u32,

    pub min_chests_per_world: u32,
    pub max_chests_per_world: u32,

    /// Probability that a room receives NPCs at all
    pub npc_spawn_chance_per_room: f64,
    pub min_npc_per_room: u32,
    pub max_npc_per_room: u32,

    pub min_enemies_per_world: u32,
    pub max_enemies_per_world: u32,

    /// Enemies never spawn within this Euclidean distance of the start
    pub min_distance_to_enemies: f64,
    /// Requested Euclidean distance between start and end
    pub min_distance_between_start_and_end: f64,
    /// Start/end must have no wall within this Chebyshev radius
    pub min_distance_to_wall: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            world_width: 50,
            world_height: 50,
            number_of_rooms: 5,
            min_room_dimension: 5,
            max_room_dimension: 15,
            max_room_attempts: 100,
            min_room_separation: 3,
            min_corridor_width: 1,
            max_corridor_width: 3,
            min_chests_per_world: 5,
            max_chests_per_world: 15,
            npc_spawn_chance_per_room: 0.7,
            min_npc_per_room: 1,
            max_npc_per_room: 3,
            min_enemies_per_world: 10,
            max_enemies_per_world: 20,
            min_distance_to_enemies: 5.0,
            min_distance_between_start_and_end: 20.0,
            min_distance_to_wall: 2,
        }
    }
}

impl GenerationConfig {
    /// Reject configs that cannot describe a level
    ///
    /// Called by [`crate::generate`] before any work happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        nonzero("world_width", self.world_width)?;
        nonzero("world_height", self.world_height)?;
        nonzero("number_of_rooms", self.number_of_rooms)?;
        nonzero("min_room_dimension", self.min_room_dimension)?;
        nonzero("max_room_attempts", self.max_room_attempts)?;

        if self.world_width > MAX_WORLD_DIMENSION || self.world_height > MAX_WORLD_DIMENSION {
            return Err(ConfigError::WorldTooLarge {
                width: self.world_width,
                height: self.world_height,
                max: MAX_WORLD_DIMENSION,
            });
        }

        ordered("room_dimension", self.min_room_dimension, self.max_room_dimension)?;
        ordered("corridor_width", self.min_corridor_width, self.max_corridor_width)?;
        ordered("chests_per_world", self.min_chests_per_world, self.max_chests_per_world)?;
        ordered("npc_per_room", self.min_npc_per_room, self.max_npc_per_room)?;
        ordered("enemies_per_world", self.min_enemies_per_world, self.max_enemies_per_world)?;

        if !(0.0..=1.0).contains(&self.npc_spawn_chance_per_room) {
            return Err(ConfigError::ProbabilityOutOfRange {
                field: "npc_spawn_chance_per_room",
                value: self.npc_spawn_chance_per_room,
            });
        }

        distance("min_distance_to_enemies", self.min_distance_to_enemies)?;
        distance(
            "min_distance_between_start_and_end",
            self.min_distance_between_start_and_end,
        )?;

        let required = MIN_ROOM_FOOTPRINT.saturating_add(self.min_room_separation.saturating_mul(2));
        if self.world_width < required || self.world_height < required {
            return Err(ConfigError::WorldTooSmall {
                width: self.world_width,
                height: self.world_height,
                required,
            });
        }

        Ok(())
    }
}

fn nonzero(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDimension { field });
    }
    Ok(())
}

fn ordered(field: &'static str, min: u32, max: u32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn distance(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidDistance { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GenerationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_world_rejected() {
        let config = GenerationConfig {
            world_width: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension { field: "world_width" })
        );
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let config = GenerationConfig {
            min_room_dimension: 12,
            max_room_dimension: 6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "room_dimension", min: 12, max: 6 })
        ));

        let config = GenerationConfig {
            min_enemies_per_world: 3,
            max_enemies_per_world: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "enemies_per_world", .. })
        ));
    }

    #[test]
    fn test_probability_and_distance_checks() {
        let config = GenerationConfig {
            npc_spawn_chance_per_room: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));

        let config = GenerationConfig {
            min_distance_to_enemies: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDistance { .. })));

        let config = GenerationConfig {
            min_distance_between_start_and_end: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDistance { .. })));
    }

    #[test]
    fn test_world_too_small() {
        let config = GenerationConfig {
            world_width: 8,
            world_height: 40,
            min_room_separation: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::WorldTooSmall {
                width: 8,
                height: 40,
                required: 9
            })
        );
    }

    #[test]
    fn test_world_too_large() {
        let config = GenerationConfig {
            world_height: MAX_WORLD_DIMENSION + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::WorldTooLarge { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "world_width": 80, "number_of_rooms": 9 }"#).unwrap();
        assert_eq!(config.world_width, 80);
        assert_eq!(config.number_of_rooms, 9);
        assert_eq!(config.world_height, 50);
        assert_eq!(config.max_corridor_width, 3);
    }
}
