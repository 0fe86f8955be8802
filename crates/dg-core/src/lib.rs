//! dg-core: procedural dungeon layout generation
//!
//! Builds a 2D grid of walls, rooms and corridors, then places a start, an
//! end and scattered entities. The crate does no I/O; materializing the
//! layout is left to the caller.
//!
//! ```
//! use dg_core::{GameRng, GenerationConfig, generate};
//!
//! let mut rng = GameRng::new(7);
//! let level = generate(&GenerationConfig::default(), &mut rng).unwrap();
//! assert!(level.is_fully_connected());
//! ```

pub mod config;
pub mod dungeon;
pub mod error;
mod rng;

pub use config::GenerationConfig;
pub use dungeon::{GenerationResult, generate};
pub use error::{ConfigError, GenerationError, GridError};
pub use rng::GameRng;
