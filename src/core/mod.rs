pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, EngineConfig};
pub use error::{HexError, Result};
pub use types::{EntityId, ResourceId, Tick, WeightKg};
