//! Explorer troops and their stamina economy

pub mod category;
pub mod stamina;

pub use category::{Troop, TroopCategory, TroopTier};
pub use stamina::{biome_travel_sign, StaminaModel, StaminaReport, StaminaState, BIOME_TRAVEL_SIGNS};
