//! hex-raider - Hex-grid navigation and raid planning for an autonomous explorer
//!
//! Point-in-time queries over a partial-knowledge snapshot of the world:
//! routes through explored tiles, nearest occupants, stamina and loot.

pub mod core;
pub mod hex;
pub mod map;
pub mod navigation;
pub mod planner;
pub mod raid;
pub mod render;
pub mod snapshot;
pub mod troops;
