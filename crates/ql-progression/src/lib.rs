//! Character progression for Questline.
//!
//! Provides the [`ProgressionEngine`] (experience, leveling, damage,
//! healing, item use), skills and status-effect upkeep, enemies and their
//! defeat rewards, and the structured [`ProgressionEvent`]s every
//! operation returns instead of printing.

pub mod combat;
pub mod config;
pub mod consumable;
pub mod enemy;
pub mod engine;
pub mod error;
pub mod event;

pub use combat::Skill;
pub use config::ProgressionConfig;
pub use enemy::{Bestiary, Enemy, LootDrop, VictoryPayout, VictoryReport};
pub use engine::ProgressionEngine;
pub use error::{ProgressionError, ProgressionResult};
pub use event::{ProgressionEvent, levels_gained};
