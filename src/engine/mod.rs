//! Adventure engine core: the entity model, the world and its player state,
//! command dispatch, and declarative use-item rules. The console front end
//! and configuration live outside this module; everything in here is
//! synchronous, single-threaded, and free of IO except seed loading.

pub mod action;
pub mod commands;
pub mod demo;
pub mod errors;
pub mod seed_loader;
pub mod types;
pub mod world;

pub use action::{ActionRule, RoomRef};
pub use commands::{Command, Outcome, HELP_TEXT};
pub use demo::demo_world;
pub use errors::EngineError;
pub use seed_loader::{load_world_from_json, parse_world};
pub use types::{Clue, Location, Room};
pub use world::TextAdventure;
