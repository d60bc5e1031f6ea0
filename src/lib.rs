//! # Cluebound - a clue-driven interactive fiction engine
//!
//! Cluebound models a small explorable world — locations containing rooms,
//! rooms containing clues — plus the player state and command machine that
//! drive a turn-based text adventure. Items can be taken into a bag and
//! used; declarative action rules decide what using an item does (unlock a
//! room, reveal a new clue or room) based on where the player stands and
//! what they carry.
//!
//! ## Quick Start
//!
//! ```rust
//! use cluebound::engine::{demo_world, Command, Outcome};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut world = demo_world()?;
//!     match world.dispatch(&Command::parse("look"))? {
//!         Outcome::Reply(text) => println!("{text}"),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`] - World model, command dispatch, and use-item rules
//! - [`config`] - TOML configuration for the console front end
//! - [`logfmt`] - Log sanitisation for untrusted player input
//!
//! The engine is synchronous and single-threaded by design: one command is
//! dispatched at a time and completes all of its state changes before the
//! next line is read. A process hosting several sessions must give each one
//! its own world instance.

pub mod config;
pub mod engine;
pub mod logfmt;
