//! Declarative use-item rules.
//!
//! An [`ActionRule`] is a plain data record: optional preconditions (a clue
//! that must be carried, a room the player must stand in) and optional
//! effects (spawn a clue, spawn a room, unlock a room). Rules never carry
//! executable content; the dispatcher evaluates them when the triggering
//! clue is used from the bag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::types::{Clue, Room};

/// Address of a room inside a specific location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomRef {
    pub location: String,
    pub room: String,
}

impl RoomRef {
    pub fn new(location: &str, room: &str) -> Self {
        Self {
            location: location.to_lowercase(),
            room: room.to_lowercase(),
        }
    }
}

/// What happens when a specific inventory clue is used.
///
/// All preconditions must hold for the rule to succeed; an absent
/// precondition is vacuously satisfied. Effects apply only on success, and
/// only as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRule {
    /// Identifier of a clue that must also be in the bag.
    #[serde(default)]
    pub requires_clue: Option<String>,
    /// Identifier of the room the player must currently be in.
    #[serde(default)]
    pub requires_room: Option<String>,
    /// Clue spawned into the room addressed by `target_location`/`target_room`.
    #[serde(default)]
    pub creates_clue: Option<Clue>,
    /// Room spawned into the location addressed by `target_location`.
    #[serde(default)]
    pub creates_room: Option<Room>,
    /// Room to unlock.
    #[serde(default)]
    pub unlocks_room: Option<RoomRef>,
    /// Destination location for spawned entities.
    #[serde(default)]
    pub target_location: Option<String>,
    /// Destination room for a spawned clue.
    #[serde(default)]
    pub target_room: Option<String>,
    pub success_message: String,
    pub failure_message: String,
}

impl ActionRule {
    pub fn new(success_message: &str, failure_message: &str) -> Self {
        Self {
            requires_clue: None,
            requires_room: None,
            creates_clue: None,
            creates_room: None,
            unlocks_room: None,
            target_location: None,
            target_room: None,
            success_message: success_message.to_string(),
            failure_message: failure_message.to_string(),
        }
    }

    pub fn with_required_clue(mut self, clue_id: &str) -> Self {
        self.requires_clue = Some(clue_id.to_lowercase());
        self
    }

    pub fn with_required_room(mut self, room_id: &str) -> Self {
        self.requires_room = Some(room_id.to_lowercase());
        self
    }

    pub fn with_spawned_clue(mut self, clue: Clue) -> Self {
        self.creates_clue = Some(clue);
        self
    }

    pub fn with_spawned_room(mut self, room: Room) -> Self {
        self.creates_room = Some(room);
        self
    }

    pub fn with_unlock(mut self, location_id: &str, room_id: &str) -> Self {
        self.unlocks_room = Some(RoomRef::new(location_id, room_id));
        self
    }

    /// Destination for spawned entities.
    pub fn with_target(mut self, location_id: &str, room_id: &str) -> Self {
        self.target_location = Some(location_id.to_lowercase());
        self.target_room = Some(room_id.to_lowercase());
        self
    }

    /// True when every declared precondition holds.
    pub fn preconditions_met(
        &self,
        inventory: &BTreeMap<String, Clue>,
        current_room_id: &str,
    ) -> bool {
        let clue_ok = self
            .requires_clue
            .as_ref()
            .map_or(true, |id| inventory.contains_key(id));
        let room_ok = self
            .requires_room
            .as_ref()
            .map_or(true, |id| id == current_room_id);
        clue_ok && room_ok
    }
}
