//! Entity model for the adventure world.
//!
//! Three nested containers make up all static content: a [`Location`] holds
//! [`Room`]s, a room holds [`Clue`]s. Every entity is addressed by its
//! identifier, the lowercase form of its name, and lives in exactly one
//! container at a time. Names are fixed at authoring time; there is no rename
//! operation, so a container key can never drift away from its entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker appended to the current location/room in listings.
const CURRENT_MARKER: &str = " (current)";

/// A discoverable fact or item inside a room.
///
/// Scenery clues (`is_item == false`) can be examined but never picked up;
/// item clues migrate into the player's bag via `take`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clue {
    pub name: String,
    pub description: String,
    pub is_item: bool,
}

impl Clue {
    /// A takeable clue.
    pub fn item(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            is_item: true,
        }
    }

    /// A fixed piece of scenery.
    pub fn scenery(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            is_item: false,
        }
    }

    /// Lookup key: the lowercase name.
    pub fn identifier(&self) -> String {
        self.name.to_lowercase()
    }

    /// One-line summary, optionally followed by the full description.
    pub fn describe(&self, include_details: bool) -> String {
        let mut out = format!("~ {}", self.name);
        if include_details {
            out.push('\n');
            out.push_str(&self.description);
        }
        out
    }
}

/// A lockable container of clues within a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub name: String,
    pub description: String,
    clues: BTreeMap<String, Clue>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl Room {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            clues: BTreeMap::new(),
            is_default: false,
            is_open: false,
            is_locked: false,
        }
    }

    pub fn with_clue(mut self, clue: Clue) -> Self {
        self.push(clue);
        self
    }

    /// Start the room locked; `use` actions can unlock it later.
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Mark this room as the location's spawn point.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn identifier(&self) -> String {
        self.name.to_lowercase()
    }

    /// Insert a clue, replacing any previous clue with the same identifier.
    pub fn push(&mut self, clue: Clue) -> Option<Clue> {
        self.clues.insert(clue.identifier(), clue)
    }

    /// Remove and return the clue stored under `id`.
    pub fn pop(&mut self, id: &str) -> Option<Clue> {
        self.clues.remove(id)
    }

    pub fn clue(&self, id: &str) -> Option<&Clue> {
        self.clues.get(id)
    }

    pub fn contains_clue(&self, id: &str) -> bool {
        self.clues.contains_key(id)
    }

    pub fn clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.values()
    }

    pub fn lock(&mut self) {
        self.is_locked = true;
    }

    pub fn unlock(&mut self) {
        self.is_locked = false;
    }

    /// Reveal the room in listings. Never blocks gameplay.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn describe(
        &self,
        is_current: bool,
        include_details: bool,
        include_children: bool,
    ) -> String {
        let mut out = format!("* {}", self.name);
        if is_current {
            out.push_str(CURRENT_MARKER);
        }
        if include_details {
            out.push('\n');
            out.push_str(&self.description);
        }
        if include_children && !self.clues.is_empty() {
            out.push_str("\n\n");
            let lines: Vec<String> = self.clues.values().map(|c| c.describe(false)).collect();
            out.push_str(&lines.join("\n"));
        }
        out
    }
}

/// A top-level navigable area containing rooms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub description: String,
    rooms: BTreeMap<String, Room>,
    #[serde(default)]
    pub is_default: bool,
}

impl Location {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            rooms: BTreeMap::new(),
            is_default: false,
        }
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.push(room);
        self
    }

    /// Mark this location as the world's starting area.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn identifier(&self) -> String {
        self.name.to_lowercase()
    }

    /// Insert a room, replacing any previous room with the same identifier.
    pub fn push(&mut self, room: Room) -> Option<Room> {
        self.rooms.insert(room.identifier(), room)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn contains_room(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// The room flagged as this location's spawn point, scanned on demand.
    pub fn default_room(&self) -> Option<&Room> {
        self.rooms.values().find(|r| r.is_default)
    }

    /// `current_room` marks one room summary when children are included.
    pub fn describe(
        &self,
        is_current: bool,
        include_details: bool,
        include_children: bool,
        current_room: Option<&str>,
    ) -> String {
        let mut out = format!("** {}", self.name);
        if is_current {
            out.push_str(CURRENT_MARKER);
        }
        if include_details {
            out.push('\n');
            out.push_str(&self.description);
        }
        if include_children && !self.rooms.is_empty() {
            out.push_str("\n\n");
            let lines: Vec<String> = self
                .rooms
                .values()
                .map(|r| r.describe(current_room == Some(r.identifier().as_str()), false, false))
                .collect();
            out.push_str(&lines.join("\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_lowercase_names() {
        let clue = Clue::item("Old Key", "A key. Looks old.");
        assert_eq!(clue.identifier(), "old key");

        let room = Room::new("A Room", "Looks like a room.");
        assert_eq!(room.identifier(), "a room");

        let location = Location::new("A House", "Smells like a house.");
        assert_eq!(location.identifier(), "a house");
    }

    #[test]
    fn push_overwrites_same_identifier() {
        let mut room = Room::new("hallway", "Long and narrow.");
        assert!(room.push(Clue::item("Phone", "An old rotary phone.")).is_none());
        let replaced = room.push(Clue::scenery("phone", "Now it is scenery."));
        assert!(replaced.is_some());
        assert_eq!(room.clues().count(), 1);
        assert!(!room.clue("phone").unwrap().is_item);
    }

    #[test]
    fn pop_removes_ownership() {
        let mut room = Room::new("hallway", "Long and narrow.")
            .with_clue(Clue::item("phone", "An old rotary phone."));
        let clue = room.pop("phone").expect("clue present");
        assert_eq!(clue.name, "phone");
        assert!(room.pop("phone").is_none());
        assert!(!room.contains_clue("phone"));
    }

    #[test]
    fn lock_state_toggles() {
        let mut room = Room::new("bedroom", "Dusty.").locked();
        assert!(room.is_locked);
        room.unlock();
        assert!(!room.is_locked);
        room.lock();
        assert!(room.is_locked);
    }

    #[test]
    fn default_room_scan_finds_flagged_room() {
        let location = Location::new("house", "A house.")
            .with_room(Room::new("hallway", "Narrow.").as_default())
            .with_room(Room::new("bedroom", "Dusty."));
        assert_eq!(location.default_room().unwrap().name, "hallway");

        let bare = Location::new("field", "Empty.");
        assert!(bare.default_room().is_none());
    }

    #[test]
    fn describe_formats_prefix_marker_and_children() {
        let room = Room::new("hallway", "Long and narrow.")
            .with_clue(Clue::scenery("painting", "A drab landscape."))
            .with_clue(Clue::item("phone", "An old rotary phone."));

        assert_eq!(room.describe(false, false, false), "* hallway");
        assert_eq!(room.describe(true, false, false), "* hallway (current)");
        assert_eq!(
            room.describe(false, true, false),
            "* hallway\nLong and narrow."
        );
        assert_eq!(
            room.describe(false, true, true),
            "* hallway\nLong and narrow.\n\n~ painting\n~ phone"
        );
    }

    #[test]
    fn location_describe_marks_current_room() {
        let location = Location::new("house", "A house.")
            .with_room(Room::new("bedroom", "Dusty."))
            .with_room(Room::new("hallway", "Narrow.").as_default());
        let text = location.describe(true, true, true, Some("hallway"));
        assert_eq!(
            text,
            "** house (current)\nA house.\n\n* bedroom\n* hallway (current)"
        );
    }
}
