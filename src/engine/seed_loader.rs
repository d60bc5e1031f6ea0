//! Data-driven world definitions.
//!
//! Worlds can be authored as JSON seed documents and loaded at startup, so
//! content changes need no recompile. The `*Seed` structs mirror the JSON
//! shape; conversion goes through the same builder API hand-authored worlds
//! use, so a seeded world is validated exactly like a coded one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::action::ActionRule;
use crate::engine::errors::EngineError;
use crate::engine::types::{Clue, Location, Room};
use crate::engine::world::TextAdventure;

/// Load and validate a world from a JSON seed file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<TextAdventure, EngineError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_world(&contents)
}

/// Parse and validate a world from JSON text.
pub fn parse_world(contents: &str) -> Result<TextAdventure, EngineError> {
    let seed: WorldSeed = serde_json::from_str(contents)?;
    let locations = seed
        .locations
        .into_iter()
        .map(location_from_seed)
        .collect();
    let mut world = TextAdventure::new(&seed.title, locations)?;
    for action in seed.actions {
        let trigger = action.trigger.clone();
        world.register_action(&trigger, rule_from_seed(action));
    }
    Ok(world)
}

fn location_from_seed(seed: LocationSeed) -> Location {
    let mut location = Location::new(&seed.name, &seed.description);
    if seed.default {
        location = location.as_default();
    }
    for room in seed.rooms {
        location.push(room_from_seed(room));
    }
    location
}

fn room_from_seed(seed: RoomSeed) -> Room {
    let mut room = Room::new(&seed.name, &seed.description);
    if seed.default {
        room = room.as_default();
    }
    if seed.locked {
        room = room.locked();
    }
    for clue in seed.clues {
        room.push(clue_from_seed(clue));
    }
    room
}

fn clue_from_seed(seed: ClueSeed) -> Clue {
    if seed.item {
        Clue::item(&seed.name, &seed.description)
    } else {
        Clue::scenery(&seed.name, &seed.description)
    }
}

fn rule_from_seed(seed: ActionSeed) -> ActionRule {
    let mut rule = ActionRule::new(&seed.success_message, &seed.failure_message);
    if let Some(clue_id) = seed.requires_clue {
        rule = rule.with_required_clue(&clue_id);
    }
    if let Some(room_id) = seed.requires_room {
        rule = rule.with_required_room(&room_id);
    }
    if let Some(clue) = seed.creates_clue {
        rule = rule.with_spawned_clue(clue_from_seed(clue));
    }
    if let Some(room) = seed.creates_room {
        rule = rule.with_spawned_room(room_from_seed(room));
    }
    if let Some(target) = seed.unlocks_room {
        rule = rule.with_unlock(&target.location, &target.room);
    }
    if let Some(location) = seed.target_location {
        rule.target_location = Some(location.to_lowercase());
    }
    if let Some(room) = seed.target_room {
        rule.target_room = Some(room.to_lowercase());
    }
    rule
}

// ============================================================================
// Seed data structures that match the JSON format
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WorldSeed {
    title: String,
    locations: Vec<LocationSeed>,
    #[serde(default)]
    actions: Vec<ActionSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LocationSeed {
    name: String,
    description: String,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    rooms: Vec<RoomSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoomSeed {
    name: String,
    description: String,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    clues: Vec<ClueSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ClueSeed {
    name: String,
    description: String,
    #[serde(default)]
    item: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ActionSeed {
    trigger: String,
    #[serde(default)]
    requires_clue: Option<String>,
    #[serde(default)]
    requires_room: Option<String>,
    #[serde(default)]
    creates_clue: Option<ClueSeed>,
    #[serde(default)]
    creates_room: Option<RoomSeed>,
    #[serde(default)]
    unlocks_room: Option<RoomRefSeed>,
    #[serde(default)]
    target_location: Option<String>,
    #[serde(default)]
    target_room: Option<String>,
    success_message: String,
    failure_message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoomRefSeed {
    location: String,
    room: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "title": "Test World",
        "locations": [
            {
                "name": "house",
                "description": "A house.",
                "default": true,
                "rooms": [
                    {
                        "name": "hallway",
                        "description": "Narrow.",
                        "default": true,
                        "clues": [
                            { "name": "phone", "description": "Dusty.", "item": true }
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn minimal_world_parses_and_validates() {
        let world = parse_world(MINIMAL).unwrap();
        assert_eq!(world.title(), "Test World");
        assert_eq!(world.current_room_id(), "hallway");
        assert!(world.current_room().clue("phone").unwrap().is_item);
    }

    #[test]
    fn malformed_json_is_a_seed_error() {
        let err = parse_world("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Seed(_)));
    }

    #[test]
    fn world_without_default_location_fails_validation() {
        // Strips the default flag from the location and the room alike.
        let contents = MINIMAL.replace("\"default\": true,", "");
        let err = parse_world(&contents).unwrap_err();
        assert!(matches!(err, EngineError::MissingDefaultLocation { .. }));
    }

    #[test]
    fn actions_are_registered_from_the_seed() {
        let contents = format!(
            "{}{}",
            &MINIMAL[..MINIMAL.rfind('}').unwrap()],
            r#",
            "actions": [
                {
                    "trigger": "phone",
                    "unlocks_room": { "location": "house", "room": "hallway" },
                    "success_message": "A click.",
                    "failure_message": "Nothing."
                }
            ]
        }"#
        );
        let world = parse_world(&contents).unwrap();
        let rule = world.action("phone").unwrap();
        assert_eq!(rule.success_message, "A click.");
        assert_eq!(rule.unlocks_room.as_ref().unwrap().room, "hallway");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_world_from_json("does-not-exist.json").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
