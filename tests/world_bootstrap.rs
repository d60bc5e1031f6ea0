//! World construction: required fields, default resolution, and identifier
//! uniqueness inside containers.

use cluebound::engine::{Clue, EngineError, Location, Room, TextAdventure};

fn default_location() -> Location {
    Location::new("house", "Smells like a house.")
        .as_default()
        .with_room(Room::new("hallway", "Long and narrow.").as_default())
}

#[test]
fn a_valid_world_starts_at_its_defaults() {
    let world = TextAdventure::new("The House", vec![default_location()]).unwrap();
    assert_eq!(world.title(), "The House");
    assert_eq!(world.current_location_id(), "house");
    assert_eq!(world.current_room_id(), "hallway");
    assert!(world.inventory().is_empty());
}

#[test]
fn construction_fails_without_a_title() {
    let err = TextAdventure::new("", vec![default_location()]).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Construction { entity: "world", .. }
    ));
}

#[test]
fn construction_fails_without_locations() {
    let err = TextAdventure::new("The House", vec![]).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Construction { entity: "world", .. }
    ));
}

#[test]
fn construction_fails_without_a_default_location() {
    let location = Location::new("house", "A house.")
        .with_room(Room::new("hallway", "Narrow.").as_default());
    let err = TextAdventure::new("The House", vec![location]).unwrap_err();
    assert!(matches!(err, EngineError::MissingDefaultLocation { found: 0 }));
}

#[test]
fn construction_fails_without_a_default_room() {
    let location = Location::new("house", "A house.")
        .as_default()
        .with_room(Room::new("hallway", "Narrow."));
    let err = TextAdventure::new("The House", vec![location]).unwrap_err();
    match err {
        EngineError::MissingDefaultRoom { location } => assert_eq!(location, "house"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn room_identifiers_stay_unique_within_a_location() {
    // Pushing a same-named room replaces it rather than duplicating the key.
    let mut location = default_location();
    location.push(Room::new("Hallway", "Repainted since."));
    assert_eq!(location.rooms().count(), 1);
    assert_eq!(location.room("hallway").unwrap().description, "Repainted since.");
}

#[test]
fn clue_identifiers_stay_unique_within_a_room() {
    let mut room = Room::new("hallway", "Narrow.");
    room.push(Clue::item("Phone", "First."));
    room.push(Clue::item("phone", "Second."));
    assert_eq!(room.clues().count(), 1);
    assert_eq!(room.clue("phone").unwrap().description, "Second.");
}
