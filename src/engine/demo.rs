//! Built-in demonstration world.
//!
//! A small two-location mystery used when no world file is supplied. It
//! exercises every mechanic once: scenery vs items, a locked room opened by
//! a use action, a precondition that fails away from its room, and a spawn
//! chain that reveals a new room with its own clue.

use crate::engine::action::ActionRule;
use crate::engine::errors::EngineError;
use crate::engine::types::{Clue, Location, Room};
use crate::engine::world::TextAdventure;

pub fn demo_world() -> Result<TextAdventure, EngineError> {
    let house = Location::new("house", "A creaking maple-shaded house.")
        .as_default()
        .with_room(
            Room::new("hallway", "Long and narrow. A telephone table stands by the door.")
                .as_default()
                .with_clue(Clue::item(
                    "phone",
                    "An old rotary phone. The caretaker's number is taped to the dial.",
                ))
                .with_clue(Clue::scenery(
                    "painting",
                    "A drab landscape. The frame hangs slightly crooked.",
                )),
        )
        .with_room(
            Room::new("bedroom", "Dust sheets cover the furniture.")
                .locked()
                .with_clue(Clue::item("old key", "A heavy iron key. Looks old.")),
        );

    let garden = Location::new("garden", "Overgrown and quiet behind the house.")
        .with_room(
            Room::new("lawn", "Knee-high grass, flattened in a path toward the shed.")
                .as_default()
                .with_clue(Clue::scenery(
                    "gnome",
                    "A ceramic gnome, paint flaking. Its eyes follow you.",
                )),
        )
        .with_room(
            Room::new("shed", "Cobwebbed tools line the walls.")
                .locked()
                .with_clue(Clue::item("toolbox", "A rusted toolbox with a pry bar inside.")),
        );

    let mut world = TextAdventure::new("The Maple House", vec![house, garden])?;

    world.register_action(
        "phone",
        ActionRule::new(
            "You dial the caretaker. After a pause, something clicks inside the bedroom door.",
            "The line is dead.",
        )
        .with_unlock("house", "bedroom"),
    );

    world.register_action(
        "old key",
        ActionRule::new(
            "The old key turns stiffly. The shed is unlocked.",
            "Nothing nearby fits the old key.",
        )
        .with_required_room("lawn")
        .with_unlock("garden", "shed"),
    );

    world.register_action(
        "toolbox",
        ActionRule::new(
            "You pry up the hallway floorboards. A cellar lies below.",
            "There is nothing here worth prying open.",
        )
        .with_required_room("hallway")
        .with_spawned_room(
            Room::new("cellar", "Cold air and earth. Something glints on a shelf.").with_clue(
                Clue::item("diary", "The caretaker's diary. The last entry is unfinished."),
            ),
        )
        .with_target("house", "hallway"),
    );

    Ok(world)
}
