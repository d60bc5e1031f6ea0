//! The world root: static content plus live player state.
//!
//! A [`TextAdventure`] owns every location, the player's position (current
//! location and room), the bag, and the registered use-item rules. All
//! command handlers mutate world state exclusively through this type, one
//! turn at a time; nothing here is shared across threads.

use log::{debug, info, warn};
use std::collections::BTreeMap;

use crate::engine::action::ActionRule;
use crate::engine::errors::EngineError;
use crate::engine::types::{Clue, Location, Room};

#[derive(Debug)]
pub struct TextAdventure {
    title: String,
    locations: BTreeMap<String, Location>,
    current_location: String,
    current_room: String,
    inventory: BTreeMap<String, Clue>,
    actions: BTreeMap<String, ActionRule>,
}

impl TextAdventure {
    /// Validate content and resolve the starting position.
    ///
    /// Fails when the title is empty, no location is supplied, any entity
    /// has an empty name, the default location is not unique, or the
    /// starting location has no default room. A world that constructs is
    /// guaranteed to have a live current location and room.
    pub fn new(title: &str, locations: Vec<Location>) -> Result<Self, EngineError> {
        if title.trim().is_empty() {
            return Err(EngineError::Construction {
                entity: "world",
                reason: "title must not be empty".to_string(),
            });
        }
        if locations.is_empty() {
            return Err(EngineError::Construction {
                entity: "world",
                reason: "at least one location is required".to_string(),
            });
        }
        for location in &locations {
            validate_location(location)?;
        }

        let defaults = locations.iter().filter(|l| l.is_default).count();
        if defaults != 1 {
            return Err(EngineError::MissingDefaultLocation { found: defaults });
        }

        let mut table: BTreeMap<String, Location> = BTreeMap::new();
        for location in locations {
            let id = location.identifier();
            if table.insert(id.clone(), location).is_some() {
                warn!("duplicate location \"{}\" replaced by later definition", id);
            }
        }

        let (start_location, start_room) = {
            let start = table
                .values()
                .find(|l| l.is_default)
                .ok_or(EngineError::MissingDefaultLocation { found: 0 })?;
            let room = start
                .default_room()
                .ok_or_else(|| EngineError::MissingDefaultRoom {
                    location: start.name.clone(),
                })?;
            (start.identifier(), room.identifier())
        };

        info!(
            "world \"{}\" ready: {} locations, starting in {}/{}",
            title,
            table.len(),
            start_location,
            start_room
        );

        Ok(Self {
            title: title.to_string(),
            locations: table,
            current_location: start_location,
            current_room: start_room,
            inventory: BTreeMap::new(),
            actions: BTreeMap::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_location_id(&self) -> &str {
        &self.current_location
    }

    pub fn current_room_id(&self) -> &str {
        &self.current_room
    }

    pub fn current_location(&self) -> &Location {
        self.locations
            .get(&self.current_location)
            .expect("current location resolved at construction")
    }

    pub fn current_room(&self) -> &Room {
        self.current_location()
            .room(&self.current_room)
            .expect("current room owned by current location")
    }

    pub(crate) fn current_room_mut(&mut self) -> &mut Room {
        let room_id = self.current_room.clone();
        self.locations
            .get_mut(&self.current_location)
            .and_then(|l| l.room_mut(&room_id))
            .expect("current room owned by current location")
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn inventory(&self) -> &BTreeMap<String, Clue> {
        &self.inventory
    }

    pub fn action(&self, trigger: &str) -> Option<&ActionRule> {
        self.actions.get(trigger)
    }

    /// Move into a room of the current location. The room must exist.
    pub(crate) fn enter_room(&mut self, room_id: &str) {
        debug_assert!(self.current_location().contains_room(room_id));
        self.current_room = room_id.to_string();
    }

    /// Move to another location, landing in its default room.
    ///
    /// A location without a default room is authored content gone wrong and
    /// surfaces as an error rather than a player message.
    pub(crate) fn enter_location(&mut self, location_id: &str) -> Result<(), EngineError> {
        let location = self
            .locations
            .get(location_id)
            .ok_or_else(|| EngineError::Construction {
                entity: "location",
                reason: format!("unknown location \"{}\"", location_id),
            })?;
        let room = location
            .default_room()
            .ok_or_else(|| EngineError::MissingDefaultRoom {
                location: location.name.clone(),
            })?;
        self.current_room = room.identifier();
        self.current_location = location_id.to_string();
        Ok(())
    }

    /// Transfer an item clue from the current room into the bag.
    ///
    /// Callers check `is_item` first; this only moves ownership.
    pub(crate) fn stash(&mut self, clue_id: &str) -> Option<&Clue> {
        let clue = self.current_room_mut().pop(clue_id)?;
        let id = clue.identifier();
        self.inventory.insert(id.clone(), clue);
        self.inventory.get(&id)
    }

    /// Register a use-item rule, replacing any earlier rule for the same
    /// trigger. Target resolution is deferred to use time.
    pub fn register_action(&mut self, trigger_clue_id: &str, rule: ActionRule) {
        let trigger = trigger_clue_id.to_lowercase();
        debug!("registered action for \"{}\"", trigger);
        if self.actions.insert(trigger.clone(), rule).is_some() {
            warn!("action for \"{}\" replaced by later registration", trigger);
        }
    }

    /// Apply every effect of a successful rule.
    ///
    /// Effects are idempotent so repeated use of the same item stays safe:
    /// an already-spawned room keeps its state, a spawned clue that was
    /// taken is not duplicated, unlocking twice is a no-op. A target that
    /// does not resolve is a content defect and fails the whole turn.
    pub(crate) fn apply_effects(
        &mut self,
        trigger: &str,
        rule: &ActionRule,
    ) -> Result<(), EngineError> {
        if let Some(clue) = &rule.creates_clue {
            let (loc_id, room_id) = self.resolve_spawn_room(trigger, rule)?;
            let already_carried = self.inventory.contains_key(&clue.identifier());
            let room = self
                .locations
                .get_mut(&loc_id)
                .and_then(|l| l.room_mut(&room_id))
                .expect("spawn target resolved above");
            if !already_carried && !room.contains_clue(&clue.identifier()) {
                debug!("action \"{}\" spawned clue \"{}\"", trigger, clue.identifier());
                room.push(clue.clone());
            }
        }

        if let Some(room) = &rule.creates_room {
            let loc_id = self.resolve_spawn_location(trigger, rule)?;
            let location = self
                .locations
                .get_mut(&loc_id)
                .expect("spawn target resolved above");
            if !location.contains_room(&room.identifier()) {
                debug!("action \"{}\" spawned room \"{}\"", trigger, room.identifier());
                location.push(room.clone());
            }
        }

        if let Some(target) = &rule.unlocks_room {
            let room = self
                .locations
                .get_mut(&target.location)
                .ok_or_else(|| EngineError::UnresolvedActionTarget {
                    trigger: trigger.to_string(),
                    kind: "location",
                    target: target.location.clone(),
                })?
                .room_mut(&target.room)
                .ok_or_else(|| EngineError::UnresolvedActionTarget {
                    trigger: trigger.to_string(),
                    kind: "room",
                    target: target.room.clone(),
                })?;
            debug!("action \"{}\" unlocked \"{}\"", trigger, target.room);
            room.unlock();
        }

        Ok(())
    }

    fn resolve_spawn_location(
        &self,
        trigger: &str,
        rule: &ActionRule,
    ) -> Result<String, EngineError> {
        let loc_id = rule
            .target_location
            .as_deref()
            .ok_or_else(|| EngineError::UnresolvedActionTarget {
                trigger: trigger.to_string(),
                kind: "location",
                target: "(unset)".to_string(),
            })?;
        if !self.locations.contains_key(loc_id) {
            return Err(EngineError::UnresolvedActionTarget {
                trigger: trigger.to_string(),
                kind: "location",
                target: loc_id.to_string(),
            });
        }
        Ok(loc_id.to_string())
    }

    fn resolve_spawn_room(
        &self,
        trigger: &str,
        rule: &ActionRule,
    ) -> Result<(String, String), EngineError> {
        let loc_id = self.resolve_spawn_location(trigger, rule)?;
        let room_id = rule
            .target_room
            .as_deref()
            .ok_or_else(|| EngineError::UnresolvedActionTarget {
                trigger: trigger.to_string(),
                kind: "room",
                target: "(unset)".to_string(),
            })?;
        let exists = self
            .locations
            .get(&loc_id)
            .map(|l| l.contains_room(room_id))
            .unwrap_or(false);
        if !exists {
            return Err(EngineError::UnresolvedActionTarget {
                trigger: trigger.to_string(),
                kind: "room",
                target: room_id.to_string(),
            });
        }
        Ok((loc_id, room_id.to_string()))
    }
}

fn validate_location(location: &Location) -> Result<(), EngineError> {
    if location.name.trim().is_empty() {
        return Err(EngineError::Construction {
            entity: "location",
            reason: "name must not be empty".to_string(),
        });
    }
    for room in location.rooms() {
        if room.name.trim().is_empty() {
            return Err(EngineError::Construction {
                entity: "room",
                reason: format!("unnamed room in location \"{}\"", location.name),
            });
        }
        for clue in room.clues() {
            if clue.name.trim().is_empty() {
                return Err(EngineError::Construction {
                    entity: "clue",
                    reason: format!("unnamed clue in room \"{}\"", room.name),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Clue, Location, Room};

    fn starter_location() -> Location {
        Location::new("house", "Smells like a house.")
            .as_default()
            .with_room(
                Room::new("hallway", "Long and narrow.")
                    .as_default()
                    .with_clue(Clue::item("phone", "An old rotary phone.")),
            )
    }

    #[test]
    fn construction_resolves_defaults() {
        let world = TextAdventure::new("The House", vec![starter_location()]).unwrap();
        assert_eq!(world.current_location_id(), "house");
        assert_eq!(world.current_room_id(), "hallway");
        assert!(world.inventory().is_empty());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = TextAdventure::new("  ", vec![starter_location()]).unwrap_err();
        assert!(matches!(err, EngineError::Construction { entity: "world", .. }));
    }

    #[test]
    fn empty_location_set_is_rejected() {
        let err = TextAdventure::new("The House", vec![]).unwrap_err();
        assert!(matches!(err, EngineError::Construction { entity: "world", .. }));
    }

    #[test]
    fn missing_default_location_is_rejected() {
        let location = Location::new("house", "A house.")
            .with_room(Room::new("hallway", "Narrow.").as_default());
        let err = TextAdventure::new("The House", vec![location]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingDefaultLocation { found: 0 }
        ));
    }

    #[test]
    fn two_default_locations_are_rejected() {
        let a = Location::new("house", "A house.")
            .as_default()
            .with_room(Room::new("hallway", "Narrow.").as_default());
        let b = Location::new("garden", "Green.")
            .as_default()
            .with_room(Room::new("lawn", "Mown.").as_default());
        let err = TextAdventure::new("The House", vec![a, b]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingDefaultLocation { found: 2 }
        ));
    }

    #[test]
    fn missing_default_room_is_rejected() {
        let location = Location::new("house", "A house.")
            .as_default()
            .with_room(Room::new("hallway", "Narrow."));
        let err = TextAdventure::new("The House", vec![location]).unwrap_err();
        assert!(matches!(err, EngineError::MissingDefaultRoom { .. }));
    }

    #[test]
    fn unnamed_entities_are_rejected() {
        let location = starter_location()
            .with_room(Room::new(" ", "Nameless.").with_clue(Clue::scenery("dust", "Grey.")));
        let err = TextAdventure::new("The House", vec![location]).unwrap_err();
        assert!(matches!(err, EngineError::Construction { entity: "room", .. }));
    }

    #[test]
    fn stash_moves_ownership_exactly_once() {
        let mut world = TextAdventure::new("The House", vec![starter_location()]).unwrap();
        assert!(world.stash("phone").is_some());
        assert!(world.inventory().contains_key("phone"));
        assert!(!world.current_room().contains_clue("phone"));
        assert!(world.stash("phone").is_none());
        assert_eq!(world.inventory().len(), 1);
    }

    #[test]
    fn register_action_last_registration_wins() {
        let mut world = TextAdventure::new("The House", vec![starter_location()]).unwrap();
        world.register_action("Phone", ActionRule::new("first", "no"));
        world.register_action("phone", ActionRule::new("second", "no"));
        assert_eq!(world.action("phone").unwrap().success_message, "second");
    }
}
