//! Command parsing and the turn dispatcher.
//!
//! Raw input lines are folded into a [`Command`] and routed through
//! [`TextAdventure::dispatch`], which mutates world state and returns a
//! display string. Player mistakes (unknown names, locked rooms, empty bag)
//! are ordinary replies; only authored-content defects escape as
//! [`EngineError`].

use log::debug;

use crate::engine::errors::EngineError;
use crate::engine::world::TextAdventure;
use crate::logfmt::clean_for_log;

/// Static help screen returned by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  map            list every location
  where          describe the current location and its rooms
  look           describe the current room and its clues
  go <place>     move to a room here, or to another location
  check <clue>   read a clue's description
  take <clue>    put an item clue into your bag
  use <clue>     use an item from your bag
  bag            list what you are carrying
  help           show this text
  quit           end the session";

/// One parsed player command.
///
/// Verbs that need an argument fold to `Unknown` when the phrase is empty,
/// so the caller prints its generic invalid-command hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Map,
    Where,
    Look,
    Bag,
    Check(String),
    Go(String),
    Take(String),
    Use(String),
    Unknown(String),
}

impl Command {
    /// Parse a free-text input line.
    ///
    /// The leading alphabetic token is the verb; the rest becomes one
    /// case-folded, whitespace-collapsed phrase with non-alphabetic
    /// characters stripped.
    pub fn parse(input: &str) -> Command {
        let mut tokens = words(input);
        if tokens.is_empty() {
            return Command::Unknown(input.trim().to_string());
        }
        let name = tokens.remove(0);
        let phrase = tokens.join(" ");
        Command::from_parts(&name, &phrase)
    }

    /// Build a command from an already-split verb and argument.
    pub fn from_parts(name: &str, argument: &str) -> Command {
        let name = name.to_lowercase();
        let argument = argument.trim().to_lowercase();
        match name.as_str() {
            "help" | "h" => Command::Help,
            "quit" | "q" => Command::Quit,
            "map" => Command::Map,
            "where" => Command::Where,
            "look" | "l" => Command::Look,
            "bag" | "inventory" | "i" => Command::Bag,
            "check" | "x" => with_argument(argument, &name, Command::Check),
            "go" => with_argument(argument, &name, Command::Go),
            "take" | "t" | "get" => with_argument(argument, &name, Command::Take),
            "use" => with_argument(argument, &name, Command::Use),
            _ => Command::Unknown(name),
        }
    }
}

fn with_argument(argument: String, name: &str, make: impl Fn(String) -> Command) -> Command {
    if argument.is_empty() {
        Command::Unknown(name.to_string())
    } else {
        make(argument)
    }
}

fn words(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// What a dispatched turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to display to the player.
    Reply(String),
    /// The player asked to end the session; the caller cleans up.
    Quit,
    /// The verb is not part of the command table. Distinct from every
    /// in-game failure reply so the caller can print its own hint.
    NotRecognized,
}

impl TextAdventure {
    /// Run one turn. Completes every state change before returning.
    pub fn dispatch(&mut self, command: &Command) -> Result<Outcome, EngineError> {
        debug!("dispatching {}", clean_for_log(&format!("{:?}", command)));
        let reply = match command {
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Unknown(_) => return Ok(Outcome::NotRecognized),
            Command::Map => self.handle_map(),
            Command::Where => self.handle_where(),
            Command::Look => self.handle_look(),
            Command::Bag => self.handle_bag(),
            Command::Check(clue) => self.handle_check(clue),
            Command::Go(place) => self.handle_go(place)?,
            Command::Take(clue) => self.handle_take(clue),
            Command::Use(clue) => self.handle_use(clue)?,
        };
        Ok(Outcome::Reply(reply))
    }

    fn handle_map(&self) -> String {
        let current = self.current_location_id().to_string();
        let lines: Vec<String> = self
            .locations()
            .map(|l| l.describe(l.identifier() == current, false, false, None))
            .collect();
        lines.join("\n")
    }

    fn handle_where(&self) -> String {
        self.current_location()
            .describe(true, true, true, Some(self.current_room_id()))
    }

    fn handle_look(&mut self) -> String {
        // Looking reveals the room; is_open never gates anything else.
        self.current_room_mut().open();
        self.current_room().describe(false, true, true)
    }

    fn handle_bag(&self) -> String {
        if self.inventory().is_empty() {
            return "Your bag is empty.".to_string();
        }
        let lines: Vec<String> = self
            .inventory()
            .values()
            .map(|c| c.describe(false))
            .collect();
        format!("In your bag:\n{}", lines.join("\n"))
    }

    fn handle_check(&self, clue_name: &str) -> String {
        let id = clue_name.to_lowercase();
        if let Some(clue) = self.current_room().clue(&id) {
            return clue.description.clone();
        }
        if let Some(clue) = self.inventory().get(&id) {
            return clue.description.clone();
        }
        format!(
            "There is no clue called \"{}\" here or in your bag.",
            clue_name
        )
    }

    /// Room names shadow location names: a room of the current location is
    /// tried before any location of the same identifier.
    fn handle_go(&mut self, place: &str) -> Result<String, EngineError> {
        let id = place.to_lowercase();

        if id == self.current_location_id() || id == self.current_room_id() {
            return Ok("You are already there.".to_string());
        }

        if let Some(room) = self.current_location().room(&id) {
            let name = room.name.clone();
            if room.is_locked {
                return Ok(format!("The {} is locked.", name));
            }
            self.enter_room(&id);
            return Ok(format!("You enter the {}.", name));
        }

        if let Some(location) = self.location(&id) {
            let name = location.name.clone();
            self.enter_location(&id)?;
            return Ok(format!("You travel to the {}.", name));
        }

        Ok(format!("There is no place called \"{}\".", place))
    }

    fn handle_take(&mut self, clue_name: &str) -> String {
        let id = clue_name.to_lowercase();
        let Some(clue) = self.current_room().clue(&id) else {
            return format!("There is no clue called \"{}\" here.", clue_name);
        };
        let name = clue.name.clone();
        if !clue.is_item {
            return format!("You can't find a way to take the {}.", name);
        }
        let _ = self.stash(&id);
        format!("You take the {}.", name)
    }

    fn handle_use(&mut self, clue_name: &str) -> Result<String, EngineError> {
        let id = clue_name.to_lowercase();
        if !self.inventory().contains_key(&id) {
            return Ok(format!("You don't have the {}.", clue_name));
        }
        let Some(rule) = self.action(&id).cloned() else {
            return Ok(format!("You can't use the {}.", clue_name));
        };
        if !rule.preconditions_met(self.inventory(), self.current_room_id()) {
            return Ok(rule.failure_message);
        }
        self.apply_effects(&id, &rule)?;
        Ok(rule.success_message)
    }
}
