use std::collections::HashMap;

use crate::data::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipCommand {
    MakeDropoff,
    MoveShip(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub command: ShipCommand,
    /// set when the command was forced on the ship by a swap
    pub exclusive: bool,
}

/// The turn's commands: at most one per ship, plus the shipyard spawn.
#[derive(Debug, Default)]
pub struct CommandSet {
    intents: HashMap<usize, Intent>,
    order: Vec<usize>,
    spawn: bool,
}

impl CommandSet {
    pub fn new() -> CommandSet {
        CommandSet::default()
    }

    pub fn has_command(&self, ship_id: usize) -> bool {
        self.intents.contains_key(&ship_id)
    }

    pub fn is_exclusive(&self, ship_id: usize) -> bool {
        self.intents.get(&ship_id).map_or(false, |i| i.exclusive)
    }

    pub fn command_of(&self, ship_id: usize) -> Option<ShipCommand> {
        self.intents.get(&ship_id).map(|i| i.command)
    }

    /// Records the ship's own decision. Returns false, leaving the set untouched,
    /// if the ship already holds an exclusive command.
    pub fn commit(&mut self, ship_id: usize, command: ShipCommand) -> bool {
        self.insert(ship_id, Intent { command, exclusive: false })
    }

    /// Records a swap move. Overrides a plain command but never an exclusive one.
    pub fn force(&mut self, ship_id: usize, command: ShipCommand) -> bool {
        self.insert(ship_id, Intent { command, exclusive: true })
    }

    fn insert(&mut self, ship_id: usize, intent: Intent) -> bool {
        match self.intents.get(&ship_id).cloned() {
            Some(prev) if prev.exclusive => {
                info!("ship {} keeps its swap command {:?}", ship_id, prev.command);
                false
            },
            Some(_) => {
                self.intents.insert(ship_id, intent);
                true
            },
            None => {
                self.order.push(ship_id);
                self.intents.insert(ship_id, intent);
                true
            },
        }
    }

    pub fn set_spawn(&mut self, spawn: bool) {
        self.spawn = spawn;
    }

    pub fn spawn(&self) -> bool {
        self.spawn
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn dropoffs(&self) -> usize {
        self.intents.values().filter(|i| i.command == ShipCommand::MakeDropoff).count()
    }

    /// Commands in the order ships first received one.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Intent)> + '_ {
        self.order.iter().map(move |id| (*id, &self.intents[id]))
    }

    pub fn to_engine_line(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.intents.len() + 1);
        if self.spawn {
            parts.push("g".to_owned());
        }
        for (ship_id, intent) in self.iter() {
            match intent.command {
                ShipCommand::MakeDropoff => {
                    parts.push(format!("c {}", ship_id));
                },
                ShipCommand::MoveShip(dir) => {
                    parts.push(format!("m {} {}", ship_id, dir.get_char_encoding()));
                },
            }
        }
        parts.join(" ")
    }
}
