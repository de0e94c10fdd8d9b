#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use game_core::{InventoryEntry, Position, Snapshot};
use runtime::{ActorPlacement, CommandSource, Outcome, Renderer, RoomMap, Scenario};

/// Replays a fixed key sequence, then reports end of input.
pub struct ScriptedInput {
    keys: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }
}

impl CommandSource for ScriptedInput {
    fn next_command(&mut self) -> io::Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub frames: Vec<Snapshot>,
    pub inventories: Vec<Vec<InventoryEntry>>,
    pub outcomes: Vec<Outcome>,
}

/// Renderer that keeps everything it was shown.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub recorded: Rc<RefCell<Recorded>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.recorded.borrow_mut().frames.push(snapshot.clone());
        Ok(())
    }

    fn show_inventory(&mut self, entries: &[InventoryEntry]) -> io::Result<()> {
        self.recorded.borrow_mut().inventories.push(entries.to_vec());
        Ok(())
    }

    fn show_outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        self.recorded.borrow_mut().outcomes.push(outcome);
        Ok(())
    }
}

pub fn hero(row: i32, col: i32, hit_points: u32, damage: u32) -> ActorPlacement {
    ActorPlacement {
        position: Position::new(row, col),
        symbol: '@',
        hit_points,
        damage,
    }
}

pub fn zombie(row: i32, col: i32, hit_points: u32, damage: u32) -> ActorPlacement {
    ActorPlacement {
        position: Position::new(row, col),
        symbol: 'Z',
        hit_points,
        damage,
    }
}

/// Default room with the given actors and no items.
pub fn scenario(hero: ActorPlacement, hostiles: Vec<ActorPlacement>) -> Scenario {
    Scenario {
        room: RoomMap::default_room(),
        hero,
        hostiles,
        items: Vec::new(),
    }
}
