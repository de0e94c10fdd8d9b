//! Scenario system for entity placement and game initialization.
//!
//! Scenarios describe the room and where to place entities. Identities are not
//! part of a scenario; the entity store allocates them when the scenario is
//! built, hero first.

use std::path::{Path, PathBuf};

use game_core::{
    ActorTemplate, GameConfig, GameState, ItemDefinition, ItemDefinitionError, ItemEffect,
    ItemProperties, MapOracle, Position, Role, StateError,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::oracle::RoomMap;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario RON")]
    Parse(#[from] ron::error::SpannedError),

    #[error("placement at {position} is not on floor")]
    Impassable { position: Position },

    #[error("room has {available} free cells, cannot place {requested} hostiles")]
    NotEnoughSpace { requested: usize, available: usize },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Item(#[from] ItemDefinitionError),
}

/// Actor placement. Hit points above the shared ceiling are clamped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPlacement {
    pub position: Position,
    pub symbol: char,
    pub hit_points: u32,
    pub damage: u32,
}

impl ActorPlacement {
    fn template(&self, role: Role) -> ActorTemplate {
        ActorTemplate::new(role, self.symbol, self.hit_points, self.damage)
    }
}

/// Ground item placement. `heal` makes the item consumable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub position: Position,
    pub name: String,
    pub symbol: char,
    pub durability: u32,
    #[serde(default)]
    pub heal: Option<u32>,
}

impl ItemPlacement {
    fn definition(&self) -> Result<ItemDefinition, ItemDefinitionError> {
        let properties = self
            .heal
            .map(|amount| ItemProperties::consumable(ItemEffect::Heal { amount }))
            .unwrap_or_default();
        ItemDefinition::new(self.name.clone(), self.symbol, self.durability, properties)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub room: RoomMap,
    pub hero: ActorPlacement,
    #[serde(default)]
    pub hostiles: Vec<ActorPlacement>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
}

impl Scenario {
    pub const HERO_START: Position = Position::new(15, 20);
    pub const POTION_START: Position = Position::new(16, 17);

    /// The classic level with `hostiles` zombies scattered over free floor.
    ///
    /// Zombie cells are drawn from `seed`, so the same seed always yields the
    /// same layout.
    pub fn default_room(seed: u64, hostiles: usize) -> Result<Self, ScenarioError> {
        let room = RoomMap::default_room();
        let hero = ActorPlacement {
            position: Self::HERO_START,
            symbol: '@',
            hit_points: GameConfig::MAX_HIT_POINTS,
            damage: 2,
        };
        let potion = ItemPlacement {
            position: Self::POTION_START,
            name: "Potion".to_owned(),
            symbol: '^',
            durability: 3,
            heal: Some(3),
        };

        let free: Vec<Position> = room
            .interior()
            .filter(|cell| *cell != hero.position && *cell != potion.position)
            .collect();
        if hostiles > free.len() {
            return Err(ScenarioError::NotEnoughSpace {
                requested: hostiles,
                available: free.len(),
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let hostiles = free
            .choose_multiple(&mut rng, hostiles)
            .map(|&position| ActorPlacement {
                position,
                symbol: 'Z',
                hit_points: 4,
                damage: 1,
            })
            .collect();

        Ok(Self {
            room,
            hero,
            hostiles,
            items: vec![potion],
        })
    }

    pub fn from_ron(source: &str) -> Result<Self, ScenarioError> {
        Ok(ron::from_str(source)?)
    }

    /// Load scenario from a RON file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    /// Initializes a [`GameState`] from this scenario.
    ///
    /// Every placement must be on passable terrain of `map`; overlapping actors
    /// or ground items are rejected by the store.
    pub fn build(&self, map: &dyn MapOracle) -> Result<GameState, ScenarioError> {
        let mut state = GameState::empty();

        tracing::info!(
            hostiles = self.hostiles.len(),
            items = self.items.len(),
            "building initial state from scenario"
        );

        let actors = std::iter::once((Role::Hero, &self.hero))
            .chain(self.hostiles.iter().map(|hostile| (Role::Hostile, hostile)));
        for (role, placement) in actors {
            require_floor(map, placement.position)?;
            let id = state
                .entities
                .add_actor(&placement.template(role), placement.position)?;
            tracing::debug!(%id, %role, position = %placement.position, symbol = %placement.symbol, "placed actor");
        }

        for item in &self.items {
            require_floor(map, item.position)?;
            let id = state.entities.add_item(&item.definition()?, item.position)?;
            tracing::debug!(%id, position = %item.position, name = %item.name, "placed item");
        }

        Ok(state)
    }
}

fn require_floor(map: &dyn MapOracle, position: Position) -> Result<(), ScenarioError> {
    if map.is_passable(position) {
        Ok(())
    } else {
        Err(ScenarioError::Impassable { position })
    }
}
