//! Read-only projections handed to the render collaborator.

use crate::state::{EntitiesState, EntityId, ItemId, Position, StateError};

/// A symbol drawn at a grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub position: Position,
    pub symbol: char,
}

/// Everything a renderer may see: hero hit points, ground items, actors.
///
/// Items are listed before actors so a renderer drawing in order puts actors
/// on top of the items they stand on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub hero_hit_points: u32,
    pub items: Vec<Glyph>,
    pub actors: Vec<Glyph>,
}

impl Snapshot {
    pub fn capture(entities: &EntitiesState) -> Result<Self, StateError> {
        let hero_hit_points = entities.hero()?.hit_points();
        let items = entities
            .items()
            .filter_map(|item| {
                item.ground_position().map(|position| Glyph {
                    position,
                    symbol: item.symbol,
                })
            })
            .collect();
        let actors = entities
            .actors()
            .map(|actor| Glyph {
                position: actor.position,
                symbol: actor.symbol,
            })
            .collect();

        Ok(Self {
            hero_hit_points,
            items,
            actors,
        })
    }
}

/// One line of an inventory listing, shown when the hero picks what to consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    pub slot: usize,
    pub item: ItemId,
    pub name: String,
    pub durability: u32,
}

/// Lists `actor`'s inventory in slot order.
pub fn inventory_listing(
    entities: &EntitiesState,
    actor: EntityId,
) -> Result<Vec<InventoryEntry>, StateError> {
    entities
        .actor(actor)?
        .inventory
        .items()
        .iter()
        .enumerate()
        .map(|(slot, &id)| {
            let item = entities.item(id)?;
            Ok(InventoryEntry {
                slot,
                item: id,
                name: item.name.clone(),
                durability: item.durability,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorTemplate, ItemDefinition};

    #[test]
    fn snapshot_lists_ground_items_and_actors_only() {
        let mut entities = EntitiesState::empty();
        entities
            .add_actor(&ActorTemplate::hero(17, 2), Position::new(1, 1))
            .unwrap();
        entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(3, 3))
            .unwrap();
        let held = entities
            .add_item(&ItemDefinition::potion(), Position::new(1, 1))
            .unwrap();
        entities.pick_up(held, EntityId::HERO).unwrap();
        entities
            .add_item(&ItemDefinition::potion(), Position::new(2, 5))
            .unwrap();

        let snapshot = Snapshot::capture(&entities).unwrap();

        assert_eq!(snapshot.hero_hit_points, 17);
        assert_eq!(
            snapshot.items,
            vec![Glyph {
                position: Position::new(2, 5),
                symbol: '^'
            }]
        );
        assert_eq!(
            snapshot.actors,
            vec![
                Glyph {
                    position: Position::new(1, 1),
                    symbol: '@'
                },
                Glyph {
                    position: Position::new(3, 3),
                    symbol: 'Z'
                },
            ]
        );

        let listing = inventory_listing(&entities, EntityId::HERO).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].slot, 0);
        assert_eq!(listing[0].name, "Potion");
    }
}
