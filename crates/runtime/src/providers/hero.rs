//! Player-controlled hero input.
use game_core::{EntitiesState, EntityId, HeroIntent, Order, inventory_listing, resolve_hero, select_item};

use crate::api::{CommandSource, Renderer, Result, RuntimeError};

/// Reads the hero's command and, for consume, the inventory slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroProvider;

impl HeroProvider {
    /// Blocks for the hero's next command.
    ///
    /// Never returns [`HeroIntent::ChooseItem`]: the selection prompt is
    /// resolved here into `Act(ConsumeItem)` or `Act(None)`.
    pub fn next_intent(
        &self,
        input: &mut dyn CommandSource,
        renderer: &mut dyn Renderer,
        entities: &EntitiesState,
    ) -> Result<HeroIntent> {
        let raw = input.next_command().map_err(RuntimeError::Input)?;
        let intent = resolve_hero(raw);
        tracing::trace!(?raw, ?intent, "hero command");

        match intent {
            HeroIntent::ChooseItem => self
                .choose_item(input, renderer, entities)
                .map(HeroIntent::Act),
            other => Ok(other),
        }
    }

    fn choose_item(
        &self,
        input: &mut dyn CommandSource,
        renderer: &mut dyn Renderer,
        entities: &EntitiesState,
    ) -> Result<Order> {
        let listing =
            inventory_listing(entities, EntityId::HERO).map_err(|e| RuntimeError::invariant(&e))?;
        renderer
            .show_inventory(&listing)
            .map_err(RuntimeError::Render)?;

        let raw = input.next_command().map_err(RuntimeError::Input)?;
        let order = select_item(entities, EntityId::HERO, raw)
            .map_err(|e| RuntimeError::invariant(&e))?;
        if order.is_none() {
            tracing::debug!(?raw, slots = listing.len(), "no item in selected slot");
        }
        Ok(order)
    }
}
