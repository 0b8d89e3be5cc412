//! Using consumable items from the inventory.

use ql_core::{
    Character, CoreError, ItemEffect, ItemId, ItemKind, StatBlock, StatusEffect,
};

use crate::engine::ProgressionEngine;
use crate::error::{ProgressionError, ProgressionResult};
use crate::event::ProgressionEvent;

impl ProgressionEngine<'_> {
    /// Use one unit of a consumable from the character's inventory.
    ///
    /// `Heal` effects restore HP through [`ProgressionEngine::heal`]; `Buff`
    /// effects attach a timed [`StatusEffect`] carrying the stat bonus.
    /// The item is resolved through the engine's catalog. On any error the
    /// character is left unchanged.
    pub fn use_item(
        &self,
        character: &mut Character,
        item_id: &str,
        in_battle: bool,
    ) -> ProgressionResult<Vec<ProgressionEvent>> {
        let item = self
            .gear()
            .resolve(item_id)
            .ok_or_else(|| CoreError::UnknownItem(ItemId::new(item_id)))?;
        let effect = match (&item.kind, &item.effect) {
            (ItemKind::Consumable, Some(effect)) => effect,
            _ => return Err(ProgressionError::NotUsable(item.id.clone())),
        };
        let allowed = if in_battle {
            item.usable_in_battle
        } else {
            item.usable_outside_battle
        };
        if !allowed {
            return Err(ProgressionError::WrongContext {
                item: item.id.clone(),
                in_battle,
            });
        }
        if let ItemEffect::Heal(amount @ i32::MIN..=-1) = effect {
            return Err(ProgressionError::InvalidAmount {
                amount: i64::from(*amount),
            });
        }

        character.inventory.remove(item.id.as_str(), 1)?;
        let mut events = vec![ProgressionEvent::ItemUsed {
            item: item.name.clone(),
        }];
        match effect {
            ItemEffect::Heal(amount) => events.push(self.heal(character, *amount)?),
            ItemEffect::Buff {
                stat,
                amount,
                turns,
            } => {
                let buff = StatusEffect::new(item.name.clone(), *turns)
                    .with_bonus(StatBlock::only(*stat, *amount));
                character.apply_status(buff);
                events.push(ProgressionEvent::StatusApplied {
                    effect: item.name.clone(),
                });
            }
        }

        tracing::debug!(character = %character.name, item = %item.id, in_battle, "item used");
        Ok(events)
    }
}
