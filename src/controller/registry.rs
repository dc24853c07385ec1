//! Bindings from interactive elements to their handlers
//!
//! The registry is rebuilt from the render tree whenever the tree's
//! structural revision moves, so elements added after startup become
//! clickable and removed ones stop resolving.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{RosterError, RosterResult};
use crate::models::{ActionButtonId, ActionKind, CardId, FilterCategory, SectionId};
use crate::render::RenderTree;

/// What an action button was bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    /// Owning card, resolved at bind time
    pub card: CardId,
    pub kind: ActionKind,
}

#[derive(Debug, Default)]
pub struct Registry {
    /// Revision of the tree the bindings were built from
    revision: Option<u64>,
    filters: HashSet<FilterCategory>,
    actions: HashMap<ActionButtonId, ActionBinding>,
    sections: HashSet<SectionId>,
    cards: HashSet<CardId>,
    /// How many times the bindings were (re)built
    binds: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the tree changed shape since the last bind
    pub fn is_stale<T: RenderTree>(&self, tree: &T) -> bool {
        self.revision != Some(tree.revision())
    }

    /// Rebuild every binding from the tree
    pub fn bind<T: RenderTree>(&mut self, tree: &T) {
        self.filters = tree
            .filter_buttons()
            .iter()
            .map(|button| button.category)
            .collect();

        self.cards = tree.card_ids().into_iter().collect();

        self.actions.clear();
        for id in tree.action_button_ids() {
            let Some(button) = tree.action_button(id) else {
                continue;
            };
            if !self.cards.contains(&button.card) {
                warn!(button = %id, card = %button.card, "Action button has no owning card; left unbound");
                continue;
            }
            self.actions.insert(
                id,
                ActionBinding {
                    card: button.card,
                    kind: button.kind,
                },
            );
        }

        self.sections = tree.section_ids().into_iter().collect();
        self.revision = Some(tree.revision());
        self.binds += 1;

        debug!(
            revision = tree.revision(),
            cards = self.cards.len(),
            actions = self.actions.len(),
            sections = self.sections.len(),
            "Bound interactive elements"
        );
    }

    /// Rebind only if the tree changed shape
    pub fn refresh<T: RenderTree>(&mut self, tree: &T) -> bool {
        if self.is_stale(tree) {
            self.bind(tree);
            true
        } else {
            false
        }
    }

    pub fn action(&self, id: ActionButtonId) -> RosterResult<ActionBinding> {
        self.actions
            .get(&id)
            .copied()
            .ok_or_else(|| {
                warn!(button = %id, "Click on an unbound action button");
                RosterError::button_not_found(id.to_string())
            })
    }

    pub fn require_filter(&self, category: FilterCategory) -> RosterResult<()> {
        if self.filters.contains(&category) {
            Ok(())
        } else {
            warn!(filter = %category, "No filter button for category");
            Err(RosterError::filter_not_found(category.to_string()))
        }
    }

    pub fn require_section(&self, id: SectionId) -> RosterResult<()> {
        if self.sections.contains(&id) {
            Ok(())
        } else {
            warn!(section = %id, "Section not bound");
            Err(RosterError::section_not_found(id.to_string()))
        }
    }

    pub fn require_card(&self, id: CardId) -> RosterResult<()> {
        if self.cards.contains(&id) {
            Ok(())
        } else {
            warn!(card = %id, "Card not bound");
            Err(RosterError::card_not_found(id.to_string()))
        }
    }

    pub fn binds(&self) -> u64 {
        self.binds
    }

    pub fn bound_actions(&self) -> usize {
        self.actions.len()
    }
}
