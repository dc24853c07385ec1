//! Action toggler
//!
//! Handles clicks on a card's action buttons. The acknowledgement on the
//! button is cosmetic and reverts after the revert delay; marking a payment
//! also rewrites the card's status badge, and that change stays.

use tracing::{debug, warn};

use crate::config::{LabelSettings, TimingSettings};
use crate::error::{RosterError, RosterResult};
use crate::models::{ActionButtonId, ActionKind, CardId, PaymentStatus};
use crate::render::RenderTree;
use crate::scheduler::{Deferred, Scheduler};

use super::registry::ActionBinding;

/// Result of one action click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub button: ActionButtonId,
    pub card: CardId,
    pub kind: ActionKind,
    /// Status the card presented before the click
    pub previous_status: Option<PaymentStatus>,
}

pub fn handle_action<T: RenderTree>(
    tree: &mut T,
    scheduler: &mut Scheduler,
    timing: &TimingSettings,
    labels: &LabelSettings,
    button: ActionButtonId,
    binding: ActionBinding,
) -> RosterResult<ActionOutcome> {
    if tree.action_button(button).is_none() {
        warn!(%button, "Action button vanished from the page");
        return Err(RosterError::button_not_found(button.to_string()));
    }

    let card = tree.card_mut(binding.card).ok_or_else(|| {
        warn!(%button, card = %binding.card, "Owning card not found");
        RosterError::card_not_found(binding.card.to_string())
    })?;

    let previous_status = card.payment_status().inspect_err(|e| {
        warn!(card = %card.name, error = %e, "Action aborted");
    })?;

    if binding.kind == ActionKind::MarkPaid {
        card.badge_mut()?
            .present(PaymentStatus::Paid, PaymentStatus::Paid.label(labels));
        debug!(card = %card.name, "Marked as paid");
    } else {
        debug!(card = %card.name, "Reminder acknowledged");
    }

    if let Some(button) = tree.action_button_mut(button) {
        button.acknowledge(labels);
    }
    scheduler.schedule(timing.revert_delay(), Deferred::RevertButton(button));

    Ok(ActionOutcome {
        button,
        card: binding.card,
        kind: binding.kind,
        previous_status,
    })
}

/// Cosmetic revert of a button to its resting face and style
pub fn revert_button<T: RenderTree>(tree: &mut T, id: ActionButtonId) -> RosterResult<()> {
    let button = tree
        .action_button_mut(id)
        .ok_or_else(|| RosterError::button_not_found(id.to_string()))?;
    button.revert();
    Ok(())
}
