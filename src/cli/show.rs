//! Headless show command
//!
//! Replays clicks against the page without a terminal UI, lets every timer
//! run out and prints the cards left in layout.

use clap::Args;

use crate::config::Settings;
use crate::controller::{Click, Controller, Effect};
use crate::display::format_card_list;
use crate::error::{RosterError, RosterResult};
use crate::models::{ActionKind, CardId, FilterCategory, SectionId};
use crate::render::{Page, RenderTree};

/// Arguments of `roster show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Filter to apply (all, paid, pending, unpaid)
    #[arg(short, long, value_parser = parse_filter, default_value = "all")]
    pub filter: FilterCategory,

    /// Click "mark paid" on a student's card (repeatable)
    #[arg(long = "mark-paid", value_name = "NAME")]
    pub mark_paid: Vec<String>,

    /// Click "remind" on a student's card (repeatable)
    #[arg(long, value_name = "NAME")]
    pub remind: Vec<String>,

    /// Limit name lookup and output to one section (e.g. month-3)
    #[arg(short, long, value_name = "KEY")]
    pub section: Option<String>,
}

pub(crate) fn parse_filter(s: &str) -> Result<FilterCategory, String> {
    FilterCategory::parse(s).ok_or_else(|| {
        format!(
            "Invalid filter: '{}'. Valid filters: all, paid, pending, unpaid",
            s
        )
    })
}

/// Handle `roster show`
pub fn handle_show_command(page: Page, settings: &Settings, args: ShowArgs) -> RosterResult<()> {
    let section = match &args.section {
        Some(key) => Some(
            page.section_by_key(key)
                .ok_or_else(|| RosterError::section_not_found(key.clone()))?,
        ),
        None => None,
    };

    let mut controller = Controller::from_settings(page, settings);

    let clicks = args
        .mark_paid
        .iter()
        .map(|name| (name, ActionKind::MarkPaid))
        .chain(args.remind.iter().map(|name| (name, ActionKind::Reminder)));

    for (name, kind) in clicks {
        let card = lookup_card(controller.tree(), name, section)?;
        let button = controller
            .tree()
            .button_of_kind(card, kind)
            .ok_or_else(|| RosterError::button_not_found(format!("{} on {}", kind, name)))?;

        if let Effect::Action(outcome) = controller.dispatch(Click::Action(button))? {
            match outcome.kind {
                ActionKind::MarkPaid => println!(
                    "Marked paid: {} (was {})",
                    name,
                    outcome
                        .previous_status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "untagged".into())
                ),
                ActionKind::Reminder => println!("Reminder sent: {}", name),
            }
        }
    }

    controller.dispatch(Click::Filter(args.filter))?;
    controller.settle();

    let page = controller.tree();
    println!("Filter: {}", args.filter);
    println!();

    let visible = page
        .cards_in_layout()
        .filter(|card| section.is_none() || card.section == section);
    print!("{}", format_card_list(page, visible));

    Ok(())
}

fn lookup_card(page: &Page, name: &str, section: Option<SectionId>) -> RosterResult<CardId> {
    match section {
        Some(section) => page.find_card_in(name, section),
        None => page.find_card(name),
    }
}
