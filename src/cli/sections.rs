//! Month section listing

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::controller::{current_month_key, Controller};
use crate::display::format_section_list;
use crate::error::RosterResult;
use crate::render::Page;

/// Arguments of `roster sections`
#[derive(Args, Debug, Clone)]
pub struct SectionsArgs {
    /// Date to treat as today (YYYY-MM-DD)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Handle `roster sections`
pub fn handle_sections_command(
    page: Page,
    settings: &Settings,
    args: SectionsArgs,
) -> RosterResult<()> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut controller = Controller::from_settings(page, settings);
    let current = controller.start(&today);

    match current {
        Some(_) => println!("Current month: {}", current_month_key(&today)),
        None => println!(
            "Current month: {} (no such section on this page)",
            current_month_key(&today)
        ),
    }
    println!();
    print!("{}", format_section_list(controller.tree(), current));

    Ok(())
}
