use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roster::cli::{
    handle_demo_command, handle_sections_command, handle_show_command, load_page, DemoArgs,
    SectionsArgs, ShowArgs,
};
use roster::config::{RosterPaths, Settings};
use roster::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Student payment roster with filters and month sections",
    long_about = "Roster board shows student payment cards grouped by month. \
                  Filter by payment status, send reminders and mark payments \
                  from the terminal UI, or replay clicks headlessly with `show`."
)]
struct Cli {
    /// Page snapshot to load (JSON or YAML); defaults to page.json in the
    /// data directory, then the built-in demo
    #[arg(long, global = true, value_name = "FILE")]
    page: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Apply clicks headlessly and print the cards left visible
    Show(ShowArgs),

    /// List month sections with their status counts
    Sections(SectionsArgs),

    /// Print or write the demo page snapshot
    Demo(DemoArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RosterPaths::new()?;
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) {
        init_tracing(Some(&paths.log_file()))?;
    } else {
        init_tracing(None)?;
    }

    let settings = Settings::load_or_create(&paths)?;

    match command {
        Commands::Tui => {
            let page = load_page(cli.page.as_deref(), &paths, &settings)?;
            roster::tui::run_tui(page, &settings, &paths)?;
        }
        Commands::Show(args) => {
            let page = load_page(cli.page.as_deref(), &paths, &settings)?;
            handle_show_command(page, &settings, args)?;
        }
        Commands::Sections(args) => {
            let page = load_page(cli.page.as_deref(), &paths, &settings)?;
            handle_sections_command(page, &settings, args)?;
        }
        Commands::Demo(args) => {
            handle_demo_command(args)?;
        }
        Commands::Config { init } => {
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("Roster Board Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Page snapshot:  {}", paths.page_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Timing:");
            println!("  Reveal delay:      {} ms", settings.timing.reveal_delay_ms);
            println!("  Hide delay:        {} ms", settings.timing.hide_delay_ms);
            println!("  Revert delay:      {} ms", settings.timing.revert_delay_ms);
            println!("  Scroll delay:      {} ms", settings.timing.scroll_delay_ms);
            println!("  Supersede pending: {}", settings.timing.supersede_pending);
            println!("  Tick rate:         {} ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
