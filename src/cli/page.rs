//! Page loading shared by the commands

use std::path::Path;

use tracing::info;

use crate::config::{RosterPaths, Settings};
use crate::error::RosterResult;
use crate::render::{Page, PageSnapshot};

/// Load the page to work on.
///
/// An explicit `--page` file wins, then `page.json` in the data directory,
/// then the built-in demo.
pub fn load_page(
    explicit: Option<&Path>,
    paths: &RosterPaths,
    settings: &Settings,
) -> RosterResult<Page> {
    let snapshot = match explicit {
        Some(path) => {
            info!(path = %path.display(), "Loading page snapshot");
            PageSnapshot::load(path)?
        }
        None => {
            let default = paths.page_file();
            if default.exists() {
                info!(path = %default.display(), "Loading page snapshot");
                PageSnapshot::load(&default)?
            } else {
                info!("No page snapshot; using the demo page");
                PageSnapshot::demo()
            }
        }
    };

    snapshot.to_page(&settings.labels)
}
