//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so while it runs
//! logs go to `roster.log` in the data directory instead.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

use crate::error::RosterResult;

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` says nothing about this crate
pub const DEFAULT_DIRECTIVE: &str = "roster=info";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(log_file: Option<&Path>) -> RosterResult<()> {
    let file = match log_file {
        Some(path) => Some(open_log(path)?),
        None => None,
    };

    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = match file {
            Some(file) => fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    });

    Ok(())
}

fn open_log(path: &Path) -> RosterResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Collect everything logged while `f` runs on this thread
#[cfg(test)]
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut buf) = self.0.lock() {
                buf.extend_from_slice(bytes);
            }
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
    let writer = buf.clone();
    let subscriber = fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
