//! Demo snapshot export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{RosterError, RosterResult};
use crate::render::{PageSnapshot, SnapshotFormat};

/// Arguments of `roster demo`
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Output format (json, yaml); defaults to the output file's extension
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<SnapshotFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<SnapshotFormat, String> {
    SnapshotFormat::parse(s)
        .ok_or_else(|| format!("Invalid format: '{}'. Valid formats: json, yaml", s))
}

/// Handle `roster demo`
pub fn handle_demo_command(args: DemoArgs) -> RosterResult<()> {
    let snapshot = PageSnapshot::demo();

    match args.output {
        Some(path) => {
            let format = args
                .format
                .unwrap_or_else(|| SnapshotFormat::from_path(&path));
            let file = File::create(&path).map_err(|e| {
                RosterError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            snapshot.write(&mut writer, format)?;
            writer.flush()?;
            println!("Demo page written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            snapshot.write(&mut handle, args.format.unwrap_or(SnapshotFormat::Json))?;
        }
    }

    Ok(())
}
