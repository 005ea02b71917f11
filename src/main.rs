use anyhow::Result;
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use vaex_finder::finder::ImportFinder;
use vaex_finder::reporter::{render_json, render_text};

/// Find every place a repository imports vaex, in Python files and notebooks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan.
    /// Defaults to the parent of the directory holding this executable.
    path: Option<PathBuf>,

    /// Output raw JSON.
    /// The exit status is the same as for the text report.
    #[arg(long)]
    json: bool,
}

/// Root used when none is given on the command line.
fn default_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent()?.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    // Logging is off unless RUST_LOG asks for it.
    env_logger::init();
    let cli = Cli::parse();

    // Fall back to the tool's own location when no root was given.
    let root = cli.path.unwrap_or_else(default_root);
    let result = ImportFinder::new().scan(&root);

    // Render the report in the requested format.
    let mut stdout = io::stdout().lock();
    if cli.json {
        render_json(&result, &mut stdout)?;
    } else {
        render_text(&result, &mut stdout)?;
    }
    stdout.flush()?;
    drop(stdout);

    // Exit status reflects only whether imports were found, never warnings.
    std::process::exit(result.exit_code());
}
