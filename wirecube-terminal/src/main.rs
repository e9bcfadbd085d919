/// Wirecube - Interactive wireframe cubes in the terminal
///
/// Controls:
///   - Tab / M: Cycle edit mode (FOV, X/Y/Z rotation, cube, auto-rotate)
///   - + / =: Increase the edited value
///   - - / _: Decrease the edited value
///   - Q/ESC/Ctrl+C: Quit
use clap::Parser;
use std::path::PathBuf;
use wirecube_core::Config;
use wirecube_terminal::{init_logging, TerminalApp};

#[derive(Debug, Parser)]
#[command(version, about = "Interactive wireframe cube renderer")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_logging(&config.log_file)?;
    log::info!("Starting!");

    let mut app = TerminalApp::new(&config)?;
    app.run()?;

    log::info!("Exiting.");
    Ok(())
}
