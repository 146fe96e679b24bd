// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Replay camera input and print the resulting camera state", long_about = None)]
pub struct Cli {
    /// Camera config JSON, overrides the script's camera block
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input script JSON (camera block plus events)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Viewport aspect ratio for the projection matrix
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect: f32,

    /// Near clipping plane
    #[arg(long, default_value_t = 0.1)]
    pub near: f32,

    /// Far clipping plane
    #[arg(long, default_value_t = 100.0)]
    pub far: f32,

    /// Print a snapshot after every event, not just the final state
    #[arg(long)]
    pub trace: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
