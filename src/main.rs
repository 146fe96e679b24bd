use anyhow::Result;
use clap::Parser;
use log::info;
use serde::Serialize;

use fly_camera::cli::Cli;
use fly_camera::{replay, CameraConfig, CameraSnapshot, Script};

#[derive(Serialize)]
struct Output {
    #[serde(rename = "final")]
    final_state: CameraSnapshot,
    projection: [[f32; 4]; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<CameraSnapshot>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };
    if let Some(path) = &cli.config {
        script.camera = CameraConfig::load(path)?;
    }

    info!("Replaying {} input events", script.events.len());
    let (camera, snapshots) = replay(&script);

    let output = Output {
        final_state: CameraSnapshot::from(&camera),
        projection: camera
            .projection_matrix(cli.aspect, cli.near, cli.far)
            .to_cols_array_2d(),
        trace: cli.trace.then_some(snapshots),
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
