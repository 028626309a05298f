mod config; // brings `config.rs` in as `crate::config`
mod export; // brings `export.rs` in as `crate::export`
mod scenario; // brings `scenario.rs` in as `crate::scenario`
mod sim; // brings `sim.rs` in as `crate::sim`

use std::fs;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

use crate::config::Settings;
use crate::scenario::Scenario;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Velo trajectory simulator started.");

    let settings = crate::config::load()?;
    fs::create_dir_all(&settings.output.dir)?;

    for name in &settings.scenarios.run {
        match scenario::by_name(name) {
            Some(scenario) => run(&scenario, &settings)?,
            None => warn!(scenario = %name, "Unknown scenario name, skipping."),
        }
    }

    info!("All scenarios finished.");
    Ok(())
}

fn run(scenario: &Scenario, settings: &Settings) -> Result<()> {
    info!(
        scenario = scenario.name,
        samples = scenario.v.len(),
        "Running scenario."
    );

    let trajectory = sim::simulate(scenario)?;

    let path = settings.output.dir.join(format!("{}.txt", scenario.name));
    export::write_inputs(&path, &trajectory.t, &scenario.v, &scenario.w)?;

    info!(
        scenario = scenario.name,
        final_x = trajectory.x.last().copied().unwrap_or(0.0),
        final_y = trajectory.y.last().copied().unwrap_or(0.0),
        table = %path.display(),
        "Scenario finished."
    );
    Ok(())
}
