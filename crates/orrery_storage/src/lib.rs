use std::fs;
use std::path::Path;

use log::info;
use orrery_core::constants::DEFAULT_SEED;
use orrery_core::Scenario;
use orrery_physics::procgen;
use thiserror::Error;

/// Failures while loading or persisting the scenario file. All of these are
/// fatal: the run never proceeds with a half-loaded or unpersisted scenario.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read scenario file: {0}")]
    Read(std::io::Error),

    #[error("malformed scenario file: {0}")]
    Parse(serde_json::Error),

    #[error("failed to encode generated scenario: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to persist generated scenario: {0}")]
    Write(std::io::Error),
}

/// Load the scenario at `path`, or generate the seeded default, persist it
/// there and return it. An existing file is returned verbatim and never
/// overwritten; structural decode failures propagate as `Parse`.
pub fn load_or_create(path: &Path) -> Result<Scenario, StorageError> {
    if path.exists() {
        let data = fs::read_to_string(path).map_err(StorageError::Read)?;
        return serde_json::from_str(&data).map_err(StorageError::Parse);
    }

    let scenario = procgen::default_scenario(DEFAULT_SEED);
    let json = serde_json::to_string_pretty(&scenario).map_err(StorageError::Serialize)?;
    fs::write(path, json).map_err(StorageError::Write)?;
    info!(
        "generated default scenario ({} bodies) at {}",
        scenario.planets.len(),
        path.display()
    );
    Ok(scenario)
}
