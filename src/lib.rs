use std::path::Path;

use crate::api::simulation_dto::SimulationDto;
use crate::domain::simulator::config::SimulationConfig;
use crate::domain::simulator::run_controller::RunController;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Reads and validates a simulation input file.
pub fn load_config(file_path: impl AsRef<Path>) -> Result<SimulationConfig> {
    let dto: SimulationDto = parse_json_file(file_path.as_ref())?;
    log::info!("Input file '{}' parsed successfully ({} arrivals).", file_path.as_ref().display(), dto.arrivals.len());

    SimulationConfig::try_from(dto)
}

/// Builds a `RunController` for the input stored at `file_path`.
pub fn load_run_controller(file_path: impl AsRef<Path>) -> Result<RunController> {
    let config = load_config(file_path)?;
    RunController::try_from(config)
}
