use serde::{Deserialize, Serialize};

/// Root of the JSON input file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDto {
    #[serde(default)]
    pub min_servers: Option<usize>,

    #[serde(default)]
    pub max_servers: Option<usize>,

    pub arrivals: Vec<ArrivalDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDto {
    pub arrival_time: i64,
    pub service_duration: i64,
}
