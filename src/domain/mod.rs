pub mod simulator;
pub mod utils;
