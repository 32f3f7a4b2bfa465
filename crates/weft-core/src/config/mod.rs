//! Configuration system for Weft.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod analysis_config;
pub mod engine_config;
pub mod weft_config;

pub use analysis_config::AnalysisConfig;
pub use engine_config::EngineConfig;
pub use weft_config::WeftConfig;
