mod algorithm;
mod config;
mod grid;
mod metrics;
mod patterns;
mod rng;
mod rules;
pub mod brians_brain;
pub mod langtons_ant;
pub mod life;

pub use algorithm::Algorithm;
pub use config::{EdgeMode, RuleKind, SimulationConfig};
pub use grid::{Grid, wrap_coord};
pub use langtons_ant::{Ant, Direction};
pub use metrics::StepMetrics;
pub use patterns::{Pattern, PresetId, presets, random_fill};
pub use rng::{Mulberry32, clamp_u32, random_seed_u32};
pub use rules::{brians_brain_transition, life_transition};
