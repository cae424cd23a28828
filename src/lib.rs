// Domain layer - Core simulation kernel
pub mod domain;

// Application layer - Simulation controller
pub mod application;

// Re-exports for convenience
pub use domain::{
    Algorithm, Ant, Direction, EdgeMode, Grid, Mulberry32, Pattern, PresetId, RuleKind,
    SimulationConfig, StepMetrics, presets,
};
pub use application::{Simulation, Snapshot};
