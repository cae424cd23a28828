use serde::{Deserialize, Serialize};

/// Counters describing the most recent transition, plus the running
/// generation. Steppers produce these; repopulating operations pin the
/// generation and the transition counters back to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    pub generation: u64,
    pub alive_count: usize,
    /// alive_count / (width * height), in [0, 1]
    pub density: f64,
    pub births: usize,
    pub deaths: usize,
}

impl StepMetrics {
    /// Metrics for a completed generation transition
    pub fn transition(generation: u64, alive_count: usize, cell_count: usize, births: usize, deaths: usize) -> Self {
        Self {
            generation,
            alive_count,
            density: alive_count as f64 / cell_count as f64,
            births,
            deaths,
        }
    }

    /// Metrics after a non-step repopulation (clear, randomize, preset):
    /// generation pinned to 0, no births or deaths.
    pub fn repopulated(alive_count: usize, cell_count: usize) -> Self {
        Self::transition(0, alive_count, cell_count, 0, 0)
    }
}
