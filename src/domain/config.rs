use serde::{Deserialize, Serialize};

/// The three supported automaton families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Conway's Game of Life (B3/S23), two states
    #[default]
    Life,
    /// Brian's Brain, three states with unconditional decay
    BriansBrain,
    /// Langton's Ant, a single walker over binary cells
    LangtonsAnt,
}

impl RuleKind {
    /// Get all supported rules
    pub fn all() -> Vec<RuleKind> {
        vec![RuleKind::Life, RuleKind::BriansBrain, RuleKind::LangtonsAnt]
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::Life => "Life",
            RuleKind::BriansBrain => "Brian's Brain",
            RuleKind::LangtonsAnt => "Langton's Ant",
        }
    }

    /// Fill probability used by randomize() when the caller passes none
    pub const fn default_fill_probability(self) -> f64 {
        match self {
            RuleKind::Life => 0.22,
            RuleKind::BriansBrain => 0.18,
            RuleKind::LangtonsAnt => 0.35,
        }
    }

    /// Whether a raw cell value counts toward the alive tally for this rule.
    /// Life and the ant count the low bit; Brian's Brain counts firing cells only.
    pub const fn is_alive_cell(self, value: u8) -> bool {
        match self {
            RuleKind::Life | RuleKind::LangtonsAnt => value & 1 == 1,
            RuleKind::BriansBrain => value == 1,
        }
    }
}

/// Boundary policy for neighbor lookups and ant movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Toroidal: coordinates wrap to the opposite edge
    #[default]
    Wrap,
    /// Out-of-range reads are dead, out-of-range writes are dropped
    Bounded,
}

/// Immutable configuration for one simulation run.
/// Replaced wholesale on reset; never mutated while a simulation is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rule: RuleKind,
    pub width: usize,
    pub height: usize,
    pub edge_mode: EdgeMode,
    pub seed: u32,
}

impl SimulationConfig {
    /// Create a normalized configuration
    pub fn new(rule: RuleKind, width: usize, height: usize, edge_mode: EdgeMode, seed: u32) -> Self {
        Self { rule, width, height, edge_mode, seed }.normalized()
    }

    /// Coerce degenerate dimensions to the smallest legal grid instead of failing
    pub fn normalized(mut self) -> Self {
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        self
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Grid center, the anchor for most presets and the ant start
    pub const fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }
}
