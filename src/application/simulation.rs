use crate::domain::{
    Algorithm, Ant, Grid, PresetId, RuleKind, SimulationConfig, StepMetrics, brians_brain,
    langtons_ant, life, random_fill,
};

/// Simulation orchestrates the kernel: it owns the configuration, both grid
/// buffers, the optional ant and the metrics, and dispatches each operation
/// to the matching stepper or seeder.
///
/// Every operation runs to completion before returning and never consults
/// the clock, so the resulting state is a pure function of the call
/// sequence. Callers drive pacing themselves and must serialize mutating
/// calls; buffer identity is not stable across `step`, so snapshots must be
/// re-fetched after any mutation.
pub struct Simulation {
    config: SimulationConfig,
    current: Grid,
    next: Grid,
    ant: Option<Ant>,
    metrics: StepMetrics,
    algorithm: Algorithm,
}

/// Read-only view handed to collaborators (renderers, state encoders).
pub struct Snapshot<'a> {
    pub config: &'a SimulationConfig,
    /// Current generation, row-major
    pub cells: &'a [u8],
    pub ant: Option<Ant>,
    pub metrics: StepMetrics,
}

impl Simulation {
    /// Create a simulation with zeroed buffers. Under the ant rule the ant
    /// starts at the grid center facing North.
    pub fn new(config: SimulationConfig) -> Self {
        let config = config.normalized();
        let (width, height) = (config.width, config.height);
        Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            ant: (config.rule == RuleKind::LangtonsAnt).then(|| Ant::centered(width, height)),
            metrics: StepMetrics::default(),
            algorithm: Algorithm::default(),
            config,
        }
    }

    /// Discard all owned state and start over with a new configuration.
    /// The execution strategy is a caller preference and survives the reset.
    pub fn reset(&mut self, config: SimulationConfig) {
        let algorithm = self.algorithm;
        *self = Self::new(config);
        self.algorithm = algorithm;
    }

    /// Zero both buffers and the metrics; the ant returns to center
    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
        self.metrics = StepMetrics::default();
        self.ant = (self.config.rule == RuleKind::LangtonsAnt)
            .then(|| Ant::centered(self.config.width, self.config.height));
    }

    /// Rule-specific probabilistic fill from the configured seed. Not a
    /// transition: generation, births and deaths are pinned back to zero.
    pub fn randomize(&mut self, probability: Option<f64>) {
        let p = probability.unwrap_or(self.config.rule.default_fill_probability());
        random_fill(&mut self.current, &self.config, p, 1);
        self.next.clear();
        if self.config.rule == RuleKind::LangtonsAnt {
            // Colors are random but the walk restarts from the canonical pose
            self.ant = Some(Ant::centered(self.config.width, self.config.height));
        }
        self.rebuild_snapshot_metrics();
    }

    /// Replace the grid with a preset; same metrics reset as `randomize`
    pub fn apply_preset(&mut self, preset: PresetId) {
        self.ant = preset.apply(&self.config, &mut self.current);
        self.next.clear();
        self.rebuild_snapshot_metrics();
    }

    /// Advance exactly one generation: run the rule's stepper into the back
    /// buffer, then swap buffer ownership and adopt the stepper's metrics.
    pub fn step(&mut self) {
        let generation = self.metrics.generation;
        let edge = self.config.edge_mode;

        self.metrics = match self.config.rule {
            RuleKind::Life => match self.algorithm {
                Algorithm::Serial => life::step_life(&self.current, &mut self.next, edge, generation),
                Algorithm::Parallel => {
                    life::step_life_parallel(&self.current, &mut self.next, edge, generation)
                }
            },
            RuleKind::BriansBrain => match self.algorithm {
                Algorithm::Serial => {
                    brians_brain::step_brians_brain(&self.current, &mut self.next, edge, generation)
                }
                Algorithm::Parallel => brians_brain::step_brians_brain_parallel(
                    &self.current,
                    &mut self.next,
                    edge,
                    generation,
                ),
            },
            RuleKind::LangtonsAnt => {
                let (width, height) = (self.config.width, self.config.height);
                // A missing ant (rule switched without a reset) heals in place
                let ant = self.ant.get_or_insert_with(|| Ant::centered(width, height));
                langtons_ant::step_langtons_ant(&self.current, &mut self.next, ant, edge, generation)
            }
        };

        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Boundary-aware manual edit, written through to both buffers. The ant
    /// stepper seeds its back buffer from a raw copy of the front one, so a
    /// single-buffer edit would vanish on the very next step.
    pub fn paint_cell(&mut self, x: i32, y: i32, value: u8) {
        let edge = self.config.edge_mode;
        self.current.set(x, y, edge, value);
        self.next.set(x, y, edge, value);
    }

    /// Select the execution strategy for the full-grid steppers
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Active configuration
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current generation's cells, row-major
    pub fn cells(&self) -> &[u8] {
        self.current.cells()
    }

    /// The walker, present only under the ant rule
    pub const fn ant(&self) -> Option<Ant> {
        self.ant
    }

    /// Metrics for the most recent operation
    pub const fn metrics(&self) -> StepMetrics {
        self.metrics
    }

    /// Read-only snapshot of the full observable state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            config: &self.config,
            cells: self.current.cells(),
            ant: self.ant,
            metrics: self.metrics,
        }
    }

    fn rebuild_snapshot_metrics(&mut self) {
        let rule = self.config.rule;
        let alive = self
            .current
            .cells()
            .iter()
            .filter(|&&c| rule.is_alive_cell(c))
            .count();
        self.metrics = StepMetrics::repopulated(alive, self.config.cell_count());
    }
}
