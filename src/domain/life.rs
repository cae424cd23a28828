//! Life stepper: one full Moore-neighborhood pass over the grid with exact
//! birth/death accounting in the same sweep.

use rayon::prelude::*;

use super::grid::MOORE_OFFSETS;
use super::rules::life_transition;
use super::{EdgeMode, Grid, StepMetrics};

fn alive_neighbors(current: &Grid, x: i32, y: i32, edge: EdgeMode) -> u8 {
    MOORE_OFFSETS
        .iter()
        .map(|&(dx, dy)| current.get(x + dx, y + dy, edge) & 1)
        .sum()
}

/// Compute the next generation into `next`. `current` is never mutated.
/// Returns the metrics for the completed transition.
pub fn step_life(current: &Grid, next: &mut Grid, edge: EdgeMode, generation: u64) -> StepMetrics {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (width, height) = current.dimensions();

    let mut alive = 0usize;
    let mut births = 0usize;
    let mut deaths = 0usize;

    for y in 0..height {
        for x in 0..width {
            let (x, y) = (x as i32, y as i32);
            let cur = current.get(x, y, edge) & 1;
            let nxt = life_transition(cur, alive_neighbors(current, x, y, edge));
            next.set(x, y, edge, nxt);

            alive += nxt as usize;
            if cur == 0 && nxt == 1 {
                births += 1;
            } else if cur == 1 && nxt == 0 {
                deaths += 1;
            }
        }
    }

    StepMetrics::transition(generation + 1, alive, width * height, births, deaths)
}

/// Parallel variant: rows are computed independently on the rayon pool.
/// Output is byte-identical to `step_life`.
pub fn step_life_parallel(current: &Grid, next: &mut Grid, edge: EdgeMode, generation: u64) -> StepMetrics {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (width, height) = current.dimensions();

    let (alive, births, deaths) = next
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut alive = 0usize;
            let mut births = 0usize;
            let mut deaths = 0usize;
            for (x, slot) in row.iter_mut().enumerate() {
                let (x, y) = (x as i32, y as i32);
                let cur = current.get(x, y, edge) & 1;
                let nxt = life_transition(cur, alive_neighbors(current, x, y, edge));
                *slot = nxt;

                alive += nxt as usize;
                if cur == 0 && nxt == 1 {
                    births += 1;
                } else if cur == 1 && nxt == 0 {
                    deaths += 1;
                }
            }
            (alive, births, deaths)
        })
        .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    StepMetrics::transition(generation + 1, alive, width * height, births, deaths)
}
