//! Brian's Brain stepper. Same sweep shape as the Life stepper, but the
//! neighbor tally counts only firing cells and the alive metric means
//! "currently firing".

use rayon::prelude::*;

use super::grid::MOORE_OFFSETS;
use super::rules::brians_brain_transition;
use super::{EdgeMode, Grid, StepMetrics};

fn firing_neighbors(current: &Grid, x: i32, y: i32, edge: EdgeMode) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| current.get(x + dx, y + dy, edge) == 1)
        .count() as u8
}

/// Compute the next generation into `next`. `current` is never mutated.
/// Birth means a cell started firing; death means it stopped.
pub fn step_brians_brain(current: &Grid, next: &mut Grid, edge: EdgeMode, generation: u64) -> StepMetrics {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (width, height) = current.dimensions();

    let mut alive = 0usize;
    let mut births = 0usize;
    let mut deaths = 0usize;

    for y in 0..height {
        for x in 0..width {
            let (x, y) = (x as i32, y as i32);
            let cur = current.get(x, y, edge);
            let nxt = brians_brain_transition(cur, firing_neighbors(current, x, y, edge));
            next.set(x, y, edge, nxt);

            if nxt == 1 {
                alive += 1;
            }
            if cur != 1 && nxt == 1 {
                births += 1;
            }
            if cur == 1 && nxt != 1 {
                deaths += 1;
            }
        }
    }

    StepMetrics::transition(generation + 1, alive, width * height, births, deaths)
}

/// Parallel variant; byte-identical to `step_brians_brain`.
pub fn step_brians_brain_parallel(current: &Grid, next: &mut Grid, edge: EdgeMode, generation: u64) -> StepMetrics {
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
                let cur = current.get(x, y, edge);
                let nxt = brians_brain_transition(cur, firing_neighbors(current, x, y, edge));
                *slot = nxt;

                if nxt == 1 {
                    alive += 1;
                }
                if cur != 1 && nxt == 1 {
                    births += 1;
                }
                if cur == 1 && nxt != 1 {
                    deaths += 1;
                }
            }
            (alive, births, deaths)
        })
        .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    StepMetrics::transition(generation + 1, alive, width * height, births, deaths)
}
