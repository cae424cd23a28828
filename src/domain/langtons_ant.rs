//! Langton's Ant: a single walker flipping the binary color of the cell it
//! stands on. One generation moves the ant exactly once; the rest of the
//! grid is untouched.

use serde::{Deserialize, Serialize};

use super::grid::wrap_coord;
use super::{EdgeMode, Grid, StepMetrics};

/// Facing of the ant. Clockwise rotation cycles N -> E -> S -> W -> N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Rotate 90 degrees clockwise
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotate 90 degrees counter-clockwise
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit step in this facing; y grows downward
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// The walker. Position is always strictly inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub dir: Direction,
}

impl Ant {
    /// Ant at the grid center facing North, the canonical start
    pub const fn centered(width: usize, height: usize) -> Self {
        Self {
            x: width / 2,
            y: height / 2,
            dir: Direction::North,
        }
    }
}

/// Advance the ant one generation. `next` is seeded from an exact copy of
/// `current` so the buffer swap stays lossless, then the single cell under
/// the ant flips. A white cell turns the ant clockwise and goes black (one
/// birth); a black cell turns it counter-clockwise and goes white (one
/// death). The ant then advances one cell in its new facing; bounded mode
/// clamps it to the edges, so it can slide along a border indefinitely.
pub fn step_langtons_ant(
    current: &Grid,
    next: &mut Grid,
    ant: &mut Ant,
    edge: EdgeMode,
    generation: u64,
) -> StepMetrics {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (width, height) = current.dimensions();

    next.copy_from(current);

    let (x, y) = (ant.x as i32, ant.y as i32);
    let births;
    let deaths;
    if current.get(x, y, edge) & 1 == 0 {
        ant.dir = ant.dir.clockwise();
        next.set(x, y, edge, 1);
        births = 1;
        deaths = 0;
    } else {
        ant.dir = ant.dir.counter_clockwise();
        next.set(x, y, edge, 0);
        births = 0;
        deaths = 1;
    }

    let (dx, dy) = ant.dir.offset();
    let (nx, ny) = (x + dx, y + dy);
    (ant.x, ant.y) = match edge {
        EdgeMode::Wrap => (wrap_coord(nx, width), wrap_coord(ny, height)),
        EdgeMode::Bounded => (
            nx.clamp(0, width as i32 - 1) as usize,
            ny.clamp(0, height as i32 - 1) as usize,
        ),
    };

    // Exact recount of black cells; only one cell changed, but scanning the
    // buffer keeps the metric immune to drift.
    let alive = next.cells().iter().filter(|&&c| c & 1 == 1).count();
    StepMetrics::transition(generation + 1, alive, width * height, births, deaths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles() {
        let mut dir = Direction::North;
        for expected in [Direction::East, Direction::South, Direction::West, Direction::North] {
            dir = dir.clockwise();
            assert_eq!(dir, expected);
        }
        for expected in [Direction::West, Direction::South, Direction::East, Direction::North] {
            dir = dir.counter_clockwise();
            assert_eq!(dir, expected);
        }
    }

    #[test]
    fn test_first_step_from_white_center() {
        let grid = Grid::new(9, 9);
        let mut next = Grid::new(9, 9);
        let mut ant = Ant::centered(9, 9);
        assert_eq!((ant.x, ant.y), (4, 4));

        let metrics = step_langtons_ant(&grid, &mut next, &mut ant, EdgeMode::Wrap, 0);

        // White cell: clockwise turn to East, paint black, advance East
        assert_eq!(ant, Ant { x: 5, y: 4, dir: Direction::East });
        assert_eq!(next.get(4, 4, EdgeMode::Wrap), 1);
        assert_eq!(metrics.generation, 1);
        assert_eq!(metrics.alive_count, 1);
        assert_eq!(metrics.births, 1);
        assert_eq!(metrics.deaths, 0);
    }

    #[test]
    fn test_black_cell_turns_left_and_clears() {
        let mut grid = Grid::new(9, 9);
        let mut next = Grid::new(9, 9);
        grid.set(4, 4, EdgeMode::Wrap, 1);
        let mut ant = Ant { x: 4, y: 4, dir: Direction::East };

        let metrics = step_langtons_ant(&grid, &mut next, &mut ant, EdgeMode::Wrap, 3);

        // Black cell: counter-clockwise to North, paint white, advance North
        assert_eq!(ant, Ant { x: 4, y: 3, dir: Direction::North });
        assert_eq!(next.get(4, 4, EdgeMode::Wrap), 0);
        assert_eq!(metrics.generation, 4);
        assert_eq!(metrics.alive_count, 0);
        assert_eq!(metrics.births, 0);
        assert_eq!(metrics.deaths, 1);
    }

    #[test]
    fn test_only_one_cell_changes() {
        let mut grid = Grid::new(16, 16);
        for i in 0..40 {
            grid.set((i * 5) % 16, (i * 3) % 16, EdgeMode::Wrap, (i % 2) as u8);
        }
        let mut next = Grid::new(16, 16);
        let mut ant = Ant::centered(16, 16);

        step_langtons_ant(&grid, &mut next, &mut ant, EdgeMode::Wrap, 0);

        let changed = grid
            .cells()
            .iter()
            .zip(next.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_wrap_carries_ant_across_edge() {
        let grid = Grid::new(5, 5);
        let mut next = Grid::new(5, 5);
        // Facing West at the left edge on a white cell: turns North and exits upward
        let mut ant = Ant { x: 0, y: 0, dir: Direction::West };

        step_langtons_ant(&grid, &mut next, &mut ant, EdgeMode::Wrap, 0);
        assert_eq!(ant, Ant { x: 0, y: 4, dir: Direction::North });
    }

    #[test]
    fn test_bounded_single_cell_oscillates() {
        // On a 1x1 bounded grid the ant can never leave its cell; it just
        // spins and flips the color forever
        let mut current = Grid::new(1, 1);
        let mut next = Grid::new(1, 1);
        let mut ant = Ant::centered(1, 1);

        let m1 = step_langtons_ant(&current, &mut next, &mut ant, EdgeMode::Bounded, 0);
        assert_eq!((ant.x, ant.y), (0, 0));
        assert_eq!(m1.alive_count, 1);
        assert_eq!(m1.births, 1);

        let m2 = step_langtons_ant(&next, &mut current, &mut ant, EdgeMode::Bounded, 1);
        assert_eq!((ant.x, ant.y), (0, 0));
        assert_eq!(m2.alive_count, 0);
        assert_eq!(m2.deaths, 1);
    }
}
