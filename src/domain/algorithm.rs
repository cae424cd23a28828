//! Execution strategy for the full-grid steppers.
//!
//! Both strategies compute the same pure per-cell function, so their output
//! is byte-identical; Parallel splits rows across rayon workers and only
//! pays off on larger grids.

/// How a generation is computed for the two local rules.
/// The ant rule mutates a single cell and always runs serially.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-by-row on the calling thread
    #[default]
    Serial,
    /// Rows distributed over the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available strategies
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strategies_listed() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }
}
