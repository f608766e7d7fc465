//! Client maturity grades.

use std::fmt;

/// How production-ready a client is.
///
/// Orders `Alpha < Beta < Stable`; the UI sorts by maturity descending so
/// stable clients surface first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maturity {
    /// Experimental, may be missing core features
    Alpha,
    /// Usable day-to-day, still rough in places
    Beta,
    /// Recommended by default
    Stable,
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Stable => "stable",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_sorts_last_ascending() {
        let mut grades = [Maturity::Stable, Maturity::Alpha, Maturity::Beta];
        grades.sort();
        assert_eq!(grades, [Maturity::Alpha, Maturity::Beta, Maturity::Stable]);
    }
}
