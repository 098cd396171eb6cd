//! Distance heuristics for A*.
//!
//! All variants are pure functions of two positions. Manhattan, Euclidean
//! and Zero are admissible for 4-directional unit-cost movement; Chebyshev
//! is too, since it never exceeds Manhattan on this topology.

use gridpath_core::Pos;

/// A distance estimate between two grid positions.
///
/// The set is closed and small, so variants are a plain enum selected by
/// index rather than trait objects. [`Heuristic::Zero`] degenerates A*
/// into Dijkstra.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Zero,
}

impl Heuristic {
    /// All heuristics, in cycling order.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    /// Estimate the distance from `a` to `b`. Non-negative.
    #[inline]
    pub fn estimate(self, a: Pos, b: Pos) -> f64 {
        let dr = (a.row - b.row).abs() as f64;
        let dc = (a.col - b.col).abs() as f64;
        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => (dr * dr + dc * dc).sqrt(),
            Heuristic::Chebyshev => dr.max(dc),
            Heuristic::Zero => 0.0,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Chebyshev => "Chebyshev",
            Heuristic::Zero => "Zero (Dijkstra)",
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let a = Pos::new(0, 0);
        let b = Pos::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 4.0);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
    }

    #[test]
    fn symmetric_and_zero_at_identity() {
        let a = Pos::new(2, 9);
        let b = Pos::new(7, 1);
        for h in Heuristic::ALL {
            assert_eq!(h.estimate(a, b), h.estimate(b, a));
            assert_eq!(h.estimate(a, a), 0.0);
        }
    }

    #[test]
    fn chebyshev_never_exceeds_manhattan() {
        for row in -5..5 {
            for col in -5..5 {
                let a = Pos::new(0, 0);
                let b = Pos::new(row, col);
                assert!(Heuristic::Chebyshev.estimate(a, b) <= Heuristic::Manhattan.estimate(a, b));
            }
        }
    }
}
