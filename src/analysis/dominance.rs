use crate::game::Matrix;
use crate::game::Player;
use crate::game::Strategy;
use serde::Serialize;

/// one strategy never doing better than another. strict means the
/// dominator is strictly better against every opposing strategy;
/// weak means at least as good everywhere and strictly better
/// somewhere. weak domination feeds explanatory prose only and
/// never drives elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domination {
    pub dominated: Strategy,
    pub by: Strategy,
    pub strict: bool,
}

/// does `by` dominate `dominated` for `player`, comparing only over
/// the given active opposing indices? Some(true) for strict,
/// Some(false) for weak, None when incomparable.
pub fn dominates(
    matrix: &Matrix,
    player: Player,
    dominated: usize,
    by: usize,
    against: &[usize],
) -> Option<bool> {
    let payoff = |own: usize, other: usize| match player {
        Player::A => matrix.at(own, other).a,
        Player::B => matrix.at(other, own).b,
    };
    let never_worse = against.iter().all(|&x| payoff(by, x) >= payoff(dominated, x));
    let always_better = against.iter().all(|&x| payoff(by, x) > payoff(dominated, x));
    let ever_better = against.iter().any(|&x| payoff(by, x) > payoff(dominated, x));
    match (never_worse && ever_better, always_better) {
        (true, strict) => Some(strict),
        (false, _) => None,
    }
}

/// the dominance scan restricted to active index sets. each dominated
/// index is reported at most once, in increasing dominated index. a
/// strict dominator always wins the slot: the lowest-index strict one
/// if any exists, else the lowest-index weak one.
pub fn dominations_over(
    matrix: &Matrix,
    player: Player,
    own: &[usize],
    against: &[usize],
) -> Vec<Domination> {
    let mut found = Vec::new();
    for &i in own.iter() {
        let mut weak = None;
        let mut strict = None;
        for &j in own.iter().filter(|&&j| j != i) {
            match dominates(matrix, player, i, j, against) {
                Some(true) => {
                    strict = Some(j);
                    break;
                }
                Some(false) if weak.is_none() => weak = Some(j),
                _ => continue,
            }
        }
        if let Some(j) = strict.or(weak) {
            found.push(Domination {
                dominated: matrix.strategy(player, i),
                by: matrix.strategy(player, j),
                strict: strict.is_some(),
            });
        }
    }
    found
}

/// detect dominated pure strategies for both players across the full
/// matrix. rows are reported before columns, in stable discovery order.
pub fn dominations(matrix: &Matrix) -> Vec<Domination> {
    let rows = (0..matrix.rows()).collect::<Vec<_>>();
    let cols = (0..matrix.cols()).collect::<Vec<_>>();
    let mut found = dominations_over(matrix, Player::A, &rows, &cols);
    found.extend(dominations_over(matrix, Player::B, &cols, &rows));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::matrix::tests::matrix_of;

    #[test]
    fn strict_row_domination() {
        // Top strictly beats Bottom for A in both columns
        let m = matrix_of(vec![vec![(5, 1), (4, 2)], vec![(2, 3), (1, 0)]]);
        let found = dominations(&m);
        let row = found.iter().find(|d| d.dominated.player == Player::A);
        let row = row.unwrap();
        assert!(row.dominated.label == "Bottom");
        assert!(row.by.label == "Top");
        assert!(row.strict);
    }

    #[test]
    fn weak_is_not_strict() {
        // Top ties Bottom under Left, beats it under Right
        let m = matrix_of(vec![vec![(3, 1), (4, 0)], vec![(3, 0), (1, 1)]]);
        let found = dominations(&m);
        let row = found.iter().find(|d| d.dominated.player == Player::A);
        let row = row.unwrap();
        assert!(row.dominated.label == "Bottom");
        assert!(!row.strict);
    }

    #[test]
    fn column_domination_reads_b_payoffs() {
        // Left beats Right for B in both rows
        let m = matrix_of(vec![vec![(1, 5), (2, 2)], vec![(3, 4), (4, 1)]]);
        let found = dominations(&m);
        let col = found.iter().find(|d| d.dominated.player == Player::B);
        let col = col.unwrap();
        assert!(col.dominated.label == "Right");
        assert!(col.by.label == "Left");
        assert!(col.strict);
    }

    #[test]
    fn never_self_dominated() {
        let m = matrix_of(vec![vec![(5, 1), (4, 2)], vec![(2, 3), (1, 0)]]);
        for d in dominations(&m) {
            assert!(d.dominated != d.by);
        }
    }

    #[test]
    fn incomparable_pair_reports_nothing() {
        // each row is best somewhere, each column is best somewhere
        let m = matrix_of(vec![vec![(5, 1), (1, 2)], vec![(1, 3), (5, 0)]]);
        assert!(dominations(&m)
            .iter()
            .all(|d| d.dominated.player != Player::A));
    }

    #[test]
    fn strict_flag_holds_everywhere() {
        // brute force recheck of the strict claim
        let m = matrix_of(vec![
            vec![(9, 1), (8, 2), (7, 0)],
            vec![(5, 3), (4, 1), (3, 2)],
            vec![(1, 0), (2, 4), (0, 1)],
        ]);
        for d in dominations(&m).into_iter().filter(|d| d.strict) {
            match d.dominated.player {
                Player::A => {
                    for c in 0..m.cols() {
                        assert!(m.at(d.by.index, c).a > m.at(d.dominated.index, c).a);
                    }
                }
                Player::B => {
                    for r in 0..m.rows() {
                        assert!(m.at(r, d.by.index).b > m.at(r, d.dominated.index).b);
                    }
                }
            }
        }
    }

    #[test]
    fn dominated_reported_once() {
        // both Top and Middle strictly beat Bottom; one report, lowest dominator
        let m = matrix_of(vec![
            vec![(9, 1), (8, 2)],
            vec![(7, 2), (6, 1)],
            vec![(1, 0), (0, 3)],
        ]);
        let rows = dominations(&m)
            .into_iter()
            .filter(|d| d.dominated.player == Player::A)
            .collect::<Vec<_>>();
        assert!(rows.len() == 2); // Middle < Top too, in this grid
        let bottom = rows.iter().find(|d| d.dominated.label == "Bottom").unwrap();
        assert!(bottom.by.label == "Top");
    }

    #[test]
    fn weak_dominator_cannot_mask_a_strict_one() {
        // Top only weakly beats Bottom (tie under Left) while Middle
        // strictly beats it; the report must carry the strict verdict
        let m = matrix_of(vec![
            vec![(1, 5), (9, 1)],
            vec![(2, 1), (2, 5)],
            vec![(1, 2), (1, 3)],
        ]);
        let found = dominations(&m);
        let bottom = found
            .iter()
            .find(|d| d.dominated.label == "Bottom")
            .unwrap();
        assert!(bottom.by.label == "Middle");
        assert!(bottom.strict);
    }
}
