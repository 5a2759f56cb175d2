use crate::game::Cell;
use crate::game::Matrix;
use crate::game::Payoff;
use serde::Serialize;

/// a cell that is simultaneously a best response for both players:
/// A cannot do better in its column, B cannot do better in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Equilibrium {
    pub cell: Cell,
    pub row_label: &'static str,
    pub col_label: &'static str,
    pub payoff: Payoff,
}

/// enumerate pure-strategy Nash equilibria in row-major order.
/// ties for best are allowed, so several equilibria may share a
/// row or column. operates on whatever matrix is passed, full or
/// residual.
pub fn equilibria(matrix: &Matrix) -> Vec<Equilibrium> {
    matrix
        .cells()
        .filter(|&cell| {
            let here = matrix.at(cell.row, cell.col);
            let best_a = (0..matrix.rows()).all(|r| here.a >= matrix.at(r, cell.col).a);
            let best_b = (0..matrix.cols()).all(|c| here.b >= matrix.at(cell.row, c).b);
            best_a && best_b
        })
        .map(|cell| Equilibrium {
            cell,
            row_label: matrix.row_label(cell.row),
            col_label: matrix.col_label(cell.col),
            payoff: matrix.at(cell.row, cell.col),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::matrix::tests::matrix_of;

    #[test]
    fn worked_example() {
        // A: [[3, 1], [2, 4]]  B: [[2, 1], [3, 0]]
        let m = matrix_of(vec![vec![(3, 2), (1, 1)], vec![(2, 3), (4, 0)]]);
        let found = equilibria(&m);
        assert!(found.len() == 1);
        assert!(found[0].cell == Cell::from((0, 0)));
        assert!(found[0].row_label == "Top");
        assert!(found[0].col_label == "Left");
        assert!(found[0].payoff == Payoff::from((3, 2)));
    }

    #[test]
    fn coordination_has_two() {
        let m = matrix_of(vec![vec![(2, 2), (0, 0)], vec![(0, 0), (1, 1)]]);
        let found = equilibria(&m);
        assert!(found.len() == 2);
        assert!(found[0].cell == Cell::from((0, 0)));
        assert!(found[1].cell == Cell::from((1, 1)));
    }

    #[test]
    fn matching_pennies_has_none() {
        let m = matrix_of(vec![vec![(1, -1), (-1, 1)], vec![(-1, 1), (1, -1)]]);
        assert!(equilibria(&m).is_empty());
    }

    #[test]
    fn ties_report_all() {
        // B is indifferent across the Top row; both cells qualify
        let m = matrix_of(vec![vec![(3, 2), (3, 2)], vec![(1, 0), (1, 1)]]);
        let found = equilibria(&m);
        assert!(found.len() == 2);
    }

    #[test]
    fn best_response_rederivation() {
        let m = matrix_of(vec![
            vec![(3, 2), (1, 1), (0, 4)],
            vec![(2, 3), (4, 0), (1, 1)],
            vec![(0, 1), (2, 2), (5, 0)],
        ]);
        for eq in equilibria(&m) {
            let here = m.at(eq.cell.row, eq.cell.col);
            assert!((0..m.rows()).all(|r| m.at(r, eq.cell.col).a <= here.a));
            assert!((0..m.cols()).all(|c| m.at(eq.cell.row, c).b <= here.b));
        }
    }
}
