use super::cell::Cell;
use super::payoff::Payoff;
use super::player::Player;
use super::strategy::Strategy;
use serde::Serialize;

/// a rows x cols grid of Payoffs together with positional strategy
/// labels for both players. immutable after construction; anything
/// derived (residual games, column prohibitions) is a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    cells: Vec<Vec<Payoff>>,
    rows: Vec<&'static str>,
    cols: Vec<&'static str>,
}

impl Matrix {
    /// construction asserts the shape invariant. a malformed grid is
    /// a programming error in the caller, not a runtime condition.
    pub fn new(cells: Vec<Vec<Payoff>>, rows: Vec<&'static str>, cols: Vec<&'static str>) -> Self {
        assert!(cells.len() == rows.len());
        assert!(cells.iter().all(|r| r.len() == cols.len()));
        assert!(!rows.is_empty() && !cols.is_empty());
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }
    pub fn cols(&self) -> usize {
        self.cols.len()
    }
    pub fn at(&self, row: usize, col: usize) -> Payoff {
        self.cells[row][col]
    }
    pub fn row_label(&self, row: usize) -> &'static str {
        self.rows[row]
    }
    pub fn col_label(&self, col: usize) -> &'static str {
        self.cols[col]
    }

    /// how many strategies one player has
    pub fn len(&self, player: Player) -> usize {
        match player {
            Player::A => self.rows(),
            Player::B => self.cols(),
        }
    }
    /// one player's labels, in positional order
    pub fn labels(&self, player: Player) -> &[&'static str] {
        match player {
            Player::A => &self.rows,
            Player::B => &self.cols,
        }
    }
    pub fn strategy(&self, player: Player, index: usize) -> Strategy {
        Strategy {
            player,
            index,
            label: self.labels(player)[index],
        }
    }

    /// all coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(|r| (0..self.cols()).map(move |c| Cell::from((r, c))))
    }

    /// the human name of a cell, e.g. "(Top, Left)"
    pub fn cell_name(&self, cell: Cell) -> String {
        format!("({}, {})", self.rows[cell.row], self.cols[cell.col])
    }

    /// a fresh compacted copy keeping only the given row and column
    /// indices, in the given order. labels travel with their lines.
    pub fn restrict(&self, rows: &[usize], cols: &[usize]) -> Self {
        Self::new(
            rows.iter()
                .map(|&r| cols.iter().map(|&c| self.cells[r][c]).collect())
                .collect(),
            rows.iter().map(|&r| self.rows[r]).collect(),
            cols.iter().map(|&c| self.cols[c]).collect(),
        )
    }

    /// a fresh copy with one of Player B's strategies prohibited
    pub fn without_col(&self, col: usize) -> Self {
        let rows = (0..self.rows()).collect::<Vec<_>>();
        let cols = (0..self.cols()).filter(|&c| c != col).collect::<Vec<_>>();
        self.restrict(&rows, &cols)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>8}", "")?;
        for col in self.cols.iter() {
            write!(f, "{:>10}", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows.iter().enumerate() {
            write!(f, "{:>8}", row)?;
            for c in 0..self.cols() {
                write!(f, "{:>10}", self.cells[r][c].to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// build a matrix from (a, b) pairs, row-major
    pub fn matrix_of(pairs: Vec<Vec<(i32, i32)>>) -> Matrix {
        let rows = match pairs.len() {
            2 => vec!["Top", "Bottom"],
            3 => vec!["Top", "Middle", "Bottom"],
            n => panic!("unsupported row count {}", n),
        };
        let cols = match pairs[0].len() {
            2 => vec!["Left", "Right"],
            3 => vec!["Left", "Center", "Right"],
            n => panic!("unsupported col count {}", n),
        };
        Matrix::new(
            pairs
                .into_iter()
                .map(|row| row.into_iter().map(Payoff::from).collect())
                .collect(),
            rows,
            cols,
        )
    }

    #[test]
    fn shape() {
        let m = matrix_of(vec![vec![(1, 2), (3, 4)], vec![(5, 6), (7, 8)]]);
        assert!(m.rows() == 2);
        assert!(m.cols() == 2);
        assert!(m.at(1, 0) == Payoff::from((5, 6)));
        assert!(m.cells().count() == 4);
    }

    #[test]
    fn naming() {
        let m = matrix_of(vec![vec![(1, 2), (3, 4)], vec![(5, 6), (7, 8)]]);
        assert!(m.cell_name(Cell::from((0, 1))) == "(Top, Right)");
        assert!(m.strategy(Player::B, 0).label == "Left");
    }

    #[test]
    fn restriction() {
        let m = matrix_of(vec![
            vec![(1, 1), (2, 2), (3, 3)],
            vec![(4, 4), (5, 5), (6, 6)],
        ]);
        let r = m.restrict(&[1], &[0, 2]);
        assert!(r.rows() == 1);
        assert!(r.cols() == 2);
        assert!(r.row_label(0) == "Bottom");
        assert!(r.col_label(1) == "Right");
        assert!(r.at(0, 1) == Payoff::from((6, 6)));
    }

    #[test]
    fn prohibition() {
        let m = matrix_of(vec![vec![(1, 1), (2, 2)], vec![(3, 3), (4, 4)]]);
        let r = m.without_col(0);
        assert!(r.cols() == 1);
        assert!(r.col_label(0) == "Right");
        assert!(r.at(1, 0) == Payoff::from((4, 4)));
    }

    #[test]
    #[should_panic]
    fn ragged_grid_panics() {
        Matrix::new(
            vec![
                vec![Payoff::from((1, 1))],
                vec![Payoff::from((2, 2)), Payoff::from((3, 3))],
            ],
            vec!["Top", "Bottom"],
            vec!["Left"],
        );
    }
}
