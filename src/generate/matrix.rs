use super::difficulty::Difficulty;
use super::labels::labels;
use crate::analysis::dominations;
use crate::analysis::equilibria;
use crate::game::Matrix;
use crate::game::Payoff;
use crate::game::Player;
use rand::Rng;

/// how many rejection-sampling draws before relaxing or giving up
const ATTEMPTS: usize = 100;

/// one unconstrained candidate: independent uniform payoffs per
/// player per cell, in the difficulty's range.
fn draw<R: Rng>(rows: usize, cols: usize, difficulty: Difficulty, rng: &mut R) -> Matrix {
    let range = difficulty.payoffs();
    Matrix::new(
        (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        Payoff::from((
                            rng.random_range(range.clone()),
                            rng.random_range(range.clone()),
                        ))
                    })
                    .collect()
            })
            .collect(),
        labels(Player::A, rows),
        labels(Player::B, cols),
    )
}

/// best responses must be unambiguous: no Player A tie within any
/// column, no Player B tie within any row.
fn unambiguous(matrix: &Matrix) -> bool {
    let no_col_tie = (0..matrix.cols()).all(|c| {
        (0..matrix.rows()).all(|i| {
            (0..i).all(|j| matrix.at(i, c).a != matrix.at(j, c).a)
        })
    });
    let no_row_tie = (0..matrix.rows()).all(|r| {
        (0..matrix.cols()).all(|i| {
            (0..i).all(|j| matrix.at(r, i).b != matrix.at(r, j).b)
        })
    });
    no_col_tie && no_row_tie
}

/// the difficulty's usefulness predicate over a candidate
fn useful(matrix: &Matrix, difficulty: Difficulty) -> bool {
    if !unambiguous(matrix) {
        return false;
    }
    match difficulty {
        Difficulty::Easy => {
            dominations(matrix).iter().any(|d| d.strict) && !equilibria(matrix).is_empty()
        }
        Difficulty::Medium | Difficulty::Hard => !equilibria(matrix).is_empty(),
    }
}

/// generate a payoff matrix that is pedagogically useful for the
/// requested difficulty. rejection sampling with a hard attempt cap:
/// 30% of calls additionally demand two or more equilibria to
/// diversify the question pool, relaxing back to the base rule after
/// 100 failed draws. a second exhausted cap falls back to the last
/// unconstrained draw, logged, never an error.
pub fn matrix<R: Rng>(rows: usize, cols: usize, difficulty: Difficulty, rng: &mut R) -> Matrix {
    let diversify = rng.random_bool(0.3);
    let mut last = draw(rows, cols, difficulty, rng);
    if diversify {
        for _ in 0..ATTEMPTS {
            if useful(&last, difficulty) && equilibria(&last).len() >= 2 {
                return last;
            }
            last = draw(rows, cols, difficulty, rng);
        }
        log::debug!(
            "no {}x{} {} matrix with multiple equilibria in {} draws, relaxing",
            rows,
            cols,
            difficulty,
            ATTEMPTS
        );
    }
    for _ in 0..ATTEMPTS {
        if useful(&last, difficulty) {
            return last;
        }
        last = draw(rows, cols, difficulty, rng);
    }
    log::warn!(
        "usefulness cap exhausted for {}x{} {}, accepting unconstrained draw",
        rows,
        cols,
        difficulty
    );
    last
}
