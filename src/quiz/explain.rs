use crate::analysis::Domination;
use crate::analysis::Equilibrium;
use crate::analysis::Reduction;
use crate::game::Matrix;
use crate::game::Player;
use crate::sequential::Sequential;

/// comparison lines for one domination claim, e.g.
/// "5 > 2 under Left, 4 > 1 under Right"
fn comparisons(matrix: &Matrix, d: &Domination) -> String {
    let lines = match d.dominated.player {
        Player::A => (0..matrix.cols())
            .map(|c| {
                format!(
                    "{} {} {} under {}",
                    matrix.at(d.by.index, c).a,
                    if matrix.at(d.by.index, c).a > matrix.at(d.dominated.index, c).a {
                        ">"
                    } else {
                        "="
                    },
                    matrix.at(d.dominated.index, c).a,
                    matrix.col_label(c),
                )
            })
            .collect::<Vec<_>>(),
        Player::B => (0..matrix.rows())
            .map(|r| {
                format!(
                    "{} {} {} against {}",
                    matrix.at(r, d.by.index).b,
                    if matrix.at(r, d.by.index).b > matrix.at(r, d.dominated.index).b {
                        ">"
                    } else {
                        "="
                    },
                    matrix.at(r, d.dominated.index).b,
                    matrix.row_label(r),
                )
            })
            .collect::<Vec<_>>(),
    };
    lines.join(", ")
}

/// prose justifying the dominance report
pub fn dominance_prose(matrix: &Matrix, dominations: &[Domination]) -> String {
    if dominations.is_empty() {
        return "No strategy is dominated: each one is a best reply to some opposing choice."
            .to_string();
    }
    dominations
        .iter()
        .map(|d| {
            format!(
                "\"{}\" {} dominates \"{}\" for {}: {}.",
                d.by.label,
                if d.strict { "strictly" } else { "weakly" },
                d.dominated.label,
                d.dominated.player,
                comparisons(matrix, d),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// prose justifying the equilibrium report via best responses
pub fn nash_prose(matrix: &Matrix, equilibria: &[Equilibrium]) -> String {
    if equilibria.is_empty() {
        return "No cell is a simultaneous best response for both players, so this game has no pure-strategy Nash equilibrium."
            .to_string();
    }
    equilibria
        .iter()
        .map(|eq| {
            let column = (0..matrix.rows())
                .map(|r| format!("{} from {}", matrix.at(r, eq.cell.col).a, matrix.row_label(r)))
                .collect::<Vec<_>>()
                .join(", ");
            let row = (0..matrix.cols())
                .map(|c| format!("{} from {}", matrix.at(eq.cell.row, c).b, matrix.col_label(c)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{} is an equilibrium: in column {} Player A's options pay {}, and in row {} Player B's options pay {}, so neither player can improve alone.",
                matrix.cell_name(eq.cell),
                eq.col_label,
                column,
                eq.row_label,
                row,
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// prose retracing the elimination steps
pub fn ieds_prose(reduction: &Reduction) -> String {
    if reduction.steps.is_empty() {
        return "Nothing can be eliminated: no strategy is strictly dominated, so the full game survives."
            .to_string();
    }
    let steps = reduction
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step.reason))
        .collect::<Vec<_>>()
        .join(" ");
    match &reduction.residual {
        Some(residual) => format!(
            "{} A {}x{} residual game remains.",
            steps,
            residual.rows(),
            residual.cols(),
        ),
        None => steps,
    }
}

/// prose retracing backward induction from the leaves up
pub fn induction_prose(game: &Sequential) -> String {
    let second = game.first.other();
    let anticipated = game
        .replies()
        .iter()
        .map(|(opening, reply, payoff)| {
            format!(
                "if {} opens \"{}\", {} replies \"{}\" and the outcome pays {}",
                game.first, opening, second, reply, payoff,
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "Working from the bottom up: {}. Anticipating this, {} opens \"{}\" and play ends at {} with payoffs {}.",
        anticipated,
        game.first,
        game.path[0],
        game.matrix.cell_name(game.outcome),
        game.matrix.at(game.outcome.row, game.outcome.col),
    )
}
