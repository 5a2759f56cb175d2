use super::dominance::dominations_over;
use crate::game::Cell;
use crate::game::Matrix;
use crate::game::Player;
use crate::game::Strategy;
use serde::Serialize;

/// one elimination event, in elimination order, with a
/// human-readable justification for the learner.
#[derive(Debug, Clone, Serialize)]
pub struct Elimination {
    pub strategy: Strategy,
    pub by: Strategy,
    pub reason: String,
}

/// the outcome of iterated elimination of strictly dominated
/// strategies. residual is None only when a player runs out of
/// strategies, which cannot happen under strict domination but is
/// represented rather than assumed.
#[derive(Debug, Clone, Serialize)]
pub struct Reduction {
    pub steps: Vec<Elimination>,
    pub surviving: Vec<Cell>,
    pub residual: Option<Matrix>,
}

/// the first strictly dominated strategy for `player` over the
/// active sets, honoring the deterministic scan order: increasing
/// dominated index, then increasing strict-dominator index.
fn first_strict(
    matrix: &Matrix,
    player: Player,
    own: &[usize],
    against: &[usize],
) -> Option<(Strategy, Strategy)> {
    dominations_over(matrix, player, own, against)
        .into_iter()
        .find(|d| d.strict)
        .map(|d| (d.dominated, d.by))
}

fn justify(eliminated: Strategy, by: Strategy, remaining: usize) -> String {
    format!(
        "{} {} \"{}\" is strictly dominated by {} \"{}\": it earns strictly less against every one of the {} remaining {} choices.",
        eliminated.player,
        eliminated.player.axis(),
        eliminated.label,
        by.player.axis(),
        by.label,
        remaining,
        eliminated.player.other().axis(),
    )
}

/// iterated elimination of strictly dominated strategies. rows are
/// scanned before columns on every pass; the loop stops when a full
/// pass eliminates nothing. only strict domination eliminates.
pub fn reduce(matrix: &Matrix) -> Reduction {
    let mut rows = (0..matrix.rows()).collect::<Vec<_>>();
    let mut cols = (0..matrix.cols()).collect::<Vec<_>>();
    let mut steps = Vec::new();
    loop {
        if let Some((dominated, by)) = first_strict(matrix, Player::A, &rows, &cols) {
            rows.retain(|&r| r != dominated.index);
            log::trace!("eliminating row {} ({})", dominated.index, dominated.label);
            steps.push(Elimination {
                strategy: dominated,
                by,
                reason: justify(dominated, by, cols.len()),
            });
        } else if let Some((dominated, by)) = first_strict(matrix, Player::B, &cols, &rows) {
            cols.retain(|&c| c != dominated.index);
            log::trace!("eliminating col {} ({})", dominated.index, dominated.label);
            steps.push(Elimination {
                strategy: dominated,
                by,
                reason: justify(dominated, by, rows.len()),
            });
        } else {
            break;
        }
    }
    let surviving = rows
        .iter()
        .flat_map(|&r| cols.iter().map(move |&c| Cell::from((r, c))))
        .collect::<Vec<_>>();
    let residual = match rows.is_empty() || cols.is_empty() {
        true => None,
        false => Some(matrix.restrict(&rows, &cols)),
    };
    Reduction {
        steps,
        surviving,
        residual,
    }
}
