use crate::game::Cell;
use crate::game::Payoff;
use crate::game::Player;
use serde::Serialize;

/// a terminal outcome. the id deterministically encodes the
/// originating matrix cell as "leaf-{row}-{col}" regardless of who
/// moved first, so UI state keyed by leaf id survives a first-mover
/// switch. keep this encoding stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub id: String,
    pub payoff: Payoff,
}

impl Leaf {
    pub fn new(cell: Cell, payoff: Payoff) -> Self {
        Self {
            id: format!("leaf-{}-{}", cell.row, cell.col),
            payoff,
        }
    }
    /// parse the originating cell back out of the id
    pub fn cell(&self) -> Cell {
        let mut parts = self.id.split('-').skip(1);
        let row = parts.next().and_then(|p| p.parse().ok());
        let col = parts.next().and_then(|p| p.parse().ok());
        match (row, col) {
            (Some(row), Some(col)) => Cell { row, col },
            _ => panic!("malformed leaf id {}", self.id),
        }
    }
}

/// one action available at a decision node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub label: &'static str,
    pub child: GameNode,
}

/// an internal choice point owned by one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub id: String,
    pub player: Player,
    pub edges: Vec<Edge>,
}

/// the extensive-form tree as a tagged union, so recursive solvers
/// can match exhaustively instead of downcasting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameNode {
    Decision(Decision),
    Leaf(Leaf),
}

impl GameNode {
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Decision(_) => false,
            Self::Leaf(_) => true,
        }
    }
}
