use serde::Serialize;

/// the two sides of a strategic-form game. Player A owns the rows
/// of a payoff matrix, Player B owns the columns.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
    /// which axis of the matrix this player chooses along
    pub fn axis(&self) -> &'static str {
        match self {
            Self::A => "row",
            Self::B => "column",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "Player A"),
            Self::B => write!(f, "Player B"),
        }
    }
}
