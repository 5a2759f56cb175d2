use super::player::Player;
use crate::Payout;
use serde::Serialize;

/// one outcome of the game: Player A's and Player B's rewards
/// at a single cell. immutable once created.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Payoff {
    pub a: Payout,
    pub b: Payout,
}

impl Payoff {
    /// project the component belonging to one player
    pub fn of(&self, player: Player) -> Payout {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }
}

impl From<(Payout, Payout)> for Payoff {
    fn from((a, b): (Payout, Payout)) -> Self {
        Self { a, b }
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
