use super::player::Player;
use serde::Serialize;

/// a reference into one player's axis of a matrix: a row for
/// Player A, a column for Player B. the label is positional and
/// drawn from the fixed label tables in generate::labels.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub player: Player,
    pub index: usize,
    pub label: &'static str,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
