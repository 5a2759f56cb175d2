use crate::game::Player;

/// strategy names are positional and fixed by count, so every
/// generated game reads the same way to the learner.
pub fn labels(player: Player, count: usize) -> Vec<&'static str> {
    match (player, count) {
        (Player::A, 2) => vec!["Top", "Bottom"],
        (Player::A, 3) => vec!["Top", "Middle", "Bottom"],
        (Player::B, 2) => vec!["Left", "Right"],
        (Player::B, 3) => vec!["Left", "Center", "Right"],
        (player, count) => panic!("no label table for {} with {} strategies", player, count),
    }
}
