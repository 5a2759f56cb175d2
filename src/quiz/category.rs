use crate::generate::Difficulty;
use rand::Rng;
use serde::Serialize;

/// the twelve kinds of question the trainer can pose. each
/// difficulty draws uniformly from its own pool; the hard pool
/// lists the two outcome categories twice to double their weight.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Category {
    FindDominated,
    IedsSurvivors,
    NashEquilibrium,
    SelectAllNash,
    ResidualGame,
    CountNash,
    TrueFalse,
    WillingnessToPay,
    SequentialFirstMover,
    SequentialSecondMover,
    SequentialBestResponse,
    ConsultingOffer,
}

impl Category {
    pub fn pool(difficulty: Difficulty) -> &'static [Self] {
        match difficulty {
            Difficulty::Easy => &[
                Self::FindDominated,
                Self::NashEquilibrium,
                Self::SelectAllNash,
                Self::CountNash,
                Self::TrueFalse,
            ],
            Difficulty::Medium => &[
                Self::FindDominated,
                Self::NashEquilibrium,
                Self::SelectAllNash,
                Self::CountNash,
                Self::TrueFalse,
                Self::IedsSurvivors,
                Self::ResidualGame,
                Self::WillingnessToPay,
            ],
            Difficulty::Hard => &[
                Self::SequentialFirstMover,
                Self::SequentialFirstMover,
                Self::SequentialSecondMover,
                Self::SequentialSecondMover,
                Self::SequentialBestResponse,
                Self::ConsultingOffer,
            ],
        }
    }

    pub fn choose<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let pool = Self::pool(difficulty);
        pool[rng.random_range(0..pool.len())]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FindDominated => write!(f, "find_dominated_strategies"),
            Self::IedsSurvivors => write!(f, "ieds_survivors"),
            Self::NashEquilibrium => write!(f, "nash_equilibrium"),
            Self::SelectAllNash => write!(f, "select_all_nash"),
            Self::ResidualGame => write!(f, "residual_game"),
            Self::CountNash => write!(f, "count_nash"),
            Self::TrueFalse => write!(f, "true_false"),
            Self::WillingnessToPay => write!(f, "willingness_to_pay"),
            Self::SequentialFirstMover => write!(f, "sequential_first_mover"),
            Self::SequentialSecondMover => write!(f, "sequential_second_mover"),
            Self::SequentialBestResponse => write!(f, "sequential_best_response"),
            Self::ConsultingOffer => write!(f, "consulting_offer"),
        }
    }
}
