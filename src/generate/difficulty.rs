use rand::Rng;
use serde::Serialize;

/// trainer difficulty. easy games stay small and always contain a
/// teachable dominance; hard games add the sequential layer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// inclusive per-player payoff range for generated matrices
    pub fn payoffs(&self) -> std::ops::RangeInclusive<crate::Payout> {
        match self {
            Self::Easy => 0..=9,
            Self::Medium | Self::Hard => -5..=15,
        }
    }

    /// the size policy: easy is always 2x2, medium and hard flip a
    /// coin between 2x2 and 3x3.
    pub fn dimensions<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        match self {
            Self::Easy => (2, 2),
            Self::Medium | Self::Hard => match rng.random_bool(0.5) {
                true => (2, 2),
                false => (3, 3),
            },
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn easy_is_always_2x2() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..32 {
            assert!(Difficulty::Easy.dimensions(rng) == (2, 2));
        }
    }

    #[test]
    fn hard_mixes_sizes() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sizes = (0..64)
            .map(|_| Difficulty::Hard.dimensions(rng))
            .collect::<Vec<_>>();
        assert!(sizes.contains(&(2, 2)));
        assert!(sizes.contains(&(3, 3)));
    }

    #[test]
    fn bijective_str() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(d.to_string().parse::<Difficulty>() == Ok(d));
        }
    }
}
