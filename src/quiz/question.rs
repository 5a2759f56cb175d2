use super::category::Category;
use crate::generate::Difficulty;
use rand::Rng;
use serde::Serialize;

/// the constant final option on single-select questions
pub const NONE_OF_THE_ABOVE: &str = "None of the Above";
/// the sentinel option on the multi-select equilibrium question
pub const NO_NASH: &str = "No Nash Equilibrium exists";

/// one generated multiple-choice question. when multi is false,
/// correct is authoritative; when true, corrects is.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub corrects: Option<Vec<usize>>,
    pub multi: bool,
    pub explanation: String,
}

impl Question {
    /// opaque id; the engine keeps no state, so uniqueness comes
    /// from the caller's rng stream
    pub fn id<R: Rng>(rng: &mut R) -> String {
        format!("q-{:08x}", rng.random::<u32>())
    }

    /// which option indices count as the answer
    pub fn answers(&self) -> Vec<usize> {
        match (self.multi, &self.corrects) {
            (true, Some(indices)) => indices.clone(),
            _ => vec![self.correct],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn id_shape() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let id = Question::id(rng);
        assert!(id.starts_with("q-"));
        assert!(id.len() == 10);
    }
}
