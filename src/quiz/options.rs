use super::question::NONE_OF_THE_ABOVE;
use rand::Rng;
use rand::seq::SliceRandom;

/// when the distractor pool runs dry, synthesize plausible options
/// by combining answers the learner has already seen named.
fn pad(pool: &mut Vec<String>, correct: &str, upto: usize) {
    let mut seeds = pool.clone();
    seeds.push(correct.to_string());
    let combos = seeds
        .iter()
        .flat_map(|a| seeds.iter().map(move |b| (a, b)))
        .map(|(a, b)| match a == b {
            true => format!("Only {}", a),
            false => format!("{}, {}", a, b),
        })
        .collect::<Vec<_>>();
    for combo in combos {
        if pool.len() >= upto {
            break;
        }
        if combo != correct && !pool.contains(&combo) {
            pool.push(combo);
        }
    }
}

/// assemble the five options for a single-select question and track
/// where the correct answer lands. the first four slots are shuffled;
/// the fifth is always the constant "None of the Above", unless the
/// correct answer is itself "None of the Above", which then takes the
/// fixed final slot behind four shuffled distractors.
pub fn assemble<R: Rng>(correct: &str, pool: Vec<String>, rng: &mut R) -> (Vec<String>, usize) {
    let mut pool = pool
        .into_iter()
        .filter(|o| o != correct)
        .collect::<Vec<_>>();
    pool.sort();
    pool.dedup();
    pool.shuffle(rng);
    if correct == NONE_OF_THE_ABOVE {
        pad(&mut pool, correct, 4);
        let mut options = pool.into_iter().take(4).collect::<Vec<_>>();
        options.push(NONE_OF_THE_ABOVE.to_string());
        return (options, 4);
    }
    pad(&mut pool, correct, 3);
    let mut options = pool.into_iter().take(3).collect::<Vec<_>>();
    options.push(correct.to_string());
    options.shuffle(rng);
    let at = options.iter().position(|o| o == correct).unwrap();
    options.push(NONE_OF_THE_ABOVE.to_string());
    (options, at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pool(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn five_options_with_tracked_index() {
        for seed in 0..64u64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (options, at) = assemble("Top", pool(&["Bottom", "Left", "Right", "Center"]), rng);
            assert!(options.len() == 5);
            assert!(options[at] == "Top");
            assert!(options[4] == NONE_OF_THE_ABOVE);
            assert!(at < 4);
        }
    }

    #[test]
    fn correct_never_duplicated() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let (options, _) = assemble("Top", pool(&["Top", "Bottom", "Left", "Right"]), rng);
        assert!(options.iter().filter(|o| *o == "Top").count() == 1);
    }

    #[test]
    fn nota_as_correct_takes_final_slot() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let (options, at) = assemble(
            NONE_OF_THE_ABOVE,
            pool(&["Top", "Bottom", "Left", "Right"]),
            rng,
        );
        assert!(options.len() == 5);
        assert!(at == 4);
        assert!(options[4] == NONE_OF_THE_ABOVE);
        assert!(options.iter().filter(|o| *o == NONE_OF_THE_ABOVE).count() == 1);
    }

    #[test]
    fn short_pools_get_synthesized_padding() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let (options, at) = assemble("Top", pool(&["Bottom"]), rng);
        assert!(options.len() == 5);
        assert!(options[at] == "Top");
        let mut unique = options.clone();
        unique.sort();
        unique.dedup();
        assert!(unique.len() == 5);
    }
}
