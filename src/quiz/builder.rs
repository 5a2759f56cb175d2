use super::category::Category;
use super::explain::dominance_prose;
use super::explain::ieds_prose;
use super::explain::induction_prose;
use super::explain::nash_prose;
use super::options::assemble;
use super::question::NO_NASH;
use super::question::NONE_OF_THE_ABOVE;
use super::question::Question;
use crate::analysis::Domination;
use crate::analysis::dominates;
use crate::analysis::dominations;
use crate::analysis::equilibria;
use crate::analysis::reduce;
use crate::game::Cell;
use crate::game::Matrix;
use crate::game::Player;
use crate::generate::Difficulty;
use crate::sequential::Sequential;
use crate::sequential::build;
use rand::Rng;

/// generate one question for the given matrix, drawing the category
/// uniformly from the difficulty's pool. hard questions reuse the
/// supplied sequential game when its first mover already matches.
pub fn question<R: Rng>(
    matrix: &Matrix,
    difficulty: Difficulty,
    sequential: Option<&Sequential>,
    rng: &mut R,
) -> Question {
    let category = Category::choose(difficulty, rng);
    of_category(matrix, difficulty, category, sequential, rng)
}

/// generate a question of a specific category. generators whose
/// analysis is degenerate for this matrix substitute an
/// always-answerable equilibrium question instead of failing.
pub fn of_category<R: Rng>(
    matrix: &Matrix,
    difficulty: Difficulty,
    category: Category,
    sequential: Option<&Sequential>,
    rng: &mut R,
) -> Question {
    match category {
        Category::FindDominated => find_dominated(matrix, difficulty, rng),
        Category::IedsSurvivors => ieds_survivors(matrix, difficulty, rng),
        Category::NashEquilibrium => nash_equilibrium(matrix, difficulty, rng),
        Category::SelectAllNash => select_all_nash(matrix, difficulty, rng),
        Category::ResidualGame => residual_game(matrix, difficulty, rng),
        Category::CountNash => count_nash(matrix, difficulty, rng),
        Category::TrueFalse => true_false(matrix, difficulty, rng),
        Category::WillingnessToPay => willingness_to_pay(matrix, difficulty, rng),
        Category::SequentialFirstMover => {
            outcome_question(matrix, difficulty, category, Player::A, sequential, rng)
        }
        Category::SequentialSecondMover => {
            outcome_question(matrix, difficulty, category, Player::B, sequential, rng)
        }
        Category::SequentialBestResponse => best_response(matrix, difficulty, sequential, rng),
        Category::ConsultingOffer => consulting_offer(matrix, difficulty, sequential, rng),
    }
}

/// sort and comma-join a list of answers into one option string
fn join(mut items: Vec<String>) -> String {
    items.sort();
    items.join(", ")
}

/// every 2-combination of the given answers, rendered like join()
fn pairs(items: &[String]) -> Vec<String> {
    let mut combos = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            combos.push(join(vec![items[i].clone(), items[j].clone()]));
        }
    }
    combos
}

fn all_labels(matrix: &Matrix) -> Vec<String> {
    matrix
        .labels(Player::A)
        .iter()
        .chain(matrix.labels(Player::B).iter())
        .map(|l| l.to_string())
        .collect()
}

fn cell_names(matrix: &Matrix) -> Vec<String> {
    matrix.cells().map(|c| matrix.cell_name(c)).collect()
}

/// a matrix game reused or rebuilt for the wanted first mover
fn sequential_for(matrix: &Matrix, first: Player, supplied: Option<&Sequential>) -> Sequential {
    match supplied {
        Some(game) if game.first == first => game.clone(),
        _ => build(matrix, first),
    }
}

fn find_dominated<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let report = dominations(matrix);
    let strict = report
        .iter()
        .filter(|d| d.strict)
        .map(|d| d.dominated.label.to_string())
        .collect::<Vec<_>>();
    let correct = match strict.is_empty() {
        true => NONE_OF_THE_ABOVE.to_string(),
        false => join(strict),
    };
    let mut pool = all_labels(matrix);
    pool.extend(pairs(&all_labels(matrix)));
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::FindDominated,
        difficulty,
        text: "Which of the following strategies are strictly dominated?".to_string(),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: dominance_prose(matrix, &report),
    }
}

fn ieds_survivors<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let reduction = reduce(matrix);
    let correct = join(
        reduction
            .surviving
            .iter()
            .map(|&c| matrix.cell_name(c))
            .collect(),
    );
    let eliminated = matrix
        .cells()
        .filter(|c| !reduction.surviving.contains(c))
        .map(|c| matrix.cell_name(c))
        .collect::<Vec<_>>();
    let mut pool = cell_names(matrix);
    pool.extend(pairs(&cell_names(matrix)));
    if !eliminated.is_empty() {
        pool.push(join(eliminated));
    }
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::IedsSurvivors,
        difficulty,
        text: "Which outcome cells survive iterated elimination of strictly dominated strategies?"
            .to_string(),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: ieds_prose(&reduction),
    }
}

fn nash_equilibrium<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let found = equilibria(matrix);
    let correct = match found.is_empty() {
        true => NONE_OF_THE_ABOVE.to_string(),
        false => join(found.iter().map(|eq| matrix.cell_name(eq.cell)).collect()),
    };
    let mut pool = cell_names(matrix);
    pool.extend(pairs(&cell_names(matrix)));
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::NashEquilibrium,
        difficulty,
        text: "Which cells are pure-strategy Nash equilibria of this game?".to_string(),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: nash_prose(matrix, &found),
    }
}

fn select_all_nash<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let found = equilibria(matrix);
    let mut options = cell_names(matrix);
    options.push(NO_NASH.to_string());
    let corrects = match found.is_empty() {
        true => vec![options.len() - 1],
        false => found
            .iter()
            .map(|eq| eq.cell.row * matrix.cols() + eq.cell.col)
            .collect(),
    };
    Question {
        id: Question::id(rng),
        category: Category::SelectAllNash,
        difficulty,
        text: "Select every cell that is a pure-strategy Nash equilibrium.".to_string(),
        options,
        correct: corrects[0],
        corrects: Some(corrects),
        multi: true,
        explanation: nash_prose(matrix, &found),
    }
}

/// the shape-and-labels description used by residual_game options
fn describe(matrix: &Matrix) -> String {
    format!(
        "A {}x{} game with rows {} and columns {}",
        matrix.rows(),
        matrix.cols(),
        matrix.labels(Player::A).join(", "),
        matrix.labels(Player::B).join(", "),
    )
}

fn residual_game<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let reduction = reduce(matrix);
    let correct = match (reduction.steps.is_empty(), &reduction.residual) {
        (true, _) => "The full original game".to_string(),
        (false, Some(residual)) => describe(residual),
        (false, None) => "No strategies survive".to_string(),
    };
    let mut pool = vec!["The full original game".to_string(), describe(matrix)];
    for r in 0..matrix.rows() {
        let keep = (0..matrix.rows()).filter(|&i| i != r).collect::<Vec<_>>();
        let every = (0..matrix.cols()).collect::<Vec<_>>();
        pool.push(describe(&matrix.restrict(&keep, &every)));
    }
    for c in 0..matrix.cols() {
        pool.push(describe(&matrix.without_col(c)));
    }
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::ResidualGame,
        difficulty,
        text: "What remains of the game after iterated elimination of strictly dominated strategies?"
            .to_string(),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: ieds_prose(&reduction),
    }
}

fn count_nash<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let found = equilibria(matrix);
    let correct = found.len().to_string();
    let pool = (0..=4usize)
        .filter(|&k| k != found.len())
        .map(|k| k.to_string())
        .collect();
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::CountNash,
        difficulty,
        text: "How many pure-strategy Nash equilibria does this game have?".to_string(),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: nash_prose(matrix, &found),
    }
}

fn true_false<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let (claim, truth, explanation) = match rng.random_range(0..3) {
        0 => domination_claim(matrix, rng),
        1 => nash_claim(matrix, rng),
        _ => payoff_claim(matrix, rng),
    };
    let options = vec![
        "True".to_string(),
        "False".to_string(),
        "It cannot be determined from the payoff matrix".to_string(),
        "It is only true if the game is repeated".to_string(),
        NONE_OF_THE_ABOVE.to_string(),
    ];
    Question {
        id: Question::id(rng),
        category: Category::TrueFalse,
        difficulty,
        text: format!("True or false: {}", claim),
        options,
        correct: if truth { 0 } else { 1 },
        corrects: None,
        multi: false,
        explanation,
    }
}

fn domination_claim<R: Rng>(matrix: &Matrix, rng: &mut R) -> (String, bool, String) {
    let player = match rng.random_bool(0.5) {
        true => Player::A,
        false => Player::B,
    };
    let n = matrix.len(player);
    let dominated = rng.random_range(0..n);
    let by = (dominated + 1 + rng.random_range(0..n - 1)) % n;
    let against = (0..matrix.len(player.other())).collect::<Vec<_>>();
    let truth = dominates(matrix, player, dominated, by, &against) == Some(true);
    let claim = format!(
        "\"{}\" strictly dominates \"{}\" for {}.",
        matrix.labels(player)[by],
        matrix.labels(player)[dominated],
        player,
    );
    let explanation = match truth {
        true => dominance_prose(
            matrix,
            &[Domination {
                dominated: matrix.strategy(player, dominated),
                by: matrix.strategy(player, by),
                strict: true,
            }],
        ),
        false => refute_domination(matrix, player, dominated, by),
    };
    (claim, truth, explanation)
}

/// name one opposing line where the claimed dominator fails to beat
/// the claimed victim
fn refute_domination(matrix: &Matrix, player: Player, dominated: usize, by: usize) -> String {
    let line = |own: usize, other: usize| match player {
        Player::A => matrix.at(own, other).a,
        Player::B => matrix.at(other, own).b,
    };
    let opposing = (0..matrix.len(player.other()))
        .find(|&o| line(by, o) <= line(dominated, o))
        .map(|o| {
            format!(
                "against \"{}\" it pays {} versus {}",
                matrix.labels(player.other())[o],
                line(by, o),
                line(dominated, o),
            )
        });
    match opposing {
        Some(counter) => format!(
            "\"{}\" does not strictly dominate \"{}\" for {}: {}.",
            matrix.labels(player)[by],
            matrix.labels(player)[dominated],
            player,
            counter,
        ),
        None => String::new(),
    }
}

fn nash_claim<R: Rng>(matrix: &Matrix, rng: &mut R) -> (String, bool, String) {
    let cell = Cell::from((
        rng.random_range(0..matrix.rows()),
        rng.random_range(0..matrix.cols()),
    ));
    let found = equilibria(matrix);
    let truth = found.iter().any(|eq| eq.cell == cell);
    let claim = format!("{} is a pure-strategy Nash equilibrium.", matrix.cell_name(cell));
    let explanation = match truth {
        true => nash_prose(
            matrix,
            &found
                .iter()
                .filter(|eq| eq.cell == cell)
                .copied()
                .collect::<Vec<_>>(),
        ),
        false => refute_nash(matrix, cell),
    };
    (claim, truth, explanation)
}

/// name the profitable deviation that breaks the equilibrium claim
fn refute_nash(matrix: &Matrix, cell: Cell) -> String {
    let here = matrix.at(cell.row, cell.col);
    let a = (0..matrix.rows()).find(|&r| matrix.at(r, cell.col).a > here.a);
    if let Some(r) = a {
        return format!(
            "{} is not an equilibrium: Player A would deviate to {} in column {} ({} > {}).",
            matrix.cell_name(cell),
            matrix.row_label(r),
            matrix.col_label(cell.col),
            matrix.at(r, cell.col).a,
            here.a,
        );
    }
    let b = (0..matrix.cols()).find(|&c| matrix.at(cell.row, c).b > here.b);
    match b {
        Some(c) => format!(
            "{} is not an equilibrium: Player B would deviate to {} in row {} ({} > {}).",
            matrix.cell_name(cell),
            matrix.col_label(c),
            matrix.row_label(cell.row),
            matrix.at(cell.row, c).b,
            here.b,
        ),
        None => String::new(),
    }
}

fn payoff_claim<R: Rng>(matrix: &Matrix, rng: &mut R) -> (String, bool, String) {
    let cell = Cell::from((
        rng.random_range(0..matrix.rows()),
        rng.random_range(0..matrix.cols()),
    ));
    let here = matrix.at(cell.row, cell.col);
    let truth = here.a > here.b;
    let claim = format!(
        "At {}, Player A earns more than Player B.",
        matrix.cell_name(cell),
    );
    let explanation = format!(
        "The payoffs at {} are {}: {} for Player A versus {} for Player B.",
        matrix.cell_name(cell),
        here,
        here.a,
        here.b,
    );
    (claim, truth, explanation)
}

fn willingness_to_pay<R: Rng>(matrix: &Matrix, difficulty: Difficulty, rng: &mut R) -> Question {
    let found = equilibria(matrix);
    let base = match found.first() {
        Some(eq) => eq,
        None => {
            log::debug!("willingness_to_pay needs an equilibrium, substituting nash_equilibrium");
            return nash_equilibrium(matrix, difficulty, rng);
        }
    };
    let col = rng.random_range(0..matrix.cols());
    let reduced = matrix.without_col(col);
    let (best, reached) = match equilibria(&reduced).first() {
        Some(eq) => (
            eq.payoff.a,
            format!("the reduced game settles at its equilibrium {}", reduced.cell_name(eq.cell)),
        ),
        None => (
            reduced
                .cells()
                .map(|c| reduced.at(c.row, c.col).a)
                .max()
                .unwrap_or(base.payoff.a),
            "the reduced game has no equilibrium, so Player A counts on its best attainable cell"
                .to_string(),
        ),
    };
    let gain = (best - base.payoff.a).max(0);
    let correct = gain.to_string();
    let pool = vec![
        0.to_string(),
        (gain + 1).to_string(),
        (gain + 2).to_string(),
        (best - base.payoff.a).abs().to_string(),
        base.payoff.a.to_string(),
        best.to_string(),
    ];
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::WillingnessToPay,
        difficulty,
        text: format!(
            "The game has settled into Nash equilibrium. What is the most Player A should pay to prohibit Player B from playing \"{}\"?",
            matrix.col_label(col),
        ),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: format!(
            "At the equilibrium {} Player A earns {}. With \"{}\" prohibited, {}, where Player A earns {}. The difference, never below zero, is {}.",
            matrix.cell_name(base.cell),
            base.payoff.a,
            matrix.col_label(col),
            reached,
            best,
            gain,
        ),
    }
}

/// the outcome option text shared by the sequential categories
fn outcome_name(matrix: &Matrix, cell: Cell) -> String {
    format!(
        "{} with payoffs {}",
        matrix.cell_name(cell),
        matrix.at(cell.row, cell.col),
    )
}

fn outcome_question<R: Rng>(
    matrix: &Matrix,
    difficulty: Difficulty,
    category: Category,
    first: Player,
    sequential: Option<&Sequential>,
    rng: &mut R,
) -> Question {
    let game = sequential_for(matrix, first, sequential);
    let correct = outcome_name(matrix, game.outcome);
    let pool = matrix
        .cells()
        .filter(|&c| c != game.outcome)
        .map(|c| outcome_name(matrix, c))
        .collect();
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category,
        difficulty,
        text: format!(
            "{} moves first; {} observes the choice and responds. Which outcome does backward induction select?",
            first,
            first.other(),
        ),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: induction_prose(&game),
    }
}

fn best_response<R: Rng>(
    matrix: &Matrix,
    difficulty: Difficulty,
    sequential: Option<&Sequential>,
    rng: &mut R,
) -> Question {
    let asked = match rng.random_bool(0.5) {
        true => Player::A,
        false => Player::B,
    };
    let first = asked.other();
    let game = sequential_for(matrix, first, sequential);
    let correct = game.path[1].to_string();
    let opening = matrix
        .labels(first)
        .iter()
        .position(|&l| l == game.path[0])
        .expect("path opens with a first-mover label");
    let replies = (0..matrix.len(asked))
        .map(|s| {
            let cell = match first {
                Player::A => Cell::from((opening, s)),
                Player::B => Cell::from((s, opening)),
            };
            format!(
                "replying \"{}\" pays {} {}",
                matrix.labels(asked)[s],
                asked,
                matrix.at(cell.row, cell.col).of(asked),
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let pool = all_labels(matrix);
    let (options, at) = assemble(&correct, pool, rng);
    Question {
        id: Question::id(rng),
        category: Category::SequentialBestResponse,
        difficulty,
        text: format!(
            "{} moves first and, on the equilibrium path, plays \"{}\". Which strategy is {}'s best response?",
            first, game.path[0], asked,
        ),
        options,
        correct: at,
        corrects: None,
        multi: false,
        explanation: format!(
            "After \"{}\", {}: the best reply is \"{}\".",
            game.path[0], replies, correct,
        ),
    }
}

fn consulting_offer<R: Rng>(
    matrix: &Matrix,
    difficulty: Difficulty,
    sequential: Option<&Sequential>,
    rng: &mut R,
) -> Question {
    let found = equilibria(matrix);
    let base = match found.first() {
        Some(eq) => eq,
        None => {
            log::debug!("consulting_offer needs an equilibrium, substituting nash_equilibrium");
            return nash_equilibrium(matrix, difficulty, rng);
        }
    };
    let a_first = sequential_for(matrix, Player::A, sequential);
    let b_first = sequential_for(matrix, Player::B, sequential);
    let reward = |game: &Sequential, player: Player| {
        matrix.at(game.outcome.row, game.outcome.col).of(player)
    };
    let gain_a = reward(&a_first, Player::A) - base.payoff.a;
    let gain_b = reward(&b_first, Player::B) - base.payoff.b;
    let options = vec![
        "Offer to help Player A move first".to_string(),
        "Offer to help Player B move first".to_string(),
        "Offer help to neither player".to_string(),
        "Offer to help both players move first".to_string(),
        NONE_OF_THE_ABOVE.to_string(),
    ];
    let (correct, verdict) = match (gain_a.max(gain_b) <= 0, gain_a >= gain_b) {
        (true, _) => (2, "help neither player"),
        (false, true) => (0, "help Player A move first"),
        (false, false) => (1, "help Player B move first"),
    };
    Question {
        id: Question::id(rng),
        category: Category::ConsultingOffer,
        difficulty,
        text: "A consultant can rearrange the game so that one player commits to a strategy first. Which offer is worth making?"
            .to_string(),
        options,
        correct,
        corrects: None,
        multi: false,
        explanation: format!(
            "The simultaneous game settles at {} with payoffs {}. Moving first, Player A would reach {} for a gain of {}; Player B would reach {} for a gain of {}. The most profitable non-negative offer is to {}.",
            matrix.cell_name(base.cell),
            base.payoff,
            outcome_name(matrix, a_first.outcome),
            gain_a,
            outcome_name(matrix, b_first.outcome),
            gain_b,
            verdict,
        ),
    }
}
