use super::node::Decision;
use super::node::Edge;
use super::node::GameNode;
use super::node::Leaf;
use crate::game::Cell;
use crate::game::Matrix;
use crate::game::Payoff;
use crate::game::Player;
use serde::Serialize;

/// a simultaneous-move matrix recast as a two-level extensive-form
/// game: the first mover commits, the second mover observes and
/// responds. rebuilt whole on any matrix or first-mover change,
/// since the tree shape depends on which axis is outer.
#[derive(Debug, Clone, Serialize)]
pub struct Sequential {
    pub matrix: Matrix,
    pub tree: Decision,
    pub first: Player,
    pub path: Vec<&'static str>,
    pub outcome: Cell,
}

impl Sequential {
    /// the second mover's best reply to each possible opening, with
    /// the payoff pair that reply realizes. same tie-break as the
    /// solver: first reply wins.
    pub fn replies(&self) -> Vec<(&'static str, &'static str, Payoff)> {
        self.tree
            .edges
            .iter()
            .map(|edge| {
                let inner = match &edge.child {
                    GameNode::Decision(inner) => inner,
                    GameNode::Leaf(_) => panic!("tree depth is fixed at two"),
                };
                let mut best: Option<(&'static str, Payoff)> = None;
                for reply in inner.edges.iter() {
                    let payoff = match &reply.child {
                        GameNode::Leaf(leaf) => leaf.payoff,
                        GameNode::Decision(_) => panic!("tree depth is fixed at two"),
                    };
                    let better = match &best {
                        None => true,
                        Some((_, incumbent)) => {
                            payoff.of(inner.player) > incumbent.of(inner.player)
                        }
                    };
                    if better {
                        best = Some((reply.label, payoff));
                    }
                }
                let (label, payoff) = best.expect("decision nodes have edges");
                (edge.label, label, payoff)
            })
            .collect()
    }
}

/// map (first-mover index, second-mover index) onto (row, col)
fn locate(first: Player, outer: usize, inner: usize) -> Cell {
    match first {
        Player::A => Cell::from((outer, inner)),
        Player::B => Cell::from((inner, outer)),
    }
}

/// the solved value of a subtree for backward induction: the payoff
/// pair that will be realized, and the leaf it lives at.
fn solve(node: &GameNode) -> (Payoff, &Leaf, Vec<&'static str>) {
    match node {
        GameNode::Leaf(leaf) => (leaf.payoff, leaf, vec![]),
        GameNode::Decision(decision) => {
            let mut best: Option<(Payoff, &Leaf, Vec<&'static str>)> = None;
            for edge in decision.edges.iter() {
                let (payoff, leaf, mut path) = solve(&edge.child);
                path.insert(0, edge.label);
                // ties go to the earliest edge, hence strict >
                let better = match &best {
                    None => true,
                    Some((incumbent, _, _)) => {
                        payoff.of(decision.player) > incumbent.of(decision.player)
                    }
                };
                if better {
                    best = Some((payoff, leaf, path));
                }
            }
            match best {
                Some(solved) => solved,
                None => panic!("decision node {} has no edges", decision.id),
            }
        }
    }
}

/// build the tree for a given first mover and solve it by backward
/// induction. leaves keep their matrix-cell identity either way.
pub fn build(matrix: &Matrix, first: Player) -> Sequential {
    let second = first.other();
    let edges = matrix
        .labels(first)
        .iter()
        .enumerate()
        .map(|(outer, &label)| Edge {
            label,
            child: GameNode::Decision(Decision {
                id: format!("after-{}", label),
                player: second,
                edges: matrix
                    .labels(second)
                    .iter()
                    .enumerate()
                    .map(|(inner, &reply)| {
                        let cell = locate(first, outer, inner);
                        Edge {
                            label: reply,
                            child: GameNode::Leaf(Leaf::new(
                                cell,
                                matrix.at(cell.row, cell.col),
                            )),
                        }
                    })
                    .collect(),
            }),
        })
        .collect();
    let tree = Decision {
        id: "root".to_string(),
        player: first,
        edges,
    };
    let root = GameNode::Decision(tree.clone());
    let (_, leaf, path) = solve(&root);
    assert!(path.len() == 2);
    Sequential {
        matrix: matrix.clone(),
        tree,
        first,
        path,
        outcome: leaf.cell(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::matrix::tests::matrix_of;

    #[test]
    fn tree_shape_follows_first_mover() {
        let m = matrix_of(vec![
            vec![(1, 1), (2, 2), (3, 3)],
            vec![(4, 4), (5, 5), (6, 6)],
        ]);
        let a_first = build(&m, Player::A);
        assert!(a_first.tree.player == Player::A);
        assert!(a_first.tree.edges.len() == 2);
        let b_first = build(&m, Player::B);
        assert!(b_first.tree.player == Player::B);
        assert!(b_first.tree.edges.len() == 3);
    }

    #[test]
    fn leaves_keep_cell_identity_either_way() {
        let m = matrix_of(vec![vec![(1, 1), (2, 2)], vec![(3, 3), (4, 4)]]);
        for first in [Player::A, Player::B] {
            let game = build(&m, first);
            for edge in game.tree.edges.iter() {
                if let GameNode::Decision(inner) = &edge.child {
                    for reply in inner.edges.iter() {
                        if let GameNode::Leaf(leaf) = &reply.child {
                            let cell = leaf.cell();
                            assert!(leaf.payoff == m.at(cell.row, cell.col));
                            assert!(leaf.id == format!("leaf-{}-{}", cell.row, cell.col));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn first_mover_anticipates_replies() {
        // if A plays Top, B prefers Left and A nets 5; if A plays
        // Bottom, B prefers Right and A nets 3. A must open Top.
        let m = matrix_of(vec![vec![(5, 4), (9, 1)], vec![(3, 2), (3, 3)]]);
        let game = build(&m, Player::A);
        assert!(game.path == vec!["Top", "Left"]);
        assert!(game.outcome == Cell::from((0, 0)));
    }

    #[test]
    fn second_mover_maximizes_own_component() {
        // B first. against Left, A's best is Bottom (4 > 1); against
        // Right, A's best is Top (2 > 0). B compares its own payoffs
        // at those anticipated outcomes: 3 under Left vs 8 under Right.
        let m = matrix_of(vec![vec![(1, 6), (2, 8)], vec![(4, 3), (0, 5)]]);
        let game = build(&m, Player::B);
        assert!(game.path == vec!["Right", "Top"]);
        assert!(game.outcome == Cell::from((0, 1)));
    }

    #[test]
    fn ties_break_to_lowest_index() {
        // B is indifferent everywhere; the first reply must win
        let m = matrix_of(vec![vec![(2, 1), (3, 1)], vec![(2, 1), (1, 1)]]);
        let game = build(&m, Player::A);
        assert!(game.path[1] == "Left");
        // A is then indifferent between Top and Bottom at 2; Top wins
        assert!(game.path[0] == "Top");
        assert!(game.outcome == Cell::from((0, 0)));
    }

    #[test]
    fn outcome_matches_path_retrace() {
        let m = matrix_of(vec![
            vec![(3, 2), (1, 1), (0, 4)],
            vec![(2, 3), (4, 0), (1, 1)],
            vec![(0, 1), (2, 2), (5, 0)],
        ]);
        for first in [Player::A, Player::B] {
            let game = build(&m, first);
            let opening = game
                .tree
                .edges
                .iter()
                .find(|e| e.label == game.path[0])
                .unwrap();
            let inner = match &opening.child {
                GameNode::Decision(inner) => inner,
                GameNode::Leaf(_) => panic!("tree must have two levels"),
            };
            let reply = inner.edges.iter().find(|e| e.label == game.path[1]).unwrap();
            let leaf = match &reply.child {
                GameNode::Leaf(leaf) => leaf,
                GameNode::Decision(_) => panic!("tree must have two levels"),
            };
            assert!(leaf.cell() == game.outcome);
        }
    }
}
