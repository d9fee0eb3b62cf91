use parking_lot::RwLock;

use crate::state::game::Match;

/// Index of a node inside [`RankingTree::nodes`].
type NodeIndex = usize;

#[derive(Debug)]
struct Node {
    game: Match,
    /// Subtree of matches whose total is at least this node's total.
    higher_or_equal: Option<NodeIndex>,
    /// Subtree of matches whose total is strictly below this node's total.
    lower: Option<NodeIndex>,
}

/// Unbalanced binary search tree over total score, stored as an arena.
///
/// The root lives at index 0. Nodes are never moved or removed, so indices stay valid for
/// the lifetime of the tree.
#[derive(Debug, Default)]
struct RankingTree {
    nodes: Vec<Node>,
}

impl RankingTree {
    fn insert(&mut self, game: Match) {
        let index = self.nodes.len();
        let total = game.total_score();

        if !self.nodes.is_empty() {
            let mut current = 0;
            loop {
                let node = &mut self.nodes[current];
                // Ties go to the higher side, which the traversal visits first: the newer
                // match ends up ranked ahead of the older one.
                let slot = if total >= node.game.total_score() {
                    &mut node.higher_or_equal
                } else {
                    &mut node.lower
                };
                match *slot {
                    Some(next) => current = next,
                    None => {
                        *slot = Some(index);
                        break;
                    }
                }
            }
        }

        self.nodes.push(Node {
            game,
            higher_or_equal: None,
            lower: None,
        });
    }

    /// In-order walk: higher-or-equal subtree, node, lower subtree.
    fn ranked(&self) -> Vec<Match> {
        let mut ranked = Vec::with_capacity(self.nodes.len());
        let mut pending = Vec::new();
        let mut cursor = (!self.nodes.is_empty()).then_some(0);

        loop {
            while let Some(index) = cursor {
                pending.push(index);
                cursor = self.nodes[index].higher_or_equal;
            }
            let Some(index) = pending.pop() else {
                break;
            };
            let node = &self.nodes[index];
            ranked.push(node.game.clone());
            cursor = node.lower;
        }

        ranked
    }
}

/// Finished matches, kept forever and listed by descending total score.
///
/// Among equal totals the most recently inserted match comes first. The whole tree sits
/// behind one reader-writer lock: inserts are exclusive, listings may overlap each other.
#[derive(Debug, Default)]
pub struct RankingStore {
    tree: RwLock<RankingTree>,
}

impl RankingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a finished match and place it in the ranking.
    pub fn insert(&self, game: Match) {
        self.tree.write().insert(game);
    }

    /// Every finished match in ranked order.
    pub fn list(&self) -> Vec<Match> {
        self.tree.read().ranked()
    }

    /// Number of finished matches.
    pub fn len(&self) -> usize {
        self.tree.read().nodes.len()
    }

    /// Whether no match has finished yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
