//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices. Parents own their children through
//! index lists; the parent index on each child is only used to walk back
//! up during backpropagation.

use engine_core::{Game, Outcome};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<G: Game> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<G>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<G: Game> MctsTree<G> {
    /// Create a new tree holding only the root state.
    pub fn new(root_state: G) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<G> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<G> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: MctsNode<G>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<G>] {
        &self.nodes
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: G::Move, state: G) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, action, state));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Find the child of `parent_id` whose state equals `state`.
    ///
    /// Children are keyed by their resulting state. A node has at most one
    /// child per legal move, so a scan of the index list is the lookup.
    pub fn child_with_state(&self, parent_id: NodeId, state: &G) -> Option<NodeId> {
        self.get(parent_id)
            .children
            .iter()
            .copied()
            .find(|&id| self.get(id).state == *state)
    }

    /// Select the child of a node using UCT.
    ///
    /// - A parent that has never been visited has no statistics to rank by,
    ///   so a child is drawn uniformly at random.
    /// - Otherwise the first unvisited child in creation order wins outright.
    /// - Otherwise the child with the highest UCB score wins, ties going to
    ///   the first one encountered.
    ///
    /// Returns `None` only when the node has no children.
    pub fn select_child(
        &self,
        node_id: NodeId,
        exploration_constant: f64,
        rng: &mut ChaCha20Rng,
    ) -> Option<NodeId> {
        let node = self.get(node_id);

        if node.visit_count == 0 {
            return node.children.choose(rng).copied();
        }

        // Pre-compute ln once instead of per-child comparison
        let ln_parent_visits = (node.visit_count as f64).ln();
        let mut best: Option<(NodeId, f64)> = None;

        for &child_id in &node.children {
            let child = self.get(child_id);
            if child.visit_count == 0 {
                return Some(child_id);
            }

            let score = child.ucb_score(ln_parent_visits, exploration_constant);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Backpropagate a playout outcome from a node up to the root.
    ///
    /// Every node on the path gains one visit. A node gains a win only when
    /// the outcome favors its parent's side to move, i.e. the player whose
    /// move created the node. Draws credit nobody and the root, having no
    /// mover, is never credited.
    pub fn backpropagate(&mut self, leaf_id: NodeId, outcome: Outcome<G::Player>) {
        let mut current = Some(leaf_id);

        while let Some(node_id) = current {
            let parent = self.get(node_id).parent;
            let credited = parent
                .map(|parent_id| outcome.favors(self.get(parent_id).state.side_to_move()))
                .unwrap_or(false);

            let node = self.get_mut(node_id);
            node.visit_count += 1;
            if credited {
                node.win_count += 1;
            }

            current = parent;
        }
    }

    /// Pick the root child with the highest win rate.
    ///
    /// Unvisited children count as a 0.0 win rate. Equal win rates go to
    /// the child with more visits, so an unvisited child never beats a
    /// visited one, and remaining ties go to the first child encountered.
    /// Returns `None` if the root has no children.
    pub fn best_child(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64, u32)> = None;

        for &child_id in &self.get(self.root).children {
            let child = self.get(child_id);
            let rate = child.win_rate();
            let better = match best {
                None => true,
                Some((_, best_rate, best_visits)) => {
                    rate > best_rate || (rate == best_rate && child.visit_count > best_visits)
                }
            };
            if better {
                best = Some((child_id, rate, child.visit_count));
            }
        }

        best.map(|(id, _, _)| id)
    }

    /// Move leading to the best root child, see [`MctsTree::best_child`].
    pub fn best_action(&self) -> Option<G::Move> {
        self.best_child().and_then(|id| self.get(id).action)
    }

    /// Per-move statistics of the root's children, in creation order.
    pub fn root_children(&self) -> Vec<ChildStats<G::Move>> {
        self.get(self.root)
            .children
            .iter()
            .filter_map(|&id| {
                let child = self.get(id);
                child.action.map(|action| ChildStats {
                    action,
                    visits: child.visit_count,
                    wins: child.win_count,
                })
            })
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: self.get(self.root).visit_count,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        self.get(node_id)
            .children
            .iter()
            .map(|&id| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Visit and win counts of one root child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildStats<M> {
    pub action: M,
    pub visits: u32,
    pub wins: u32,
}

impl<M> ChildStats<M> {
    /// Fraction of visits won, 0.0 if never visited.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub max_depth: u32,
}
