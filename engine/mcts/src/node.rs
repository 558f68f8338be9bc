//! MCTS tree node representation.
//!
//! Each node represents a game state reached by playing a move from the parent.
//! Nodes store the visit and win counts used for UCT selection.

use engine_core::Game;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<G: Game> {
    /// Parent node index (`None` for the root)
    pub parent: Option<NodeId>,

    /// Move that led to this node from the parent (`None` for the root)
    pub action: Option<G::Move>,

    /// Game state at this node, after the move and the turn switch
    pub state: G,

    /// Number of iterations that passed through this node
    pub visit_count: u32,

    /// Playouts won by the player who made `action`.
    /// Never exceeds `visit_count`.
    pub win_count: u32,

    /// Child nodes in creation order. Grows by one per expansion.
    pub children: Vec<NodeId>,

    /// Number of legal moves from `state`
    pub legal_move_count: usize,

    /// Whether `state` has a winner or a full board
    pub is_terminal: bool,
}

impl<G: Game> MctsNode<G> {
    /// Create a new root node.
    pub fn new_root(state: G) -> Self {
        Self::build(None, None, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: G::Move, state: G) -> Self {
        Self::build(Some(parent), Some(action), state)
    }

    fn build(parent: Option<NodeId>, action: Option<G::Move>, state: G) -> Self {
        let legal_move_count = state.legal_moves().len();
        let is_terminal = state.is_terminal();
        Self {
            parent,
            action,
            state,
            visit_count: 0,
            win_count: 0,
            children: Vec::new(),
            legal_move_count,
            is_terminal,
        }
    }

    /// Fraction of visits won by the mover, 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.win_count as f64 / self.visit_count as f64
        }
    }

    /// UCB1 score used when the parent picks among its children.
    ///
    /// UCB = win_rate + c * sqrt(ln(N_parent) / N_child)
    ///
    /// Unvisited children score `f64::INFINITY` so they are always tried
    /// before any visited sibling.
    ///
    /// Takes pre-computed ln(parent_visits) to avoid redundant logarithms
    /// when comparing multiple children.
    #[inline]
    pub fn ucb_score(&self, ln_parent_visits: f64, exploration_constant: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let visits = self.visit_count as f64;
        self.win_rate() + exploration_constant * (ln_parent_visits / visits).sqrt()
    }

    /// True once every legal move from this state has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.children.len() == self.legal_move_count
    }

    /// Check if this is a leaf for selection (terminal or still expandable).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_terminal || !self.is_fully_expanded()
    }
}
