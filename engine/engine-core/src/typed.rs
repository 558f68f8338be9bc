//! Typed Game trait for deterministic, perfect-information two-player games
//!
//! States are plain values: every query takes `&self` and every transition
//! returns a fresh state, so a search can keep one canonical copy per tree node
//! and hand private copies to each phase without save/restore bookkeeping.

use std::fmt::Debug;
use std::hash::Hash;

use crate::outcome::Outcome;

/// Main trait for game implementations
///
/// Implementors are the game *state*: one board position plus the side to move.
/// Equality and hashing must be structural because states are used as keys
/// when a search deduplicates children.
///
/// # Example
///
/// ```rust
/// # use engine_core::{Game, Outcome};
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Pick {
///     taken: [Option<u8>; 2],
///     to_move: u8,
/// }
///
/// #[derive(Debug)]
/// struct Taken;
///
/// impl std::fmt::Display for Taken {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "cell taken")
///     }
/// }
///
/// impl std::error::Error for Taken {}
///
/// impl Game for Pick {
///     type Move = usize;
///     type Player = u8;
///     type Error = Taken;
///
///     fn side_to_move(&self) -> u8 { self.to_move }
///     fn opponent(player: u8) -> u8 { 1 - player }
///     fn legal_moves(&self) -> Vec<usize> {
///         (0..2).filter(|&i| self.taken[i].is_none()).collect()
///     }
///     fn apply(&self, mv: usize, player: u8) -> Result<Self, Taken> {
///         let mut next = *self;
///         match next.taken.get_mut(mv) {
///             Some(slot) if slot.is_none() => *slot = Some(player),
///             _ => return Err(Taken),
///         }
///         Ok(next)
///     }
///     fn with_side_to_move(&self, player: u8) -> Self {
///         Self { to_move: player, ..*self }
///     }
///     fn winner(&self) -> Option<u8> { self.taken[0] }
///     fn is_full(&self) -> bool { self.taken.iter().all(Option::is_some) }
/// }
///
/// let start = Pick { taken: [None, None], to_move: 0 };
/// let next = start.play(0).unwrap();
/// assert_eq!(next.outcome(), Some(Outcome::Win(0)));
/// ```
pub trait Game: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Move type - small and Copy (a cell index for board games)
    type Move: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Side identifier
    type Player: Copy + Eq + Debug + Send + Sync + 'static;

    /// Error returned when a move cannot be applied
    type Error: std::error::Error + Send + Sync + 'static;

    /// The side whose turn it is in this state
    fn side_to_move(&self) -> Self::Player;

    /// The other side
    fn opponent(player: Self::Player) -> Self::Player;

    /// All legal moves, enumerated in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Place `player`'s mark with `mv`, leaving the side to move unchanged.
    ///
    /// Fails without touching `self` if the move is not legal in this state.
    fn apply(&self, mv: Self::Move, player: Self::Player) -> Result<Self, Self::Error>;

    /// Copy of this state with a different side to move
    fn with_side_to_move(&self, player: Self::Player) -> Self;

    /// The side owning a completed line, if any
    fn winner(&self) -> Option<Self::Player>;

    /// True when no empty cell remains
    fn is_full(&self) -> bool;

    /// A state is terminal once it has a winner or the board is full.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Decided result of a terminal state, `None` while play continues.
    fn outcome(&self) -> Option<Outcome<Self::Player>> {
        match self.winner() {
            Some(player) => Some(Outcome::Win(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Play `mv` for the side to move and pass the turn to the opponent.
    fn play(&self, mv: Self::Move) -> Result<Self, Self::Error> {
        let mover = self.side_to_move();
        Ok(self
            .apply(mv, mover)?
            .with_side_to_move(Self::opponent(mover)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three cells in a row; whoever claims two of them first wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Claim {
        cells: [Option<bool>; 3],
        to_move: bool,
    }

    #[derive(Debug, PartialEq)]
    struct Unavailable(usize);

    impl std::fmt::Display for Unavailable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "cell {} unavailable", self.0)
        }
    }

    impl std::error::Error for Unavailable {}

    impl Game for Claim {
        type Move = usize;
        type Player = bool;
        type Error = Unavailable;

        fn side_to_move(&self) -> bool {
            self.to_move
        }

        fn opponent(player: bool) -> bool {
            !player
        }

        fn legal_moves(&self) -> Vec<usize> {
            (0..3).filter(|&i| self.cells[i].is_none()).collect()
        }

        fn apply(&self, mv: usize, player: bool) -> Result<Self, Unavailable> {
            let mut next = *self;
            match next.cells.get_mut(mv) {
                Some(cell) if cell.is_none() => *cell = Some(player),
                _ => return Err(Unavailable(mv)),
            }
            Ok(next)
        }

        fn with_side_to_move(&self, player: bool) -> Self {
            Self {
                to_move: player,
                ..*self
            }
        }

        fn winner(&self) -> Option<bool> {
            [true, false]
                .into_iter()
                .find(|&p| self.cells.iter().filter(|c| **c == Some(p)).count() >= 2)
        }

        fn is_full(&self) -> bool {
            self.cells.iter().all(Option::is_some)
        }
    }

    fn start() -> Claim {
        Claim {
            cells: [None; 3],
            to_move: true,
        }
    }

    #[test]
    fn test_play_switches_side() {
        let next = start().play(1).unwrap();
        assert_eq!(next.cells[1], Some(true));
        assert!(!next.side_to_move());
    }

    #[test]
    fn test_apply_keeps_side() {
        let next = start().apply(2, false).unwrap();
        assert_eq!(next.cells[2], Some(false));
        assert!(next.side_to_move());
    }

    #[test]
    fn test_illegal_apply_leaves_state_untouched() {
        let state = start().play(0).unwrap();
        let copy = state;
        assert_eq!(state.play(0), Err(Unavailable(0)));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_outcome() {
        let state = start();
        assert_eq!(state.outcome(), None);
        assert!(!state.is_terminal());

        let won = state.play(0).unwrap().play(1).unwrap().play(2).unwrap();
        assert_eq!(won.winner(), Some(true));
        assert_eq!(won.outcome(), Some(Outcome::Win(true)));
        assert!(won.is_terminal());
    }
}
