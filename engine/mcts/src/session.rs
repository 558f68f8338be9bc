//! Live game wrapper used by whatever drives the engine (a UI, the arena).
//!
//! A [`GameSession`] owns the current position and the randomness source.
//! Moves from outside are checked and recorded, and the engine answers
//! with a fresh search from the live position every time.

use engine_core::{Game, Outcome};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::MctsConfig;
use crate::search::{run_mcts, SearchError, SearchResult};

/// Errors surfaced to the caller of a [`GameSession`]. None of them leave
/// the session in a changed state.
#[derive(Debug, Error)]
pub enum SessionError<G: Game> {
    #[error("illegal move: {0}")]
    IllegalMove(#[source] G::Error),

    #[error("the game is already decided")]
    GameOver,

    #[error("{got:?} played out of turn, {expected:?} is to move")]
    OutOfTurn { expected: G::Player, got: G::Player },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A game in progress plus the engine that plays it.
#[derive(Debug, Clone)]
pub struct GameSession<G: Game> {
    initial: G,
    state: G,
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl<G: Game> GameSession<G> {
    /// Start a session from `initial`, seeding the engine from OS entropy.
    pub fn new(initial: G, config: MctsConfig) -> Self {
        Self::with_rng(initial, config, ChaCha20Rng::from_entropy())
    }

    /// Start a session with a reproducible engine.
    pub fn with_seed(initial: G, config: MctsConfig, seed: u64) -> Self {
        Self::with_rng(initial, config, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(initial: G, config: MctsConfig, rng: ChaCha20Rng) -> Self {
        Self {
            state: initial.clone(),
            initial,
            config,
            rng,
        }
    }

    /// Record a move made by `player` and pass the turn to the opponent.
    pub fn record_move(&mut self, mv: G::Move, player: G::Player) -> Result<(), SessionError<G>> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver);
        }

        let expected = self.state.side_to_move();
        if player != expected {
            return Err(SessionError::OutOfTurn {
                expected,
                got: player,
            });
        }

        let next = self
            .state
            .apply(mv, player)
            .map_err(SessionError::IllegalMove)?;
        self.state = next.with_side_to_move(G::opponent(player));

        debug!(?mv, ?player, "Move recorded");
        Ok(())
    }

    /// Search the live position with `iterations` iterations and return
    /// the recommended move without playing it.
    ///
    /// Returns `Ok(None)` when no move is available: the game is decided,
    /// or the budget was too small to expand any child.
    pub fn choose_move(&mut self, iterations: u32) -> Result<Option<G::Move>, SessionError<G>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        let config = self.config.clone().with_iterations(iterations);
        let result = run_mcts(self.state.clone(), config, &mut self.rng)?;
        Ok(result.best_move)
    }

    /// Full search of the live position with the session's configuration.
    pub fn search(&mut self) -> Result<SearchResult<G::Move>, SessionError<G>> {
        Ok(run_mcts(self.state.clone(), self.config.clone(), &mut self.rng)?)
    }

    /// Let the engine move for the side to move. Returns the move played,
    /// or `None` if there was nothing to play.
    pub fn engine_move(&mut self) -> Result<Option<G::Move>, SessionError<G>> {
        let player = self.state.side_to_move();
        let Some(mv) = self.choose_move(self.config.iterations)? else {
            return Ok(None);
        };

        self.record_move(mv, player)?;
        Ok(Some(mv))
    }

    pub fn winner(&self) -> Option<G::Player> {
        self.state.winner()
    }

    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    /// True once there is a winner or the board is full.
    pub fn is_decided(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn outcome(&self) -> Option<Outcome<G::Player>> {
        self.state.outcome()
    }

    pub fn side_to_move(&self) -> G::Player {
        self.state.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<G::Move> {
        self.state.legal_moves()
    }

    pub fn state(&self) -> &G {
        &self.state
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Go back to the position the session started from.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    /// Restart from a new position.
    pub fn reset_to(&mut self, initial: G) {
        self.state = initial.clone();
        self.initial = initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_tictactoe::{IllegalMoveError, Player, TicTacToe};

    fn session() -> GameSession<TicTacToe> {
        GameSession::with_seed(TicTacToe::new(), MctsConfig::for_testing(), 42)
    }

    #[test]
    fn test_record_move_passes_turn() {
        let mut game = session();
        game.record_move(4, Player::X).unwrap();

        assert_eq!(game.side_to_move(), Player::O);
        assert_eq!(game.legal_moves().len(), 8);
        assert!(!game.legal_moves().contains(&4));
    }

    #[test]
    fn test_record_move_out_of_turn() {
        let mut game = session();
        let err = game.record_move(4, Player::O).unwrap_err();

        assert!(matches!(
            err,
            SessionError::OutOfTurn {
                expected: Player::X,
                got: Player::O
            }
        ));
        assert_eq!(err.to_string(), "O played out of turn, X is to move");
        assert_eq!(*game.state(), TicTacToe::new());
    }

    #[test]
    fn test_record_move_illegal() {
        let mut game = session();
        game.record_move(0, Player::X).unwrap();
        let before = *game.state();

        let err = game.record_move(0, Player::O).unwrap_err();
        assert!(matches!(
            err,
            SessionError::IllegalMove(IllegalMoveError::Occupied {
                position: 0,
                occupant: Player::X
            })
        ));
        assert_eq!(*game.state(), before);

        let err = game.record_move(9, Player::O).unwrap_err();
        assert!(matches!(
            err,
            SessionError::IllegalMove(IllegalMoveError::OutOfRange { .. })
        ));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn test_record_move_after_game_over() {
        let mut game = session();
        for (position, player) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ] {
            game.record_move(position, player).unwrap();
        }

        assert_eq!(game.winner(), Some(Player::X));
        assert!(game.is_decided());
        assert!(!game.is_full());
        assert_eq!(game.outcome(), Some(Outcome::Win(Player::X)));

        assert!(matches!(
            game.record_move(5, Player::O),
            Err(SessionError::GameOver)
        ));
        assert_eq!(game.choose_move(100).unwrap(), None);
        assert_eq!(game.engine_move().unwrap(), None);
    }

    #[test]
    fn test_choose_move_does_not_play() {
        let mut game = session();
        game.record_move(0, Player::X).unwrap();
        let before = *game.state();

        let mv = game.choose_move(100).unwrap().unwrap();
        assert!(before.legal_moves().contains(&mv));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn test_choose_move_takes_the_win() {
        let state = TicTacToe::parse("XX. / OO. / ...", Player::X).unwrap();
        let mut game = GameSession::with_seed(state, MctsConfig::default(), 7);

        assert_eq!(game.choose_move(500).unwrap(), Some(2));
    }

    #[test]
    fn test_engine_move_plays_for_side_to_move() {
        let mut game = session();
        game.record_move(4, Player::X).unwrap();

        let mv = game.engine_move().unwrap().unwrap();
        assert_eq!(game.state().cell(mv).and_then(|m| m.player()), Some(Player::O));
        assert_eq!(game.side_to_move(), Player::X);
    }

    #[test]
    fn test_engine_vs_engine_finishes() {
        let mut game = session();
        let mut plies = 0;

        while !game.is_decided() {
            assert!(game.engine_move().unwrap().is_some());
            plies += 1;
        }

        assert!(plies <= 9);
        assert!(game.winner().is_some() || game.is_full());
        assert_eq!(game.engine_move().unwrap(), None);
    }

    #[test]
    fn test_search_uses_configured_iterations() {
        let mut game = session();
        let result = game.search().unwrap();

        assert_eq!(result.iterations, game.config().iterations);
        assert_eq!(result.root_visits, 200);
    }

    #[test]
    fn test_reset() {
        let mut game = session();
        game.record_move(4, Player::X).unwrap();
        game.reset();
        assert_eq!(*game.state(), TicTacToe::new());

        let start = TicTacToe::new().with_side_to_move(Player::O);
        game.reset_to(start);
        assert_eq!(game.side_to_move(), Player::O);

        game.record_move(0, Player::O).unwrap();
        game.reset();
        assert_eq!(*game.state(), start);
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = session();
        let mut b = session();

        for _ in 0..3 {
            assert_eq!(a.engine_move().unwrap(), b.engine_move().unwrap());
        }
        assert_eq!(a.state(), b.state());
    }
}
