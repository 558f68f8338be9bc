//! Match statistics.
//!
//! Results are tallied from the engine's point of view and can be printed as
//! a short report or serialized to JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single game ended for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    EngineWin,
    EngineLoss,
    Draw,
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Mark the engine played with
    pub engine_side: char,
    /// Cell indices in the order they were played
    pub moves: Vec<usize>,
    pub result: GameResult,
    /// Time spent in engine searches during the game
    pub engine_ms: u64,
}

/// Aggregated results of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub board_size: usize,
    pub opponent: String,
    pub iterations: u32,
    pub seed: u64,
    pub games_played: u32,
    pub engine_wins: u32,
    pub engine_losses: u32,
    pub draws: u32,
    /// Average wall-clock time per engine move
    pub avg_engine_move_ms: f64,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn new(board_size: usize, opponent: String, iterations: u32, seed: u64) -> Self {
        Self {
            board_size,
            opponent,
            iterations,
            seed,
            games_played: 0,
            engine_wins: 0,
            engine_losses: 0,
            draws: 0,
            avg_engine_move_ms: 0.0,
            games: Vec::new(),
        }
    }

    /// Add a finished game and refresh the totals.
    pub fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::EngineWin => self.engine_wins += 1,
            GameResult::EngineLoss => self.engine_losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games_played += 1;
        self.games.push(game);

        let engine_moves: usize = self.games.iter().map(GameRecord::engine_moves).sum();
        let engine_ms: u64 = self.games.iter().map(|g| g.engine_ms).sum();
        self.avg_engine_move_ms = if engine_moves == 0 {
            0.0
        } else {
            engine_ms as f64 / engine_moves as f64
        };
    }

    /// Points per game for the engine (win = 1, draw = 0.5).
    pub fn score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        (self.engine_wins as f64 + 0.5 * self.draws as f64) / self.games_played as f64
    }
}

impl GameRecord {
    /// Number of moves the engine made in this game.
    pub fn engine_moves(&self) -> usize {
        // X makes the even-numbered plies
        let offset = if self.engine_side == 'X' { 0 } else { 1 };
        self.moves.iter().skip(offset).step_by(2).count()
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games on {}x{} vs {} ({} iterations per move)",
            self.games_played, self.board_size, self.board_size, self.opponent, self.iterations
        )?;
        writeln!(
            f,
            "engine: {} won, {} drawn, {} lost (score {:.3})",
            self.engine_wins,
            self.draws,
            self.engine_losses,
            self.score()
        )?;
        write!(f, "average engine move: {:.2} ms", self.avg_engine_move_ms)
    }
}
