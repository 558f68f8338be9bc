//! TicTacToe game implementation for the noughts engine
//!
//! This crate provides the `N`×`N` line-completion board the search engine
//! plays on. `TicTacToe` is the canonical 3×3 instance; larger boards use the
//! same rules, where a player wins by filling any row, column or diagonal of
//! length `N`.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_tictactoe::{Player, TicTacToe};
//!
//! let board = TicTacToe::new();
//! let board = board.play(4).unwrap(); // X takes the center
//! assert_eq!(board.side_to_move(), Player::O);
//! assert_eq!(board.legal_moves().len(), 8);
//! ```

use std::fmt;

use engine_core::Game;
use thiserror::Error;

/// The canonical 3×3 board
pub type TicTacToe = Board<3>;

/// One of the two sides. X moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The side owning this cell, `None` when empty
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Errors raised when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("position {position} is out of range (board has {cells} cells)")]
    OutOfRange { position: usize, cells: usize },

    #[error("position {position} is already occupied by {occupant}")]
    Occupied { position: usize, occupant: Player },
}

/// Errors raised when reading a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} cells, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid cell character '{character}' at cell {position}")]
    InvalidCell { character: char, position: usize },
}

/// An `N`×`N` board plus the side to move.
///
/// Boards are small `Copy` values with structural equality and hashing, so
/// two boards compare equal exactly when their cells and side to move match.
/// Moves are row-major cell indices in `0..N * N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Mark; N]; N],
    to_move: Player,
}

impl<const N: usize> Board<N> {
    /// Number of cells on the board
    pub const CELLS: usize = N * N;

    /// Empty board with X to move
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; N]; N],
            to_move: Player::X,
        }
    }

    /// Build a board from explicit cell contents.
    pub fn from_marks(cells: [[Mark; N]; N], to_move: Player) -> Self {
        Self { cells, to_move }
    }

    /// Read a board from text, one character per cell in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace, `|`, `/` and `,` are ignored so boards can be laid out
    /// readably:
    ///
    /// ```rust
    /// use games_tictactoe::{Mark, Player, TicTacToe};
    ///
    /// let board = TicTacToe::parse("XX. / OO. / ...", Player::X).unwrap();
    /// assert_eq!(board.cell(0), Some(Mark::X));
    /// assert_eq!(board.cell(5), Some(Mark::Empty));
    /// ```
    pub fn parse(text: &str, to_move: Player) -> Result<Self, ParseBoardError> {
        let symbols: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '/' | ','))
            .collect();

        if symbols.len() != Self::CELLS {
            return Err(ParseBoardError::InvalidLength {
                expected: Self::CELLS,
                actual: symbols.len(),
            });
        }

        let mut cells = [[Mark::Empty; N]; N];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position / N][position % N] = match character {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                _ => {
                    return Err(ParseBoardError::InvalidCell {
                        character,
                        position,
                    })
                }
            };
        }

        Ok(Self { cells, to_move })
    }

    /// Contents of the cell at `position`, `None` when out of range
    pub fn cell(&self, position: usize) -> Option<Mark> {
        (position < Self::CELLS).then(|| self.cells[position / N][position % N])
    }

    /// All cells in row-major order
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of occupied cells
    pub fn moves_played(&self) -> usize {
        self.marks().filter(|m| !m.is_empty()).count()
    }

    /// Every winning line as a list of cell indices: `N` rows, `N` columns,
    /// then the main and anti diagonals.
    pub fn lines() -> Vec<Vec<usize>> {
        let rows = (0..N).map(|r| (0..N).map(|c| r * N + c).collect::<Vec<_>>());
        let cols = (0..N).map(|c| (0..N).map(|r| r * N + c).collect::<Vec<_>>());
        let diagonals: [Vec<usize>; 2] = [
            (0..N).map(|i| i * N + i).collect(),
            (0..N).map(|i| i * N + (N - 1 - i)).collect(),
        ];
        rows.chain(cols).chain(diagonals).collect()
    }

    /// Owner of a line whose cells all carry the same non-empty mark.
    #[inline]
    fn line_owner(mut line: impl Iterator<Item = Mark>) -> Option<Player> {
        let owner = line.next()?.player()?;
        line.all(|mark| mark == Mark::from(owner)).then_some(owner)
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game for Board<N> {
    type Move = usize;
    type Player = Player;
    type Error = IllegalMoveError;

    fn side_to_move(&self) -> Player {
        self.to_move
    }

    fn opponent(player: Player) -> Player {
        player.opponent()
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.marks()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    fn apply(&self, position: usize, player: Player) -> Result<Self, IllegalMoveError> {
        let occupant = self
            .cell(position)
            .ok_or(IllegalMoveError::OutOfRange {
                position,
                cells: Self::CELLS,
            })?;

        if let Some(occupant) = occupant.player() {
            return Err(IllegalMoveError::Occupied { position, occupant });
        }

        let mut next = *self;
        next.cells[position / N][position % N] = player.into();
        Ok(next)
    }

    fn with_side_to_move(&self, player: Player) -> Self {
        Self {
            to_move: player,
            ..*self
        }
    }

    fn winner(&self) -> Option<Player> {
        let rows = (0..N).map(|r| Self::line_owner(self.cells[r].iter().copied()));
        let cols = (0..N).map(|c| Self::line_owner((0..N).map(|r| self.cells[r][c])));
        let diagonal = Self::line_owner((0..N).map(|i| self.cells[i][i]));
        let anti_diagonal = Self::line_owner((0..N).map(|i| self.cells[i][N - 1 - i]));

        rows.chain(cols)
            .chain([diagonal, anti_diagonal])
            .flatten()
            .next()
    }

    fn is_full(&self) -> bool {
        self.marks().all(|mark| !mark.is_empty())
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, mark) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}
