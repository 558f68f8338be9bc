//! Decided results of finished games.

/// Result of a finished two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    /// The given side completed a line
    Win(P),
    /// The board filled up with no winner
    Draw,
}

impl<P: Copy + PartialEq> Outcome<P> {
    /// Signed reward of this outcome seen from `perspective`.
    ///
    /// # Returns
    /// * `1.0` if `perspective` won
    /// * `-1.0` if the other side won
    /// * `0.0` for a draw
    ///
    /// # Example
    /// ```
    /// use engine_core::Outcome;
    ///
    /// assert_eq!(Outcome::Win(1u8).value_for(1), 1.0);
    /// assert_eq!(Outcome::Win(1u8).value_for(2), -1.0);
    /// assert_eq!(Outcome::<u8>::Draw.value_for(1), 0.0);
    /// ```
    #[inline]
    pub fn value_for(&self, perspective: P) -> f64 {
        match *self {
            Outcome::Win(winner) if winner == perspective => 1.0,
            Outcome::Win(_) => -1.0,
            Outcome::Draw => 0.0,
        }
    }

    /// True only when `player` won. A draw favors nobody.
    #[inline]
    pub fn favors(&self, player: P) -> bool {
        matches!(*self, Outcome::Win(winner) if winner == player)
    }

    /// The winning side, if any
    #[inline]
    pub fn winner(&self) -> Option<P> {
        match *self {
            Outcome::Win(winner) => Some(winner),
            Outcome::Draw => None,
        }
    }
}
