//! Core traits and types for the noughts game engine
//!
//! This crate provides the abstractions the search engine is written against:
//! - `Game`: value-typed state interface for deterministic two-player games
//! - `Outcome`: the decided result of a finished game

pub mod outcome;
pub mod typed;

// Re-export main types for convenience
pub use outcome::Outcome;
pub use typed::Game;
